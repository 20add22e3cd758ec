// SPDX-License-Identifier: MIT

//! The error document sent back through the web server.
//!
//! A failed launch still answers the request: a CGI header block followed
//! by a small HTML page carrying the diagnostic.

use std::{fmt::Display, io::Write};

/// Write the error document for `message` to `out`, and flush it.
pub fn write_error_document<W: Write, M: Display + ?Sized>(
    out: &mut W,
    title: &str,
    message: &M,
) -> Result<(), std::io::Error> {
    out.write_all(render_error_document(title, message).as_bytes())?;
    out.flush()
}

/// Build the error document as a string.
pub fn render_error_document<M: Display + ?Sized>(title: &str, message: &M) -> String {
    let title = escape_html(title);
    let message = escape_html(&message.to_string());
    format!(
        "Content-Type: text/html\n\n\
         <TITLE>{title}</TITLE>\n\
         <H1>{title}</H1>\n\
         {message}\n\n"
    )
}

fn escape_html(s: &str) -> String {
    let mut ret = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => ret.push_str("&amp;"),
            '<' => ret.push_str("&lt;"),
            '>' => ret.push_str("&gt;"),
            '"' => ret.push_str("&quot;"),
            _ => ret.push(c),
        }
    }
    ret
}
