// SPDX-License-Identifier: MIT

//! Rebuild the environment handed to the script from an allow-list.
//!
//! Only the request metadata defined by CGI crosses into the script.
//! Everything else the web server (or a client through it) managed to put
//! in the environment, such as `LD_PRELOAD`, `PERL5OPT` or `BASH_ENV`, is
//! dropped without comment.  Values are copied verbatim and never inspected.

use std::{
    collections::HashMap,
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt as _,
};

/// The variables forwarded to the script, in the order they are emitted.
pub const ALLOWED_VARS: &[&str] = &[
    "SERVER_SOFTWARE",
    "SERVER_NAME",
    "GATEWAY_INTERFACE",
    "SERVER_PROTOCOL",
    "SERVER_PORT",
    "REQUEST_METHOD",
    "HTTP_ACCEPT",
    "PATH_INFO",
    "PATH_TRANSLATED",
    "SCRIPT_NAME",
    "QUERY_STRING",
    "REMOTE_HOST",
    "REMOTE_ADDR",
    "REMOTE_USER",
    "AUTH_TYPE",
    "CONTENT_TYPE",
    "CONTENT_LENGTH",
];

/// The `NAME=VALUE` entries forwarded to the script.
///
/// The entries are owned copies; the snapshot they came from can be dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedEnv {
    entries: Vec<OsString>,
}

impl SanitizedEnv {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[OsString] {
        &self.entries
    }

    /// Names of the forwarded variables, in order.
    pub fn names(&self) -> impl Iterator<Item = &OsStr> {
        self.entries.iter().map(|e| split_entry(e).0)
    }

    /// Value forwarded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&OsStr> {
        self.entries
            .iter()
            .map(|e| split_entry(e))
            .find(|(n, _)| n.as_bytes() == name.as_bytes())
            .map(|(_, v)| v)
    }
}

/// Build the forwarded environment from a snapshot of the ambient one.
///
/// If the snapshot holds a name more than once, the first value wins, the
/// same one `getenv(3)` would return.
pub fn sanitize<I, K, V>(ambient: I) -> SanitizedEnv
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut present: HashMap<OsString, OsString> = HashMap::new();
    for (key, val) in ambient {
        let key = key.into();
        // Skip anything not listed before it is copied anywhere.
        if !is_allowed(&key) {
            continue;
        }
        present.entry(key).or_insert_with(|| val.into());
    }

    let mut entries = Vec::with_capacity(present.len());
    for name in ALLOWED_VARS {
        if let Some(val) = present.get(OsStr::new(name)) {
            let mut entry = OsString::with_capacity(name.len() + 1 + val.len());
            entry.push(name);
            entry.push("=");
            entry.push(val);
            entries.push(entry);
        }
    }
    SanitizedEnv { entries }
}

/// Whether `name` is on the allow-list.  Exact, case-sensitive match.
pub fn is_allowed(name: &OsStr) -> bool {
    ALLOWED_VARS.iter().any(|n| n.as_bytes() == name.as_bytes())
}

// Names on the allow-list never contain '=', so the first one is the split.
fn split_entry(entry: &OsStr) -> (&OsStr, &OsStr) {
    let bytes = entry.as_bytes();
    match bytes.iter().position(|b| *b == b'=') {
        Some(i) => (OsStr::from_bytes(&bytes[..i]), OsStr::from_bytes(&bytes[i + 1..])),
        None => (entry, OsStr::new("")),
    }
}
