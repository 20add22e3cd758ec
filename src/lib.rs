//! # cgigate
//!
//! A setuid gatekeeper between a web server's CGI mechanism and a script.
//! It forwards only allow-listed CGI variables, refuses scripts that anyone
//! but the effective user could have written, and replaces itself with the
//! script.

pub mod launcher;

pub use launcher::{Config, ErrorKind, LaunchError, Launcher, ProcessReplacer};
