// SPDX-License-Identifier: MIT

//! Launch configuration.
//!
//! Everything here is fixed when the binary is built.  The process runs
//! setuid with an environment supplied by the web server and, through it,
//! by the client, so nothing is ever read from the environment at runtime.

use std::path::{Path, PathBuf};

/// Maximum size of the resolved script path, counting the separator and a
/// trailing terminator.
pub const MAX_SCRIPT_PATH: usize = 1024;

/// Home directory the script lives under.
pub const HOME_DIR: &str = match option_env!("CGIGATE_HOME") {
    Some(v) => v,
    None => "/usr/local/cgigate",
};

/// Script location relative to `HOME_DIR`.
pub const SCRIPT_NAME: &str = match option_env!("CGIGATE_SCRIPT") {
    Some(v) => v,
    None => "scripts/gate.cgi",
};

/// Title of the error document.
pub const ERROR_TITLE: &str = match option_env!("CGIGATE_TITLE") {
    Some(v) => v,
    None => "CGI Gate Error",
};

/// Log filter directive.  Deliberately not `RUST_LOG`.
pub const LOG_FILTER: &str = match option_env!("CGIGATE_LOG") {
    Some(v) => v,
    None => "warn",
};

#[derive(Debug, Clone)]
pub struct Config {
    home: PathBuf,
    script: PathBuf,
    max_path_len: usize,
    title: String,
}

impl Config {
    /// The configuration compiled into this binary.
    pub fn from_build() -> Self {
        Config::new(HOME_DIR, SCRIPT_NAME).with_title(ERROR_TITLE)
    }

    pub fn new(home: impl Into<PathBuf>, script: impl Into<PathBuf>) -> Self {
        Config {
            home: home.into(),
            script: script.into(),
            max_path_len: MAX_SCRIPT_PATH,
            title: ERROR_TITLE.to_string(),
        }
    }

    pub fn with_max_path_len(mut self, max_path_len: usize) -> Self {
        self.max_path_len = max_path_len;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn max_path_len(&self) -> usize {
        self.max_path_len
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}
