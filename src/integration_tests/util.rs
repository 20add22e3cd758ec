//! Utility helpers for running the tests.

use std::{ffi::OsString, fs, os::unix::fs::PermissionsExt as _, path::PathBuf};

use tempfile::TempDir;

use crate::launcher::Config;

pub const SCRIPT: &str = "scripts/gate.cgi";

/// A scratch home directory, optionally holding a script at `SCRIPT`.
pub struct Site {
    home: TempDir,
}

impl Site {
    /// Create the home directory and a script with the given mode.
    pub fn with_script_mode(mode: u32) -> Self {
        let site = Site::empty();
        let script = site.script_path();
        fs::create_dir_all(script.parent().unwrap()).unwrap();
        fs::write(&script, "#!/bin/sh\nexit 0\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(mode)).unwrap();
        site
    }

    /// A home directory without any script in it.
    pub fn empty() -> Self {
        Site {
            home: tempfile::tempdir().expect("could not create the scratch home"),
        }
    }

    pub fn script_path(&self) -> PathBuf {
        self.home.path().join(SCRIPT)
    }

    pub fn config(&self) -> Config {
        Config::new(self.home.path(), SCRIPT).with_title("Test Gate Error")
    }
}

/// Turn string pairs into an environment snapshot.
pub fn ambient(src: &[(&str, &str)]) -> Vec<(OsString, OsString)> {
    src.iter()
        .map(|(k, v)| (OsString::from(k), OsString::from(v)))
        .collect()
}
