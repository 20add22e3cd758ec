// SPDX-License-Identifier: MIT

//! Build script for cgigate
//!
//! The launch target is fixed at compile time.  This refuses to build a
//! binary whose configuration could resolve somewhere unexpected.

use std::env;
use std::path::Path;

const VARS: &[&str] = &["CGIGATE_HOME", "CGIGATE_SCRIPT", "CGIGATE_TITLE", "CGIGATE_LOG"];

fn main() {
    for var in VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    if let Ok(home) = env::var("CGIGATE_HOME") {
        if home.is_empty() || !Path::new(&home).is_absolute() {
            panic!("CGIGATE_HOME must be an absolute path, got {home:?}");
        }
    }

    if let Ok(script) = env::var("CGIGATE_SCRIPT") {
        if script.is_empty() || Path::new(&script).is_absolute() {
            panic!("CGIGATE_SCRIPT must be a relative path, got {script:?}");
        }
    }
}
