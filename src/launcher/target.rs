// SPDX-License-Identifier: MIT

//! Resolve the script path from the configured home directory.

use std::{ffi::OsString, path::{Path, PathBuf}};

use tracing::{debug, error};

use crate::launcher::error::LaunchError;

const SEPARATOR: &str = "/";

/// Join `home` and `script` into the path to validate and execute.
///
/// The size the path would occupy, terminator included, is checked against
/// `max` before anything is built.  An oversized configuration is rejected,
/// never truncated.
pub fn resolve(home: &Path, script: &Path, max: usize) -> Result<PathBuf, LaunchError> {
    let needed = home.as_os_str().len() + SEPARATOR.len() + script.as_os_str().len() + 1;
    if needed > max {
        error!(needed, max, "resolved script path exceeds the buffer limit");
        return Err(LaunchError::PathTooLong { needed, max });
    }

    // Plain concatenation: `Path::join` would drop `home` for an absolute script.
    let mut joined = OsString::with_capacity(needed - 1);
    joined.push(home);
    joined.push(SEPARATOR);
    joined.push(script);
    let path = PathBuf::from(joined);
    debug!(path = %path.display(), "resolved script path");
    Ok(path)
}
