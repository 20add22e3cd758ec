//! Common error type.
//!
//! The `Display` text of every variant is what ends up in the error
//! document sent back through the web server, so it names the script path
//! and nothing else.  Owner ids, modes and errno values stay in the fields
//! for the log.

use std::{ffi::NulError, path::PathBuf};

use nix::{errno::Errno, sys::stat::Mode, unistd::Uid};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Script name too long for buffer")]
    PathTooLong { needed: usize, max: usize },

    #[error("Could not access file {} to check permissions.", .path.display())]
    Access { path: PathBuf, source: Errno },

    #[error(
        "Security violation: file {} \nbelongs to a different user than my effective user id.",
        .path.display()
    )]
    ForeignOwner { path: PathBuf, owner: Uid, euid: Uid },

    #[error("Security violation: file {} \nis group or world writable.", .path.display())]
    Writable { path: PathBuf, mode: Mode },

    #[error("Error: could not execute file {}", .path.display())]
    Exec { path: PathBuf, source: Errno },

    #[error("Error: could not prepare the execution environment")]
    InvalidString(#[from] NulError),
}

/// Broad classification of a launch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Access,
    Ownership,
    Writability,
    Exec,
}

impl LaunchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PathTooLong { .. } => ErrorKind::Configuration,
            Self::Access { .. } => ErrorKind::Access,
            Self::ForeignOwner { .. } => ErrorKind::Ownership,
            Self::Writable { .. } => ErrorKind::Writability,
            Self::Exec { .. } | Self::InvalidString(_) => ErrorKind::Exec,
        }
    }

    /// Ownership and writability failures mean someone other than the
    /// privileged user could control what runs.
    pub fn is_security_violation(&self) -> bool {
        matches!(self.kind(), ErrorKind::Ownership | ErrorKind::Writability)
    }
}
