// SPDX-License-Identifier: MIT

//! Decide whether the script may be run with this process's privileges.
//!
//! The script must exist, belong to the effective user, and be writable by
//! nobody else.  Metadata is read with a fresh `stat(2)` on every call.
//!
//! Nothing stops the file from changing between this check and the
//! `execve(2)` that follows.  That window is accepted.

use std::path::Path;

use nix::{
    sys::stat::{Mode, stat},
    unistd::Uid,
};
use tracing::{debug, error};

use crate::launcher::error::LaunchError;

/// Bits that let a principal other than the owner modify the file.
const FOREIGN_WRITE: Mode = Mode::S_IWGRP.union(Mode::S_IWOTH);

/// Metadata that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustEvidence {
    pub owner: Uid,
    pub mode: Mode,
}

/// Check `path` against the expected owner, stopping at the first failure.
///
/// `stat(2)` follows symlinks, so a link is judged by its target.
pub fn verify(path: &Path, euid: Uid) -> Result<TrustEvidence, LaunchError> {
    let st = stat(path).map_err(|source| {
        error!(path = %path.display(), %source, "could not stat script");
        LaunchError::Access {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let owner = Uid::from_raw(st.st_uid);
    if owner != euid {
        error!(
            path = %path.display(), owner = owner.as_raw(), euid = euid.as_raw(),
            "script not owned by the effective user"
        );
        return Err(LaunchError::ForeignOwner {
            path: path.to_path_buf(),
            owner,
            euid,
        });
    }

    let mode = Mode::from_bits_truncate(st.st_mode);
    if mode.intersects(FOREIGN_WRITE) {
        error!(
            path = %path.display(), mode = format_args!("{:o}", mode.bits()),
            "script writable by group or others"
        );
        return Err(LaunchError::Writable {
            path: path.to_path_buf(),
            mode,
        });
    }

    debug!(path = %path.display(), mode = format_args!("{:o}", mode.bits()), "script trusted");
    Ok(TrustEvidence { owner, mode })
}
