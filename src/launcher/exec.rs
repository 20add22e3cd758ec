// SPDX-License-Identifier: MIT

//! Replace the current process with the validated script.

use std::{
    convert::Infallible,
    ffi::{CStr, CString},
    os::unix::ffi::OsStrExt as _,
    path::{Path, PathBuf},
};

use nix::errno::Errno;

use crate::launcher::{environ::SanitizedEnv, error::LaunchError};

/// Everything `execve(2)` needs, converted to C strings ahead of the call.
#[derive(Debug, Clone)]
pub struct ExecImage {
    path: PathBuf,
    c_path: CString,
    args: Vec<CString>,
    environ: Vec<CString>,
}

impl ExecImage {
    /// The script receives no positional arguments; `argv[0]` is the
    /// script path.  Nothing from this process's own command line is passed on.
    pub fn new(path: &Path, env: &SanitizedEnv) -> Result<Self, LaunchError> {
        let c_path = CString::new(path.as_os_str().as_bytes())?;
        let args = vec![c_path.clone()];
        let mut environ = Vec::with_capacity(env.len());
        for entry in env.entries() {
            environ.push(CString::new(entry.as_bytes())?);
        }
        Ok(ExecImage {
            path: path.to_path_buf(),
            c_path,
            args,
            environ,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn c_path(&self) -> &CStr {
        &self.c_path
    }

    pub fn args(&self) -> &[CString] {
        &self.args
    }

    pub fn environ(&self) -> &[CString] {
        &self.environ
    }
}

/// Hands the process over to a new program image.
///
/// On success the call does not return.  An `Err` means the replacement did
/// not happen and this process is still running; the caller reports it and
/// must not try again.
pub trait ProcessReplacer {
    fn replace(&self, image: &ExecImage) -> Result<Infallible, Errno>;
}

/// Replacement through `execve(2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Execve;

impl ProcessReplacer for Execve {
    fn replace(&self, image: &ExecImage) -> Result<Infallible, Errno> {
        nix::unistd::execve(image.c_path(), image.args(), image.environ())
    }
}
