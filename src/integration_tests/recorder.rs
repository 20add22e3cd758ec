//! A process replacer that records instead of replacing.

use std::{cell::RefCell, convert::Infallible, ffi::CString, path::PathBuf};

use nix::errno::Errno;

use crate::launcher::{ExecImage, ProcessReplacer};

/// The image captured by a `Recorder`.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: PathBuf,
    pub args: Vec<String>,
    pub environ: Vec<String>,
}

/// Captures every replacement request, then fails it with `ENOEXEC` so the
/// launcher returns control to the test.
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<Recorded>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.borrow().clone()
    }
}

impl ProcessReplacer for Recorder {
    fn replace(&self, image: &ExecImage) -> Result<Infallible, Errno> {
        let lossy = |c: &CString| c.to_string_lossy().to_string();
        self.calls.borrow_mut().push(Recorded {
            path: image.path().to_path_buf(),
            args: image.args().iter().map(lossy).collect(),
            environ: image.environ().iter().map(lossy).collect(),
        });
        Err(Errno::ENOEXEC)
    }
}
