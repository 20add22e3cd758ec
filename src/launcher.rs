// SPDX-License-Identifier: MIT

//! Validates the configured script and hands the process over to it.
//!
//! `Launcher::launch` runs the whole sequence: rebuild the environment from
//! the allow-list, resolve the script path under the configured home,
//! check the script's ownership and permissions, then replace this process
//! with it.  It only ever returns on failure.  Every step returns its error
//! at the point of detection; reporting it is left to the caller, see
//! `report::write_error_document`.

pub mod config;
pub mod environ;
pub mod error;
pub mod exec;
pub mod report;
pub mod target;
pub mod trust;

use std::{convert::Infallible, ffi::OsString};

use nix::unistd::{Uid, geteuid};
use tracing::{debug, info, warn};

pub use config::Config;
pub use error::{ErrorKind, LaunchError};
pub use exec::{ExecImage, Execve, ProcessReplacer};

pub struct Launcher<R: ProcessReplacer = Execve> {
    config: Config,
    euid: Uid,
    replacer: R,
}

impl Launcher<Execve> {
    /// A launcher for this process: the script must belong to the current
    /// effective user, and is started with `execve(2)`.
    pub fn new(config: Config) -> Self {
        Launcher {
            config,
            euid: geteuid(),
            replacer: Execve,
        }
    }
}

impl<R: ProcessReplacer> Launcher<R> {
    pub fn with_replacer<T: ProcessReplacer>(self, replacer: T) -> Launcher<T> {
        Launcher {
            config: self.config,
            euid: self.euid,
            replacer,
        }
    }

    /// Override the user the script must belong to.
    pub fn with_euid(mut self, euid: Uid) -> Self {
        self.euid = euid;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn replacer(&self) -> &R {
        &self.replacer
    }

    /// Run the launch sequence against a snapshot of the ambient environment.
    pub fn launch<I, K, V>(&self, ambient: I) -> Result<Infallible, LaunchError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let env = environ::sanitize(ambient);
        debug!(
            forwarded = env.len(),
            names = ?env.names().collect::<Vec<_>>(),
            "sanitized environment"
        );

        let path = target::resolve(
            self.config.home(),
            self.config.script(),
            self.config.max_path_len(),
        )?;
        let evidence = trust::verify(&path, self.euid)?;
        let image = ExecImage::new(&path, &env)?;

        info!(
            path = %path.display(),
            owner = evidence.owner.as_raw(),
            "replacing process with script"
        );
        match self.replacer.replace(&image) {
            Ok(never) => match never {},
            Err(source) => {
                warn!(path = %path.display(), %source, "process replacement failed");
                Err(LaunchError::Exec { path, source })
            }
        }
    }
}
