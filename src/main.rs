// SPDX-License-Identifier: MIT

use cgigate::{
    Config, Launcher,
    launcher::{config::LOG_FILTER, report},
};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn main() {
    // Stdout carries the CGI response; diagnostics go to the server's error
    // log through stderr.  The filter is fixed at build time.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(LOG_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();

    let ignored = std::env::args_os().skip(1).count();
    if ignored > 0 {
        debug!(count = ignored, "ignoring command line arguments");
    }

    let launcher = Launcher::new(Config::from_build());
    let Err(err) = launcher.launch(std::env::vars_os());
    error!(kind = ?err.kind(), security = err.is_security_violation(), "{err}");

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = report::write_error_document(&mut stdout, launcher.config().title(), &err) {
        error!(%e, "could not write the error document");
    }

    // A zero status keeps the server treating the document as the response.
    std::process::exit(0);
}
