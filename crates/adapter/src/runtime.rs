//! Process runtime integration.
//!
//! Bridges the synchronous `main` with the async engine and the real stdio.

use anyhow::{Context, Result};
use tokio::io::BufReader;
use tokio::runtime::Builder;
use tracing::debug;

use crate::config::DriverConfig;
use crate::engine::{Session, SessionReport};
use crate::term::TerminalMode;

/// Make writes to a closed pipe fail with `EPIPE` instead of killing the
/// process.
#[cfg(unix)]
pub fn ignore_sigpipe() {
    // SAFETY: installs the predefined SIG_IGN disposition; no handler code runs.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_IGN);
    }
}

#[cfg(not(unix))]
pub fn ignore_sigpipe() {}

/// Run one session on the process's stdin and stdout.
pub fn run_stdio(config: &DriverConfig) -> Result<SessionReport> {
    ignore_sigpipe();

    let mode = TerminalMode::enter(config.raw_mode)?;

    let rt = Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    let session = Session::new(config.session);
    let stdin = BufReader::new(tokio::io::stdin());
    let result = rt.block_on(session.run(stdin, tokio::io::stdout()));

    // A stdin read may still be parked on the blocking pool; it can only end
    // with a keystroke or EOF, so don't wait for it.
    rt.shutdown_background();
    mode.exit()?;

    let report = result.context("driver loop panicked")?;
    debug!(?report, "driver finished");
    Ok(report)
}
