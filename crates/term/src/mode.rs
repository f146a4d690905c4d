//! Raw mode guard for the controlling terminal.

use std::io;

use anyhow::{Context, Result};
use crossterm::terminal;
use crossterm::tty::IsTty;
use tracing::{debug, warn};

/// Restores the terminal on [`TerminalMode::exit`] or drop.
#[derive(Debug)]
pub struct TerminalMode {
    raw: bool,
}

impl TerminalMode {
    /// Leave the terminal as the caller configured it.
    pub fn passthrough() -> Self {
        Self { raw: false }
    }

    /// Enable raw mode (no echo, no line buffering, no signal keys) when
    /// `raw` is set and stdin is a terminal.
    pub fn enter(raw: bool) -> Result<Self> {
        if !raw {
            return Ok(Self::passthrough());
        }
        if !io::stdin().is_tty() {
            warn!("raw mode requested but stdin is not a terminal");
            return Ok(Self::passthrough());
        }

        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        debug!("raw mode enabled");
        Ok(Self { raw: true })
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    pub fn exit(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        if self.raw {
            self.raw = false;
            terminal::disable_raw_mode().context("failed to restore terminal mode")?;
            debug!("raw mode disabled");
        }
        Ok(())
    }
}

impl Drop for TerminalMode {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.restore();
    }
}
