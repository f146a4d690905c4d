//! Loop A: forward translated keystrokes downstream.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, error};

use crate::input::{InputError, Translator};
use crate::types::Command;
use crate::writer::Emitter;

/// Why the forwarder stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwarderStop {
    /// Quit key, lone ESC, or stdin closed. A quit byte was sent.
    EndOfInput,
    /// Reading stdin failed. A quit byte was sent.
    ReadError,
    /// A write was refused: downstream closed or the session already ended.
    OutputClosed,
    /// Shutdown was raised elsewhere while waiting for input.
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForwarderReport {
    pub forwarded: u64,
    pub stop: ForwarderStop,
}

/// Run until input ends, a write fails, or shutdown is signaled.
///
/// The translator is raced against shutdown, so a pending read does not keep
/// this loop alive once the gravity loop has seen the downstream go away.
pub async fn run_forwarder<R, W>(
    mut translator: Translator<R>,
    emitter: Emitter<W>,
) -> ForwarderReport
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let shutdown = emitter.shutdown().clone();
    let mut forwarded = 0u64;

    let stop = loop {
        let next = tokio::select! {
            biased;
            _ = shutdown.signaled() => break ForwarderStop::Shutdown,
            next = translator.next_command() => next,
        };

        match next {
            Ok(cmd) => {
                if !emitter.emit(cmd).await {
                    break ForwarderStop::OutputClosed;
                }
                forwarded += 1;
            }
            Err(e) => {
                let stop = match e {
                    InputError::EndOfInput => ForwarderStop::EndOfInput,
                    InputError::Io(err) => {
                        error!(error = %err, "reading input failed");
                        ForwarderStop::ReadError
                    }
                };
                // Best effort: the game should quit even if we could not read.
                let _ = emitter.emit(Command::Quit).await;
                shutdown.signal();
                break stop;
            }
        }
    };

    debug!(forwarded, ?stop, "forwarder stopped");
    ForwarderReport { forwarded, stop }
}
