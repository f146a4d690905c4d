//! Key translator: raw bytes in, commands out.
//!
//! Reads one byte at a time and resolves aliases, pause keys and escape
//! sequences. Every await point is a cancel-safe `read`, so the translator can
//! be raced against shutdown (or a timeout) without losing input: a read that
//! loses a race has not consumed anything, and a byte arriving afterwards is
//! returned by the next read.

use std::io;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::time;
use tracing::debug;

use crate::core::PauseGate;
use crate::error::InputError;
use crate::map::{classify, map_arrow, Key};
use crate::types::{Command, ESC_TIMEOUT_MS};

pub struct Translator<R> {
    reader: R,
    pause: PauseGate,
    esc_timeout: Duration,
}

impl<R> Translator<R>
where
    R: AsyncRead + Unpin,
{
    pub fn new(reader: R, pause: PauseGate) -> Self {
        Self {
            reader,
            pause,
            esc_timeout: Duration::from_millis(ESC_TIMEOUT_MS),
        }
    }

    pub fn with_esc_timeout(mut self, esc_timeout: Duration) -> Self {
        self.esc_timeout = esc_timeout;
        self
    }

    pub fn esc_timeout(&self) -> Duration {
        self.esc_timeout
    }

    /// Read until the next command.
    ///
    /// Quit keys, a lone ESC and end of stream all end in
    /// [`InputError::EndOfInput`]. A pause key blocks here, discarding input,
    /// until the matching resume key.
    pub async fn next_command(&mut self) -> Result<Command, InputError> {
        loop {
            let b = self.read_byte().await?;
            match classify(b) {
                Key::Command(cmd) => return Ok(cmd),
                Key::Quit => {
                    debug!(byte = b, "quit key");
                    return Err(InputError::EndOfInput);
                }
                Key::Pause => self.hold().await?,
                Key::Escape => {
                    if let Some(cmd) = self.escape_sequence().await? {
                        return Ok(cmd);
                    }
                }
                Key::Ignored => {}
            }
        }
    }

    async fn hold(&mut self) -> Result<(), InputError> {
        self.pause.enter();
        debug!("paused");

        loop {
            let b = self.read_byte().await?;
            if classify(b) == Key::Pause {
                break;
            }
        }

        self.pause.exit();
        debug!("resumed");
        Ok(())
    }

    /// Called right after an ESC byte.
    ///
    /// `Ok(None)` means an `ESC [` sequence that is not an arrow key; the
    /// caller keeps reading.
    async fn escape_sequence(&mut self) -> Result<Option<Command>, InputError> {
        match time::timeout(self.esc_timeout, self.read_byte()).await {
            Err(_) => {
                debug!("lone ESC");
                Err(InputError::EndOfInput)
            }
            Ok(Ok(b'[')) => {
                let b = self.read_byte().await?;
                Ok(map_arrow(b))
            }
            Ok(Ok(b)) => {
                debug!(byte = b, "ESC without bracket");
                Err(InputError::EndOfInput)
            }
            Ok(Err(InputError::Io(e))) => {
                // Same as a lone ESC: quit without reporting a failure.
                debug!(error = %e, "read after ESC failed");
                Err(InputError::EndOfInput)
            }
            Ok(Err(e)) => Err(e),
        }
    }

    async fn read_byte(&mut self) -> Result<u8, InputError> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf).await {
                Ok(0) => return Err(InputError::EndOfInput),
                Ok(_) => return Ok(buf[0]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}
