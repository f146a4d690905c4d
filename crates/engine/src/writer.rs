//! Output writer shared by both loops.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::core::Shutdown;
use crate::types::Command;

/// Classified write failure.
#[derive(Debug)]
pub enum WriteFailure {
    /// The downstream reader closed its end. Normal end of a session.
    PeerClosed,
    Other(io::Error),
}

impl WriteFailure {
    pub fn classify(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe | io::ErrorKind::ConnectionReset => WriteFailure::PeerClosed,
            _ => WriteFailure::Other(err),
        }
    }
}

/// Writes single command bytes downstream and turns any failure into shutdown.
///
/// Clones share the same stream; each byte is written and flushed under one
/// lock so bytes from the two loops never interleave mid-write.
pub struct Emitter<W> {
    out: Arc<Mutex<W>>,
    shutdown: Shutdown,
}

impl<W> Clone for Emitter<W> {
    fn clone(&self) -> Self {
        Self {
            out: Arc::clone(&self.out),
            shutdown: self.shutdown.clone(),
        }
    }
}

impl<W> Emitter<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(out: W, shutdown: Shutdown) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
            shutdown,
        }
    }

    pub fn shutdown(&self) -> &Shutdown {
        &self.shutdown
    }

    /// Write one command byte. Returns `false` if the session is over, either
    /// already or because of this write.
    pub async fn emit(&self, cmd: Command) -> bool {
        if self.shutdown.is_signaled() {
            return false;
        }

        let mut out = self.out.lock().await;
        // Shutdown may have been raised while another write held the lock.
        if self.shutdown.is_signaled() {
            return false;
        }
        let result = match out.write_all(&[cmd.byte()]).await {
            Ok(()) => out.flush().await,
            Err(e) => Err(e),
        };
        drop(out);

        match result {
            Ok(()) => true,
            Err(e) => {
                match WriteFailure::classify(e) {
                    WriteFailure::PeerClosed => debug!(%cmd, "downstream closed"),
                    WriteFailure::Other(e) => error!(%cmd, error = %e, "write failed"),
                }
                self.shutdown.signal();
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio_test::io::Builder;

    #[test]
    fn classify_broken_pipe_as_peer_closed() {
        let err = io::Error::from(io::ErrorKind::BrokenPipe);
        assert!(matches!(WriteFailure::classify(err), WriteFailure::PeerClosed));

        let err = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(WriteFailure::classify(err), WriteFailure::Other(_)));
    }

    #[tokio::test]
    async fn emits_wire_bytes() {
        let mock = Builder::new().write(b"i").write(b"\x1b").build();
        let emitter = Emitter::new(mock, Shutdown::new());
        assert!(emitter.emit(Command::Rotate).await);
        assert!(emitter.emit(Command::Quit).await);
        assert!(!emitter.shutdown().is_signaled());
    }

    #[tokio::test]
    async fn broken_pipe_signals_shutdown() {
        let mock = Builder::new()
            .write_error(io::Error::from(io::ErrorKind::BrokenPipe))
            .build();
        let shutdown = Shutdown::new();
        let emitter = Emitter::new(mock, shutdown.clone());

        assert!(!emitter.emit(Command::Drop).await);
        assert!(shutdown.is_signaled());
    }

    #[tokio::test]
    async fn other_errors_signal_shutdown() {
        let mock = Builder::new()
            .write_error(io::Error::new(io::ErrorKind::Other, "disk on fire"))
            .build();
        let shutdown = Shutdown::new();
        let emitter = Emitter::new(mock, shutdown.clone());

        assert!(!emitter.emit(Command::Left).await);
        assert!(shutdown.is_signaled());
    }

    #[tokio::test]
    async fn nothing_is_written_after_shutdown() {
        let (tx, mut rx) = tokio::io::duplex(8);
        let shutdown = Shutdown::new();
        let emitter = Emitter::new(tx, shutdown.clone());

        assert!(emitter.emit(Command::Right).await);
        shutdown.signal();
        assert!(!emitter.emit(Command::Left).await);
        drop(emitter);

        let mut seen = Vec::new();
        rx.read_to_end(&mut seen).await.unwrap();
        assert_eq!(seen, b"l");
    }

    #[tokio::test]
    async fn writer_queued_behind_lock_sees_shutdown() {
        let (tx, mut rx) = tokio::io::duplex(1);
        let shutdown = Shutdown::new();
        let emitter = Emitter::new(tx, shutdown.clone());

        // Fills the pipe, so the next write blocks while holding the lock.
        assert!(emitter.emit(Command::Rotate).await);

        let in_flight = {
            let emitter = emitter.clone();
            tokio::spawn(async move { emitter.emit(Command::Left).await })
        };
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        let queued = {
            let emitter = emitter.clone();
            tokio::spawn(async move { emitter.emit(Command::Drop).await })
        };
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(!in_flight.is_finished());
        assert!(!queued.is_finished());

        shutdown.signal();

        let mut first = [0u8; 2];
        rx.read_exact(&mut first).await.unwrap();
        assert_eq!(&first, b"ij");
        assert!(in_flight.await.unwrap());
        assert!(!queued.await.unwrap());

        drop(emitter);
        let mut rest = Vec::new();
        rx.read_to_end(&mut rest).await.unwrap();
        assert!(rest.is_empty());
    }

    #[tokio::test]
    async fn closed_duplex_reads_as_peer_closed() {
        let (tx, rx) = tokio::io::duplex(8);
        drop(rx);
        let shutdown = Shutdown::new();
        let emitter = Emitter::new(tx, shutdown.clone());
        assert!(!emitter.emit(Command::Drop).await);
        assert!(shutdown.is_signaled());
    }
}
