//! Runs both loops against one input stream and one output stream.

use std::time::Duration;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::task::JoinError;
use tracing::info;

use crate::core::{DropRate, PauseGate, Shutdown};
use crate::forwarder::{run_forwarder, ForwarderReport};
use crate::gravity::{run_gravity, GravityReport};
use crate::input::Translator;
use crate::types::{DROP_STEP_MS, ESC_TIMEOUT_MS, FINAL_DROP_US, INITIAL_DROP_MS};
use crate::writer::Emitter;

/// Timing knobs for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub esc_timeout: Duration,
    pub initial_drop: Duration,
    pub final_drop: Duration,
    pub drop_step: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            esc_timeout: Duration::from_millis(ESC_TIMEOUT_MS),
            initial_drop: Duration::from_millis(INITIAL_DROP_MS),
            final_drop: Duration::from_micros(FINAL_DROP_US),
            drop_step: Duration::from_millis(DROP_STEP_MS),
        }
    }
}

impl SessionConfig {
    pub fn drop_rate(&self) -> DropRate {
        DropRate::new(self.initial_drop, self.final_drop, self.drop_step)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub forwarder: ForwarderReport,
    pub gravity: GravityReport,
}

/// One driver run. The shutdown and pause signals are created here and handed
/// to the loops, never shared through globals.
pub struct Session {
    config: SessionConfig,
    shutdown: Shutdown,
    pause: PauseGate,
}

/// Raises shutdown when a loop task ends, including by panic, so the other
/// loop never outlives it.
struct ShutdownOnExit(Shutdown);

impl Drop for ShutdownOnExit {
    fn drop(&mut self) {
        self.0.signal();
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            shutdown: Shutdown::new(),
            pause: PauseGate::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handle that ends the session from outside.
    pub fn shutdown_handle(&self) -> Shutdown {
        self.shutdown.clone()
    }

    pub fn pause_gate(&self) -> PauseGate {
        self.pause.clone()
    }

    /// Spawn the forwarder and gravity loops and wait for both to stop.
    ///
    /// Must be called inside a tokio runtime. Errors only if a loop panicked.
    pub async fn run<R, W>(self, reader: R, writer: W) -> Result<SessionReport, JoinError>
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        info!(
            initial_drop = ?self.config.initial_drop,
            final_drop = ?self.config.final_drop,
            esc_timeout = ?self.config.esc_timeout,
            "session started"
        );

        let emitter = Emitter::new(writer, self.shutdown.clone());
        let translator =
            Translator::new(reader, self.pause.clone()).with_esc_timeout(self.config.esc_timeout);

        let forwarder = {
            let guard = ShutdownOnExit(self.shutdown.clone());
            let emitter = emitter.clone();
            tokio::spawn(async move {
                let _guard = guard;
                run_forwarder(translator, emitter).await
            })
        };

        let gravity = {
            let guard = ShutdownOnExit(self.shutdown.clone());
            let rate = self.config.drop_rate();
            let pause = self.pause.watch();
            tokio::spawn(async move {
                let _guard = guard;
                run_gravity(emitter, rate, pause).await
            })
        };

        let (forwarder, gravity) = tokio::join!(forwarder, gravity);
        let report = SessionReport {
            forwarder: forwarder?,
            gravity: gravity?,
        };

        info!(
            forwarded = report.forwarder.forwarded,
            drops = report.gravity.drops,
            stop = ?report.forwarder.stop,
            "session stopped"
        );
        Ok(report)
    }
}
