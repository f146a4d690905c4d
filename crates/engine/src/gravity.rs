//! Loop B: inject a drop command on an accelerating timer.

use std::time::Duration;

use tokio::io::AsyncWrite;
use tokio::time;
use tracing::{debug, trace};

use crate::core::{DropRate, PauseWatch};
use crate::types::Command;
use crate::writer::Emitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityReport {
    pub drops: u64,
    /// Interval that would have been used for the next drop.
    pub interval: Duration,
}

/// Tick until a write fails or shutdown is signaled.
///
/// While paused the timer is not running at all; after resume the next drop
/// comes a full interval later.
pub async fn run_gravity<W>(
    emitter: Emitter<W>,
    mut rate: DropRate,
    mut pause: PauseWatch,
) -> GravityReport
where
    W: AsyncWrite + Unpin,
{
    let shutdown = emitter.shutdown().clone();
    let mut drops = 0u64;

    loop {
        if pause.is_paused() {
            debug!("gravity paused");
            tokio::select! {
                biased;
                _ = shutdown.signaled() => break,
                _ = pause.resumed() => debug!("gravity resumed"),
            }
        }

        tokio::select! {
            biased;
            _ = shutdown.signaled() => break,
            // Any pause edge, even one already undone, restarts the interval.
            _ = pause.changed() => continue,
            _ = time::sleep(rate.interval()) => {
                if !emitter.emit(Command::Drop).await {
                    break;
                }
                drops += 1;
                rate.advance();
                trace!(drops, interval = ?rate.interval(), "drop");
            }
        }
    }

    debug!(drops, interval = ?rate.interval(), "gravity stopped");
    GravityReport {
        drops,
        interval: rate.interval(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::time::Instant;

    use crate::core::{PauseGate, Shutdown};

    #[tokio::test(start_paused = true)]
    async fn drops_accelerate_by_one_millisecond() {
        let (output, mut downstream) = tokio::io::duplex(64);
        let shutdown = Shutdown::new();
        let task = tokio::spawn(run_gravity(
            Emitter::new(output, shutdown.clone()),
            DropRate::default(),
            PauseGate::new().watch(),
        ));

        let mut last = Instant::now();
        for expected_ms in [1000u64, 999, 998] {
            assert_eq!(downstream.read_u8().await.unwrap(), b'k');
            let now = Instant::now();
            assert_eq!(now - last, Duration::from_millis(expected_ms));
            last = now;
        }

        shutdown.signal();
        let report = task.await.unwrap();
        assert_eq!(report.drops, 3);
        assert_eq!(report.interval, Duration::from_millis(997));
    }

    #[tokio::test(start_paused = true)]
    async fn pause_freezes_the_timer() {
        let (output, mut downstream) = tokio::io::duplex(64);
        let shutdown = Shutdown::new();
        let gate = PauseGate::new();
        let task = tokio::spawn(run_gravity(
            Emitter::new(output, shutdown.clone()),
            DropRate::default(),
            gate.watch(),
        ));

        // Half an interval in, then pause for five seconds.
        time::sleep(Duration::from_millis(500)).await;
        gate.enter();
        time::sleep(Duration::from_secs(5)).await;
        gate.exit();

        let resumed_at = Instant::now();
        assert_eq!(downstream.read_u8().await.unwrap(), b'k');
        assert_eq!(resumed_at.elapsed(), Duration::from_millis(1000));

        shutdown.signal();
        assert_eq!(task.await.unwrap().drops, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn instant_pause_and_resume_restarts_the_interval() {
        let (output, mut downstream) = tokio::io::duplex(64);
        let shutdown = Shutdown::new();
        let gate = PauseGate::new();
        let task = tokio::spawn(run_gravity(
            Emitter::new(output, shutdown.clone()),
            DropRate::default(),
            gate.watch(),
        ));

        // Both edges land before the gravity task runs again.
        time::sleep(Duration::from_millis(500)).await;
        gate.enter();
        gate.exit();

        let resumed_at = Instant::now();
        assert_eq!(downstream.read_u8().await.unwrap(), b'k');
        assert_eq!(resumed_at.elapsed(), Duration::from_millis(1000));

        shutdown.signal();
        assert_eq!(task.await.unwrap().drops, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_while_paused_stops() {
        let (output, _downstream) = tokio::io::duplex(64);
        let shutdown = Shutdown::new();
        let gate = PauseGate::new();
        gate.enter();
        let task = tokio::spawn(run_gravity(
            Emitter::new(output, shutdown.clone()),
            DropRate::default(),
            gate.watch(),
        ));

        time::sleep(Duration::from_secs(3)).await;
        shutdown.signal();
        let report = task.await.unwrap();
        assert_eq!(report.drops, 0);
        assert_eq!(report.interval, Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn closed_downstream_stops_after_first_tick() {
        let (output, downstream) = tokio::io::duplex(64);
        drop(downstream);
        let shutdown = Shutdown::new();

        let start = Instant::now();
        let report = run_gravity(
            Emitter::new(output, shutdown.clone()),
            DropRate::default(),
            PauseGate::new().watch(),
        )
        .await;

        assert_eq!(start.elapsed(), Duration::from_millis(1000));
        assert_eq!(report.drops, 0);
        assert!(shutdown.is_signaled());
    }
}
