//! Shutdown and pause signals shared between the forwarder and gravity loops.
//!
//! Both are `watch` channels rather than rendezvous channels, so the raising
//! side never blocks. Shutdown is read as a level. Pause is also read as an
//! edge: every enter or exit bumps the channel version, and [`PauseWatch::changed`]
//! reports it even when an enter and its exit land before the observer runs.

use std::future;
use std::sync::Arc;

use tokio::sync::watch;

/// Global, monotonic shutdown event.
///
/// Cloning yields another handle to the same event.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Set the event. Returns `true` only for the call that actually set it.
    pub fn signal(&self) -> bool {
        self.tx.send_if_modified(|set| {
            if *set {
                false
            } else {
                *set = true;
                true
            }
        })
    }

    pub fn is_signaled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolve once the event is set. Cancel safe.
    pub async fn signaled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender is owned by `self`, so the channel cannot close here.
        let _ = rx.wait_for(|set| *set).await;
    }
}

/// Raising side of the pause signal, held by the key translator.
#[derive(Debug, Clone)]
pub struct PauseGate {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for PauseGate {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseGate {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Raise enter-pause. Returns `false` if already paused.
    pub fn enter(&self) -> bool {
        self.set(true)
    }

    /// Raise exit-pause. Returns `false` if not paused.
    pub fn exit(&self) -> bool {
        self.set(false)
    }

    pub fn is_paused(&self) -> bool {
        *self.tx.borrow()
    }

    /// Observing side for the gravity loop.
    pub fn watch(&self) -> PauseWatch {
        PauseWatch {
            rx: self.tx.subscribe(),
        }
    }

    fn set(&self, paused: bool) -> bool {
        self.tx.send_if_modified(|state| {
            if *state == paused {
                false
            } else {
                *state = paused;
                true
            }
        })
    }
}

/// Observing side of the pause signal.
#[derive(Debug)]
pub struct PauseWatch {
    rx: watch::Receiver<bool>,
}

impl PauseWatch {
    pub fn is_paused(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve after the next enter or exit since the last observation.
    /// Cancel safe. Never resolves once the gate is gone.
    pub async fn changed(&mut self) {
        if self.rx.changed().await.is_err() {
            future::pending::<()>().await;
        }
    }

    /// Resolve once exit-pause has been raised (immediately if not paused).
    pub async fn resumed(&mut self) {
        let closed = self.rx.wait_for(|paused| !*paused).await.is_err();
        if closed {
            future::pending::<()>().await;
        }
    }
}
