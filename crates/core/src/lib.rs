//! Core driver state - the pieces the two loops share or own
//!
//! Nothing here performs I/O. The types in this crate are small state holders
//! that the engine's loops are built from, which keeps them trivially
//! testable:
//!
//! - [`drop_rate`]: the accelerating gravity interval owned by the gravity loop
//! - [`signal`]: the shutdown and pause signals handed to both loops
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tetrisrun_core::{DropRate, Shutdown};
//!
//! let mut rate = DropRate::default();
//! assert_eq!(rate.interval(), Duration::from_millis(1000));
//! rate.advance();
//! assert_eq!(rate.interval(), Duration::from_millis(999));
//!
//! let shutdown = Shutdown::new();
//! assert!(shutdown.signal());
//! assert!(!shutdown.signal()); // already set
//! ```

pub mod drop_rate;
pub mod signal;

pub use tetrisrun_types as types;

pub use drop_rate::DropRate;
pub use signal::{PauseGate, PauseWatch, Shutdown};
