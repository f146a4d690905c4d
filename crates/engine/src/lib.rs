//! Driver engine - the two loops and the writer they share
//!
//! ```text
//!            stdin                                   stdout
//!              |                                       ^
//!              v                                       |
//!   Translator -> Forwarder (loop A) --emit--> Emitter |
//!                                                 ^    |
//!                   Gravity (loop B) ----emit-----+    |
//! ```
//!
//! The loops share nothing but the [`Emitter`], the shutdown signal and the
//! pause signal. [`Session`] wires them up and runs them to completion.

pub mod forwarder;
pub mod gravity;
pub mod session;
pub mod writer;

pub use tetrisrun_core as core;
pub use tetrisrun_input as input;
pub use tetrisrun_types as types;

pub use forwarder::{run_forwarder, ForwarderReport, ForwarderStop};
pub use gravity::{run_gravity, GravityReport};
pub use session::{Session, SessionConfig, SessionReport};
pub use writer::{Emitter, WriteFailure};
