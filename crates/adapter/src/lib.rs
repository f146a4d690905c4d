//! Process adapter - connects the engine to the real process
//!
//! Everything that touches process-global state lives here, so the engine
//! crates stay testable with in-memory streams:
//!
//! - [`config`]: driver configuration from environment variables
//! - [`logging`]: `tracing` subscriber writing to stderr
//! - [`runtime`]: SIGPIPE disposition, terminal mode, tokio runtime, stdio
//!
//! # Environment Variables
//!
//! - `TETRISRUN_ESC_TIMEOUT_MS`: wait for `[` after ESC (default: 100)
//! - `TETRISRUN_INITIAL_DROP_MS`: first gravity interval (default: 1000)
//! - `TETRISRUN_FINAL_DROP_US`: gravity floor in microseconds (default: 400)
//! - `TETRISRUN_DROP_STEP_MS`: acceleration per drop (default: 1)
//! - `TETRISRUN_RAW`: set to "1" or "true" to put the terminal in raw mode
//! - `TETRISRUN_LOG`: log filter, e.g. `debug` (default: `warn`, falls back to `RUST_LOG`)
//!
//! stdout carries the command protocol, so all diagnostics go to stderr.

pub mod config;
pub mod logging;
pub mod runtime;

pub use tetrisrun_engine as engine;
pub use tetrisrun_term as term;
pub use tetrisrun_types as types;

pub use config::{ConfigError, DriverConfig};
pub use logging::init_logging;
pub use runtime::{ignore_sigpipe, run_stdio};
