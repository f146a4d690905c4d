//! Terminal mode handling.
//!
//! The driver is normally started as `stty raw -echo && tetrisrun | ./tetris`,
//! with the terminal already configured by the shell. [`TerminalMode`] lets
//! the driver do that itself and guarantees the terminal is restored when the
//! session ends, whichever way it ends.

pub mod mode;

pub use mode::TerminalMode;
