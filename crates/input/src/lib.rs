//! Raw keystroke input (engine-facing).
//!
//! This module works on raw terminal bytes, not on decoded key events: the
//! driver sits in a pipeline (`tetrisrun | ./tetris`) and sees exactly what the
//! terminal sends in raw mode. It maps alias bytes onto the
//! [`crate::types::Command`] alphabet and resolves the ESC ambiguity between a
//! lone escape key and an ANSI arrow sequence with a short timeout.

pub mod error;
pub mod map;
pub mod translator;

pub use tetrisrun_core as core;
pub use tetrisrun_types as types;

pub use error::InputError;
pub use map::{classify, map_arrow, Key};
pub use translator::Translator;
