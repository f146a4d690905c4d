//! Alias table from raw input bytes to commands.

use crate::types::{Command, ESC};

/// Classification of a single raw input byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Command(Command),
    Quit,
    Pause,
    /// Start of a possible ANSI sequence; needs disambiguation.
    Escape,
    Ignored,
}

/// Map one raw byte. Exact bytes only: `W` is not `w`.
pub fn classify(b: u8) -> Key {
    match b {
        b'i' | b'w' => Key::Command(Command::Rotate),
        b'j' | b'a' => Key::Command(Command::Left),
        b'k' | b's' => Key::Command(Command::Drop),
        b'l' | b'd' => Key::Command(Command::Right),

        // q, ^@, ^C, ^D, ^Z
        b'q' | 0x00 | 0x03 | 0x04 | 0x1a => Key::Quit,

        b'p' | b' ' => Key::Pause,

        ESC => Key::Escape,

        _ => Key::Ignored,
    }
}

/// Final byte of an `ESC [` arrow sequence.
pub fn map_arrow(b: u8) -> Option<Command> {
    match b {
        b'A' => Some(Command::Rotate),
        b'B' => Some(Command::Drop),
        b'C' => Some(Command::Right),
        b'D' => Some(Command::Left),
        _ => None,
    }
}
