//! Core types module - the command alphabet and timing defaults
//!
//! This crate defines the single-byte protocol spoken to the downstream game and
//! the timing constants shared by the rest of the workspace. It has no
//! dependencies, so it is usable from any context (translator, gravity loop,
//! tests).
//!
//! # Wire Alphabet
//!
//! Every command is exactly one byte on stdout:
//!
//! | Command | Byte | Meaning |
//! |---------|------|---------|
//! | `Rotate` | `i` | rotate the falling piece |
//! | `Left` | `j` | move left |
//! | `Drop` | `k` | move down one row (also the gravity tick) |
//! | `Right` | `l` | move right |
//! | `Quit` | ESC (0x1B) | leave the game |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ESC_TIMEOUT_MS` | 100 | Wait for `[` after ESC before treating it as quit |
//! | `INITIAL_DROP_MS` | 1000 | First gravity interval |
//! | `FINAL_DROP_US` | 400 | Gravity floor (0.4 ms) |
//! | `DROP_STEP_MS` | 1 | Interval decrement per drop |
//!
//! # Examples
//!
//! ```
//! use tetrisrun_types::Command;
//!
//! assert_eq!(Command::Rotate.byte(), b'i');
//! assert_eq!(Command::from_byte(0x1b), Some(Command::Quit));
//! assert_eq!(Command::Drop.to_string(), "drop");
//! ```

/// Escape disambiguation timeout in milliseconds.
pub const ESC_TIMEOUT_MS: u64 = 100;

/// Initial gravity interval in milliseconds (one drop per second).
pub const INITIAL_DROP_MS: u64 = 1000;

/// Gravity floor in microseconds (0.4 ms).
pub const FINAL_DROP_US: u64 = 400;

/// Gravity acceleration: the interval shrinks by this much after every drop.
pub const DROP_STEP_MS: u64 = 1;

/// The escape byte, which is also the quit command on the wire.
pub const ESC: u8 = 0x1b;

/// Canonical command sent to the downstream program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Rotate,
    Left,
    Drop,
    Right,
    Quit,
}

impl Command {
    /// All commands in wire order.
    pub const ALL: [Command; 5] = [
        Command::Rotate,
        Command::Left,
        Command::Drop,
        Command::Right,
        Command::Quit,
    ];

    /// The byte written to stdout for this command.
    pub const fn byte(self) -> u8 {
        match self {
            Command::Rotate => b'i',
            Command::Left => b'j',
            Command::Drop => b'k',
            Command::Right => b'l',
            Command::Quit => ESC,
        }
    }

    /// Inverse of [`Command::byte`]. Aliases are not accepted here; see the
    /// input crate for alias translation.
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'i' => Some(Command::Rotate),
            b'j' => Some(Command::Left),
            b'k' => Some(Command::Drop),
            b'l' => Some(Command::Right),
            ESC => Some(Command::Quit),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Command::Rotate => "rotate",
            Command::Left => "left",
            Command::Drop => "drop",
            Command::Right => "right",
            Command::Quit => "quit",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_alphabet_matches_downstream_protocol() {
        let bytes: Vec<u8> = Command::ALL.iter().map(|c| c.byte()).collect();
        assert_eq!(bytes, vec![b'i', b'j', b'k', b'l', 0x1b]);
    }

    #[test]
    fn from_byte_rejects_aliases() {
        assert_eq!(Command::from_byte(b'w'), None);
        assert_eq!(Command::from_byte(b'q'), None);
        for c in Command::ALL {
            assert_eq!(Command::from_byte(c.byte()), Some(c));
        }
    }

    #[test]
    fn display_uses_command_names() {
        assert_eq!(Command::Rotate.to_string(), "rotate");
        assert_eq!(Command::Quit.to_string(), "quit");
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(ESC_TIMEOUT_MS, 100);
        assert_eq!(INITIAL_DROP_MS, 1000);
        assert_eq!(FINAL_DROP_US, 400);
        assert_eq!(DROP_STEP_MS, 1);
    }
}
