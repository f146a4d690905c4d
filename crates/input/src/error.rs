use std::io;

use thiserror::Error;

/// Why the translator stopped producing commands.
///
/// Callers treat both variants the same way (send quit, shut down); only
/// [`InputError::Io`] is worth logging.
#[derive(Debug, Error)]
pub enum InputError {
    /// Stream closed, a quit key, or a lone ESC.
    #[error("end of input")]
    EndOfInput,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, InputError::EndOfInput)
    }
}
