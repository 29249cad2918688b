//! Error types for the times table quiz

use std::io;
use thiserror::Error;

/// Main error type for the quiz
///
/// Only failures the program cannot recover from end up here. A bad menu
/// choice or an interrupted quiz is handled in place and never becomes an
/// error value.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Signal handling error: {0}")]
    Signal(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Invalid question count {0:?}: expected an integer")]
    InvalidCount(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

impl From<String> for QuizError {
    fn from(s: String) -> Self {
        QuizError::Other(s)
    }
}

impl From<&str> for QuizError {
    fn from(s: &str) -> Self {
        QuizError::Other(s.to_string())
    }
}

impl From<nix::errno::Errno> for QuizError {
    fn from(e: nix::errno::Errno) -> Self {
        QuizError::Io(io::Error::from_raw_os_error(e as i32))
    }
}
