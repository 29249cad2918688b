//! timestable - A spoken times table quiz
//!
//! Reads multiplication tables aloud and quizzes the user on them,
//! speaking through an external synthesizer such as espeak-ng.

pub mod config;
pub mod console;
pub mod error;
pub mod facts;
pub mod interrupt;
pub mod menu;
pub mod session;
pub mod speech;

pub use error::{QuizError, Result};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "timestable";
