//! Speech output

pub mod backends;
pub mod gateway;
pub mod synth;

pub use gateway::{Flow, Speaker};
pub use synth::{create_synth, Synth};
