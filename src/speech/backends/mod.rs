//! Speech backends

// External synthesizer process (espeak-ng and compatibles)
pub mod espeak;

// Display-only output
pub mod silent;
