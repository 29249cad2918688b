//! Display-only backend

use crate::speech::Synth;
use crate::Result;
use log::debug;

/// Backend that never makes a sound
pub struct SilentSynth;

impl Synth for SilentSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        debug!("Silent: {}", text);
        Ok(())
    }
}
