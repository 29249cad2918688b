//! Speech synthesizer abstraction
//!
//! The quiz speaks every prompt, answer and message through a [`Synth`].

use crate::config::Settings;
use crate::Result;
use log::info;

/// Speech synthesizer trait
pub trait Synth {
    /// Speak text, blocking until the synthesizer has finished
    fn speak(&mut self, text: &str) -> Result<()>;
}

/// Create the synthesizer selected by the settings
///
/// The external program is not probed here. If it is missing, the first
/// spoken message fails and ends the program.
pub fn create_synth(settings: &Settings) -> Box<dyn Synth> {
    use super::backends::espeak::EspeakSynth;
    use super::backends::silent::SilentSynth;

    if settings.speech_enabled {
        info!(
            "Using {} with voice {}",
            settings.synth_program,
            settings.voice.id()
        );
        Box::new(EspeakSynth::new(&settings.synth_program, settings.voice))
    } else {
        info!("Speech disabled, display only");
        Box::new(SilentSynth)
    }
}
