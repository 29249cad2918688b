//! Command line and runtime settings
//!
//! Everything the quiz can be configured with comes from the command line.
//! The parsed [`Settings`] are handed to the speech gateway once at startup
//! and never change afterwards.

use clap::{Parser, ValueEnum};

/// Synthesizer launched when `--synth` is not given
pub const DEFAULT_SYNTH: &str = "espeak-ng";

/// Voice used for speech output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Voice {
    #[default]
    Male,
    Female,
}

impl Voice {
    /// Voice identifier passed to the synthesizer's `-v` option
    pub fn id(self) -> &'static str {
        match self {
            Voice::Male => "m3",
            Voice::Female => "f3",
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = crate::APP_NAME, version, about = "A spoken times table quiz")]
pub struct Args {
    /// Voice to speak with
    #[arg(short, long, value_enum, default_value_t = Voice::Male)]
    pub voice: Voice,

    /// Only print, never start the speech synthesizer
    #[arg(short, long)]
    pub silent: bool,

    /// Speech synthesizer program
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_SYNTH)]
    pub synth: String,

    /// Write debug logging to timestable.log
    #[arg(short, long)]
    pub debug: bool,
}

/// Settings for the speech gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Voice for every spoken message
    pub voice: Voice,

    /// Whether messages are spoken as well as printed
    pub speech_enabled: bool,

    /// Program invoked as `<program> -v <voice-id> <text>`
    pub synth_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            voice: Voice::default(),
            speech_enabled: true,
            synth_program: DEFAULT_SYNTH.to_string(),
        }
    }
}

impl From<&Args> for Settings {
    fn from(args: &Args) -> Self {
        Self {
            voice: args.voice,
            speech_enabled: !args.silent,
            synth_program: args.synth.clone(),
        }
    }
}
