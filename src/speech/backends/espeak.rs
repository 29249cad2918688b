//! External synthesizer backend
//!
//! Runs `espeak-ng -v <voice> <text>` (or any program taking the same
//! arguments) for every message and waits for it to finish, so speech and
//! printed output stay in step.
//!
//! Dependencies:
//! - espeak-ng (install with: sudo apt install espeak-ng)

use crate::config::Voice;
use crate::speech::Synth;
use crate::{QuizError, Result};
use log::{debug, error};
use std::process::Command;

/// Synthesizer that shells out for each message
pub struct EspeakSynth {
    /// Program to run
    program: String,

    /// Voice passed with `-v`
    voice: Voice,
}

impl EspeakSynth {
    pub fn new(program: &str, voice: Voice) -> Self {
        debug!("Creating espeak backend: {} -v {}", program, voice.id());
        Self {
            program: program.to_string(),
            voice,
        }
    }

    /// Build the command line for one message
    fn command(&self, text: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-v").arg(self.voice.id()).arg(text);
        cmd
    }
}

impl Synth for EspeakSynth {
    fn speak(&mut self, text: &str) -> Result<()> {
        debug!("Speaking: {}", text);

        let status = self.command(text).status().map_err(|e| {
            error!("Failed to run {}: {}", self.program, e);
            QuizError::Speech(format!("Failed to start {}: {}", self.program, e))
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(QuizError::Speech(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}
