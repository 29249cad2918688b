//! Speech gateway
//!
//! [`Speaker`] is the only way the quiz talks to the user: it prints a
//! message, speaks it, and for questions waits for the typed answer. The
//! printed text may differ from the spoken text, e.g. "3 x 4 = " on screen
//! while "3 times 4 equals" is spoken.

use super::synth::{create_synth, Synth};
use crate::config::Settings;
use crate::console::{LineSource, Reply, StdinSource};
use crate::interrupt::CancelToken;
use crate::Result;
use log::debug;
use std::io::{self, Write};

/// Whether the caller should carry on after speaking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Cancelled,
}

impl Flow {
    pub fn is_cancelled(self) -> bool {
        self == Flow::Cancelled
    }
}

/// Prints, speaks and asks
pub struct Speaker {
    synth: Box<dyn Synth>,
    output: Box<dyn Write>,
    input: Box<dyn LineSource>,
    cancel: CancelToken,
}

impl Speaker {
    pub fn new(
        synth: Box<dyn Synth>,
        output: Box<dyn Write>,
        input: Box<dyn LineSource>,
        cancel: CancelToken,
    ) -> Self {
        Self {
            synth,
            output,
            input,
            cancel,
        }
    }

    /// Speaker on the process terminal, cancelled by Ctrl+C
    pub fn terminal(settings: &Settings) -> Self {
        Self::new(
            create_synth(settings),
            Box::new(io::stdout()),
            Box::new(StdinSource::new()),
            CancelToken::sigint(),
        )
    }

    /// Token checked at every blocking point
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel
    }

    /// Print a line without speaking it
    pub fn display(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `alt` (or `message`) when `display` is set, then speak `message`
    pub fn speak(&mut self, message: &str, display: bool, alt: Option<&str>) -> Result<Flow> {
        if display {
            self.display(alt.unwrap_or(message))?;
        }
        self.voice(message)
    }

    /// Print and speak the same text
    pub fn say(&mut self, message: &str) -> Result<Flow> {
        self.speak(message, true, None)
    }

    /// Print `alt` (or `message`) as a prompt, speak `message`, read a line
    pub fn ask(&mut self, message: &str, alt: Option<&str>) -> Result<Reply> {
        write!(self.output, "{}", alt.unwrap_or(message))?;
        self.output.flush()?;

        if self.voice(message)?.is_cancelled() {
            return Ok(Reply::Cancelled);
        }

        let reply = self.input.read_line(&self.cancel)?;
        debug!("Reply: {:?}", reply);
        Ok(reply)
    }

    /// Run the synthesizer
    ///
    /// Ctrl+C reaches the synthesizer too, so a failure while the token is
    /// tripped is an interruption rather than a broken synthesizer.
    fn voice(&mut self, message: &str) -> Result<Flow> {
        match self.synth.speak(message) {
            Ok(()) if self.cancel.is_cancelled() => Ok(Flow::Cancelled),
            Ok(()) => Ok(Flow::Continue),
            Err(e) if self.cancel.is_cancelled() => {
                debug!("Speech cut short by interrupt: {}", e);
                Ok(Flow::Cancelled)
            }
            Err(e) => Err(e),
        }
    }
}
