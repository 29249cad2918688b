//! Main menu
//!
//! Greets the user, then offers the three activities until "Finish" is
//! chosen. Mistyped choices are answered with an apology and the menu is
//! shown again; only a failed synthesizer, a non-numeric question count or
//! closed input end the program early.

use crate::console::Reply;
use crate::facts::parse_table;
use crate::session::{self, SessionOutcome};
use crate::speech::Speaker;
use crate::{QuizError, Result};
use log::{debug, info};
use nix::unistd::{getuid, User};
use rand::RngCore;

const MENU_ITEMS: [&str; 4] = [
    " 1. Listen to a times table",
    " 2. A simple quiz",
    " 3. A random quiz",
    " 4. Finish",
];

const TABLE_PROMPT: &str = "Which times table?";
const TABLE_PROMPT_SHOWN: &str = "Which times table? [1-12] ";
const TABLE_RANGE_ERROR: &str = "Sorry, but you must choose a number from 1 to 12";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Listen,
    Quiz,
    RandomQuiz,
    Finish,
}

impl MenuChoice {
    /// Parse the raw reply to the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Listen),
            "2" => Some(MenuChoice::Quiz),
            "3" => Some(MenuChoice::RandomQuiz),
            "4" => Some(MenuChoice::Finish),
            _ => None,
        }
    }
}

/// Look up the name of the user running the program
///
/// Checks `LOGNAME`, `USER`, `LNAME` and `USERNAME` first, then the
/// password database.
pub fn username() -> Result<String> {
    for var in ["LOGNAME", "USER", "LNAME", "USERNAME"] {
        if let Ok(name) = std::env::var(var) {
            if !name.is_empty() {
                return Ok(name);
            }
        }
    }

    match User::from_uid(getuid()) {
        Ok(Some(user)) => Ok(user.name),
        Ok(None) => Err(QuizError::Other(format!(
            "No user name for uid {}",
            getuid()
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Interactive menu loop
pub struct Menu {
    speaker: Speaker,
    username: String,
    rng: Box<dyn RngCore>,
}

impl Menu {
    pub fn new(speaker: Speaker, username: impl Into<String>) -> Self {
        Self {
            speaker,
            username: username.into(),
            rng: Box::new(rand::thread_rng()),
        }
    }

    /// Use a specific random source for the random quiz
    pub fn with_rng(mut self, rng: Box<dyn RngCore>) -> Self {
        self.rng = rng;
        self
    }

    /// Run until the user picks "Finish"
    pub fn run(&mut self) -> Result<()> {
        self.speaker.say(&format!("Hello {}.", self.username))?;

        loop {
            for item in MENU_ITEMS {
                self.speaker.display(item)?;
            }

            let input = match self
                .speaker
                .ask("Which number would you like to play? ", None)?
            {
                Reply::Line(line) => line,
                Reply::Cancelled => {
                    info!("Menu cancelled");
                    return Ok(());
                }
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Listen) => {
                    if let Some(table) = self.ask_table()? {
                        let outcome = session::listen(&mut self.speaker, table)?;
                        log_outcome(&outcome);
                    }
                }
                Some(MenuChoice::Quiz) => {
                    if let Some(table) = self.ask_table()? {
                        let outcome = session::quiz_table(&mut self.speaker, table)?;
                        log_outcome(&outcome);
                    }
                }
                Some(MenuChoice::RandomQuiz) => {
                    if let Some(count) = self.ask_count()? {
                        let outcome =
                            session::quiz_random(&mut self.speaker, count, &mut *self.rng)?;
                        log_outcome(&outcome);
                    }
                }
                Some(MenuChoice::Finish) => {
                    self.speaker.say("Thank you for playing. Goodbye.")?;
                    info!("Finished");
                    return Ok(());
                }
                None => {
                    debug!("Invalid menu choice {:?}", input);
                    self.speaker
                        .say("Sorry, but you must choose a number from 1 to 4")?;
                }
            }

            self.speaker.display("")?;
        }
    }

    /// Ask for a table, apologising when it is out of range
    fn ask_table(&mut self) -> Result<Option<u32>> {
        let input = match self.speaker.ask(TABLE_PROMPT, Some(TABLE_PROMPT_SHOWN))? {
            Reply::Line(line) => line,
            Reply::Cancelled => return Ok(None),
        };

        match parse_table(&input) {
            Some(table) => Ok(Some(table)),
            None => {
                debug!("Invalid table {:?}", input);
                self.speaker.say(TABLE_RANGE_ERROR)?;
                Ok(None)
            }
        }
    }

    /// Ask how many random questions to set
    ///
    /// Anything that is not an integer is fatal. Zero or negative counts
    /// are passed on and simply ask nothing.
    fn ask_count(&mut self) -> Result<Option<i64>> {
        let input = match self
            .speaker
            .ask("How many questions would you like? ", None)?
        {
            Reply::Line(line) => line,
            Reply::Cancelled => return Ok(None),
        };

        input
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| QuizError::InvalidCount(input))
    }
}

fn log_outcome(outcome: &SessionOutcome) {
    match outcome {
        SessionOutcome::Completed(summary) => info!("Session completed: {:?}", summary),
        SessionOutcome::Listened => info!("Session listened"),
        SessionOutcome::Aborted => info!("Session aborted"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Listen));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::Quiz));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::RandomQuiz));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Finish));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_username() {
        // Depends on the environment, just check something sensible comes back
        if let Ok(name) = username() {
            assert!(!name.is_empty());
        }
    }
}
