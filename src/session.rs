//! Quiz and listen sessions
//!
//! A quiz asks each question until it is answered with exactly the decimal
//! product, then moves on. Once every question is answered it reports how
//! long the whole run took. Ctrl+C abandons the current session without a
//! summary and hands control back to the menu.

use crate::console::Reply;
use crate::facts::{self, written, Fact};
use crate::speech::{Flow, Speaker};
use crate::Result;
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

/// How a session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// A quiz with every question answered
    Completed(SessionSummary),
    /// A listen run that played the whole table
    Listened,
    /// Interrupted by the user
    Aborted,
}

/// Result of a completed quiz
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    /// Count as requested; a negative count asks nothing but is reported as given
    pub questions: i64,
    /// Wall clock seconds, rounded to one decimal place
    pub elapsed_secs: f64,
}

impl SessionSummary {
    pub fn message(&self) -> String {
        format!(
            "Well done! {} questions answered in {:.1} seconds",
            self.questions, self.elapsed_secs
        )
    }
}

/// A running quiz
pub struct Session {
    started: Instant,
    questions: i64,
}

impl Session {
    pub fn start(questions: i64) -> Self {
        Self {
            started: Instant::now(),
            questions,
        }
    }

    pub fn finish(self) -> SessionSummary {
        SessionSummary {
            questions: self.questions,
            elapsed_secs: round_tenths(self.started.elapsed()),
        }
    }
}

fn round_tenths(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 10.0).round() / 10.0
}

/// Speak all twelve facts of a table, no answers expected
pub fn listen(speaker: &mut Speaker, table: u32) -> Result<SessionOutcome> {
    let _guard = speaker.cancel_token().arm()?;
    info!("Listening to the {} times table", table);

    for fact in facts::table(table) {
        let statement = fact.statement();
        let shown = written(&statement);
        if speaker
            .speak(&statement, true, Some(shown.as_str()))?
            .is_cancelled()
        {
            info!("Listening aborted");
            return Ok(SessionOutcome::Aborted);
        }
    }

    Ok(SessionOutcome::Listened)
}

/// Quiz the twelve facts of one table in order
pub fn quiz_table(speaker: &mut Speaker, table: u32) -> Result<SessionOutcome> {
    info!("Quiz on the {} times table", table);
    run_quiz(speaker, facts::table(table), facts::TABLES.count() as i64)
}

/// Quiz `count` randomly drawn facts
///
/// A count below one asks nothing and completes straight away.
pub fn quiz_random<R: Rng + ?Sized>(
    speaker: &mut Speaker,
    count: i64,
    rng: &mut R,
) -> Result<SessionOutcome> {
    info!("Random quiz with {} questions", count);
    let draws = usize::try_from(count).unwrap_or(0);
    run_quiz(speaker, facts::random_facts(draws, rng), count)
}

fn run_quiz<I>(speaker: &mut Speaker, questions: I, count: i64) -> Result<SessionOutcome>
where
    I: IntoIterator<Item = Fact>,
{
    let _guard = speaker.cancel_token().arm()?;
    let session = Session::start(count);

    for fact in questions {
        if ask_until_correct(speaker, &fact)?.is_cancelled() {
            info!("Quiz aborted");
            return Ok(SessionOutcome::Aborted);
        }
    }

    let summary = session.finish();
    info!(
        "Quiz finished: {} questions in {:.1}s",
        summary.questions, summary.elapsed_secs
    );
    // An interrupt here only cuts the summary's speech short
    speaker.say(&summary.message())?;
    Ok(SessionOutcome::Completed(summary))
}

/// Ask one question until the exact product is typed
fn ask_until_correct(speaker: &mut Speaker, fact: &Fact) -> Result<Flow> {
    let question = fact.question();
    let shown = written(&question);
    let expected = fact.answer();

    loop {
        let answer = match speaker.ask(&question, Some(shown.as_str()))? {
            Reply::Line(line) => line,
            Reply::Cancelled => return Ok(Flow::Cancelled),
        };

        if answer == expected {
            return speaker.speak(&format!("{}. Correct", expected), true, Some("Correct"));
        }

        debug!("Wrong answer {:?} for {}", answer, shown.trim_end());
        let sorry = format!("Sorry, {} is not correct, please try again", answer);
        if speaker.say(&sorry)?.is_cancelled() {
            return Ok(Flow::Cancelled);
        }
    }
}
