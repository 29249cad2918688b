//! Shared helpers for driving the quiz without a terminal

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::atomic::AtomicBool;
use timestable::console::{LineSource, Reply};
use timestable::interrupt::CancelToken;
use timestable::speech::{Speaker, Synth};
use timestable::{QuizError, Result};

/// One scripted user action
pub enum Step {
    /// Type a line and press enter
    Line(String),
    /// Press Ctrl+C while the program waits for input
    Interrupt,
}

pub fn lines<I, S>(lines: I) -> Vec<Step>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines.into_iter().map(|l| Step::Line(l.into())).collect()
}

/// Input that replays a script, then reports end of input
pub struct ScriptedInput {
    steps: VecDeque<Step>,
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self, cancel: &CancelToken) -> Result<Reply> {
        if cancel.is_cancelled() {
            return Ok(Reply::Cancelled);
        }
        match self.steps.pop_front() {
            Some(Step::Line(line)) => Ok(Reply::Line(line)),
            Some(Step::Interrupt) => {
                cancel.cancel();
                Ok(Reply::Cancelled)
            }
            None => Err(QuizError::UnexpectedEof),
        }
    }
}

/// Synthesizer that records what it was asked to say
///
/// With `interrupt_on` set, speaking that exact text behaves like Ctrl+C
/// during speech: the token trips and the synthesizer fails.
pub struct Recorder {
    spoken: Rc<RefCell<Vec<String>>>,
    interrupt_on: Option<(String, CancelToken)>,
}

impl Synth for Recorder {
    fn speak(&mut self, text: &str) -> Result<()> {
        self.spoken.borrow_mut().push(text.to_string());
        if let Some((trigger, cancel)) = &self.interrupt_on {
            if trigger == text {
                cancel.cancel();
                return Err(QuizError::Speech("killed by signal".into()));
            }
        }
        Ok(())
    }
}

/// Synthesizer that always fails, like a missing espeak-ng
pub struct Broken;

impl Synth for Broken {
    fn speak(&mut self, _text: &str) -> Result<()> {
        Err(QuizError::Speech("Failed to start espeak-ng".into()))
    }
}

/// Captured terminal output
#[derive(Clone, Default)]
pub struct Output(Rc<RefCell<Vec<u8>>>);

impl Output {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// What a test can inspect after running the speaker
pub struct Harness {
    pub spoken: Rc<RefCell<Vec<String>>>,
    pub output: Output,
    pub cancel: CancelToken,
}

impl Harness {
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.borrow().clone()
    }

    pub fn count_spoken(&self, text: &str) -> usize {
        self.spoken.borrow().iter().filter(|s| *s == text).count()
    }
}

fn fresh_token() -> CancelToken {
    CancelToken::manual(Box::leak(Box::new(AtomicBool::new(false))))
}

/// Speaker fed from `steps`, recording speech and output
pub fn speaker(steps: Vec<Step>) -> (Speaker, Harness) {
    build(steps, None)
}

/// Like [`speaker`], but Ctrl+C arrives while `text` is being spoken
pub fn speaker_interrupted_on(steps: Vec<Step>, text: &str) -> (Speaker, Harness) {
    build(steps, Some(text))
}

fn build(steps: Vec<Step>, interrupt_on: Option<&str>) -> (Speaker, Harness) {
    let cancel = fresh_token();
    let spoken = Rc::new(RefCell::new(Vec::new()));
    let output = Output::default();

    let synth = Recorder {
        spoken: spoken.clone(),
        interrupt_on: interrupt_on.map(|t| (t.to_string(), cancel)),
    };
    let input = ScriptedInput {
        steps: steps.into(),
    };

    let speaker = Speaker::new(
        Box::new(synth),
        Box::new(output.clone()),
        Box::new(input),
        cancel,
    );

    (
        speaker,
        Harness {
            spoken,
            output,
            cancel,
        },
    )
}

/// Speaker whose synthesizer never works
pub fn broken_speaker(steps: Vec<Step>) -> Speaker {
    Speaker::new(
        Box::new(Broken),
        Box::new(Output::default()),
        Box::new(ScriptedInput {
            steps: steps.into(),
        }),
        fresh_token(),
    )
}

/// Correct answers for a whole table, in order
pub fn table_answers(table: u32) -> Vec<String> {
    (1..=12).map(|i| (i * table).to_string()).collect()
}
