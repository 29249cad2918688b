//! Line input for prompts
//!
//! Answers are read one line at a time. Reading stops early with
//! [`Reply::Cancelled`] when the active [`CancelToken`] is tripped, which is
//! how Ctrl+C during a quiz reaches the session loop.

use crate::interrupt::CancelToken;
use crate::{QuizError, Result};
use log::debug;
use nix::errno::Errno;
use nix::libc;
use nix::unistd;
use std::io::BufRead;
use std::os::unix::io::RawFd;

/// Outcome of waiting for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A line of input, without its line terminator
    Line(String),
    /// The wait was interrupted
    Cancelled,
}

/// A source of input lines
pub trait LineSource {
    /// Block until a full line is available or `cancel` is tripped
    fn read_line(&mut self, cancel: &CancelToken) -> Result<Reply>;
}

/// Strip one trailing `\n` (and a `\r` before it)
fn strip_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

/// Reads a terminal descriptor directly, standard input by default
///
/// std's buffered stdin retries reads interrupted by a signal, which would
/// leave Ctrl+C unnoticed until the user pressed enter. Reading the
/// descriptor ourselves lets `EINTR` surface.
///
/// A SIGINT landing after the cancel check but before `read` starts
/// blocking does not interrupt that read; the cancellation is only seen
/// once the next line (or another Ctrl+C) arrives.
pub struct StdinSource {
    fd: RawFd,
}

impl StdinSource {
    pub fn new() -> Self {
        Self::from_fd(libc::STDIN_FILENO)
    }

    /// Read from `fd` instead; the caller keeps it open
    pub fn from_fd(fd: RawFd) -> Self {
        Self { fd }
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for StdinSource {
    fn read_line(&mut self, cancel: &CancelToken) -> Result<Reply> {
        let mut bytes = Vec::new();

        loop {
            if cancel.is_cancelled() {
                debug!("stdin read cancelled");
                return Ok(Reply::Cancelled);
            }

            let mut byte = [0u8; 1];
            match unistd::read(self.fd, &mut byte) {
                Ok(0) if bytes.is_empty() => return Err(QuizError::UnexpectedEof),
                Ok(0) => break,
                Ok(_) => {
                    bytes.push(byte[0]);
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Err(Errno::EINTR) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        let mut line = String::from_utf8_lossy(&bytes).into_owned();
        strip_terminator(&mut line);
        Ok(Reply::Line(line))
    }
}

/// Adapts any buffered reader, such as a pipe or an in-memory script
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, cancel: &CancelToken) -> Result<Reply> {
        if cancel.is_cancelled() {
            return Ok(Reply::Cancelled);
        }

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(QuizError::UnexpectedEof);
        }

        strip_terminator(&mut line);
        Ok(Reply::Line(line))
    }
}
