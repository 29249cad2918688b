//! Scoped interrupt handling
//!
//! A quiz can be abandoned with Ctrl+C. While a quiz or listen loop runs,
//! SIGINT is redirected to a flag instead of killing the process; every
//! blocking point checks that flag through a [`CancelToken`]. Leaving the
//! loop drops the [`InterruptGuard`], which puts the previous handler back.

use crate::{QuizError, Result};
use log::debug;
use nix::libc;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use std::sync::atomic::{AtomicBool, Ordering};

/// Set by the SIGINT handler while a guard is armed
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// SIGINT handler - only flips the flag, the loops do the rest
extern "C" fn handle_sigint(_: libc::c_int) {
    INTERRUPTED.store(true, Ordering::SeqCst);
}

/// Handle on a cancellation flag
///
/// Copies share the same flag. A token made with [`CancelToken::sigint`]
/// is tripped by Ctrl+C; one made with [`CancelToken::manual`] is tripped
/// only by [`CancelToken::cancel`].
#[derive(Debug, Clone, Copy)]
pub struct CancelToken {
    flag: &'static AtomicBool,
    signal: bool,
}

impl CancelToken {
    /// Token driven by SIGINT
    pub fn sigint() -> Self {
        Self {
            flag: &INTERRUPTED,
            signal: true,
        }
    }

    /// Token driven by the caller, no OS signal is touched
    pub fn manual(flag: &'static AtomicBool) -> Self {
        Self {
            flag,
            signal: false,
        }
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Start a cancellation scope
    ///
    /// Clears the flag and, for the SIGINT token, installs the handler.
    /// The handler is installed without `SA_RESTART` so a blocked read
    /// returns `EINTR` and the reader can notice the flag.
    pub fn arm(&self) -> Result<InterruptGuard> {
        self.flag.store(false, Ordering::SeqCst);

        let previous = if self.signal {
            let action = SigAction::new(
                SigHandler::Handler(handle_sigint),
                SaFlags::empty(),
                SigSet::empty(),
            );
            let previous = unsafe { signal::sigaction(Signal::SIGINT, &action) }
                .map_err(|e| QuizError::Signal(format!("Failed to set SIGINT handler: {}", e)))?;
            debug!("SIGINT handler installed");
            Some(previous)
        } else {
            None
        };

        Ok(InterruptGuard {
            flag: self.flag,
            previous,
        })
    }
}

/// RAII guard for an armed [`CancelToken`]
///
/// Restores the SIGINT disposition that was active before [`CancelToken::arm`]
/// and clears the flag, however the scope is left.
pub struct InterruptGuard {
    flag: &'static AtomicBool,
    previous: Option<SigAction>,
}

impl InterruptGuard {
    /// Whether the scope has been interrupted so far
    pub fn interrupted(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            match unsafe { signal::sigaction(Signal::SIGINT, &previous) } {
                Ok(_) => debug!("SIGINT handler restored"),
                Err(e) => log::error!("Failed to restore SIGINT handler: {}", e),
            }
        }
        self.flag.store(false, Ordering::SeqCst);
    }
}
