//! Status line shown on stderr while the one request is in flight.
//!
//! A static line, not an animated spinner. It only appears when stderr is
//! a terminal, so piped output never picks it up.

use console::Term;

/// A single status line on stderr, cleared when the command finishes.
///
/// Dropping an unfinished `Status` clears the line too, so an error
/// propagating out of a command handler can never leave a stale
/// "Loading" line on screen.
pub struct Status {
    term: Term,
    active: bool,
}

impl Status {
    /// Write `message` as the current status line.
    pub fn start(message: &str) -> Self {
        let term = Term::stderr();
        let active = term.is_term();
        if active {
            let _ = term.write_str(message);
        }
        Status { term, active }
    }

    /// Clear the status line. Idempotent.
    pub fn finish(&mut self) {
        if self.active {
            let _ = self.term.clear_line();
            self.active = false;
        }
    }
}

impl Drop for Status {
    fn drop(&mut self) {
        self.finish();
    }
}
