//! Progress reporting.

use std::io::Write;

/// Minimal progress indicator: one tick per processed document.
///
/// Renders a dot on stderr per tick and a trailing newline on finish;
/// nothing beyond that tick contract is promised.
pub struct Progress {
    enabled: bool,
    ticked: bool,
}

impl Progress {
    /// Creates a progress indicator; a disabled one swallows every tick.
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ticked: false,
        }
    }

    /// Advances the indicator by one document.
    pub fn tick(&mut self) {
        if self.enabled {
            eprint!(".");
            let _ = std::io::stderr().flush();
            self.ticked = true;
        }
    }

    /// Terminates the indicator line, if anything was ticked.
    pub fn finish(&mut self) {
        if self.ticked {
            eprintln!();
            self.ticked = false;
        }
    }
}
