//! User-facing terminal output.

use std::fmt::Display;

use colored::Colorize;

/// Colored status lines for the person at the terminal.
///
/// Passed explicitly to whatever needs to talk to the user. `quiet` drops
/// info and warnings but never fatal messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// A console that only reports fatal errors.
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn info(&self, msg: impl Display) {
        if !self.quiet {
            println!("{}", msg.to_string().cyan());
        }
    }

    pub fn warn(&self, msg: impl Display) {
        if !self.quiet {
            eprintln!("{}", msg.to_string().yellow());
        }
    }

    pub fn fatal(&self, msg: impl Display) {
        eprintln!("{}", msg.to_string().bright_red());
    }
}
