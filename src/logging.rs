//! Caller-owned progress logging
//!
//! There is no global logger. `main` builds a [`Logger`] from the CLI
//! flags and hands it to the pipeline; library code never writes output
//! it wasn't given a logger for.

/// Output verbosity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all output except errors
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

/// An explicit logger instance with level-gated output.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Derive the level from the global `--verbose`/`--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        let level = if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        };
        Self::new(level)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether messages at `required` are emitted at the current level.
    pub fn enabled(&self, required: LogLevel) -> bool {
        self.level >= required && self.level != LogLevel::Quiet
    }

    /// Progress message, shown at Normal and above.
    pub fn info(&self, msg: impl AsRef<str>) {
        if self.enabled(LogLevel::Normal) {
            println!("{}", msg.as_ref());
        }
    }

    /// Detail message, shown only at Verbose.
    pub fn verbose(&self, msg: impl AsRef<str>) {
        if self.enabled(LogLevel::Verbose) {
            println!("{}", msg.as_ref());
        }
    }

    /// Warning, written to stderr unless quiet.
    pub fn warn(&self, msg: impl AsRef<str>) {
        if self.level != LogLevel::Quiet {
            eprintln!("warning: {}", msg.as_ref());
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}
