//! Output management and formatting.
//!
//! User-facing progress goes to stdout through [`OutputManager`]; tracing
//! events go to stderr.  Errors are printed even in quiet mode.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let no_color = args.no_color || config.output.no_color || !Term::stdout().is_term();

        Self {
            quiet: args.quiet,
            no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command payload such as exported rows; printed even in quiet mode.
    pub fn data(&self, text: &str) -> io::Result<()> {
        self.term.write_line(text)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate('\u{2713}', msg, Tone::Green))
    }

    /// Error indicator: `✗ <msg>`.  Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.decorate('\u{2717}', msg, Tone::Red))
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate('\u{26a0}', msg, Tone::Yellow))
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.decorate('\u{2139}', msg, Tone::Blue))
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn decorate(&self, symbol: char, msg: &str, tone: Tone) -> String {
        if self.no_color {
            return format!("{symbol} {msg}");
        }
        match tone {
            Tone::Green => format!("{} {}", symbol.green().bold(), msg.green()),
            Tone::Red => format!("{} {}", symbol.red().bold(), msg.red()),
            Tone::Yellow => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Tone::Blue => format!("{} {}", symbol.blue().bold(), msg.blue()),
        }
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Green,
    Red,
    Yellow,
    Blue,
}

// ── tests ─────────────────────────────────────────────────────────────────────
