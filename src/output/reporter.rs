//! Presentation-layer implementations of `ProgressReporter`.
//!
//! Application services emit informational traces through the
//! `application::ports::ProgressReporter` trait; these types render them —
//! plain lines on a dumb terminal, a live spinner on a TTY.

use std::cell::RefCell;

use indicatif::ProgressBar;
use owo_colors::OwoColorize as _;

use crate::application::ports::ProgressReporter;
use crate::output::{OutputContext, progress};

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `step()` prints `"  → {message}"` (suppressed when `ctx.quiet`)
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `warn()` prints `"  ⚠ {message}"` (suppressed when `ctx.quiet`)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn step(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "→".cyan());
        }
    }

    fn success(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "✓".green());
        }
    }

    fn warn(&self, message: &str) {
        if !self.ctx.quiet {
            println!("  {} {message}", "⚠".yellow());
        }
    }
}

/// Spinner-backed reporter for interactive terminals.
///
/// The spinner starts on the first `step()` and keeps ticking through the
/// long polls; `success()` freezes it with a checkmark so consecutive
/// operations each leave one line behind.
#[derive(Default)]
pub struct SpinnerReporter {
    pb: RefCell<Option<ProgressBar>>,
}

impl SpinnerReporter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for SpinnerReporter {
    fn step(&self, message: &str) {
        let mut slot = self.pb.borrow_mut();
        match slot.as_ref() {
            Some(pb) => pb.set_message(message.to_string()),
            None => *slot = Some(progress::spinner(message)),
        }
    }

    fn success(&self, message: &str) {
        match self.pb.borrow_mut().take() {
            Some(pb) => progress::finish_ok(&pb, message),
            None => println!("  ✓ {message}"),
        }
    }

    fn warn(&self, message: &str) {
        match self.pb.borrow().as_ref() {
            Some(pb) => pb.println(format!("  ⚠ {message}")),
            None => println!("  ⚠ {message}"),
        }
    }
}

/// Reporter variant selected for the current output mode.
pub enum Reporter<'a> {
    Terminal(TerminalReporter<'a>),
    Spinner(SpinnerReporter),
}

impl ProgressReporter for Reporter<'_> {
    fn step(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.step(message),
            Self::Spinner(r) => r.step(message),
        }
    }

    fn success(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.success(message),
            Self::Spinner(r) => r.success(message),
        }
    }

    fn warn(&self, message: &str) {
        match self {
            Self::Terminal(r) => r.warn(message),
            Self::Spinner(r) => r.warn(message),
        }
    }
}
