//! Application context — shared state passed to every command handler.
//!
//! Constructed once in `Cli::run()` from the top-level flags and the resolved
//! configuration; replaces ambient global state with one explicit value.

use anyhow::Result;

use crate::application::poll::Poller;
use crate::application::services::Ecs;
use crate::infra::client::AliyunEcsClient;
use crate::infra::config::EcsConfig;
use crate::output::{OutputContext, Reporter, SpinnerReporter, TerminalReporter};

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Suppress non-error output.
    pub quiet: bool,
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Skip confirmation prompts (also set by the `ECSX_YES` env var).
    pub yes: bool,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Operations layer over the production API client.
    pub ecs: Ecs<AliyunEcsClient>,
    /// When `true`, destructive commands proceed without prompting.
    non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is incomplete or the HTTP client
    /// cannot be built.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let non_interactive = flags.yes || std::env::var("ECSX_YES").is_ok();
        let config = EcsConfig::load()?;
        let client = AliyunEcsClient::new(&config)?;
        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            ecs: Ecs::new(client, config.region, Poller::default()),
            non_interactive,
        })
    }

    /// Reporter for long-running operations: a live spinner on a TTY, plain
    /// log lines otherwise.
    #[must_use]
    pub fn reporter(&self) -> Reporter<'_> {
        if self.output.show_progress() {
            Reporter::Spinner(SpinnerReporter::new())
        } else {
            Reporter::Terminal(TerminalReporter::new(&self.output))
        }
    }

    /// Ask the user for confirmation before a destructive action.
    ///
    /// In non-interactive mode (`--yes` / `ECSX_YES`) this returns `true`
    /// without prompting.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal prompt fails (e.g. no TTY available).
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.non_interactive {
            return Ok(true);
        }
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(confirmed)
    }
}
