//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::logging::LogTarget;
use crate::widget::FailurePolicy;

#[derive(Parser, Debug)]
#[command(name = "chatwidget")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the answer service (e.g., http://127.0.0.1:5000)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Path questions are posted to (default: /ask)
    #[arg(long, global = true)]
    pub path: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Retries on transient failures
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    /// Show failed requests in the transcript instead of dropping them
    #[arg(long, global = true)]
    pub report_errors: bool,

    /// Append JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one message and print the reply
    Ask {
        /// Message text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigSubcommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommands {
    /// Initialize a new config file
    Init,
    /// Print config file location
    Where,
    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Command-line flags win over file and environment settings.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(ref endpoint) = self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(ref path) = self.path {
            config.path.clone_from(path);
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = Some(timeout);
        }
        if let Some(retries) = self.retries {
            config.max_retries = retries;
        }
        if self.report_errors {
            config.failure_policy = FailurePolicy::Report;
        }
    }

    /// The interactive UI owns the terminal, so it only logs to a file.
    #[must_use]
    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, &self.command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Some(Commands::Ask { .. })) => LogTarget::Stderr,
            (None, _) => LogTarget::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_take_precedence() {
        let cli = Cli::parse_from([
            "chatwidget",
            "--endpoint",
            "http://answers.test",
            "--timeout",
            "9",
            "--report-errors",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.endpoint, "http://answers.test");
        assert_eq!(config.timeout_secs, Some(9));
        assert_eq!(config.failure_policy, FailurePolicy::Report);
        assert_eq!(config.path, "/ask");
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::parse_from(["chatwidget", "ask", "compare", "rice"]);
        match cli.command {
            Some(Commands::Ask { ref text }) => assert_eq!(text.join(" "), "compare rice"),
            ref other => panic!("Expected ask, got {other:?}"),
        }
    }

    #[test]
    fn interactive_mode_logs_only_to_file() {
        let cli = Cli::parse_from(["chatwidget"]);
        assert_eq!(cli.log_target(), LogTarget::Off);

        let cli = Cli::parse_from(["chatwidget", "--log-file", "widget.log"]);
        assert_eq!(cli.log_target(), LogTarget::File(PathBuf::from("widget.log")));

        let cli = Cli::parse_from(["chatwidget", "ask", "hi"]);
        assert_eq!(cli.log_target(), LogTarget::Stderr);
    }
}
