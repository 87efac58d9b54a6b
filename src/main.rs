use std::io;
use std::sync::Arc;

use clap::Parser;

use chatwidget::cli::{Cli, Commands, ConfigSubcommands, run_ask};
use chatwidget::config::AppConfig;
use chatwidget::service::{AnswerService, HttpAnswerService};
use chatwidget::{ChatError, Result, logging, tui};

/// File and environment settings with command-line overrides applied.
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load()?;
    cli.apply_overrides(&mut config);
    Ok(config)
}

/// `init` and `where` never read the existing settings, so a broken config
/// file can still be located and replaced.
fn run_config_command(command: &ConfigSubcommands, cli: &Cli) -> Result<()> {
    match command {
        ConfigSubcommands::Init => match AppConfig::init_default() {
            Ok(path) => {
                println!("✓ Created config file at {}", path.display());
                Ok(())
            }
            Err(e) => {
                eprintln!("✗ Failed to create config: {e}");
                Err(e.into())
            }
        },
        ConfigSubcommands::Where => match AppConfig::get_config_path() {
            Some(path) => {
                println!("{}", path.display());
                Ok(())
            }
            None => {
                eprintln!("✗ Could not determine config path");
                Err(ChatError::InvalidState("no config directory".to_string()))
            }
        },
        ConfigSubcommands::Show => {
            print!("{}", load_config(cli)?.to_toml()?);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init(&cli.log_target(), cli.verbose);

    if let Some(Commands::Config { command }) = &cli.command {
        return run_config_command(command, &cli);
    }

    let config = load_config(&cli)?;

    let service: Arc<dyn AnswerService> = Arc::new(HttpAnswerService::new(
        config.service_config(),
        config.http_config(),
    )?);
    tracing::debug!(endpoint = %service.endpoint(), "Answer service ready");

    match &cli.command {
        Some(Commands::Ask { text }) => {
            run_ask(service, config.failure_policy, &text.join(" "), io::stdout()).await
        }
        Some(Commands::Config { .. }) => Ok(()),
        None => tui::run_tui(service, config.failure_policy).await,
    }
}
