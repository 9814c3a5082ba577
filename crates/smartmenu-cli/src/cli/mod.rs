//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use smartmenu_core::{config, logging};

mod commands;

#[derive(Parser)]
#[command(name = "smartmenu")]
#[command(version)]
#[command(about = "SmartMenu sign-in screen")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the simulated sign-in latency from config (milliseconds)
    #[arg(long, global = true, value_name = "MS")]
    delay_ms: Option<u64>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run one sign-in attempt without the interactive screen
    Submit {
        /// Email address to sign in with
        #[arg(long, default_value = "")]
        email: String,

        /// Password to sign in with
        #[arg(
            long,
            env = "SMARTMENU_PASSWORD",
            default_value = "",
            hide_env_values = true,
            hide_default_value = true
        )]
        password: String,
    },

    /// Request a password recovery link
    Forgot,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config commands must work even when the current config is broken.
    let command = match cli.command {
        Some(Commands::Config { command }) => return run_config(&command),
        other => other,
    };

    let mut config = config::Config::load().context("load config")?;
    if let Some(delay_ms) = cli.delay_ms {
        config.submit_delay_ms = delay_ms;
    }

    let _log_guard = logging::init(&config).context("set up logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(command, &config).await })
}

async fn dispatch(command: Option<Commands>, config: &config::Config) -> Result<()> {
    // default to the interactive screen
    let Some(command) = command else {
        return commands::screen::run(config);
    };

    match command {
        Commands::Submit { email, password } => {
            commands::submit::run(config, email, password).await
        }
        Commands::Forgot => {
            commands::forgot::run(config);
            Ok(())
        }
        Commands::Config { command } => run_config(&command),
    }
}

fn run_config(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            commands::config::path();
            Ok(())
        }
        ConfigCommands::Init => commands::config::init(),
    }
}
