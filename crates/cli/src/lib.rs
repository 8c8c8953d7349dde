pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use tierly_core::config::{AppConfig, LoadOptions};

#[derive(Debug, Parser)]
#[command(
    name = "tierly",
    about = "Tierly licensing advisor CLI",
    long_about = "Answer three questions (seat count, usage intensity, required features) and \
                  get a licensing-tier recommendation with the reasoning behind it.",
    after_help = "Examples:\n  tierly advise --users 55\n  tierly advise --users 5 --intensity intensive --cicd --json\n  tierly tiers\n  tierly config"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Recommend a licensing tier for the given seat count, intensity, and features")]
    Advise(commands::advise::AdviseArgs),
    #[command(about = "List the tier catalog with the description shown for each recommendation")]
    Tiers {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use tierly_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Logging comes up before any command runs; a broken config is reported
    // by the command itself, so a load failure here only skips logging.
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config);
    }

    let result = match cli.command {
        Command::Advise(args) => commands::advise::run(&args),
        Command::Tiers { json } => {
            commands::CommandResult { exit_code: 0, output: commands::tiers::run(json) }
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
