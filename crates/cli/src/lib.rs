pub mod commands;
pub mod logging;
pub mod snapshot;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use closet_core::config::{AppConfig, LoadOptions};

use crate::commands::reset::ResetArgs;
use crate::commands::suggest::SuggestArgs;
use crate::commands::ClosetArgs;

const EXAMPLES: &str = "Examples:
  closet seed
  closet suggest --occasion \"job interview\" --temperature 8
  closet suggest --occasion casual --constraints \"no hoodies, no white shoes\"
  closet check
  closet reset --confirm DELETE";

#[derive(Debug, Parser)]
#[command(
    name = "closet",
    about = "Closet outfit recommendation CLI",
    long_about = "Rank outfits from a closet snapshot and maintain the demo wardrobe.",
    after_help = EXAMPLES
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Suggest up to three ranked outfits for an occasion")]
    Suggest(SuggestArgs),
    #[command(about = "Merge the demo wardrobe into the closet snapshot, skipping duplicates")]
    Seed(ClosetArgs),
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate the closet snapshot and report per-category counts")]
    Check(ClosetArgs),
    #[command(about = "Delete every closet item owned by one owner (requires --confirm DELETE)")]
    Reset(ResetArgs),
}

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let logging = AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| AppConfig::default().logging);
    logging::init_logging(&logging);

    let result = match cli.command {
        Command::Suggest(args) => commands::suggest::run(args),
        Command::Seed(args) => commands::seed::run(args),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Check(args) => commands::check::run(args),
        Command::Reset(args) => commands::reset::run(args),
    };

    writeln!(io::stdout().lock(), "{}", result.output)
        .context("failed to write command output")?;
    Ok(ExitCode::from(result.exit_code))
}
