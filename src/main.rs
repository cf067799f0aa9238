//! Char View - render text as a color-coded character grid
//!
//! This application classifies every character of a text block, colors it by
//! category, and manages the persisted display settings and color presets.

use charview::cli::{ConfigArgs, ExitCode, InspectArgs, PresetArgs, RenderArgs};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Char View - render text as a color-coded character grid
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file to use instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a block of text
    Render(RenderArgs),
    /// Classify individual characters
    Inspect(InspectArgs),
    /// Show or change display settings
    Config(ConfigArgs),
    /// List or apply color presets
    Preset(PresetArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = cli.settings.as_deref();
    let result = match &cli.command {
        Command::Render(args) => args.execute(settings),
        Command::Inspect(args) => args.execute(),
        Command::Config(args) => args.execute(settings),
        Command::Preset(args) => args.execute(settings),
    };

    match result {
        Ok(()) => std::process::exit(ExitCode::Success.code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
