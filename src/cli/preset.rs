//! Color preset CLI commands.

use crate::cli::common::{open_session, CliError, CliResult};
use crate::models::{CategoryColors, PRESETS};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::Path;

/// Color preset commands
#[derive(Args, Debug)]
pub struct PresetArgs {
    #[command(subcommand)]
    command: PresetCommand,
}

#[derive(Subcommand, Debug)]
enum PresetCommand {
    /// List built-in presets
    List(PresetListArgs),
    /// Apply a preset and save the settings
    Apply(PresetApplyArgs),
}

/// List built-in presets
#[derive(Args, Debug)]
pub struct PresetListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Apply a preset
#[derive(Args, Debug)]
pub struct PresetApplyArgs {
    /// Preset key (e.g. pastel, ocean)
    #[arg(value_name = "KEY")]
    key: String,
}

#[derive(Serialize, Debug)]
struct PresetOutput {
    key: &'static str,
    name: &'static str,
    colors: CategoryColors,
    active: bool,
}

impl PresetArgs {
    /// Execute preset subcommand
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            PresetCommand::List(args) => args.execute(settings_path),
            PresetCommand::Apply(args) => args.execute(settings_path),
        }
    }
}

impl PresetListArgs {
    /// Execute list command
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        let session = open_session(settings_path)?;
        let current = session.settings().current_preset.as_str();

        let presets: Vec<PresetOutput> = PRESETS
            .iter()
            .map(|p| PresetOutput {
                key: p.key,
                name: p.name,
                colors: p.colors,
                active: p.key == current,
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&presets)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        for preset in &presets {
            let marker = if preset.active { "*" } else { " " };
            let c = &preset.colors;
            println!(
                "{marker} {:<11} {:<20} {} {} {} {} {}",
                preset.key, preset.name, c.number, c.upper, c.lower, c.symbol, c.space
            );
        }
        if session.settings().is_custom() {
            println!("* custom");
        }

        Ok(())
    }
}

impl PresetApplyArgs {
    /// Execute apply command
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        let mut session = open_session(settings_path)?;

        let applied = session
            .apply_preset(&self.key)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if applied.is_none() {
            let known: Vec<&str> = PRESETS.iter().map(|p| p.key).collect();
            return Err(CliError::validation(format!(
                "Unknown preset '{}'. Available presets: {}",
                self.key,
                known.join(", ")
            )));
        }

        println!("Applied preset '{}'.", self.key);
        Ok(())
    }
}
