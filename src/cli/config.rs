//! Settings management CLI commands.

use crate::cli::common::{open_session, parse_bool, settings_store, CliError, CliResult};
use crate::config::Settings;
use crate::models::RgbColor;
use clap::{Args, Subcommand};
use std::path::Path;

/// Settings management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current settings
    Show(ConfigShowArgs),
    /// Set settings values
    Set(ConfigSetArgs),
    /// Print the settings file path
    Path,
}

/// Display current settings
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set settings values
#[derive(Args, Debug, Default)]
pub struct ConfigSetArgs {
    /// Digit color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    number_color: Option<String>,

    /// Uppercase color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    upper_color: Option<String>,

    /// Lowercase color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    lower_color: Option<String>,

    /// Symbol color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    symbol_color: Option<String>,

    /// Whitespace color (#rrggbb)
    #[arg(long, value_name = "HEX")]
    space_color: Option<String>,

    /// Upper-case titles
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    title_uppercase: Option<bool>,

    /// Show the space symbol instead of a blank
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    show_space_symbol: Option<bool>,

    /// Glyph used for whitespace (empty restores the default)
    #[arg(long, value_name = "TEXT")]
    space_symbol: Option<String>,

    /// Title size, e.g. 0.8rem or 14px (empty restores the default)
    #[arg(long, value_name = "SIZE")]
    title_font_size: Option<String>,

    /// Show the statistics panel
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    show_statistics: Option<bool>,

    /// Show the color key legend
    #[arg(long, value_name = "BOOL", value_parser = parse_bool)]
    show_color_key: Option<bool>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(settings_path),
            ConfigCommand::Set(args) => args.execute(settings_path),
            ConfigCommand::Path => {
                let store = settings_store(settings_path)?;
                println!("{}", store.path().display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        let session = open_session(settings_path)?;

        if self.json {
            let json = serde_json::to_string_pretty(session.settings()).map_err(|e| {
                CliError::io(format!("Failed to serialize settings to JSON: {e}"))
            })?;
            println!("{json}");
        } else {
            output_human_readable(session.settings());
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.number_color.is_none()
            && self.upper_color.is_none()
            && self.lower_color.is_none()
            && self.symbol_color.is_none()
            && self.space_color.is_none()
            && self.title_uppercase.is_none()
            && self.show_space_symbol.is_none()
            && self.space_symbol.is_none()
            && self.title_font_size.is_none()
            && self.show_statistics.is_none()
            && self.show_color_key.is_none()
    }

    /// Execute set command
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one setting must be specified (see `charview config set --help`)",
            ));
        }

        // Validate every color before touching the settings
        let number = parse_color(self.number_color.as_deref(), "--number-color")?;
        let upper = parse_color(self.upper_color.as_deref(), "--upper-color")?;
        let lower = parse_color(self.lower_color.as_deref(), "--lower-color")?;
        let symbol = parse_color(self.symbol_color.as_deref(), "--symbol-color")?;
        let space = parse_color(self.space_color.as_deref(), "--space-color")?;

        let mut session = open_session(settings_path)?;
        session
            .update(|settings| {
                if let Some(color) = number {
                    settings.set_number_color(color);
                }
                if let Some(color) = upper {
                    settings.set_upper_color(color);
                }
                if let Some(color) = lower {
                    settings.set_lower_color(color);
                }
                if let Some(color) = symbol {
                    settings.set_symbol_color(color);
                }
                if let Some(color) = space {
                    settings.set_space_color(color);
                }
                if let Some(value) = self.title_uppercase {
                    settings.set_title_uppercase(value);
                }
                if let Some(value) = self.show_space_symbol {
                    settings.set_show_space_symbol(value);
                }
                if let Some(symbol) = &self.space_symbol {
                    settings.set_space_symbol(symbol.as_str());
                }
                if let Some(size) = &self.title_font_size {
                    settings.set_title_font_size(size.as_str());
                }
                if let Some(value) = self.show_statistics {
                    settings.set_show_statistics(value);
                }
                if let Some(value) = self.show_color_key {
                    settings.set_show_color_key(value);
                }
            })
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("Settings updated successfully.");

        Ok(())
    }
}

fn parse_color(value: Option<&str>, flag: &str) -> CliResult<Option<RgbColor>> {
    value
        .map(|hex| {
            RgbColor::from_hex(hex)
                .map_err(|e| CliError::validation(format!("Invalid color for {flag}: {e}")))
        })
        .transpose()
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

/// Output settings in human-readable format
fn output_human_readable(settings: &Settings) {
    let preset = settings
        .active_preset()
        .map_or_else(|| "Custom".to_string(), |p| format!("{} ({})", p.name, p.key));

    println!("Preset: {preset}");
    println!();
    println!("Colors:");
    println!("  Numbers:   {}", settings.number_color);
    println!("  Uppercase: {}", settings.upper_color);
    println!("  Lowercase: {}", settings.lower_color);
    println!("  Symbols:   {}", settings.symbol_color);
    println!("  Spaces:    {}", settings.space_color);
    println!();
    println!("Display:");
    println!("  Title uppercase:   {}", on_off(settings.title_uppercase));
    println!("  Title font size:   {}", settings.title_font_size);
    println!("  Show space symbol: {}", on_off(settings.show_space_symbol));
    println!("  Space symbol:      {}", settings.space_symbol);
    println!("  Show statistics:   {}", on_off(settings.show_statistics));
    println!("  Show color key:    {}", on_off(settings.show_color_key));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color(None, "--x").unwrap(), None);
        assert_eq!(
            parse_color(Some("#010203"), "--x").unwrap(),
            Some(RgbColor::new(1, 2, 3))
        );
        let err = parse_color(Some("nope"), "--number-color").unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert!(err.message.contains("--number-color"));
    }

    #[test]
    fn test_set_args_empty() {
        assert!(ConfigSetArgs::default().is_empty());
        let args = ConfigSetArgs {
            show_statistics: Some(true),
            ..ConfigSetArgs::default()
        };
        assert!(!args.is_empty());
    }
}
