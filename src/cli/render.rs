//! Render a block from a file or stdin.

use crate::cli::common::{open_session, CliError, CliResult};
use crate::render::{build_render_model, render_terminal, to_node_tree, ColorMode};
use clap::{Args, ValueEnum};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

/// Output format of `render`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Colored character grid
    #[default]
    Text,
    /// Render model as JSON
    Json,
    /// Render tree as HTML
    Html,
}

/// Render a block of text as a classified character grid
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// File to read (stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
    format: RenderFormat,

    /// Disable ANSI colors
    #[arg(long)]
    plain: bool,

    /// Show statistics for this render (not saved)
    #[arg(long)]
    stats: bool,

    /// Show the color key for this render (not saved)
    #[arg(long)]
    key: bool,
}

impl RenderArgs {
    /// Execute render command
    pub fn execute(&self, settings_path: Option<&Path>) -> CliResult<()> {
        let session = open_session(settings_path)?;
        let source = self.read_source()?;

        let mut settings = session.settings().clone();
        if self.stats {
            settings.show_statistics = true;
        }
        if self.key {
            settings.show_color_key = true;
        }

        let model = build_render_model(&source, &settings);
        tracing::debug!(lines = model.lines.len(), cells = model.cell_count(), "Rendered block");

        match self.format {
            RenderFormat::Text => {
                let mode = if self.plain || !std::io::stdout().is_terminal() {
                    ColorMode::Plain
                } else {
                    ColorMode::Ansi
                };
                print!("{}", render_terminal(&model, mode));
            }
            RenderFormat::Json => {
                let json = serde_json::to_string_pretty(&model).map_err(|e| {
                    CliError::io(format!("Failed to serialize render model to JSON: {e}"))
                })?;
                println!("{json}");
            }
            RenderFormat::Html => {
                println!("{}", to_node_tree(&model).to_html());
            }
        }

        Ok(())
    }

    fn read_source(&self) -> CliResult<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path).map_err(|e| {
                CliError::io(format!("Failed to read input file {}: {e}", path.display()))
            }),
            _ => {
                let mut source = String::new();
                std::io::stdin()
                    .read_to_string(&mut source)
                    .map_err(|e| CliError::io(format!("Failed to read stdin: {e}")))?;
                Ok(source)
            }
        }
    }
}
