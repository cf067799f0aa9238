//! Inspect how individual characters are classified.

use crate::classify::{classify_char, tooltip_for};
use crate::cli::common::{CliError, CliResult};
use crate::models::CharCategory;
use clap::Args;
use serde::Serialize;

/// Show category, name, and code point of each character
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Characters to inspect
    #[arg(value_name = "TEXT")]
    text: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug)]
struct CharInfo {
    character: char,
    category: CharCategory,
    name: String,
    unicode: String,
    decimal: u32,
}

impl InspectArgs {
    /// Execute inspect command
    pub fn execute(&self) -> CliResult<()> {
        if self.text.is_empty() {
            return Err(CliError::validation("Nothing to inspect: TEXT is empty"));
        }

        let infos: Vec<CharInfo> = self
            .text
            .chars()
            .map(|c| {
                let tooltip = tooltip_for(c);
                CharInfo {
                    character: c,
                    category: classify_char(c),
                    unicode: tooltip.code_point_hex().unwrap_or_default(),
                    decimal: u32::from(c),
                    name: tooltip.name,
                }
            })
            .collect();

        if self.json {
            let json = serde_json::to_string_pretty(&infos)
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        for info in &infos {
            println!(
                "{:<4} {:<7} {:<8} {:>7}  {}",
                format!("{:?}", info.character),
                info.category.to_string(),
                info.unicode,
                info.decimal,
                info.name
            );
        }

        Ok(())
    }
}
