//! Terminal rendering of a render model.
//!
//! Produces one row per source line with each cell colored by category,
//! followed by the optional legend and statistics rows.

use crossterm::style::{Color, Stylize};
use std::fmt::Write as _;

use crate::models::{RenderModel, RgbColor};

/// Whether to emit ANSI color sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit ANSI colors
    #[default]
    Ansi,
    /// No escape sequences
    Plain,
}

/// Marker drawn in front of each legend label.
const KEY_SWATCH: &str = "\u{25A0}";

fn paint(text: &str, color: Option<RgbColor>, mode: ColorMode) -> String {
    match (mode, color) {
        (ColorMode::Ansi, Some(color)) => text.with(color.to_crossterm_color()).to_string(),
        _ => text.to_string(),
    }
}

/// Renders the model as terminal text.
///
/// Cells within a row are separated by one space. The empty-line placeholder
/// is drawn dimmed in ANSI mode.
#[must_use]
pub fn render_terminal(model: &RenderModel, mode: ColorMode) -> String {
    let mut out = String::new();

    if let Some(title) = model.display_title() {
        match mode {
            ColorMode::Ansi => {
                let _ = writeln!(out, "{}", title.as_str().bold());
            }
            ColorMode::Plain => {
                let _ = writeln!(out, "{title}");
            }
        }
    }

    if let Some(entries) = &model.color_key {
        let items: Vec<String> = entries
            .iter()
            .map(|entry| {
                format!(
                    "{} {}",
                    paint(KEY_SWATCH, Some(entry.color), mode),
                    entry.label
                )
            })
            .collect();
        let _ = writeln!(out, "{}", items.join("  "));
    }

    for line in &model.lines {
        let cells: Vec<String> = line
            .iter()
            .map(|cell| {
                if cell.is_empty_line() && mode == ColorMode::Ansi {
                    cell.display.as_str().with(Color::DarkGrey).to_string()
                } else {
                    paint(&cell.display, model.cell_color(cell), mode)
                }
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }

    if let Some(stats) = &model.stats {
        let items: Vec<String> = stats
            .items()
            .into_iter()
            .map(|(label, value, category)| {
                let color = category.map(|c| model.colors.for_category(c));
                format!("{label}: {}", paint(&value.to_string(), color, mode))
            })
            .collect();
        let _ = writeln!(out, "{}", items.join("  "));
    }

    out
}
