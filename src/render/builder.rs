//! Builds the render model for a block.
//!
//! The builder is a pure function of the block source and the settings. It
//! is called from scratch for every render and for every settings change;
//! it keeps no state between calls.

use crate::classify::{classify_char, tooltip_for};
use crate::config::Settings;
use crate::constants::{EMPTY_LINE_GLYPH, NON_BREAKING_SPACE};
use crate::models::{CellKind, CharCategory, ClassifiedChar, ColorKeyEntry, RenderModel, Tooltip};
use crate::parser::extract_title;
use crate::stats::CharStats;

/// Builds the render model for a raw block source.
///
/// # Examples
///
/// ```
/// use charview::config::Settings;
/// use charview::render::build_render_model;
///
/// let model = build_render_model("title: Demo\nAb 1", &Settings::default());
/// assert_eq!(model.title.as_deref(), Some("Demo"));
/// assert_eq!(model.lines.len(), 1);
/// assert_eq!(model.lines[0].len(), 4);
/// ```
#[must_use]
pub fn build_render_model(source: &str, settings: &Settings) -> RenderModel {
    let extraction = extract_title(source);
    build_from_lines(extraction.title, &extraction.lines, settings)
}

/// Builds the render model from already-extracted parts.
///
/// A title that is empty after trimming is dropped.
#[must_use]
pub fn build_from_lines<S: AsRef<str>>(
    title: Option<String>,
    lines: &[S],
    settings: &Settings,
) -> RenderModel {
    let cells = lines
        .iter()
        .map(|line| build_line(line.as_ref(), settings))
        .collect();

    let stats = settings
        .show_statistics
        .then(|| CharStats::from_lines(lines));

    let color_key = settings.show_color_key.then(|| color_key(settings));

    RenderModel {
        title: title.filter(|t| !t.is_empty()),
        title_uppercase: settings.title_uppercase,
        title_font_size: settings.title_font_size.clone(),
        colors: settings.colors(),
        lines: cells,
        stats,
        color_key,
    }
}

/// Cells for one line. A zero-length line yields a single placeholder.
fn build_line(line: &str, settings: &Settings) -> Vec<ClassifiedChar> {
    if line.is_empty() {
        return vec![empty_line_cell()];
    }

    line.chars().map(|c| classify_cell(c, settings)).collect()
}

fn empty_line_cell() -> ClassifiedChar {
    ClassifiedChar {
        kind: CellKind::EmptyLine,
        display: EMPTY_LINE_GLYPH.to_string(),
        tooltip: Tooltip::empty_line(),
    }
}

fn classify_cell(c: char, settings: &Settings) -> ClassifiedChar {
    let category = classify_char(c);
    let display = if category == CharCategory::Space {
        space_display(settings).to_string()
    } else {
        c.to_string()
    };

    ClassifiedChar {
        kind: CellKind::Char {
            character: c,
            category,
        },
        display,
        tooltip: tooltip_for(c),
    }
}

/// Whitespace is always replaced so the cell keeps its width.
fn space_display(settings: &Settings) -> &str {
    if settings.show_space_symbol {
        &settings.space_symbol
    } else {
        NON_BREAKING_SPACE
    }
}

fn color_key(settings: &Settings) -> Vec<ColorKeyEntry> {
    let colors = settings.colors();
    CharCategory::ALL
        .iter()
        .map(|&category| ColorKeyEntry {
            category,
            label: category.legend_label(),
            color: colors.for_category(category),
        })
        .collect()
}
