//! Title directive extraction.
//!
//! A block may start with a directive naming its title:
//!
//! ```text
//! title: "My title here"
//! title: My title here
//! ```
//!
//! Only the first non-blank line is examined. A byte order mark counts as
//! whitespace when trimming lines. The `title` keyword is case-insensitive
//! and whitespace around the colon is ignored. The quoted
//! form is tried first; an unterminated quote falls through to the plain form.

use regex::Regex;
use std::sync::LazyLock;

use crate::classify::is_space;

static QUOTED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(?i:title)\s*:\s*"([^"]+)"\s*$"#).expect("quoted title pattern is valid")
});

static PLAIN_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:title)\s*:\s*(.+)$").expect("plain title pattern is valid")
});

/// Result of scanning a block for a title directive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleExtraction {
    /// Captured title text (trimmed), if the directive was present
    pub title: Option<String>,
    /// Lines of the block with the directive line removed
    pub lines: Vec<String>,
}

/// Splits `source` into lines, treating CRLF as a single break.
///
/// Empty input has no lines at all; any other input yields at least one.
#[must_use]
pub fn split_lines(source: &str) -> Vec<String> {
    if source.is_empty() {
        return Vec::new();
    }
    source
        .replace("\r\n", "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// Matches a single line against the title directive grammar.
///
/// Returns the captured title text, trimmed.
///
/// # Examples
///
/// ```
/// use charview::parser::title::parse_title_directive;
///
/// assert_eq!(parse_title_directive(r#"Title : "Hello""#).as_deref(), Some("Hello"));
/// assert_eq!(parse_title_directive("title: Hello").as_deref(), Some("Hello"));
/// assert_eq!(parse_title_directive("subtitle: Hello"), None);
/// ```
#[must_use]
pub fn parse_title_directive(line: &str) -> Option<String> {
    let line = line.trim_matches(is_space);
    QUOTED_TITLE
        .captures(line)
        .or_else(|| PLAIN_TITLE.captures(line))
        .map(|caps| caps[1].trim_matches(is_space).to_string())
}

/// Extracts the optional title directive from a block.
///
/// On a match the directive line is removed and every other line (including
/// blank lines before it) is kept in order. Without a match the lines are
/// returned unchanged.
#[must_use]
pub fn extract_title(source: &str) -> TitleExtraction {
    let mut lines = split_lines(source);

    let Some(index) = lines
        .iter()
        .position(|line| !line.trim_matches(is_space).is_empty())
    else {
        return TitleExtraction { title: None, lines };
    };

    match parse_title_directive(&lines[index]) {
        Some(title) => {
            lines.remove(index);
            tracing::debug!(%title, line = index, "Extracted block title");
            TitleExtraction {
                title: Some(title),
                lines,
            }
        }
        None => TitleExtraction { title: None, lines },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_quoted_title() {
        let result = extract_title("title: \"Hello\"\nABC");
        assert_eq!(result.title.as_deref(), Some("Hello"));
        assert_eq!(result.lines, lines(&["ABC"]));
    }

    #[test]
    fn test_plain_title() {
        let result = extract_title("title: Hello\nABC");
        assert_eq!(result.title.as_deref(), Some("Hello"));
        assert_eq!(result.lines, lines(&["ABC"]));
    }

    #[test]
    fn test_quoted_title_keeps_inner_spacing_trimmed() {
        let result = extract_title("  TITLE  :  \"  Two  Words  \"  ");
        assert_eq!(result.title.as_deref(), Some("Two  Words"));
        assert!(result.lines.is_empty());
    }

    #[test]
    fn test_unterminated_quote_falls_back_to_plain() {
        let result = extract_title("title: \"Hello\nABC");
        assert_eq!(result.title.as_deref(), Some("\"Hello"));
        assert_eq!(result.lines, lines(&["ABC"]));
    }

    #[test]
    fn test_leading_blank_lines_preserved() {
        let result = extract_title("\n\ntitle: Hello");
        assert_eq!(result.title.as_deref(), Some("Hello"));
        assert_eq!(result.lines, lines(&["", ""]));
    }

    #[test]
    fn test_no_directive_leaves_lines_unchanged() {
        let result = extract_title("\n  \nHello World\ntitle: Later");
        assert_eq!(result.title, None);
        assert_eq!(result.lines, lines(&["", "  ", "Hello World", "title: Later"]));
    }

    #[test]
    fn test_single_line_without_title() {
        let result = extract_title("Hello World");
        assert_eq!(result.title, None);
        assert_eq!(result.lines, lines(&["Hello World"]));
    }

    #[test]
    fn test_crlf_normalized() {
        let result = extract_title("title: T\r\nA\r\nB");
        assert_eq!(result.title.as_deref(), Some("T"));
        assert_eq!(result.lines, lines(&["A", "B"]));
    }

    #[test]
    fn test_keyword_without_text_is_not_a_title() {
        let result = extract_title("title:   \nA");
        assert_eq!(result.title, None);
        assert_eq!(result.lines, lines(&["title:   ", "A"]));
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert_eq!(extract_title(""), TitleExtraction::default());

        let result = extract_title("\n");
        assert_eq!(result.title, None);
        assert_eq!(result.lines, lines(&["", ""]));
    }

    #[test]
    fn test_keyword_must_lead_the_line() {
        assert_eq!(parse_title_directive("my title: x"), None);
        assert_eq!(parse_title_directive("titles: x"), None);
        assert_eq!(parse_title_directive("title x"), None);
    }

    #[test]
    fn test_byte_order_mark_before_directive() {
        let result = extract_title("\u{FEFF}title: X\nA");
        assert_eq!(result.title.as_deref(), Some("X"));
        assert_eq!(result.lines, lines(&["A"]));

        let quoted = extract_title("\u{FEFF}title: \"X\"\u{FEFF}\nA");
        assert_eq!(quoted.title.as_deref(), Some("X"));
    }

    #[test]
    fn test_byte_order_mark_line_is_blank() {
        let result = extract_title("\u{FEFF}\ntitle: X\nA");
        assert_eq!(result.title.as_deref(), Some("X"));
        assert_eq!(result.lines, lines(&["\u{FEFF}", "A"]));
    }
}
