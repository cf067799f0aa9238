//! Character classification and naming.
//!
//! Classification uses plain code point range checks. The order is fixed:
//! digit, uppercase, lowercase, whitespace, and finally symbol as the
//! catch-all, so every character lands in exactly one category.

use crate::models::{CharCategory, Tooltip};

/// Classifies a single character.
///
/// # Examples
///
/// ```
/// use charview::classify::classify_char;
/// use charview::models::CharCategory;
///
/// assert_eq!(classify_char('7'), CharCategory::Digit);
/// assert_eq!(classify_char('\t'), CharCategory::Space);
/// assert_eq!(classify_char('é'), CharCategory::Symbol);
/// ```
#[must_use]
pub fn classify_char(c: char) -> CharCategory {
    match c {
        '0'..='9' => CharCategory::Digit,
        'A'..='Z' => CharCategory::Upper,
        'a'..='z' => CharCategory::Lower,
        _ if is_space(c) => CharCategory::Space,
        _ => CharCategory::Symbol,
    }
}

/// Generic whitespace test: Unicode `White_Space` plus the byte order mark.
pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Fixed names for ASCII control codes and punctuation.
const fn special_name(c: char) -> Option<&'static str> {
    let name = match c {
        '\t' => "Tab",
        '\n' => "Line Feed",
        '\r' => "Carriage Return",
        ' ' => "Space",
        '!' => "Exclamation Mark",
        '"' => "Quotation Mark",
        '#' => "Number Sign",
        '$' => "Dollar Sign",
        '%' => "Percent Sign",
        '&' => "Ampersand",
        '\'' => "Apostrophe",
        '(' => "Left Parenthesis",
        ')' => "Right Parenthesis",
        '*' => "Asterisk",
        '+' => "Plus Sign",
        ',' => "Comma",
        '-' => "Hyphen-Minus",
        '.' => "Period",
        '/' => "Slash",
        ':' => "Colon",
        ';' => "Semicolon",
        '<' => "Less-Than Sign",
        '=' => "Equals Sign",
        '>' => "Greater-Than Sign",
        '?' => "Question Mark",
        '@' => "At Sign",
        '[' => "Left Square Bracket",
        '\\' => "Backslash",
        ']' => "Right Square Bracket",
        '^' => "Caret",
        '_' => "Underscore",
        '`' => "Grave Accent",
        '{' => "Left Curly Bracket",
        '|' => "Vertical Bar",
        '}' => "Right Curly Bracket",
        '~' => "Tilde",
        _ => return None,
    };
    Some(name)
}

/// Human-readable name of a character.
///
/// Punctuation and common control codes have fixed names, ASCII letters and
/// digits get a synthesized name, and everything else is "Character".
#[must_use]
pub fn char_name(c: char) -> String {
    if let Some(name) = special_name(c) {
        return name.to_string();
    }
    match c {
        'A'..='Z' => format!("Uppercase {c}"),
        'a'..='z' => format!("Lowercase {c}"),
        '0'..='9' => format!("Digit {c}"),
        _ => "Character".to_string(),
    }
}

/// Builds the hover text for a character.
#[must_use]
pub fn tooltip_for(c: char) -> Tooltip {
    Tooltip {
        name: char_name(c),
        code_point: Some(u32::from(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_ascii_ranges() {
        for c in '0'..='9' {
            assert_eq!(classify_char(c), CharCategory::Digit, "{c:?}");
        }
        for c in 'A'..='Z' {
            assert_eq!(classify_char(c), CharCategory::Upper, "{c:?}");
        }
        for c in 'a'..='z' {
            assert_eq!(classify_char(c), CharCategory::Lower, "{c:?}");
        }
    }

    #[test]
    fn test_classify_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{2003}', '\u{3000}', '\u{FEFF}'] {
            assert_eq!(classify_char(c), CharCategory::Space, "{c:?}");
        }
    }

    #[test]
    fn test_classify_symbols() {
        for c in ['!', '@', '~', '_', 'é', 'Ω', '٣', '中', '😀', '\u{0000}'] {
            assert_eq!(classify_char(c), CharCategory::Symbol, "{c:?}");
        }
    }

    #[test]
    fn test_char_name_table() {
        assert_eq!(char_name(' '), "Space");
        assert_eq!(char_name('\t'), "Tab");
        assert_eq!(char_name('\n'), "Line Feed");
        assert_eq!(char_name('\r'), "Carriage Return");
        assert_eq!(char_name('!'), "Exclamation Mark");
        assert_eq!(char_name('/'), "Slash");
        assert_eq!(char_name(':'), "Colon");
        assert_eq!(char_name('@'), "At Sign");
        assert_eq!(char_name('['), "Left Square Bracket");
        assert_eq!(char_name('`'), "Grave Accent");
        assert_eq!(char_name('{'), "Left Curly Bracket");
        assert_eq!(char_name('~'), "Tilde");
    }

    #[test]
    fn test_char_name_synthesized() {
        assert_eq!(char_name('X'), "Uppercase X");
        assert_eq!(char_name('q'), "Lowercase q");
        assert_eq!(char_name('7'), "Digit 7");
        assert_eq!(char_name('é'), "Character");
        assert_eq!(char_name('\u{00A0}'), "Character");
    }

    #[test]
    fn test_every_printable_ascii_punctuation_is_named() {
        let ranges = [(33u8, 47u8), (58, 64), (91, 96), (123, 126)];
        for (lo, hi) in ranges {
            for byte in lo..=hi {
                let c = char::from(byte);
                assert_ne!(char_name(c), "Character", "{c:?} should have a name");
                assert_eq!(classify_char(c), CharCategory::Symbol);
            }
        }
    }

    #[test]
    fn test_tooltip_for() {
        let tooltip = tooltip_for('!');
        assert_eq!(tooltip.to_string(), "Exclamation Mark\nUnicode: U+0021\nDecimal: 33");
    }
}
