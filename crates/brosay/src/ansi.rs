//! ANSI escape sequence handling.
//!
//! Offsets are tracked in the visible-text coordinate space: character
//! positions counted only over text that actually renders, excluding the
//! escape sequences themselves.

use once_cell::sync::Lazy;
use regex::Regex;

/// SGR reset. Bubble content is fenced with this on both sides so a style
/// opened inside the message cannot leak past the border.
pub const RESET: &str = "\u{1b}[0m";

/// Matches CSI escape sequences (colors, styles, cursor movement).
static ANSI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("ANSI pattern is valid"));

/// An escape sequence recorded at an offset into the visible character
/// stream. Adjacent escapes with no visible text between them are
/// concatenated into a single span, in encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSpan {
    pub offset: usize,
    pub text: String,
}

/// Remove every ANSI escape sequence from `s`.
pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Record every escape sequence in `message`, keyed by its visible offset.
///
/// The visible offset of a match is its raw character offset minus the
/// cumulative character length of all escapes found before it. The returned
/// list is ordered by offset and consumed read-only during restyling.
pub fn extract_spans(message: &str) -> Vec<StyleSpan> {
    let mut spans: Vec<StyleSpan> = Vec::new();
    let mut escape_chars = 0usize;
    for m in ANSI_RE.find_iter(message) {
        let raw_offset = message[..m.start()].chars().count();
        let offset = raw_offset - escape_chars;
        escape_chars += m.as_str().chars().count();
        match spans.last_mut() {
            Some(last) if last.offset == offset => last.text.push_str(m.as_str()),
            _ => spans.push(StyleSpan {
                offset,
                text: m.as_str().to_string(),
            }),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_sgr_sequences() {
        assert_eq!(strip_ansi("\u{1b}[31mred\u{1b}[39m"), "red");
    }

    #[test]
    fn strip_plain_text_is_identity() {
        assert_eq!(strip_ansi("plain text"), "plain text");
    }

    #[test]
    fn extract_records_visible_offsets() {
        let spans = extract_spans("say \u{1b}[31mred\u{1b}[39m word");
        assert_eq!(
            spans,
            vec![
                StyleSpan {
                    offset: 4,
                    text: "\u{1b}[31m".to_string()
                },
                StyleSpan {
                    offset: 7,
                    text: "\u{1b}[39m".to_string()
                },
            ]
        );
    }

    #[test]
    fn extract_concatenates_adjacent_escapes() {
        let spans = extract_spans("\u{1b}[1m\u{1b}[31mx");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].offset, 0);
        assert_eq!(spans[0].text, "\u{1b}[1m\u{1b}[31m");
    }

    #[test]
    fn extract_none_for_plain_text() {
        assert!(extract_spans("nothing styled here").is_empty());
    }

    #[test]
    fn span_count_matches_escape_count() {
        // Two escapes separated by visible text stay distinct.
        let spans = extract_spans("\u{1b}[31ma\u{1b}[39m");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].offset, 1);
    }
}
