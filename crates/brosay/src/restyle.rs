//! Re-insertion of recorded style escapes into wrapped plain text.

use crate::ansi::StyleSpan;

/// Cursor over the wrapped rows of a message.
///
/// Wrapping drops the spaces it breaks at, so a position in the wrapped
/// stream no longer lines up with the visible offsets the spans were
/// recorded at. The cursor accumulates every processed row and counts the
/// dropped separators, converting wrapped positions back to visible-text
/// offsets before looking up spans.
pub struct Restyler<'a> {
    spans: &'a [StyleSpan],
    /// Offsets of the spaces separating words in the unwrapped message.
    space_offsets: &'a [usize],
    /// Concatenation of every row processed so far.
    completed: Vec<char>,
}

impl<'a> Restyler<'a> {
    pub fn new(spans: &'a [StyleSpan], space_offsets: &'a [usize]) -> Self {
        Restyler {
            spans,
            space_offsets,
            completed: Vec::new(),
        }
    }

    /// Re-insert spans into one wrapped row. Rows must be fed in order; the
    /// caller decides trimming before handing the row over.
    pub fn restyle_row(&mut self, row: &str) -> String {
        self.completed.extend(row.chars());

        // A non-space character sitting where the unwrapped message had a
        // space means the wrapper dropped that separator.
        let mut dropped = 0usize;
        for &space in self.space_offsets {
            let Some(i) = space.checked_sub(dropped) else {
                break;
            };
            match self.completed.get(i) {
                Some(&ch) if ch != ' ' => dropped += 1,
                Some(_) => {}
                None => break,
            }
        }

        let start = self.completed.len() - row.chars().count();
        let mut out = String::new();
        for (i, &ch) in self.completed[start..].iter().enumerate() {
            let offset = start + i + dropped;
            if let Some(span) = self.spans.iter().find(|s| s.offset == offset) {
                out.push_str(&span.text);
            } else if let Some(style) = self.continued_style(offset) {
                out.push_str(style);
            }
            out.push(ch);
        }
        out.trim().to_string()
    }

    /// Style continuation heuristic carried over from the original renderer:
    /// walking spans in ascending order, count each span below `offset`
    /// (remembering the last one), plus one more if exactly one span was
    /// below and the current span is above. The remembered span text applies
    /// iff the count reaches 2. A lone span with nothing recorded after it
    /// does not bleed, and reset sequences are not distinguished from
    /// openers.
    fn continued_style(&self, offset: usize) -> Option<&str> {
        let mut crossings = 0usize;
        let mut continued: Option<&str> = None;
        for span in self.spans {
            if offset > span.offset {
                crossings += 1;
                continued = Some(span.text.as_str());
            }
            if crossings == 1 && offset < span.offset {
                crossings += 1;
            }
        }
        if crossings >= 2 { continued } else { None }
    }
}
