//! The greeting renderer: word wrap, style re-insertion, and bubble layout.

use crate::ansi::{self, RESET};
use crate::figure::{FIGURE_WIDTH, figure_rows};
use crate::frame::Frame;
use crate::restyle::Restyler;
use crate::text::{display_width, hard_wrap, pad_left};

/// Shown when the caller provides no message.
pub const DEFAULT_MESSAGE: &str = "Welcome to Brootal, ladies and gentlemen!";

/// Minimum wrap width of the speech bubble, in display columns.
const DEFAULT_WRAP_WIDTH: usize = 24;

/// Display width of the default top border, `╭` + 26 `─` + `╮`.
const DEFAULT_TOP_FRAME_WIDTH: usize = 28;

/// Figure row the first bubble line is anchored at.
const BASE_TOP_OFFSET: usize = 4;

/// Columns of indentation for bubble rows that extend past the figure.
const LEFT_OFFSET: usize = 17;

/// Messages wrapping to more rows than this overflow the figure and trigger
/// vertical centering.
const MAX_LINES_BEFORE_OVERFLOW: usize = 7;

/// Rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Lower bound on the wrap width, in display columns. `Some(0)` is
    /// treated as absent.
    pub max_length: Option<usize>,
}

/// Render the Brootal figure with `message` in an attached speech bubble.
///
/// The message is trimmed first; an empty message falls back to
/// [`DEFAULT_MESSAGE`]. Never fails: any string input produces a rendered
/// greeting terminated by a newline.
pub fn render(message: &str, options: RenderOptions) -> String {
    let message = message.trim();
    let message = if message.is_empty() {
        DEFAULT_MESSAGE
    } else {
        message
    };

    let stripped = ansi::strip_ansi(message);

    let mut max_length = DEFAULT_WRAP_WIDTH;
    let mut total_columns = FIGURE_WIDTH + DEFAULT_TOP_FRAME_WIDTH;
    let mut top_offset = BASE_TOP_OFFSET;

    // Quirk kept from the original renderer: the requested width competes
    // with the lexicographically first word, not the longest one, and the
    // total line budget only grows when the request wins.
    if let Some(requested) = options.max_length.filter(|&n| n > 0) {
        let lowered = stripped.to_lowercase();
        let mut words: Vec<&str> = lowered.split(' ').collect();
        words.sort_unstable();
        max_length = words.first().map_or(0, |w| w.chars().count());
        if max_length < requested {
            max_length = requested;
            total_columns = max_length + FIGURE_WIDTH + BASE_TOP_OFFSET;
        }
    }

    let spans = ansi::extract_spans(message);

    // Offsets of the spaces separating words in the unwrapped message, as
    // cumulative word lengths. The restyler uses these to detect separators
    // the wrapper dropped.
    let mut space_offsets = Vec::new();
    let mut acc = 0usize;
    for word in stripped.split(' ') {
        let end = acc + word.chars().count();
        space_offsets.push(end);
        acc = end + 1;
    }

    let rows = hard_wrap(&stripped, max_length);
    log::debug!(
        "wrapped message into {} row(s) at width {}",
        rows.len(),
        max_length
    );

    let frame = Frame::new(max_length);
    let mut frame_top = frame.top.clone();

    let mut greeting = figure_rows();
    let mut restyler = Restyler::new(&spans, &space_offsets);
    let blank_run = " ".repeat(max_length);

    for (index, row) in rows.iter().enumerate() {
        // A full-width run of spaces marks an intentional blank line and
        // keeps its spacing; everything else is trimmed.
        let row = if row.contains(blank_run.as_str()) {
            row.clone()
        } else {
            row.trim().to_string()
        };
        let styled = restyler.restyle_row(&row);

        let pad = max_length.saturating_sub(display_width(&ansi::strip_ansi(&styled)));
        let padded = format!("{RESET}{styled}{RESET}{}", " ".repeat(pad));

        if index == 0 {
            // Taller messages pull the bubble anchor up so the tail still
            // points at the figure's mouth.
            if rows.len() == 2 {
                top_offset -= 1;
            }
            if rows.len() >= 3 {
                top_offset -= 2;
            }

            // Past the overflow threshold the bubble no longer fits beside
            // the figure: vertically center by prepending blank rows and
            // aligning the top border under the taller composite.
            if rows.len() > MAX_LINES_BEFORE_OVERFLOW {
                let blank_rows = (rows.len() - MAX_LINES_BEFORE_OVERFLOW).div_ceil(2);
                for _ in 0..blank_rows {
                    greeting.insert(0, String::new());
                }
                frame_top = pad_left(&frame_top, total_columns);
            }

            row_mut(&mut greeting, top_offset - 1).push_str(&frame_top);
        }

        let bubble_row = format!("{side} {padded} {side}", side = frame.side);
        overlay(&mut greeting, index + top_offset, &bubble_row);

        if index + 1 == rows.len() {
            overlay(&mut greeting, index + top_offset + 1, &frame.bottom);
        }
    }

    let mut out = greeting.join("\n");
    out.push('\n');
    out
}

/// Get row `index`, growing the buffer with empty rows as needed.
fn row_mut(greeting: &mut Vec<String>, index: usize) -> &mut String {
    while greeting.len() <= index {
        greeting.push(String::new());
    }
    &mut greeting[index]
}

/// Append `content` to row `index`. Rows without figure text get a fixed
/// indent first so the bubble clears the left margin.
fn overlay(greeting: &mut Vec<String>, index: usize, content: &str) {
    let row = row_mut(greeting, index);
    if row.is_empty() {
        row.push_str(&" ".repeat(LEFT_OFFSET));
    }
    row.push_str(content);
}
