//! Display-width-aware wrapping and padding.
//!
//! All width calculations use display columns (not character count), so
//! full-width characters (CJK, some emoji) correctly occupy 2 columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Return the display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-pad `s` with spaces so its display width reaches `width` columns.
pub fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// Hard word-wrap `text` at `width` display columns.
///
/// Greedy fill at word boundaries, splitting on single spaces so interior
/// space runs are preserved when they fit. A word wider than the budget
/// continues in the current row's remaining columns before breaking, unless
/// starting it on a fresh row would produce fewer breaks. Embedded newlines
/// are preserved as row boundaries, and rows carry no leading or trailing
/// spaces.
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        wrap_line(line, width, &mut rows);
    }
    rows
}

fn wrap_line(line: &str, width: usize, rows: &mut Vec<String>) {
    if line.trim().is_empty() {
        rows.push(String::new());
        return;
    }

    let base = rows.len();
    rows.push(String::new());

    for (index, word) in line.split(' ').enumerate() {
        let word_width = display_width(word);
        let mut row_width = display_width(last_row(rows));

        // A separator space joins the word to a non-empty row; a dropped
        // separator at a break is what the restyler later accounts for.
        if index != 0 && row_width > 0 {
            last_row(rows).push(' ');
            row_width += 1;
        }

        if width > 0 && word_width > width {
            // Start on a fresh row only when that needs fewer breaks than
            // filling the remaining columns of the current row.
            let remaining = width as i64 - row_width as i64;
            let breaks_here = 1 + (word_width as i64 - remaining - 1).div_euclid(width as i64);
            let breaks_fresh = (word_width as i64 - 1).div_euclid(width as i64);
            if breaks_fresh < breaks_here {
                rows.push(String::new());
            }
            wrap_word(rows, word, width);
            continue;
        }

        if row_width + word_width > width && row_width > 0 && word_width > 0 {
            rows.push(String::new());
        }

        last_row(rows).push_str(word);
    }

    for row in &mut rows[base..] {
        while row.ends_with(' ') {
            row.pop();
        }
    }
}

/// Break an oversized word across rows, filling whatever columns the current
/// row still has. A wide character that would straddle a boundary starts the
/// next row, so a row may come up one column short but never overflows.
fn wrap_word(rows: &mut Vec<String>, word: &str, width: usize) {
    let mut visible = display_width(last_row(rows));
    let chars: Vec<char> = word.chars().collect();
    for (index, &ch) in chars.iter().enumerate() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if visible + w <= width {
            last_row(rows).push(ch);
        } else {
            rows.push(ch.to_string());
            visible = 0;
        }
        visible += w;

        if visible == width && index < chars.len() - 1 {
            rows.push(String::new());
            visible = 0;
        }
    }
}

fn last_row(rows: &mut Vec<String>) -> &mut String {
    if rows.is_empty() {
        rows.push(String::new());
    }
    let index = rows.len() - 1;
    &mut rows[index]
}
