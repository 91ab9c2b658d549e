//! Rounded box-drawing borders for the speech bubble.

use crate::ansi::RESET;

const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: &str = "─";
const VERTICAL: char = '│';

/// Border strings sized to an inner text width plus one margin column on
/// each side. The side and bottom borders carry a leading reset so a style
/// opened in the previous row cannot color them.
#[derive(Debug, Clone)]
pub struct Frame {
    pub top: String,
    pub side: String,
    pub bottom: String,
}

impl Frame {
    pub fn new(width: usize) -> Self {
        let horizontal = HORIZONTAL.repeat(width + 2);
        Frame {
            top: format!("{TOP_LEFT}{horizontal}{TOP_RIGHT}"),
            side: format!("{RESET}{VERTICAL}{RESET}"),
            bottom: format!("{RESET}{BOTTOM_LEFT}{horizontal}{BOTTOM_RIGHT}"),
        }
    }
}
