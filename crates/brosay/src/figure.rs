//! The static Brootal figure the speech bubble attaches to.

use nu_ansi_term::Color;

/// Display width of the figure's widest row,
/// `          |   __|    __   |   /`.
pub const FIGURE_WIDTH: usize = 31;

/// Rows of the figure, colored. Row 0 is intentionally blank so the rendered
/// greeting starts on a fresh line; every other row is exactly
/// [`FIGURE_WIDTH`] visible columns.
pub fn figure_rows() -> Vec<String> {
    let red = Color::Red;
    let white = Color::White;
    vec![
        String::new(),
        format!("                {}", white.paint("__________     ")),
        format!(
            "       {}{}",
            red.paint("___"),
            white.paint("    _|          |_   ")
        ),
        format!(
            "  {}{}{}{}",
            red.paint("____|___|__"),
            white.paint("|   "),
            red.paint("_________"),
            white.paint("  |  ")
        ),
        format!(
            " {}{}{} ___   __{}{}",
            red.paint("|____|   |__"),
            white.paint("|  "),
            red.paint("|"),
            red.paint("L"),
            white.paint(" |  ")
        ),
        format!(
            "          {}{}[ {} ]-[ {} ]   ",
            white.paint("|     "),
            white.paint("|"),
            white.paint("o"),
            white.paint("o")
        ),
        format!(
            "          {}{}{}{}   /",
            white.paint("|   __"),
            white.paint("|"),
            white.paint("    __   "),
            white.paint("|")
        ),
        format!(
            "          {}{}    ",
            white.paint("|__|  "),
            white.paint("|_________|")
        ),
    ]
}
