//! Color utilities for request ID visualization.

use owo_colors::{AnsiColors, DynColors, OwoColorize, Style};

/// Visually distinct ANSI colors for request ID coloring
///
/// Standard and bright variants that stay readable on both light and
/// dark terminal backgrounds.
const COLORS: [AnsiColors; 12] = [
    AnsiColors::Red,
    AnsiColors::Green,
    AnsiColors::Yellow,
    AnsiColors::Blue,
    AnsiColors::Magenta,
    AnsiColors::Cyan,
    AnsiColors::BrightRed,
    AnsiColors::BrightGreen,
    AnsiColors::BrightYellow,
    AnsiColors::BrightBlue,
    AnsiColors::BrightMagenta,
    AnsiColors::BrightCyan,
];

/// Deterministically maps a request ID to one of the palette colors
///
/// Uses a djb2-style byte hash so the same ID always gets the same
/// color, within a run and across runs.
pub fn get_color_for_id(id: &str) -> AnsiColors {
    let hash = id
        .bytes()
        .fold(5381u32, |acc, b| acc.wrapping_mul(33).wrapping_add(u32::from(b)));
    COLORS[(hash as usize) % COLORS.len()]
}

/// Formats a request ID with consistent color coding
///
/// Returns a `String` with embedded ANSI color codes, degrading to no
/// color when output isn't a terminal.
pub fn colored_id(id: &str) -> String {
    let color = get_color_for_id(id);
    let style = Style::new().color(DynColors::Ansi(color));
    format!("[{}]", id).style(style).to_string()
}
