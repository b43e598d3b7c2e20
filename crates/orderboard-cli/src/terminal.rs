// Rust guideline compliant 2026-10-18

//! Terminal color utilities for the Orderboard CLI.

use orderboard_core::Column;
use std::env;
use std::io::Write;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Determines if colored output should be used.
///
/// Respects the NO_COLOR environment variable and terminal capabilities.
///
/// # Returns
/// `true` if colored output should be used, `false` otherwise
pub fn should_use_color() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    atty::is(atty::Stream::Stdout)
}

/// Wraps text in ANSI color escapes.
///
/// # Arguments
/// * `text` - The text to color
/// * `color` - The foreground color
/// * `bold` - Whether to use bold text
pub fn paint(text: &str, color: Color, bold: bool) -> String {
    let mut out = Ansi::new(Vec::new());
    let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(out, "{}", text);
    let _ = out.reset();
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Returns the header color of a board column.
pub fn column_color(column: Column) -> Color {
    match column {
        Column::Ordered => Color::Yellow,
        Column::Ready => Color::Cyan,
        Column::Served => Color::Green,
    }
}
