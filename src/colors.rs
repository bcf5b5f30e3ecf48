use crossterm::style::Color;
use std::fmt::Write;

/// The one colour every frame is drawn in
pub const FRAME_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

/// SGR sequence that resets all text attributes
pub const RESET: &str = "\x1b[0m";

/// Append the SGR foreground sequence for `color`.
///
/// Written by hand rather than through crossterm's `Colored` so the bytes
/// do not depend on `NO_COLOR`.
pub fn push_fg(out: &mut String, color: Color) {
    let _ = match color {
        Color::Rgb { r, g, b } => write!(out, "\x1b[38;2;{};{};{}m", r, g, b),
        Color::AnsiValue(v) => write!(out, "\x1b[38;5;{}m", v),
        _ => Ok(()),
    };
}

pub fn set_frame_color(out: &mut String) {
    push_fg(out, FRAME_COLOR);
}

pub fn reset(out: &mut String) {
    out.push_str(RESET);
}
