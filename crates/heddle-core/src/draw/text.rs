//! Text fragments and width estimation.
//!
//! Labels are measured with a fixed-width estimate instead of real font
//! metrics: ASCII characters count as half a glyph cell, everything else as a
//! full cell. The estimate is crude but deterministic, which the renderer
//! depends on — equal input must produce byte-identical documents.

use super::{FONT_SIZE_PX, TEXT_MARGIN};

/// Escapes the five XML special characters in label text.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Estimates the width of `text` in glyph cells.
///
/// ASCII characters count 0.5, all others 1.0; the sum is rounded up.
pub fn string_width(text: &str) -> i32 {
    let half_cells: usize = text
        .chars()
        .map(|c| if (c as u32) < 128 { 1 } else { 2 })
        .sum();
    ((half_cells + 1) / 2) as i32
}

/// Returns the font size in pixels for a percentage of the base size.
///
/// A zero percentage falls back to the base size.
pub fn font_size_px(percent: u32) -> i32 {
    if percent == 0 {
        return FONT_SIZE_PX;
    }
    FONT_SIZE_PX * percent as i32 / 100
}

/// Estimates the pixel width of `text` at the given font size.
pub fn pixel_width(text: &str, font_px: i32) -> i32 {
    if text.is_empty() || font_px <= 0 {
        return 0;
    }
    string_width(text) * font_px
}

/// Produces the markup for a text element anchored at `(x, y)`.
///
/// Returns an empty fragment for empty text.
pub fn text_markup(x: i32, y: i32, text: &str, percent: u32) -> String {
    if text.is_empty() {
        return String::new();
    }

    let font_px = font_size_px(percent);
    let escaped = escape_xml(text);
    format!(
        r#"<text x="{x}" y="{y}" text-anchor="start" dominant-baseline="middle" font-family="Consolas, Courier New, monospace" font-size="{font_px}px">{escaped}</text>"#
    )
}

/// Draws a label and reports where the following content may start.
///
/// Returns the x-coordinate past the label (including [`TEXT_MARGIN`]) and
/// the markup fragment. Empty text draws nothing and ends where it started.
pub fn draw_string(x: i32, y: i32, text: &str, percent: u32) -> (i32, String) {
    if text.is_empty() {
        return (x, String::new());
    }

    let font_px = font_size_px(percent);
    let end_x = x + pixel_width(text, font_px) + TEXT_MARGIN;
    (end_x, text_markup(x, y, text, percent))
}
