//! SVG markup primitives for chart rendering.
//!
//! Everything here produces raw SVG fragments as strings: the renderer
//! collects fragments in draw order and joins them into the final document.
//! Fragments never embed positioning decisions of their own — callers pass
//! fully resolved coordinates.
//!
//! - [`text`] — label rendering, width estimation, XML escaping
//! - [`line`] — wire segments, arrowheads, and chain start/step/end figures
//! - [`figure`] — the per-kind statement glyphs

pub mod figure;
pub mod line;
pub mod text;

/// Radius of the round statement glyphs; every other figure is sized off it.
pub const FIGURE_R: i32 = 9;

/// Vertical clearance between a glyph and its chain figures.
pub const FIGURE_SPACE: i32 = FIGURE_R;

/// Full width of a glyph.
pub const FIGURE_WIDTH: i32 = FIGURE_R * 2;

/// Full height of a glyph.
pub const FIGURE_HEIGHT: i32 = FIGURE_R * 2;

/// Length of wire arrowheads.
pub const ARROW_HEAD: i32 = 8;

/// Gap between a glyph's right edge and the start of its label.
pub const SPACE_FIGURE_TO_TEXT: i32 = 10;

/// Trailing margin reserved after a label.
pub const TEXT_MARGIN: i32 = 15;

/// Base label font size in pixels.
pub const FONT_SIZE_PX: i32 = 12;
