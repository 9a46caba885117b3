//! Geometric primitives for chart layout and wire routing.
//!
//! Charts are laid out on an integer grid in SVG coordinate space:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: top-left corner at `(0, 0)`
//! - **X-axis**: increases rightward
//! - **Y-axis**: increases downward
//!
//! All positions derive from fixed grid constants, so `i32` coordinates are
//! exact and renders are reproducible bit for bit.

use crate::color::Rgb;

/// A position in integer diagram space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate.
    pub fn y(self) -> i32 {
        self.y
    }
}

/// A straight horizontal or vertical wire segment.
///
/// # Examples
///
/// ```
/// use heddle_core::geometry::{Coordinate, Wire};
///
/// let wire = Wire::new(Coordinate::new(10, 40), Coordinate::new(70, 40));
/// assert_eq!(wire.width(), 60);
/// assert_eq!(wire.height(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wire {
    start: Coordinate,
    end: Coordinate,
}

impl Wire {
    /// Creates a wire between two endpoints.
    pub fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    pub fn start(self) -> Coordinate {
        self.start
    }

    /// Returns the end point.
    pub fn end(self) -> Coordinate {
        self.end
    }

    /// Returns the horizontal extent of the wire.
    pub fn width(self) -> i32 {
        (self.start.x - self.end.x).abs()
    }

    /// Returns the vertical extent of the wire.
    pub fn height(self) -> i32 {
        (self.start.y - self.end.y).abs()
    }
}

/// The routed connection between one process reference and its data item.
///
/// A connection is built incrementally across the routing phases: the exit
/// segment leaves the process column, the enter segment approaches the data
/// glyph, and the span joins the two vertically. A missing later segment
/// means the connection has not been completed yet, and consumers check for
/// it before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    exit: Option<Wire>,
    enter: Option<Wire>,
    span: Option<Wire>,
    color: Rgb,
}

impl Connection {
    /// Creates an unrouted connection carrying its allocated wire color.
    pub fn new(color: Rgb) -> Self {
        Self {
            exit: None,
            enter: None,
            span: None,
            color,
        }
    }

    /// Returns the segment leaving the process column, if routed.
    pub fn exit(self) -> Option<Wire> {
        self.exit
    }

    /// Returns the segment entering the data glyph, if routed.
    pub fn enter(self) -> Option<Wire> {
        self.enter
    }

    /// Returns the vertical segment joining exit and enter, if routed.
    pub fn span(self) -> Option<Wire> {
        self.span
    }

    /// Returns the allocated wire color.
    pub fn color(self) -> Rgb {
        self.color
    }

    /// Records the exit segment.
    pub fn set_exit(&mut self, wire: Wire) {
        self.exit = Some(wire);
    }

    /// Records the enter segment.
    pub fn set_enter(&mut self, wire: Wire) {
        self.enter = Some(wire);
    }

    /// Records the joining vertical segment.
    pub fn set_span(&mut self, wire: Wire) {
        self.span = Some(wire);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_accessors() {
        let point = Coordinate::new(3, -4);
        assert_eq!(point.x(), 3);
        assert_eq!(point.y(), -4);
    }

    #[test]
    fn test_coordinate_default_is_origin() {
        let point = Coordinate::default();
        assert_eq!(point, Coordinate::new(0, 0));
    }

    #[test]
    fn test_wire_width_and_height_are_absolute() {
        let wire = Wire::new(Coordinate::new(50, 10), Coordinate::new(20, 70));
        assert_eq!(wire.width(), 30);
        assert_eq!(wire.height(), 60);

        let reversed = Wire::new(Coordinate::new(20, 70), Coordinate::new(50, 10));
        assert_eq!(reversed.width(), 30);
        assert_eq!(reversed.height(), 60);
    }

    #[test]
    fn test_connection_starts_unrouted() {
        let connection = Connection::new(Rgb::new(0xFF, 0, 0));
        assert!(connection.exit().is_none());
        assert!(connection.enter().is_none());
        assert!(connection.span().is_none());
        assert_eq!(connection.color(), Rgb::new(0xFF, 0, 0));
    }

    #[test]
    fn test_connection_records_segments() {
        let mut connection = Connection::new(Rgb::default());
        let exit = Wire::new(Coordinate::new(0, 5), Coordinate::new(10, 5));
        let enter = Wire::new(Coordinate::new(10, 25), Coordinate::new(30, 25));

        connection.set_exit(exit);
        connection.set_enter(enter);
        assert_eq!(connection.exit(), Some(exit));
        assert_eq!(connection.enter(), Some(enter));
        assert!(connection.span().is_none());
    }
}
