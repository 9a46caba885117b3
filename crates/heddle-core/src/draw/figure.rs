//! Statement glyphs.
//!
//! Every statement kind maps to one drawing routine. Each routine renders the
//! glyph centered on the node position, draws the label to its right, and
//! reports the x-coordinate where the drawn row ends so callers can track
//! column width and attach outgoing wires.

use std::f64::consts::PI;

use crate::semantic::StatementKind;

use super::{
    FIGURE_HEIGHT, FIGURE_R, FIGURE_WIDTH, SPACE_FIGURE_TO_TEXT, TEXT_MARGIN, line,
    text::draw_string,
};

/// Draws the glyph and label for a statement of the given kind.
///
/// Returns the row's right-edge x-coordinate and its markup. [`Module`]
/// statements draw nothing; their header role is consumed during
/// segmentation.
///
/// [`Module`]: StatementKind::Module
pub fn glyph(kind: StatementKind, x: i32, y: i32, label: &str) -> (i32, String) {
    match kind {
        StatementKind::Normal => plain_step(x, y, label),
        StatementKind::Fork => fork_step(x, y, label),
        StatementKind::Repeat => repeat_step(x, y, label),
        StatementKind::Call => call_step(x, y, label),
        StatementKind::Return => return_step(x, y, label),
        StatementKind::True => conditional_step(x, y, &format!("(true) {label}")),
        StatementKind::False => conditional_step(x, y, &format!("(false) {label}")),
        StatementKind::Branch => conditional_step(x, y, &format!("({label})")),
        StatementKind::Data => data_item(x, y, label),
        StatementKind::Module => (0, String::new()),
    }
}

/// Draws the solid arrowhead mark for a function input on a data node.
pub fn function_input_mark(x: i32, y: i32) -> String {
    format!(
        r#"<path d="M {} {y} L {x} {} L {x} {} Z" stroke="black" fill="fuchsia"/>"#,
        x - FIGURE_R,
        y - FIGURE_R,
        y + FIGURE_R,
    )
}

/// Draws the solid arrowhead mark for a function output on a data node.
pub fn function_output_mark(x: i32, y: i32) -> String {
    format!(
        r#"<path d="M {} {y} L {x} {} L {x} {} Z" stroke="black" fill="aqua"/>"#,
        x + FIGURE_R,
        y - FIGURE_R,
        y + FIGURE_R,
    )
}

fn circle(center_x: i32, center_y: i32, radius: i32) -> String {
    format!(r#"<circle cx="{center_x}" cy="{center_y}" r="{radius}" fill="white" stroke="black"/>"#)
}

fn triangle(vertices: [(i32, i32); 3]) -> String {
    format!(
        r#"<polygon points="{} {} {} {} {} {}" fill="white" stroke="black"/>"#,
        vertices[0].0,
        vertices[0].1,
        vertices[1].0,
        vertices[1].1,
        vertices[2].0,
        vertices[2].1,
    )
}

/// Vertices of an equilateral triangle inscribed in the circle of `radius`
/// around the center, rotated by `rotation` radians.
fn triangle_vertices(center_x: i32, center_y: i32, radius: i32, rotation: f64) -> [(i32, i32); 3] {
    let vertex = |index: usize| {
        let angle = rotation + index as f64 * (2.0 * PI / 3.0);
        let x = f64::from(center_x) + f64::from(radius) * angle.cos();
        let y = f64::from(center_y) + f64::from(radius) * angle.sin();
        (x.round() as i32, y.round() as i32)
    };
    [vertex(0), vertex(1), vertex(2)]
}

/// Clockwise half-circle arrow marking a loop.
fn arc_arrow(center_x: i32, center_y: i32) -> String {
    let radius = FIGURE_R - FIGURE_R / 2;
    let start_y = center_y - radius;
    let end_y = center_y + radius;

    let arc = format!(
        r#"<path d="M {center_x} {start_y} A {radius} {radius}, 0 0 1 {center_x} {end_y}" stroke="black" fill="transparent"/>"#
    );
    let tip_y = f64::from(end_y) + 0.5;
    let head = format!(
        r#"<path d="M {center_x} {end_y} L {} {} L {} {tip_y} Z" stroke="black" fill="black"/>"#,
        center_x + 2,
        end_y - 4,
        center_x + 4,
    );
    format!("{arc}\n{head}")
}

fn square(center_x: i32, center_y: i32) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{FIGURE_WIDTH}" height="{FIGURE_HEIGHT}" fill="white" stroke="black"/>"#,
        center_x - FIGURE_R,
        center_y - FIGURE_R,
    )
}

fn label_start(center_x: i32) -> i32 {
    center_x + FIGURE_R + SPACE_FIGURE_TO_TEXT
}

fn assemble(parts: Vec<String>) -> String {
    let non_empty: Vec<String> = parts.into_iter().filter(|part| !part.is_empty()).collect();
    non_empty.join("\n")
}

fn plain_step(x: i32, y: i32, label: &str) -> (i32, String) {
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (end_x, assemble(vec![circle(x, y, FIGURE_R), label_markup]))
}

fn fork_step(x: i32, y: i32, label: &str) -> (i32, String) {
    let vertices = triangle_vertices(x, y, FIGURE_R - 2, 0.0);
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (
        end_x,
        assemble(vec![circle(x, y, FIGURE_R), triangle(vertices), label_markup]),
    )
}

fn repeat_step(x: i32, y: i32, label: &str) -> (i32, String) {
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (
        end_x,
        assemble(vec![circle(x, y, FIGURE_R), arc_arrow(x, y), label_markup]),
    )
}

fn call_step(x: i32, y: i32, label: &str) -> (i32, String) {
    let inner_radius = FIGURE_R / 2;
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (
        end_x,
        assemble(vec![
            circle(x, y, FIGURE_R),
            circle(x, y, inner_radius),
            label_markup,
        ]),
    )
}

/// Downward triangle over a base bar; the figure is its own chain
/// terminator, so the renderer skips the usual end cap after it.
fn return_step(x: i32, y: i32, label: &str) -> (i32, String) {
    let tick = line::v_line(x, y - FIGURE_R, FIGURE_R, line::STROKE);
    let vertices = triangle_vertices(x, y, FIGURE_R, PI / 2.0);
    let base = line::h_line(x - FIGURE_R, y + FIGURE_R, FIGURE_WIDTH, line::STROKE);
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (
        end_x,
        assemble(vec![tick, triangle(vertices), base, label_markup]),
    )
}

/// Shared body of the true/false/branch figures: a riser with a rightward
/// arrow into the nested chain.
fn conditional_step(x: i32, y: i32, label: &str) -> (i32, String) {
    let top = y - FIGURE_R;
    let riser = line::v_line(x, top, FIGURE_HEIGHT, line::STROKE);
    let arrow = line::arrow_right(x, top, TEXT_MARGIN, line::STROKE);
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (end_x, assemble(vec![riser, arrow, label_markup]))
}

fn data_item(x: i32, y: i32, label: &str) -> (i32, String) {
    let (end_x, label_markup) = draw_string(label_start(x), y, label, 100);
    (end_x, assemble(vec![square(x, y), label_markup]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_step_draws_circle_and_label() {
        let (end_x, markup) = glyph(StatementKind::Normal, 30, 90, "go");
        assert!(markup.contains(r#"<circle cx="30" cy="90" r="9""#));
        assert!(markup.contains(">go</text>"));
        // Label starts past the glyph and the row ends past the label.
        assert!(end_x > 30 + FIGURE_R + SPACE_FIGURE_TO_TEXT);
    }

    #[test]
    fn test_fork_step_inscribes_triangle() {
        let (_, markup) = glyph(StatementKind::Fork, 100, 50, "choice");
        assert!(markup.contains(r#"<circle cx="100" cy="50" r="9""#));
        // First vertex of the inscribed triangle sits at (cx + 7, cy).
        assert!(markup.contains(r#"<polygon points="107 50"#));
    }

    #[test]
    fn test_repeat_step_has_arc_arrow() {
        let (_, markup) = glyph(StatementKind::Repeat, 100, 50, "each");
        assert!(markup.contains("A 5 5, 0 0 1 100 55"));
        assert!(markup.contains("55.5 Z"));
    }

    #[test]
    fn test_call_step_has_concentric_circles() {
        let (_, markup) = glyph(StatementKind::Call, 100, 50, "helper");
        assert!(markup.contains(r#"r="9""#));
        assert!(markup.contains(r#"r="4""#));
    }

    #[test]
    fn test_return_step_draws_terminator() {
        let (_, markup) = glyph(StatementKind::Return, 100, 50, "done");
        // Downward-pointing triangle: first vertex at (cx, cy + 9).
        assert!(markup.contains(r#"<polygon points="100 59"#));
        // Base bar across the glyph width.
        assert!(markup.contains(r#"<line x1="91" y1="59" x2="109" y2="59""#));
    }

    #[test]
    fn test_conditional_labels_carry_their_verdict() {
        let (_, true_markup) = glyph(StatementKind::True, 100, 50, "ok");
        assert!(true_markup.contains(">(true) ok</text>"));

        let (_, false_markup) = glyph(StatementKind::False, 100, 50, "ok");
        assert!(false_markup.contains(">(false) ok</text>"));

        let (_, branch_markup) = glyph(StatementKind::Branch, 100, 50, "case a");
        assert!(branch_markup.contains(">(case a)</text>"));
    }

    #[test]
    fn test_data_item_is_a_square() {
        let (_, markup) = glyph(StatementKind::Data, 100, 50, "ledger");
        assert!(markup.contains(r#"<rect x="91" y="41" width="18" height="18""#));
        assert!(markup.contains(">ledger</text>"));
    }

    #[test]
    fn test_module_draws_nothing() {
        let (end_x, markup) = glyph(StatementKind::Module, 100, 50, "ignored");
        assert_eq!(end_x, 0);
        assert!(markup.is_empty());
    }

    #[test]
    fn test_labels_are_escaped() {
        let (_, markup) = glyph(StatementKind::Normal, 0, 0, "a < b");
        assert!(markup.contains(">a &lt; b</text>"));
    }

    #[test]
    fn test_function_marks() {
        let input = function_input_mark(200, 90);
        assert!(input.contains(r#"M 191 90 L 200 81 L 200 99 Z"#));
        assert!(input.contains("fuchsia"));

        let output = function_output_mark(200, 90);
        assert!(output.contains(r#"M 209 90 L 200 81 L 200 99 Z"#));
        assert!(output.contains("aqua"));
    }

    #[test]
    fn test_empty_label_leaves_no_dangling_text() {
        let (end_x, markup) = glyph(StatementKind::Normal, 30, 90, "");
        assert_eq!(end_x, 30 + FIGURE_R + SPACE_FIGURE_TO_TEXT);
        assert!(!markup.contains("<text"));
        assert!(!markup.contains("\n\n"));
    }
}
