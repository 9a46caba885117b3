//! Line fragments: wire segments, arrowheads, and sibling-chain figures.

use super::{ARROW_HEAD, FIGURE_HEIGHT, FIGURE_R, FIGURE_SPACE, FIGURE_WIDTH};

/// Stroke used by structural lines and glyph outlines.
pub const STROKE: &str = "black";

/// Produces a straight line between two points.
pub fn segment(x1: i32, y1: i32, x2: i32, y2: i32, color: &str) -> String {
    format!(r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}"/>"#)
}

/// Produces a horizontal line extending `length` to the right.
pub fn h_line(x: i32, y: i32, length: i32, color: &str) -> String {
    segment(x, y, x + length, y, color)
}

/// Produces a vertical line extending `length` downward.
pub fn v_line(x: i32, y: i32, length: i32, color: &str) -> String {
    segment(x, y, x, y + length, color)
}

/// Produces a horizontal line with an arrowhead at its right end.
pub fn arrow_right(x: i32, y: i32, length: i32, color: &str) -> String {
    let end_x = x + length;
    let half_head = (ARROW_HEAD + 1) / 2;
    let line = segment(x, y, end_x, y, color);
    let head = format!(
        r#"<path d="M {end_x} {y} L {} {} M {end_x} {y} L {} {}" stroke="{color}" fill="{color}"/>"#,
        end_x - ARROW_HEAD,
        y - half_head,
        end_x - ARROW_HEAD,
        y + half_head,
    );
    format!("{line}\n{head}")
}

/// Produces a horizontal line with an arrowhead at its left end.
pub fn arrow_left(x: i32, y: i32, length: i32, color: &str) -> String {
    let end_x = x + length;
    let half_head = (ARROW_HEAD + 1) / 2;
    let line = segment(x, y, end_x, y, color);
    let head = format!(
        r#"<path d="M {x} {y} L {} {} M {x} {y} L {} {}" stroke="{color}" fill="{color}"/>"#,
        x + ARROW_HEAD,
        y - half_head,
        x + ARROW_HEAD,
        y + half_head,
    );
    format!("{line}\n{head}")
}

/// Produces the cap above the first glyph of a top-level sibling chain: a
/// short tick down to the glyph under a horizontal bar.
pub fn chain_start(center_x: i32, center_y: i32) -> String {
    let glyph_top = center_y - FIGURE_R;
    let tick_top = glyph_top - FIGURE_SPACE;
    let tick = v_line(center_x, tick_top, FIGURE_SPACE, STROKE);

    let glyph_left = center_x - FIGURE_R;
    let bar = h_line(glyph_left, tick_top, FIGURE_WIDTH, STROKE);
    format!("{tick}\n{bar}")
}

/// Produces the cap below the last glyph of a sibling chain.
pub fn chain_end(center_x: i32, center_y: i32) -> String {
    let glyph_bottom = center_y + FIGURE_R;
    let tick = v_line(center_x, glyph_bottom, FIGURE_SPACE, STROKE);

    let glyph_left = center_x - FIGURE_R;
    let bar_y = glyph_bottom + FIGURE_SPACE;
    let bar = h_line(glyph_left, bar_y, FIGURE_WIDTH, STROKE);
    format!("{tick}\n{bar}")
}

/// Produces the jog that opens a nested sibling chain: a tick above the
/// glyph, a bar shifted left, and a riser up toward the enclosing level.
pub fn chain_step(center_x: i32, center_y: i32) -> String {
    let glyph_top = center_y - FIGURE_R;
    let tick_top = glyph_top - FIGURE_SPACE;
    let tick = v_line(center_x, tick_top, FIGURE_SPACE, STROKE);

    let glyph_left = center_x - FIGURE_R;
    let shifted_left = glyph_left - FIGURE_SPACE;
    let bar = h_line(shifted_left, tick_top, FIGURE_WIDTH, STROKE);

    let riser_top = tick_top - FIGURE_HEIGHT;
    let riser = v_line(shifted_left, riser_top, FIGURE_HEIGHT, STROKE);
    format!("{tick}\n{bar}\n{riser}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h_line_extends_right() {
        assert_eq!(
            h_line(10, 20, 30, "black"),
            r#"<line x1="10" y1="20" x2="40" y2="20" stroke="black"/>"#
        );
    }

    #[test]
    fn test_v_line_extends_down() {
        assert_eq!(
            v_line(10, 20, 30, "#FF0000"),
            r#"<line x1="10" y1="20" x2="10" y2="50" stroke="#FF0000"/>"#
        );
    }

    #[test]
    fn test_arrow_right_points_at_far_end() {
        let markup = arrow_right(0, 10, 50, "black");
        let mut fragments = markup.lines();
        assert_eq!(
            fragments.next().unwrap(),
            r#"<line x1="0" y1="10" x2="50" y2="10" stroke="black"/>"#
        );
        // Head barbs reach back from x=50 to x=42, four pixels off axis.
        assert_eq!(
            fragments.next().unwrap(),
            r#"<path d="M 50 10 L 42 6 M 50 10 L 42 14" stroke="black" fill="black"/>"#
        );
    }

    #[test]
    fn test_arrow_left_points_at_near_end() {
        let markup = arrow_left(0, 10, 50, "black");
        assert!(markup.contains(r#"M 0 10 L 8 6"#));
        assert!(markup.contains(r#"M 0 10 L 8 14"#));
    }

    #[test]
    fn test_chain_start_sits_above_glyph() {
        let markup = chain_start(100, 50);
        // Tick from y=32 down to the glyph top at y=41.
        assert!(markup.contains(r#"<line x1="100" y1="32" x2="100" y2="41""#));
        // Bar across the glyph width at y=32.
        assert!(markup.contains(r#"<line x1="91" y1="32" x2="109" y2="32""#));
    }

    #[test]
    fn test_chain_end_sits_below_glyph() {
        let markup = chain_end(100, 50);
        assert!(markup.contains(r#"<line x1="100" y1="59" x2="100" y2="68""#));
        assert!(markup.contains(r#"<line x1="91" y1="68" x2="109" y2="68""#));
    }

    #[test]
    fn test_chain_step_jogs_left_and_up() {
        let markup = chain_step(100, 50);
        let fragments: Vec<&str> = markup.lines().collect();
        assert_eq!(fragments.len(), 3);
        // Shifted bar starts left of the glyph edge.
        assert!(fragments[1].starts_with(r#"<line x1="82" y1="32""#));
        // Riser climbs one glyph height above the bar.
        assert_eq!(
            fragments[2],
            r#"<line x1="82" y1="14" x2="82" y2="32" stroke="black"/>"#
        );
    }
}
