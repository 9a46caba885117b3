//! Chart layout and wire routing.
//!
//! Rendering is a fixed cascade of stages over the chart's two sequences;
//! each stage appends markup fragments in draw order and no stage revisits
//! an earlier stage's decisions:
//!
//! 1. title row
//! 2. process column: glyphs and sibling-chain figures
//! 3. exit wires leaving the process column
//! 4. data column, placed right of everything drawn so far
//! 5. enter wires reaching the data glyphs (or function marks for top-level
//!    references)
//! 6. vertical joins completing each routed connection
//! 7. document assembly around the collected fragments
//!
//! Connections are kept in a table keyed by (process record, direction,
//! reference index); each routing stage writes its own segment at most once,
//! and later stages check for missing segments before drawing.

mod node;

use std::collections::HashMap;

use log::trace;

use heddle_core::{
    color::{Rgb, wire_color},
    draw::{FIGURE_R, figure, line, text},
    geometry::{Connection, Coordinate, Wire},
    semantic::{Chart, Sequence, StatementKind},
};

use node::ChartNode;

/// Horizontal shift per nesting level; also the vertical grid pitch.
pub const LEVEL_SHIFT: i32 = 30;

/// Margin around the whole image.
pub const IMG_MARGIN: i32 = 30;

/// Horizontal stride between parallel wire drops.
pub const LINE_OFFSET: i32 = 10;

/// Extra space below the lowest drawn row.
const BOTTOM_MARGIN: i32 = 50;

/// Vertical offset separating input and output wires on one row.
const WIRE_GAP: i32 = 5;

/// Whether a reference reads or writes its data item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Direction {
    Input,
    Output,
}

/// Address of one reference's connection slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RefKey {
    record: usize,
    direction: Direction,
    index: usize,
}

/// Renders one compiled chart to an SVG document.
pub(crate) fn render_chart(chart: &Chart, background: Rgb) -> String {
    SvgRenderer::new(chart, background).render()
}

struct SvgRenderer<'a> {
    chart: &'a Chart,
    background: Rgb,
    fragments: Vec<String>,
    process_nodes: Vec<ChartNode>,
    data_nodes: Vec<ChartNode>,
    connections: HashMap<RefKey, Connection>,
}

impl<'a> SvgRenderer<'a> {
    fn new(chart: &'a Chart, background: Rgb) -> Self {
        Self {
            chart,
            background,
            fragments: Vec::new(),
            process_nodes: Vec::new(),
            data_nodes: Vec::new(),
            connections: HashMap::new(),
        }
    }

    fn render(mut self) -> String {
        let start = IMG_MARGIN;

        let (title_end_x, title_end_y) = self.draw_title(start - FIGURE_R, start);

        self.process_nodes = place_nodes(start, title_end_y, self.chart.process());
        let (process_end_x, process_end_y) = self.draw_process_column();

        let exit_end_x = self.draw_exit_wires(process_end_x);

        let data_start_x = process_end_x.max(exit_end_x) + LEVEL_SHIFT;
        self.data_nodes = place_nodes(data_start_x, title_end_y, self.chart.data());
        let (data_end_x, data_end_y) = self.draw_data_column();

        self.draw_enter_wires();
        self.draw_vertical_joins();

        let width = title_end_x.max(process_end_x).max(data_end_x);
        let height = title_end_y.max(process_end_y).max(data_end_y) + BOTTOM_MARGIN;
        trace!(width = width, height = height; "Chart extents computed");
        self.finish(width, height)
    }

    /// Draws the title row and returns the extent it claims, margins
    /// included; the y-extent doubles as the columns' origin.
    fn draw_title(&mut self, x: i32, y: i32) -> (i32, i32) {
        let title = format!("Name: {}", self.chart.name());
        let (end_x, markup) = text::draw_string(x, y, &title, 150);
        self.push(markup);

        (end_x + IMG_MARGIN, y + LEVEL_SHIFT + IMG_MARGIN)
    }

    /// Draws glyphs and sibling-chain figures for the process column,
    /// returning its maximum x and y extents.
    fn draw_process_column(&mut self) -> (i32, i32) {
        let records = self.chart.process().records();
        let min_level = self.chart.process().min_level();
        let mut width = 0;
        let mut height = 0;

        for index in 0..records.len() {
            let record = &records[index];
            let node = self.process_nodes[index];

            let (end_x, markup) = figure::glyph(record.kind(), node.x(), node.y(), record.label());
            self.process_nodes[index].set_end_x(end_x);
            self.push(markup);

            let chain_start = record.before().is_none();
            let at_origin = record.level() == min_level;

            if let Some(before) = record.before() {
                self.push(joint_between(self.process_nodes[before], node));
            }
            if chain_start && at_origin {
                self.push(line::chain_start(node.x(), node.y()));
            }
            if record.next().is_none() && record.kind() != StatementKind::Return {
                self.push(line::chain_end(node.x(), node.y()));
            }
            if chain_start && !at_origin {
                self.push(line::chain_step(node.x(), node.y()));
            }

            width = width.max(end_x);
            height = height.max(node.y());
        }

        (width, height)
    }

    /// Draws the horizontal wires leaving the process column and records
    /// each as its reference's exit segment. Returns the rightmost x any
    /// wire reached.
    fn draw_exit_wires(&mut self, process_end_x: i32) -> i32 {
        let records = self.chart.process().records();
        let min_level = self.chart.process().min_level();

        let mut drop_offset = 0;
        let mut exit_end_x = 0;
        let mut allocated = 0usize;

        for index in 0..records.len() {
            let record = &records[index];
            if record.inputs().is_empty() && record.outputs().is_empty() {
                continue;
            }
            // Top-level statements describe the enclosing function; their
            // references are drawn as marks on the data column instead.
            if record.level() == min_level {
                continue;
            }

            let node = self.process_nodes[index];
            for (direction, references) in [
                (Direction::Input, record.inputs()),
                (Direction::Output, record.outputs()),
            ] {
                for reference_index in 0..references.len() {
                    let wire_y = match direction {
                        Direction::Input => node.y() - WIRE_GAP,
                        Direction::Output => node.y() + WIRE_GAP,
                    };
                    let wire = Wire::new(
                        Coordinate::new(node.end_x(), wire_y),
                        Coordinate::new(process_end_x + IMG_MARGIN + drop_offset, wire_y),
                    );

                    let color = wire_color(allocated);
                    allocated += 1;

                    let stroke = color.to_string();
                    let markup = match direction {
                        Direction::Input => {
                            line::arrow_left(wire.start().x(), wire_y, wire.width(), &stroke)
                        }
                        Direction::Output => {
                            line::h_line(wire.start().x(), wire_y, wire.width(), &stroke)
                        }
                    };
                    self.push(markup);

                    let mut connection = Connection::new(color);
                    connection.set_exit(wire);
                    self.connections.insert(
                        RefKey {
                            record: index,
                            direction,
                            index: reference_index,
                        },
                        connection,
                    );

                    drop_offset += LINE_OFFSET;
                    exit_end_x = exit_end_x.max(wire.end().x());
                }
            }
        }

        exit_end_x
    }

    /// Draws glyphs and chain figures for the data column, returning its
    /// maximum x and y extents.
    fn draw_data_column(&mut self) -> (i32, i32) {
        let records = self.chart.data().records();
        let min_level = self.chart.data().min_level();
        let mut width = 0;
        let mut height = 0;

        for index in 0..records.len() {
            let record = &records[index];
            let node = self.data_nodes[index];

            let (end_x, markup) = figure::glyph(record.kind(), node.x(), node.y(), record.label());
            self.data_nodes[index].set_end_x(end_x);
            self.push(markup);

            let chain_start = record.before().is_none();
            let at_origin = record.level() == min_level;

            // Origin-level data items stand alone; only nested declarations
            // join into chains.
            if !at_origin {
                if let Some(before) = record.before() {
                    self.push(joint_between(self.data_nodes[before], node));
                }
                if chain_start {
                    self.push(line::chain_step(node.x(), node.y()));
                }
            }

            width = width.max(end_x);
            height = height.max(node.y());
        }

        (width, height)
    }

    /// Draws the horizontal wires reaching the data column. References held
    /// by top-level process statements become function marks on every
    /// matching data node; routed references get their enter segment, in the
    /// color allocated at exit.
    fn draw_enter_wires(&mut self) {
        let process_records = self.chart.process().records();
        let data_records = self.chart.data().records();
        let min_level = self.chart.process().min_level();

        for data_index in 0..data_records.len() {
            let data_node = self.data_nodes[data_index];
            let data_label = data_records[data_index].label();

            for process_index in 0..process_records.len() {
                let record = &process_records[process_index];
                for (direction, references) in [
                    (Direction::Input, record.inputs()),
                    (Direction::Output, record.outputs()),
                ] {
                    for (reference_index, reference) in references.iter().enumerate() {
                        if reference.name() != data_label {
                            continue;
                        }

                        if record.level() == min_level {
                            let markup = match direction {
                                Direction::Input => {
                                    figure::function_input_mark(data_node.x(), data_node.y())
                                }
                                Direction::Output => {
                                    figure::function_output_mark(data_node.x(), data_node.y())
                                }
                            };
                            self.fragments.push(markup);
                            continue;
                        }

                        let key = RefKey {
                            record: process_index,
                            direction,
                            index: reference_index,
                        };
                        let Some(connection) = self.connections.get_mut(&key) else {
                            continue;
                        };
                        let Some(exit) = connection.exit() else {
                            continue;
                        };

                        let wire_y = match direction {
                            Direction::Input => data_node.y() + WIRE_GAP,
                            Direction::Output => data_node.y() - WIRE_GAP,
                        };
                        let wire = Wire::new(
                            Coordinate::new(exit.end().x(), wire_y),
                            Coordinate::new(data_node.x() - FIGURE_R, wire_y),
                        );
                        connection.set_enter(wire);

                        let stroke = connection.color().to_string();
                        let markup = match direction {
                            Direction::Input => {
                                line::h_line(wire.start().x(), wire_y, wire.width(), &stroke)
                            }
                            Direction::Output => {
                                line::arrow_right(wire.start().x(), wire_y, wire.width(), &stroke)
                            }
                        };
                        self.fragments.push(markup);
                    }
                }
            }
        }
    }

    /// Joins every fully routed connection with one vertical segment, drawn
    /// top to bottom whichever side is higher.
    fn draw_vertical_joins(&mut self) {
        let records = self.chart.process().records();
        let min_level = self.chart.process().min_level();

        for index in 0..records.len() {
            let record = &records[index];
            if record.level() == min_level {
                continue;
            }

            for (direction, references) in [
                (Direction::Input, record.inputs()),
                (Direction::Output, record.outputs()),
            ] {
                for reference_index in 0..references.len() {
                    let key = RefKey {
                        record: index,
                        direction,
                        index: reference_index,
                    };
                    let Some(connection) = self.connections.get_mut(&key) else {
                        continue;
                    };
                    let (Some(exit), Some(enter)) = (connection.exit(), connection.enter()) else {
                        continue;
                    };

                    let top = enter.start().y().min(exit.end().y());
                    let bottom = enter.start().y().max(exit.end().y());
                    let wire = Wire::new(
                        Coordinate::new(enter.start().x(), top),
                        Coordinate::new(enter.start().x(), bottom),
                    );
                    connection.set_span(wire);

                    let stroke = connection.color().to_string();
                    self.fragments
                        .push(line::v_line(wire.start().x(), top, wire.height(), &stroke));
                }
            }
        }
    }

    /// Wraps the collected fragments in the sized root element and
    /// background rectangle.
    fn finish(self, width: i32, height: i32) -> String {
        let background = self.background;
        let mut document = Vec::with_capacity(self.fragments.len() + 3);
        document.push(format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" style="background-color: {background}">"#
        ));
        document.push(format!(
            r#"<rect x="0" y="0" width="{width}" height="{height}" fill="{background}" stroke="{background}"/>"#
        ));
        document.extend(self.fragments);
        document.push("</svg>".to_string());
        document.join("\n")
    }

    fn push(&mut self, markup: String) {
        if !markup.is_empty() {
            self.fragments.push(markup);
        }
    }
}

/// Assigns grid coordinates to a sequence's records: one row per record,
/// indented by its level relative to the sequence origin.
fn place_nodes(origin_x: i32, origin_y: i32, sequence: &Sequence) -> Vec<ChartNode> {
    sequence
        .records()
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let shift = (record.level() - sequence.min_level()) as i32;
            ChartNode::new(Coordinate::new(
                origin_x + shift * LEVEL_SHIFT,
                origin_y + row as i32 * LEVEL_SHIFT,
            ))
        })
        .collect()
}

/// Vertical joint from the bottom of one glyph to the top of the next in
/// its chain.
fn joint_between(before: ChartNode, current: ChartNode) -> String {
    let from_y = before.y() + FIGURE_R;
    let to_y = current.y() - FIGURE_R;
    line::v_line(current.x(), from_y, to_y - from_y, line::STROKE)
}
