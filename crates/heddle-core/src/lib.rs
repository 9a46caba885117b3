//! Heddle Core Types and Definitions
//!
//! This crate provides the foundational types for the Heddle process-chart
//! compiler. It includes:
//!
//! - **Colors**: Validated hex colors and the wire palette ([`color`] module)
//! - **Geometry**: Integer diagram-space types ([`geometry`] module)
//! - **Semantic**: The statement model threaded through the pipeline
//!   ([`semantic`] module)
//! - **Draw**: SVG markup primitives for glyphs, lines, and text
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
