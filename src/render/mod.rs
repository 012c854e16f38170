//! Rasterization for the framebuffer surface.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: Non-antialiased lines, widened by parallel passes
//! - **Cohen–Sutherland**: Segment clipping ahead of rasterization
//! - **Midpoint Circle**: Filled circle rendering
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."

pub(crate) mod primitives;

pub use primitives::{draw_circle, draw_line};
