//! # fnplot
//!
//! Plots scalar functions `y = f(x)` onto pixel surfaces.
//!
//! The core is a coordinate transform between Cartesian math space (origin
//! at the surface center, y up) and raster space (origin top-left, y down),
//! plus the renderers built on it: axes with evenly spaced ticks, curves
//! sampled at a fixed step, and labeled point annotations. Everything draws
//! through the [`surface::DrawingSurface`] trait.
//!
//! ## Quick Start
//!
//! ```rust
//! use fnplot::prelude::*;
//!
//! let mut fb = Framebuffer::new(750, 250)?;
//! fb.clear(Rgba::WHITE);
//!
//! render_axes(&mut fb, &AxisSpec::new(40.0, 4))?;
//! render_curve(&mut fb, &f64::sin, &PlotSpec::new(-20.0, 20.0, 40.0).color(Rgba::BLUE))?;
//!
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), fnplot::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML scene files ([`scene::Scene::load`])
//! - `cli`: the `fnplot` command-line renderer

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and parsing.
pub mod color;

/// Cartesian and pixel points, surface dimensions.
pub mod geometry;

/// Cartesian to pixel coordinate mapping.
pub mod mapping;

/// Colors, widths and fonts.
pub mod style;

/// Function evaluation and sample positions.
pub mod sample;

// ============================================================================
// Renderers
// ============================================================================

/// Axis lines and ticks.
pub mod axes;

/// Curve sampling and rendering.
pub mod curve;

/// Point markers and coordinate labels.
pub mod annotate;

/// Single-snapshot render passes.
pub mod plotter;

/// Named functions.
pub mod catalog;

/// Whole-plot descriptions.
pub mod scene;

// ============================================================================
// Surfaces and Output
// ============================================================================

/// The drawing surface trait and a recording implementation.
pub mod surface;

/// RGBA raster surface.
pub mod framebuffer;

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for fnplot operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use fnplot::prelude::*;
/// ```
pub mod prelude {
    pub use crate::annotate::{render_point, Annotation};
    pub use crate::axes::{render_axes, AxisSpec};
    pub use crate::color::Rgba;
    pub use crate::curve::{render_curve, PlotSpec, RenderMode};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{CartesianPoint, Dimensions, PixelPoint};
    pub use crate::mapping::CoordinateMapper;
    pub use crate::output::{PngEncoder, SvgEncoder};
    pub use crate::plotter::Plotter;
    pub use crate::sample::{Fallible, PlotFn, Stepping};
    pub use crate::scene::Scene;
    pub use crate::style::{Font, PlotStyle};
    pub use crate::surface::{DrawingSurface, RecordingSurface};
}
