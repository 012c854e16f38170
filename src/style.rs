//! Visual configuration shared by every renderer.
//!
//! One [`PlotStyle`] drives the whole engine. [`PlotStyle::plain`] draws the
//! minimal black-on-white look with single-pixel point curves;
//! [`PlotStyle::pretty`] uses a soft background, gray axes, segment curves at
//! double detail and bold labels.

use crate::color::Rgba;

/// Font description passed through to [`crate::surface::DrawingSurface::draw_text`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct Font {
    /// Font family name.
    pub family: String,
    /// Size in points.
    pub size: f32,
    /// Bold weight.
    pub bold: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            size: 12.0,
            bold: false,
        }
    }
}

impl Font {
    /// Create a regular-weight font.
    #[must_use]
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
        }
    }

    /// Set bold weight.
    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

/// Colors, widths and defaults for a render pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct PlotStyle {
    /// Surface fill applied before drawing (`None` keeps the surface as is).
    pub background: Option<Rgba>,
    /// Axis and tick color.
    pub axis_color: Rgba,
    /// Axis and tick line width in pixels.
    pub axis_width: u32,
    /// Tick length in pixels.
    pub tick_length: u32,
    /// Default curve color.
    pub curve_color: Rgba,
    /// Default curve line width in pixels.
    pub curve_width: u32,
    /// Default sampling subdivision per unit of scale.
    pub detail: u32,
    /// Annotation marker radius in pixels.
    pub marker_radius: u32,
    /// Annotation label offset from the marker center, in pixels.
    pub label_offset: (i64, i64),
    /// Annotation label font.
    pub label_font: Font,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self::plain()
    }
}

impl PlotStyle {
    /// Black axes, no background fill, single-pixel point curves.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            background: None,
            axis_color: Rgba::BLACK,
            axis_width: 1,
            tick_length: 4,
            curve_color: Rgba::BLACK,
            curve_width: 1,
            detail: 1,
            marker_radius: 3,
            label_offset: (40, -15),
            label_font: Font::default(),
        }
    }

    /// Light background, gray axes, segment curves at detail 2, bold labels.
    #[must_use]
    pub fn pretty() -> Self {
        Self {
            background: Some(Rgba::rgb(0xF0, 0xF2, 0xF5)),
            axis_color: Rgba::rgb(0x68, 0x70, 0x78),
            detail: 2,
            label_font: Font::new("Didot", 14.0).bold(true),
            ..Self::plain()
        }
    }
}
