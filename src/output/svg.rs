//! SVG output encoder.
//!
//! A vector [`DrawingSurface`]: every draw call becomes one SVG element, so
//! the result scales cleanly and keeps text labels, which the raster
//! surface cannot draw.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::PixelPoint;
use crate::render::primitives::{clip_segment, ClipRect};
use crate::style::Font;
use crate::surface::DrawingSurface;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Radius used for zero-radius markers so single-pixel dots stay visible.
const DOT_RADIUS: f64 = 0.5;

/// SVG encoder and vector drawing surface.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Filled circle
    Circle { cx: f64, cy: f64, r: f64, fill: Rgba },
    /// Line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        stroke_width: u32,
    },
    /// Text centered on (x, y)
    Text {
        x: f64,
        y: f64,
        text: String,
        font: Font,
        fill: Rgba,
    },
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions and a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Elements added so far.
    #[must_use]
    pub fn elements(&self) -> &[SvgElement] {
        &self.elements
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        // SVG header
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        // Background
        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(bg)
            );
        }

        // Elements
        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        // Close SVG
        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }

    /// Visible area grown by `margin` pixels on every side.
    fn bounds(&self, margin: f64) -> ClipRect {
        ClipRect {
            min_x: -margin,
            min_y: -margin,
            max_x: f64::from(self.width) + margin,
            max_y: f64::from(self.height) + margin,
        }
    }
}

impl DrawingSurface for SvgEncoder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: u32) {
        let bounds = self.bounds(f64::from(width) + 1.0);
        if let Some(((x1, y1), (x2, y2))) = clip_segment(
            (from.x as f64, from.y as f64),
            (to.x as f64, to.y as f64),
            bounds,
        ) {
            self.add_element(SvgElement::Line {
                x1,
                y1,
                x2,
                y2,
                stroke: color,
                stroke_width: width.max(1),
            });
        }
    }

    fn draw_marker(&mut self, center: PixelPoint, radius: u32, color: Rgba) {
        let r = if radius == 0 { DOT_RADIUS } else { f64::from(radius) };
        let bounds = self.bounds(r);
        let (cx, cy) = (center.x as f64, center.y as f64);
        if cx < bounds.min_x || cx > bounds.max_x || cy < bounds.min_y || cy > bounds.max_y {
            return;
        }
        self.add_element(SvgElement::Circle { cx, cy, r, fill: color });
    }

    fn draw_text(&mut self, anchor: PixelPoint, text: &str, font: &Font, color: Rgba) {
        self.add_element(SvgElement::Text {
            x: anchor.x as f64,
            y: anchor.y as f64,
            text: text.to_string(),
            font: font.clone(),
            fill: color,
        });
    }

    fn fill(&mut self, color: Rgba) {
        self.background = Some(color);
        self.elements.clear();
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

/// Escape XML special characters.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Circle { cx, cy, r, fill } => {
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"/>"#, rgba_to_css(*fill))
        }
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                rgba_to_css(*stroke)
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font,
            fill,
        } => {
            let weight = if font.bold { r#" font-weight="bold""# } else { "" };
            format!(
                r#"<text x="{x}" y="{y}" text-anchor="middle" dominant-baseline="middle" font-family="{}" font-size="{}"{weight} fill="{}">{}</text>"#,
                escape_xml(&font.family),
                font.size,
                rgba_to_css(*fill),
                escape_xml(text)
            )
        }
    }
}
