//! Axis lines and tick marks.
//!
//! The x-axis spans the full surface width at Cartesian `y = 0` and the
//! y-axis spans the full height at `x = 0`. Ticks sit every `scale` pixels
//! outward from the origin and stop at the last one that still fits inside
//! the half-extent.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::CartesianPoint;
use crate::mapping::CoordinateMapper;
use crate::style::PlotStyle;
use crate::surface::DrawingSurface;

// ============================================================================
// Axis specification
// ============================================================================

/// Parameters for one axis render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSpec {
    /// Tick spacing in pixels (pixels per Cartesian unit).
    pub scale: f64,
    /// Tick length in pixels.
    pub tick_length: u32,
    /// Axis and tick color.
    pub color: Rgba,
    /// Axis and tick line width in pixels.
    pub line_width: u32,
}

impl AxisSpec {
    /// Black single-pixel axes.
    #[must_use]
    pub fn new(scale: f64, tick_length: u32) -> Self {
        Self {
            scale,
            tick_length,
            color: Rgba::BLACK,
            line_width: 1,
        }
    }

    /// Axes colored and sized by a style.
    #[must_use]
    pub fn from_style(scale: f64, style: &PlotStyle) -> Self {
        Self::new(scale, style.tick_length)
            .color(style.axis_color)
            .line_width(style.axis_width)
    }

    /// Set axis color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set axis line width.
    #[must_use]
    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Check parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `scale` is not a finite
    /// positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::invalid(
                "scale",
                format!("must be finite and > 0, got {}", self.scale),
            ));
        }
        Ok(())
    }

    /// Draw axes and ticks against an existing dimensions snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an invalid spec, before any
    /// draw call.
    pub fn draw<S>(&self, surface: &mut S, mapper: &CoordinateMapper) -> Result<AxisReport>
    where
        S: DrawingSurface + ?Sized,
    {
        self.validate()?;

        let dims = mapper.dimensions();
        let half_w = dims.half_width();
        let half_h = dims.half_height();
        let tick = f64::from(self.tick_length);

        // floor(-w / 2) keeps odd widths covered edge to edge.
        let left = (-i64::from(dims.width)).div_euclid(2) as f64;
        let bottom = (-i64::from(dims.height)).div_euclid(2) as f64;

        self.line(surface, mapper, (left, 0.0), (half_w as f64, 0.0));
        self.line(surface, mapper, (0.0, bottom), (0.0, half_h as f64));

        let mut report = AxisReport::default();
        for d in tick_offsets(self.scale, half_w) {
            self.line(surface, mapper, (d, 0.0), (d, -tick));
            self.line(surface, mapper, (-d, 0.0), (-d, -tick));
            report.x_ticks += 1;
        }
        for d in tick_offsets(self.scale, half_h) {
            self.line(surface, mapper, (0.0, d), (-tick, d));
            self.line(surface, mapper, (0.0, -d), (-tick, -d));
            report.y_ticks += 1;
        }

        log::trace!(
            target: "fnplot",
            "axes scale={} x_ticks={} y_ticks={}",
            self.scale,
            report.x_ticks,
            report.y_ticks
        );
        Ok(report)
    }

    fn line<S>(&self, surface: &mut S, mapper: &CoordinateMapper, a: (f64, f64), b: (f64, f64))
    where
        S: DrawingSurface + ?Sized,
    {
        let from = mapper.to_pixel(CartesianPoint::new(a.0, a.1));
        let to = mapper.to_pixel(CartesianPoint::new(b.0, b.1));
        if let (Some(from), Some(to)) = (from, to) {
            surface.draw_line(from, to, self.color, self.line_width);
        }
    }
}

/// Ticks drawn by one axis render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisReport {
    /// Ticks on each side of the origin along x.
    pub x_ticks: usize,
    /// Ticks on each side of the origin along y.
    pub y_ticks: usize,
}

/// `k * scale` for `k = 1, 2, ...` while it fits in `half`.
fn tick_offsets(scale: f64, half: i64) -> impl Iterator<Item = f64> {
    let half = half as f64;
    (1u64..)
        .map(move |k| k as f64 * scale)
        .take_while(move |&d| d <= half)
}

// ============================================================================
// Entry point
// ============================================================================

/// Draw both axes with ticks onto `surface`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `spec.scale` is not finite and
/// positive; nothing is drawn in that case.
///
/// # Example
///
/// ```
/// use fnplot::axes::{render_axes, AxisSpec};
/// use fnplot::framebuffer::Framebuffer;
///
/// let mut fb = Framebuffer::new(750, 250).unwrap();
/// let report = render_axes(&mut fb, &AxisSpec::new(40.0, 4)).unwrap();
/// assert_eq!(report.x_ticks, 9);
/// assert_eq!(report.y_ticks, 3);
/// ```
pub fn render_axes<S>(surface: &mut S, spec: &AxisSpec) -> Result<AxisReport>
where
    S: DrawingSurface + ?Sized,
{
    let mapper = CoordinateMapper::for_surface(&*surface);
    spec.draw(surface, &mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelPoint;
    use crate::surface::{DrawCommand, RecordingSurface};

    #[test]
    fn test_reference_tick_counts() {
        let mut surface = RecordingSurface::new(750, 250);
        let report = render_axes(&mut surface, &AxisSpec::new(40.0, 4)).unwrap();

        assert_eq!(report, AxisReport { x_ticks: 9, y_ticks: 3 });
        assert_eq!(surface.lines().count(), 2 + 2 * 9 + 2 * 3);
    }

    #[test]
    fn test_axis_lines_span_surface() {
        let mut surface = RecordingSurface::new(750, 250);
        render_axes(&mut surface, &AxisSpec::new(40.0, 4)).unwrap();
        let lines: Vec<_> = surface.lines().collect();

        assert_eq!(lines[0], (PixelPoint::new(0, 125), PixelPoint::new(750, 125)));
        assert_eq!(lines[1], (PixelPoint::new(375, 250), PixelPoint::new(375, 0)));
    }

    #[test]
    fn test_odd_dimensions_cover_edges() {
        let mut surface = RecordingSurface::new(11, 7);
        render_axes(&mut surface, &AxisSpec::new(100.0, 2)).unwrap();
        let lines: Vec<_> = surface.lines().collect();

        // center (5, 3); floor(-11 / 2) = -6
        assert_eq!(lines[0], (PixelPoint::new(-1, 3), PixelPoint::new(10, 3)));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_tick_geometry() {
        let mut surface = RecordingSurface::new(100, 100);
        render_axes(&mut surface, &AxisSpec::new(25.0, 4)).unwrap();
        let lines: Vec<_> = surface.lines().collect();

        // First x tick pair hangs below the axis.
        assert_eq!(lines[2], (PixelPoint::new(75, 50), PixelPoint::new(75, 54)));
        assert_eq!(lines[3], (PixelPoint::new(25, 50), PixelPoint::new(25, 54)));
        // First y tick pair extends left of the axis.
        let y_first = 2 + 2 * 2;
        assert_eq!(lines[y_first], (PixelPoint::new(50, 25), PixelPoint::new(46, 25)));
        assert_eq!(lines[y_first + 1], (PixelPoint::new(50, 75), PixelPoint::new(46, 75)));
    }

    #[test]
    fn test_tick_at_exact_half_extent_is_drawn() {
        let mut surface = RecordingSurface::new(80, 80);
        let report = render_axes(&mut surface, &AxisSpec::new(40.0, 1)).unwrap();
        assert_eq!(report.x_ticks, 1);
    }

    #[test]
    fn test_invalid_scale_draws_nothing() {
        for scale in [0.0, -40.0, f64::NAN, f64::INFINITY] {
            let mut surface = RecordingSurface::new(750, 250);
            let err = render_axes(&mut surface, &AxisSpec::new(scale, 4)).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "scale", .. }));
            assert!(surface.is_empty());
        }
    }

    #[test]
    fn test_style_colors_every_line() {
        let style = PlotStyle::pretty();
        let mut surface = RecordingSurface::new(200, 200);
        render_axes(&mut surface, &AxisSpec::from_style(40.0, &style)).unwrap();

        assert!(surface.commands().iter().all(|c| matches!(
            c,
            DrawCommand::Line { color, .. } if *color == style.axis_color
        )));
    }

    #[test]
    fn test_zero_tick_length_still_issues_ticks() {
        let mut surface = RecordingSurface::new(100, 100);
        let report = render_axes(&mut surface, &AxisSpec::new(10.0, 0)).unwrap();
        assert_eq!(report.x_ticks, 5);
        assert_eq!(surface.lines().count(), 2 + 2 * 5 + 2 * 5);
    }
}
