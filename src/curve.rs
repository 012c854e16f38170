//! Curve sampling and rendering.
//!
//! A curve is `y = f(x)` walked over `[start_x, end_x]` at a fixed step.
//! Every Cartesian coordinate is multiplied by `scale` before it goes
//! through the [`CoordinateMapper`], so one unit of x spans `scale` pixels.
//!
//! # Modes
//!
//! - [`RenderMode::Points`]: step `1 / scale`, one single-pixel marker per
//!   sample.
//! - [`RenderMode::Segments`]: step `1 / (scale * detail)`, one line from
//!   each sample to the next.
//!
//! # Failure isolation
//!
//! A sample that fails to evaluate is skipped along with every segment
//! touching it. Rendering continues with the next sample and the skip is
//! counted in the returned [`CurveReport`].

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{CartesianPoint, PixelPoint};
use crate::mapping::CoordinateMapper;
use crate::sample::{PlotFn, Stepping, Stride};
use crate::style::PlotStyle;
use crate::surface::DrawingSurface;

/// How samples are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum RenderMode {
    /// Unconnected single-pixel dots.
    Points,
    /// Connected polyline.
    #[default]
    Segments,
}

// ============================================================================
// Plot specification
// ============================================================================

/// One curve render job. The function is passed alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSpec {
    /// First sampled x.
    pub start_x: f64,
    /// Sampling stops at the first x beyond this.
    pub end_x: f64,
    /// Pixels per Cartesian unit.
    pub scale: f64,
    /// Subdivisions of each `1 / scale` step in segment mode.
    pub detail: u32,
    /// Curve color.
    pub color: Rgba,
    /// Segment width in pixels.
    pub line_width: u32,
    /// Points or segments.
    pub mode: RenderMode,
    /// How sample positions advance.
    pub stepping: Stepping,
}

impl PlotSpec {
    /// A black single-pixel polyline over `[start_x, end_x]`.
    #[must_use]
    pub fn new(start_x: f64, end_x: f64, scale: f64) -> Self {
        Self {
            start_x,
            end_x,
            scale,
            detail: 1,
            color: Rgba::BLACK,
            line_width: 1,
            mode: RenderMode::Segments,
            stepping: Stepping::Indexed,
        }
    }

    /// Color, width and detail taken from a style.
    #[must_use]
    pub fn from_style(start_x: f64, end_x: f64, scale: f64, style: &PlotStyle) -> Self {
        Self::new(start_x, end_x, scale)
            .color(style.curve_color)
            .line_width(style.curve_width)
            .detail(style.detail)
    }

    /// Set detail.
    #[must_use]
    pub fn detail(mut self, detail: u32) -> Self {
        self.detail = detail;
        self
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set line width.
    #[must_use]
    pub fn line_width(mut self, width: u32) -> Self {
        self.line_width = width;
        self
    }

    /// Set render mode.
    #[must_use]
    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set stepping strategy.
    #[must_use]
    pub fn stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    /// Sampling step in Cartesian units.
    #[must_use]
    pub fn step(&self) -> f64 {
        match self.mode {
            RenderMode::Points => 1.0 / self.scale,
            RenderMode::Segments => 1.0 / (self.scale * f64::from(self.detail)),
        }
    }

    /// Sample positions for this spec.
    #[must_use]
    pub fn stride(&self) -> Stride {
        Stride::new(self.start_x, self.end_x, self.step(), self.stepping)
    }

    /// Check parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a non-finite or non-positive
    /// scale, non-finite or reversed bounds, zero detail, point mode with
    /// detail above one, or a step that underflows to zero.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::invalid(
                "scale",
                format!("must be finite and > 0, got {}", self.scale),
            ));
        }
        if !self.start_x.is_finite() || !self.end_x.is_finite() {
            return Err(Error::invalid(
                "interval",
                format!("bounds must be finite, got [{}, {}]", self.start_x, self.end_x),
            ));
        }
        if self.start_x > self.end_x {
            return Err(Error::invalid(
                "interval",
                format!("start {} is after end {}", self.start_x, self.end_x),
            ));
        }
        if self.detail == 0 {
            return Err(Error::invalid("detail", "must be at least 1"));
        }
        if self.mode == RenderMode::Points && self.detail > 1 {
            return Err(Error::invalid(
                "detail",
                format!("point mode samples once per pixel, got detail {}", self.detail),
            ));
        }
        let step = self.step();
        if !step.is_finite() || step <= 0.0 {
            return Err(Error::invalid("scale", format!("step {step} is not positive")));
        }
        Ok(())
    }

    /// Draw the curve against an existing dimensions snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an invalid spec, before any
    /// draw call. Per-sample failures never surface here.
    pub fn draw<S, F>(&self, surface: &mut S, mapper: &CoordinateMapper, f: &F) -> Result<CurveReport>
    where
        S: DrawingSurface + ?Sized,
        F: PlotFn + ?Sized,
    {
        self.validate()?;

        let sampler = Sampler {
            f,
            mapper,
            scale: self.scale,
        };
        let report = match self.mode {
            RenderMode::Points => self.draw_points(surface, &sampler),
            RenderMode::Segments => self.draw_segments(surface, &sampler),
        };

        log::trace!(
            target: "fnplot",
            "curve [{}, {}] samples={} drawn={} skipped={}",
            self.start_x,
            self.end_x,
            report.samples,
            report.drawn,
            report.skipped
        );
        Ok(report)
    }

    fn draw_points<S, F>(&self, surface: &mut S, sampler: &Sampler<'_, F>) -> CurveReport
    where
        S: DrawingSurface + ?Sized,
        F: PlotFn + ?Sized,
    {
        let mut report = CurveReport::default();
        for x in self.stride() {
            report.samples += 1;
            match sampler.pixel(x) {
                Some(p) => {
                    surface.draw_marker(p, 0, self.color);
                    report.drawn += 1;
                }
                None => report.skipped += 1,
            }
        }
        report
    }

    fn draw_segments<S, F>(&self, surface: &mut S, sampler: &Sampler<'_, F>) -> CurveReport
    where
        S: DrawingSurface + ?Sized,
        F: PlotFn + ?Sized,
    {
        let mut report = CurveReport::default();
        let mut stride = self.stride();
        // Right end of the previous segment, reused as the next left end.
        let mut carried: Option<(f64, Option<PixelPoint>)> = None;

        while let Some(x) = stride.next() {
            report.samples += 1;
            let head = match carried.take() {
                Some((cx, p)) if cx == x => p,
                _ => sampler.pixel(x),
            };
            let x_next = stride.next_position();
            let tail = sampler.pixel(x_next);

            match (head, tail) {
                (Some(a), Some(b)) => {
                    surface.draw_line(a, b, self.color, self.line_width);
                    report.drawn += 1;
                }
                _ => report.skipped += 1,
            }
            carried = Some((x_next, tail));
        }
        report
    }
}

/// Draw calls issued by one curve render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurveReport {
    /// Sample positions visited.
    pub samples: usize,
    /// Markers or segments drawn.
    pub drawn: usize,
    /// Markers or segments skipped because a sample failed.
    pub skipped: usize,
}

struct Sampler<'a, F: ?Sized> {
    f: &'a F,
    mapper: &'a CoordinateMapper,
    scale: f64,
}

impl<F: PlotFn + ?Sized> Sampler<'_, F> {
    /// Evaluate and map one sample, logging failures.
    fn pixel(&self, x: f64) -> Option<PixelPoint> {
        let y = match self.f.eval(x) {
            Ok(y) => y,
            Err(err) => {
                log::debug!(target: "fnplot", "skipping sample: {err}");
                return None;
            }
        };
        let point = CartesianPoint::new(x, y).scaled(self.scale);
        let pixel = self.mapper.to_pixel(point);
        if pixel.is_none() {
            log::debug!(target: "fnplot", "skipping sample at x = {x}: {y} overflows when scaled");
        }
        pixel
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Render `f` over the interval described by `spec`.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for an invalid spec; nothing is drawn
/// in that case.
///
/// # Example
///
/// ```
/// use fnplot::curve::{render_curve, PlotSpec, RenderMode};
/// use fnplot::surface::RecordingSurface;
///
/// let mut surface = RecordingSurface::new(750, 250);
/// let spec = PlotSpec::new(-2.0, 2.0, 1.0).mode(RenderMode::Points);
/// let report = render_curve(&mut surface, &|x: f64| x * x, &spec).unwrap();
/// assert_eq!(report.samples, 5);
/// ```
pub fn render_curve<S, F>(surface: &mut S, f: &F, spec: &PlotSpec) -> Result<CurveReport>
where
    S: DrawingSurface + ?Sized,
    F: PlotFn + ?Sized,
{
    let mapper = CoordinateMapper::for_surface(&*surface);
    spec.draw(surface, &mapper, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::Fallible;
    use crate::surface::{DrawCommand, RecordingSurface};
    use std::cell::Cell;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn test_point_mode_square() {
        let mut surface = RecordingSurface::new(750, 250);
        let spec = PlotSpec::new(-2.0, 2.0, 1.0).mode(RenderMode::Points);
        let report = render_curve(&mut surface, &square, &spec).unwrap();

        assert_eq!(report, CurveReport { samples: 5, drawn: 5, skipped: 0 });
        let markers: Vec<_> = surface.markers().collect();
        // y(0) = 0 at the center row, y(2) = 4 four rows above.
        assert_eq!(markers[2], PixelPoint::new(375, 125));
        assert_eq!(markers[4], PixelPoint::new(377, 121));
        assert!(surface.commands().iter().all(|c| matches!(
            c,
            DrawCommand::Marker { radius: 0, .. }
        )));
    }

    #[test]
    fn test_segment_mode_connects_samples() {
        let mut surface = RecordingSurface::new(100, 100);
        let spec = PlotSpec::new(0.0, 2.0, 10.0);
        let report = render_curve(&mut surface, &|x: f64| x, &spec).unwrap();

        assert_eq!(report.samples, 21);
        assert_eq!(report.drawn, 21);
        let lines: Vec<_> = surface.lines().collect();
        assert!(lines.windows(2).all(|w| w[0].1 == w[1].0));
        assert_eq!(lines[0].0, PixelPoint::new(50, 50));
        // The last segment reaches one step past end.
        assert_eq!(lines[20].1, PixelPoint::new(71, 29));
    }

    #[test]
    fn test_reciprocal_skips_only_segments_at_pole() {
        let mut surface = RecordingSurface::new(100, 100);
        let spec = PlotSpec::new(-1.0, 1.0, 1.0);
        let report = render_curve(&mut surface, &|x: f64| 1.0 / x, &spec).unwrap();

        // Samples -1, 0, 1: the segments [-1, 0] and [0, 1] touch the pole,
        // the segment [1, 2] does not.
        assert_eq!(report, CurveReport { samples: 3, drawn: 1, skipped: 2 });
        assert_eq!(surface.lines().count(), 1);
    }

    #[test]
    fn test_fallible_domain_error_is_isolated() {
        let f = Fallible(|x: f64| {
            if (x - 0.5).abs() < 1e-9 {
                Err("asymptote")
            } else {
                Ok(x)
            }
        });
        let mut surface = RecordingSurface::new(100, 100);
        let spec = PlotSpec::new(0.0, 1.0, 4.0).mode(RenderMode::Points);
        let report = render_curve(&mut surface, &f, &spec).unwrap();

        assert_eq!(report, CurveReport { samples: 5, drawn: 4, skipped: 1 });
    }

    #[test]
    fn test_detail_refines_step() {
        let spec = PlotSpec::new(0.0, 1.0, 10.0).detail(4);
        assert!((spec.step() - 0.025).abs() < 1e-15);
        assert_eq!(spec.stride().count(), 41);

        let points = PlotSpec::new(0.0, 1.0, 10.0).mode(RenderMode::Points);
        assert!((points.step() - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_each_sample_evaluated_once() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x
        };
        let mut surface = RecordingSurface::new(100, 100);
        let spec = PlotSpec::new(0.0, 1.0, 10.0);
        render_curve(&mut surface, &f, &spec).unwrap();

        // 11 samples plus the right end of the last segment.
        assert_eq!(calls.get(), 12);
    }

    #[test]
    fn test_accumulated_stepping_renders() {
        let mut surface = RecordingSurface::new(100, 100);
        let spec = PlotSpec::new(-2.0, 2.0, 2.0).stepping(Stepping::Accumulated);
        let report = render_curve(&mut surface, &square, &spec).unwrap();

        assert_eq!(report.samples, 9);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_accumulated_step_below_precision_renders_once() {
        // 1e20 + 1 == 1e20, so the walk stops after the first sample.
        let mut surface = RecordingSurface::new(100, 100);
        let spec = PlotSpec::new(1e20, 2e20, 1.0).stepping(Stepping::Accumulated);
        let report = render_curve(&mut surface, &|x: f64| x, &spec).unwrap();

        assert_eq!(report, CurveReport { samples: 1, drawn: 1, skipped: 0 });
    }

    #[test]
    fn test_huge_scale_builds_stride() {
        let spec = PlotSpec::new(0.0, 1.0, 1e300);
        assert!(spec.validate().is_ok());
        let xs: Vec<f64> = spec.stride().take(3).collect();
        assert_eq!(xs.len(), 3);
        assert_eq!(xs[0], 0.0);
    }

    #[test]
    fn test_off_surface_samples_pass_through() {
        let mut surface = RecordingSurface::new(10, 10);
        let spec = PlotSpec::new(-100.0, 100.0, 1.0).mode(RenderMode::Points);
        let report = render_curve(&mut surface, &|x: f64| x, &spec).unwrap();

        assert_eq!(report.drawn, 201);
        assert_eq!(surface.markers().next(), Some(PixelPoint::new(-95, 105)));
    }

    #[test]
    fn test_invalid_specs_draw_nothing() {
        let cases = [
            PlotSpec::new(0.0, 1.0, 0.0),
            PlotSpec::new(0.0, 1.0, -1.0),
            PlotSpec::new(0.0, 1.0, f64::NAN),
            PlotSpec::new(1.0, 0.0, 1.0),
            PlotSpec::new(f64::NEG_INFINITY, 0.0, 1.0),
            PlotSpec::new(0.0, 1.0, 1.0).detail(0),
            PlotSpec::new(0.0, 1.0, 1.0).detail(2).mode(RenderMode::Points),
            PlotSpec::new(0.0, 1.0, f64::MAX).detail(u32::MAX),
        ];
        for spec in cases {
            let mut surface = RecordingSurface::new(100, 100);
            let result = render_curve(&mut surface, &square, &spec);
            assert!(
                matches!(result, Err(Error::InvalidParameter { .. })),
                "{spec:?} should be rejected"
            );
            assert!(surface.is_empty());
        }
    }

    #[test]
    fn test_style_defaults() {
        let spec = PlotSpec::from_style(0.0, 1.0, 80.0, &PlotStyle::pretty());
        assert_eq!(spec.detail, 2);
        assert_eq!(spec.mode, RenderMode::Segments);
    }
}
