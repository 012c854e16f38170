//! A render pass over one surface.
//!
//! [`Plotter`] reads the surface dimensions once and draws every component
//! against that snapshot, so axes and curves agree on the center even if the
//! surface reports a different size mid-pass.

use crate::annotate::Annotation;
use crate::axes::{AxisReport, AxisSpec};
use crate::color::Rgba;
use crate::curve::{CurveReport, PlotSpec};
use crate::error::Result;
use crate::geometry::{CartesianPoint, Dimensions};
use crate::mapping::CoordinateMapper;
use crate::sample::PlotFn;
use crate::surface::DrawingSurface;

/// Borrowing render pass.
///
/// # Example
///
/// ```
/// use fnplot::prelude::*;
///
/// let mut fb = Framebuffer::new(750, 250).unwrap();
/// let mut plot = Plotter::new(&mut fb);
/// plot.background(Rgba::WHITE);
/// plot.axes(&AxisSpec::new(40.0, 4)).unwrap();
/// plot.curve(&f64::sin, &PlotSpec::new(-9.0, 9.0, 40.0).color(Rgba::BLUE)).unwrap();
/// plot.point(&f64::sin, &Annotation::new(1.0, 40.0)).unwrap();
/// ```
pub struct Plotter<'s, S: DrawingSurface + ?Sized> {
    surface: &'s mut S,
    mapper: CoordinateMapper,
}

impl<'s, S: DrawingSurface + ?Sized> Plotter<'s, S> {
    /// Start a pass, snapshotting the current surface dimensions.
    pub fn new(surface: &'s mut S) -> Self {
        let mapper = CoordinateMapper::for_surface(&*surface);
        log::trace!(
            target: "fnplot",
            "render pass {}x{}",
            mapper.dimensions().width,
            mapper.dimensions().height
        );
        Self { surface, mapper }
    }

    /// Dimensions this pass draws against.
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.mapper.dimensions()
    }

    /// Mapper for this pass.
    #[must_use]
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Fill the whole surface.
    pub fn background(&mut self, color: Rgba) {
        self.surface.fill(color);
    }

    /// Draw axes and ticks.
    ///
    /// # Errors
    ///
    /// See [`crate::axes::render_axes`].
    pub fn axes(&mut self, spec: &AxisSpec) -> Result<AxisReport> {
        spec.draw(&mut *self.surface, &self.mapper)
    }

    /// Draw one curve.
    ///
    /// # Errors
    ///
    /// See [`crate::curve::render_curve`].
    pub fn curve<F: PlotFn + ?Sized>(&mut self, f: &F, spec: &PlotSpec) -> Result<CurveReport> {
        spec.draw(&mut *self.surface, &self.mapper, f)
    }

    /// Annotate one point.
    ///
    /// # Errors
    ///
    /// See [`crate::annotate::render_point`].
    pub fn point<F: PlotFn + ?Sized>(
        &mut self,
        f: &F,
        annotation: &Annotation,
    ) -> Result<Option<CartesianPoint>> {
        annotation.draw(&mut *self.surface, &self.mapper, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelPoint;
    use crate::surface::RecordingSurface;

    #[test]
    fn test_pass_keeps_dimension_snapshot() {
        let mut surface = RecordingSurface::new(100, 100);
        {
            let mut plot = Plotter::new(&mut surface);
            plot.axes(&AxisSpec::new(10.0, 2)).unwrap();
        }
        let before = surface.len();

        // A later pass sees the new size.
        surface.resize(200, 50);
        let mut plot = Plotter::new(&mut surface);
        assert_eq!(plot.dimensions(), Dimensions::new(200, 50));
        plot.curve(&|x: f64| x, &PlotSpec::new(0.0, 0.0, 1.0)).unwrap();

        let (from, _) = surface.lines().nth(before).unwrap();
        assert_eq!(from, PixelPoint::new(100, 25));
    }

    #[test]
    fn test_draws_layer_in_call_order() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut plot = Plotter::new(&mut surface);
        plot.background(Rgba::WHITE);
        plot.curve(&|x: f64| x, &PlotSpec::new(0.0, 1.0, 1.0)).unwrap();
        plot.point(&|x: f64| x, &Annotation::new(1.0, 1.0)).unwrap();

        let kinds: Vec<&str> = surface
            .commands()
            .iter()
            .map(|c| match c {
                crate::surface::DrawCommand::Fill(_) => "fill",
                crate::surface::DrawCommand::Line { .. } => "line",
                crate::surface::DrawCommand::Marker { .. } => "marker",
                crate::surface::DrawCommand::Text { .. } => "text",
            })
            .collect();
        assert_eq!(kinds, vec!["fill", "line", "line", "marker", "text"]);
    }

    #[test]
    fn test_mapper_exposed_for_raw_transforms() {
        let mut surface = RecordingSurface::new(750, 250);
        let plot = Plotter::new(&mut surface);
        assert_eq!(plot.mapper().to_pixel_x(100.0), Some(475));
    }
}
