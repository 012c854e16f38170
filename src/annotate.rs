//! Single-point annotation: a filled marker plus an `"(x, y)"` label.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::CartesianPoint;
use crate::mapping::CoordinateMapper;
use crate::sample::PlotFn;
use crate::style::{Font, PlotStyle};
use crate::surface::DrawingSurface;

/// Highlight of `f(x)` at one x.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// Cartesian x to evaluate at.
    pub x: f64,
    /// Pixels per Cartesian unit.
    pub scale: f64,
    /// Marker color.
    pub color: Rgba,
    /// Label text color.
    pub label_color: Rgba,
    /// Marker radius in pixels.
    pub radius: u32,
    /// Label center relative to the marker center, in pixels.
    pub label_offset: (i64, i64),
    /// Label font.
    pub font: Font,
}

impl Annotation {
    /// Black marker of radius 3 with the label 40 px right and 15 px up.
    #[must_use]
    pub fn new(x: f64, scale: f64) -> Self {
        Self::from_style(x, scale, &PlotStyle::plain())
    }

    /// Marker geometry and font taken from a style.
    #[must_use]
    pub fn from_style(x: f64, scale: f64, style: &PlotStyle) -> Self {
        Self {
            x,
            scale,
            color: Rgba::BLACK,
            label_color: Rgba::BLACK,
            radius: style.marker_radius,
            label_offset: style.label_offset,
            font: style.label_font.clone(),
        }
    }

    /// Set color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set label text color.
    #[must_use]
    pub fn label_color(mut self, color: Rgba) -> Self {
        self.label_color = color;
        self
    }

    /// Set marker radius.
    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Set label offset.
    #[must_use]
    pub fn label_offset(mut self, dx: i64, dy: i64) -> Self {
        self.label_offset = (dx, dy);
        self
    }

    /// Set label font.
    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    /// Check parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for a non-finite x or a scale that
    /// is not finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::invalid(
                "scale",
                format!("must be finite and > 0, got {}", self.scale),
            ));
        }
        if !self.x.is_finite() {
            return Err(Error::invalid("x", format!("must be finite, got {}", self.x)));
        }
        Ok(())
    }

    /// Draw against an existing dimensions snapshot.
    ///
    /// Returns the annotated point, or `None` when `f` failed at `x` (or the
    /// scaled point is not representable) and nothing was drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for an invalid annotation.
    pub fn draw<S, F>(
        &self,
        surface: &mut S,
        mapper: &CoordinateMapper,
        f: &F,
    ) -> Result<Option<CartesianPoint>>
    where
        S: DrawingSurface + ?Sized,
        F: PlotFn + ?Sized,
    {
        self.validate()?;

        let y = match f.eval(self.x) {
            Ok(y) => y,
            Err(err) => {
                log::debug!(target: "fnplot", "skipping annotation: {err}");
                return Ok(None);
            }
        };
        let point = CartesianPoint::new(self.x, y);
        let Some(center) = mapper.to_pixel(point.scaled(self.scale)) else {
            log::debug!(target: "fnplot", "skipping annotation at x = {}: overflows when scaled", self.x);
            return Ok(None);
        };

        surface.draw_marker(center, self.radius, self.color);
        let (dx, dy) = self.label_offset;
        surface.draw_text(
            center.offset(dx, dy),
            &format_label(point),
            &self.font,
            self.label_color,
        );
        Ok(Some(point))
    }
}

/// `"(x, y)"` with two decimals each.
///
/// ```
/// use fnplot::annotate::format_label;
/// use fnplot::geometry::CartesianPoint;
///
/// assert_eq!(format_label(CartesianPoint::new(2.0, -0.5)), "(2.00, -0.50)");
/// ```
#[must_use]
pub fn format_label(point: CartesianPoint) -> String {
    format!("({:.2}, {:.2})", point.x, point.y)
}

/// Mark `f(annotation.x)` on `surface` and label it with its coordinates.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] for an invalid annotation; a failed
/// evaluation is not an error and draws nothing.
///
/// # Example
///
/// ```
/// use fnplot::annotate::{render_point, Annotation};
/// use fnplot::surface::RecordingSurface;
///
/// let mut surface = RecordingSurface::new(1440, 900);
/// render_point(&mut surface, &f64::sin, &Annotation::new(std::f64::consts::FRAC_PI_2, 80.0)).unwrap();
/// assert_eq!(surface.texts().next(), Some("(1.57, 1.00)"));
/// ```
pub fn render_point<S, F>(
    surface: &mut S,
    f: &F,
    annotation: &Annotation,
) -> Result<Option<CartesianPoint>>
where
    S: DrawingSurface + ?Sized,
    F: PlotFn + ?Sized,
{
    let mapper = CoordinateMapper::for_surface(&*surface);
    annotation.draw(surface, &mapper, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PixelPoint;
    use crate::surface::{DrawCommand, RecordingSurface};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_sin_half_pi_label() {
        let mut surface = RecordingSurface::new(1440, 900);
        let annotation = Annotation::new(FRAC_PI_2, 80.0).color(Rgba::RED);
        let point = render_point(&mut surface, &f64::sin, &annotation).unwrap().unwrap();

        assert!((point.y - 1.0).abs() < 1e-12);
        // round(pi/2 * 80) = 126, round(1 * 80) = 80
        let center = PixelPoint::new(720 + 126, 450 - 80);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::Marker { center, radius: 3, color: Rgba::RED },
                DrawCommand::Text {
                    anchor: center.offset(40, -15),
                    text: "(1.57, 1.00)".to_string(),
                    font: Font::default(),
                    color: Rgba::BLACK,
                },
            ]
        );
    }

    #[test]
    fn test_failed_evaluation_draws_nothing() {
        let mut surface = RecordingSurface::new(100, 100);
        let drawn = render_point(&mut surface, &|x: f64| 1.0 / x, &Annotation::new(0.0, 10.0)).unwrap();

        assert_eq!(drawn, None);
        assert!(surface.is_empty());
    }

    #[test]
    fn test_style_controls_marker_and_font() {
        let style = PlotStyle::pretty();
        let annotation = Annotation::from_style(2.0, 80.0, &style).radius(5).label_offset(10, 10);
        let mut surface = RecordingSurface::new(1440, 900);
        render_point(&mut surface, &|x: f64| x * x, &annotation).unwrap();

        match &surface.commands()[..] {
            [DrawCommand::Marker { radius, .. }, DrawCommand::Text { font, text, .. }] => {
                assert_eq!(*radius, 5);
                assert!(font.bold);
                assert_eq!(text, "(2.00, 4.00)");
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }

    #[test]
    fn test_label_rounding() {
        assert_eq!(format_label(CartesianPoint::new(7.0, 7f64.sin())), "(7.00, 0.66)");
        assert_eq!(format_label(CartesianPoint::new(-1.5, 0.005)), "(-1.50, 0.01)");
    }

    #[test]
    fn test_invalid_annotation() {
        let mut surface = RecordingSurface::new(100, 100);
        for annotation in [Annotation::new(1.0, 0.0), Annotation::new(f64::NAN, 1.0)] {
            assert!(render_point(&mut surface, &f64::sin, &annotation).is_err());
        }
        assert!(surface.is_empty());
    }
}
