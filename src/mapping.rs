//! Cartesian ↔ raster coordinate mapping.
//!
//! The Cartesian origin sits at the surface center `(width / 2, height / 2)`
//! (integer floor division) and y grows upward; raster y grows downward.
//!
//! ```text
//!   px = width / 2  + round(x)
//!   py = height / 2 - round(y)
//! ```

use crate::geometry::{CartesianPoint, Dimensions, PixelPoint};
use crate::surface::DrawingSurface;

/// Pure transform between Cartesian and pixel coordinates for one
/// dimensions snapshot.
///
/// # Example
///
/// ```
/// use fnplot::geometry::Dimensions;
/// use fnplot::mapping::CoordinateMapper;
///
/// let mapper = CoordinateMapper::new(Dimensions::new(750, 250));
/// assert_eq!(mapper.to_pixel_x(0.0), Some(375));
/// assert_eq!(mapper.to_pixel_y(100.0), Some(25));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    dims: Dimensions,
}

impl CoordinateMapper {
    /// Create a mapper for the given dimensions.
    #[must_use]
    pub const fn new(dims: Dimensions) -> Self {
        Self { dims }
    }

    /// Snapshot the current dimensions of a surface.
    #[must_use]
    pub fn for_surface<S: DrawingSurface + ?Sized>(surface: &S) -> Self {
        Self::new(surface.dimensions())
    }

    /// The dimensions snapshot this mapper was built from.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Pixel position of the Cartesian origin.
    #[must_use]
    pub const fn center(&self) -> PixelPoint {
        PixelPoint::new(self.dims.half_width(), self.dims.half_height())
    }

    /// Map a Cartesian x coordinate to a pixel column.
    ///
    /// Returns `None` for NaN or infinite input. Finite values outside the
    /// `i64` range saturate.
    #[must_use]
    pub fn to_pixel_x(&self, x: f64) -> Option<i64> {
        round_to_pixel(x).map(|dx| self.dims.half_width().saturating_add(dx))
    }

    /// Map a Cartesian y coordinate to a pixel row (sign flipped).
    ///
    /// Returns `None` for NaN or infinite input.
    #[must_use]
    pub fn to_pixel_y(&self, y: f64) -> Option<i64> {
        round_to_pixel(y).map(|dy| self.dims.half_height().saturating_sub(dy))
    }

    /// Map a Cartesian point to a pixel point.
    #[must_use]
    pub fn to_pixel(&self, point: CartesianPoint) -> Option<PixelPoint> {
        Some(PixelPoint::new(
            self.to_pixel_x(point.x)?,
            self.to_pixel_y(point.y)?,
        ))
    }

    /// Inverse of [`Self::to_pixel_x`].
    #[must_use]
    pub fn to_cartesian_x(&self, px: i64) -> f64 {
        px.saturating_sub(self.dims.half_width()) as f64
    }

    /// Inverse of [`Self::to_pixel_y`].
    #[must_use]
    pub fn to_cartesian_y(&self, py: i64) -> f64 {
        self.dims.half_height().saturating_sub(py) as f64
    }

    /// Inverse of [`Self::to_pixel`].
    #[must_use]
    pub fn to_cartesian(&self, point: PixelPoint) -> CartesianPoint {
        CartesianPoint::new(self.to_cartesian_x(point.x), self.to_cartesian_y(point.y))
    }
}

#[inline]
fn round_to_pixel(v: f64) -> Option<i64> {
    // `as` saturates finite out-of-range values.
    v.is_finite().then(|| v.round() as i64)
}
