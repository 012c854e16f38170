//! Point types for the two coordinate spaces.
//!
//! [`CartesianPoint`] lives in math space (origin at the surface center,
//! y up). [`PixelPoint`] lives in raster space (origin top-left, y down).

/// A point in Cartesian math space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartesianPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate, increasing upward.
    pub y: f64,
}

impl CartesianPoint {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Multiply both coordinates by `scale`.
    #[must_use]
    pub fn scaled(self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in raster space.
///
/// Coordinates outside `[0, width) x [0, height)` are valid values; the
/// surface simply does not show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelPoint {
    /// Column, increasing rightward.
    pub x: i64,
    /// Row, increasing downward.
    pub y: i64,
}

impl PixelPoint {
    /// Create a new pixel point.
    #[must_use]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Translate by a pixel offset.
    #[must_use]
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Pixel dimensions of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Create new dimensions.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half the width, floor division.
    #[must_use]
    pub const fn half_width(self) -> i64 {
        (self.width / 2) as i64
    }

    /// Half the height, floor division.
    #[must_use]
    pub const fn half_height(self) -> i64 {
        (self.height / 2) as i64
    }

    /// Whether `point` lies on the visible raster.
    #[must_use]
    pub fn contains(self, point: PixelPoint) -> bool {
        (0..i64::from(self.width)).contains(&point.x)
            && (0..i64::from(self.height)).contains(&point.y)
    }
}
