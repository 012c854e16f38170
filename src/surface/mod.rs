//! The drawing surface abstraction.
//!
//! Renderers never own a surface; every render call borrows one. A surface
//! accepts draw calls in any order and layers later calls over earlier ones.
//! Points outside `[0, width) x [0, height)` are valid arguments: the surface
//! silently drops whatever falls off the visible raster.
//!
//! Implementations in this crate:
//!
//! - [`crate::framebuffer::Framebuffer`]: RGBA raster
//! - [`crate::output::SvgEncoder`]: vector document
//! - [`RecordingSurface`]: captures [`DrawCommand`]s

mod recording;

pub use recording::{DrawCommand, RecordingSurface};

use crate::color::Rgba;
use crate::geometry::{Dimensions, PixelPoint};
use crate::style::Font;

/// Minimal capability set the renderers draw through.
pub trait DrawingSurface {
    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Current dimensions. Renderers read this once per pass.
    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    /// Draw a straight line of `width` pixels between two points.
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: u32);

    /// Draw a filled circle. Radius 0 is a single pixel.
    fn draw_marker(&mut self, center: PixelPoint, radius: u32, color: Rgba);

    /// Draw `text` centered on `anchor`.
    fn draw_text(&mut self, anchor: PixelPoint, text: &str, font: &Font, color: Rgba);

    /// Fill the whole surface with `color`.
    ///
    /// Surfaces without a notion of background may ignore this.
    fn fill(&mut self, color: Rgba) {
        let _ = color;
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn dimensions(&self) -> Dimensions {
        (**self).dimensions()
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: u32) {
        (**self).draw_line(from, to, color, width);
    }

    fn draw_marker(&mut self, center: PixelPoint, radius: u32, color: Rgba) {
        (**self).draw_marker(center, radius, color);
    }

    fn draw_text(&mut self, anchor: PixelPoint, text: &str, font: &Font, color: Rgba) {
        (**self).draw_text(anchor, text, font, color);
    }

    fn fill(&mut self, color: Rgba) {
        (**self).fill(color);
    }
}
