//! A surface that records draw calls instead of rasterizing them.

use super::DrawingSurface;
use crate::color::Rgba;
use crate::geometry::{Dimensions, PixelPoint};
use crate::style::Font;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum DrawCommand {
    /// Whole-surface fill.
    Fill(Rgba),
    /// Straight line.
    Line {
        from: PixelPoint,
        to: PixelPoint,
        color: Rgba,
        width: u32,
    },
    /// Filled circle.
    Marker {
        center: PixelPoint,
        radius: u32,
        color: Rgba,
    },
    /// Text label.
    Text {
        anchor: PixelPoint,
        text: String,
        font: Font,
        color: Rgba,
    },
}

/// Surface that keeps every draw call in order.
///
/// Useful for inspecting what a render pass emits, and for replaying it onto
/// another surface later.
///
/// # Example
///
/// ```
/// use fnplot::axes::{render_axes, AxisSpec};
/// use fnplot::surface::RecordingSurface;
///
/// let mut surface = RecordingSurface::new(750, 250);
/// render_axes(&mut surface, &AxisSpec::new(40.0, 4)).unwrap();
/// assert_eq!(surface.lines().count(), 2 + 2 * 9 + 2 * 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    dims: Dimensions,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording for a surface of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            dims: Dimensions::new(width, height),
            commands: Vec::new(),
        }
    }

    /// Change the reported dimensions, as a window resize would.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.dims = Dimensions::new(width, height);
    }

    /// All recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Take the recorded commands, leaving the recording empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded lines as `(from, to)` pairs.
    pub fn lines(&self) -> impl Iterator<Item = (PixelPoint, PixelPoint)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Recorded marker centers.
    pub fn markers(&self) -> impl Iterator<Item = PixelPoint> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Marker { center, .. } => Some(*center),
            _ => None,
        })
    }

    /// Recorded text labels.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Replay every recorded command onto another surface.
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) {
        for command in &self.commands {
            match command {
                DrawCommand::Fill(color) => target.fill(*color),
                DrawCommand::Line {
                    from,
                    to,
                    color,
                    width,
                } => target.draw_line(*from, *to, *color, *width),
                DrawCommand::Marker {
                    center,
                    radius,
                    color,
                } => target.draw_marker(*center, *radius, *color),
                DrawCommand::Text {
                    anchor,
                    text,
                    font,
                    color,
                } => target.draw_text(*anchor, text, font, *color),
            }
        }
    }
}

impl DrawingSurface for RecordingSurface {
    fn width(&self) -> u32 {
        self.dims.width
    }

    fn height(&self) -> u32 {
        self.dims.height
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgba, width: u32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_marker(&mut self, center: PixelPoint, radius: u32, color: Rgba) {
        self.commands.push(DrawCommand::Marker {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, anchor: PixelPoint, text: &str, font: &Font, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            anchor,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }

    fn fill(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Fill(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.fill(Rgba::WHITE);
        surface.draw_line(PixelPoint::new(0, 0), PixelPoint::new(5, 5), Rgba::BLACK, 1);
        surface.draw_marker(PixelPoint::new(3, 3), 2, Rgba::RED);
        surface.draw_text(PixelPoint::new(1, 1), "hi", &Font::default(), Rgba::BLACK);

        assert_eq!(surface.len(), 4);
        assert_eq!(surface.commands()[0], DrawCommand::Fill(Rgba::WHITE));
        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.markers().collect::<Vec<_>>(), vec![PixelPoint::new(3, 3)]);
        assert_eq!(surface.texts().collect::<Vec<_>>(), vec!["hi"]);
    }

    #[test]
    fn test_resize_changes_dimensions_only() {
        let mut surface = RecordingSurface::new(10, 10);
        surface.draw_marker(PixelPoint::new(0, 0), 0, Rgba::BLACK);
        surface.resize(20, 30);
        assert_eq!(surface.dimensions(), Dimensions::new(20, 30));
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_take_and_replay() {
        let mut source = RecordingSurface::new(10, 10);
        source.draw_line(PixelPoint::new(0, 0), PixelPoint::new(1, 1), Rgba::BLUE, 2);
        source.draw_text(PixelPoint::new(0, 0), "x", &Font::default(), Rgba::BLACK);

        let mut target = RecordingSurface::new(10, 10);
        source.replay(&mut target);
        assert_eq!(target.commands(), source.commands());

        let taken = source.take();
        assert_eq!(taken.len(), 2);
        assert!(source.is_empty());
    }
}
