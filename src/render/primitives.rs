//! Primitive rendering functions.
//!
//! Implements rasterization algorithms for lines and filled circles on a
//! [`Framebuffer`]. Coordinates are signed pixels and may lie anywhere,
//! including far off the raster; segments are clipped before rasterizing so
//! the cost stays proportional to the visible part.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::PixelPoint;

// ============================================================================
// Line Drawing
// ============================================================================

/// Draw a line `width` pixels wide.
///
/// Wide lines are rasterized as parallel Bresenham passes offset along the
/// minor axis. Width 0 is treated as 1.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `from`, `to` - Endpoints
/// * `color` - Line color
/// * `width` - Line width in pixels
pub fn draw_line(fb: &mut Framebuffer, from: PixelPoint, to: PixelPoint, color: Rgba, width: u32) {
    let width = i64::from(width.max(1));
    let margin = (width / 2 + 1) as f64;
    let bounds = ClipRect {
        min_x: -margin,
        min_y: -margin,
        max_x: f64::from(fb.width()) - 1.0 + margin,
        max_y: f64::from(fb.height()) - 1.0 + margin,
    };

    let Some((start, end)) = clip_segment(
        (from.x as f64, from.y as f64),
        (to.x as f64, to.y as f64),
        bounds,
    ) else {
        return;
    };

    let (x0, y0) = (start.0.round() as i64, start.1.round() as i64);
    let (x1, y1) = (end.0.round() as i64, end.1.round() as i64);
    let steep = (y1 - y0).abs() > (x1 - x0).abs();

    for offset in -((width - 1) / 2)..=(width / 2) {
        if steep {
            bresenham(fb, x0 + offset, y0, x1 + offset, y1, color);
        } else {
            bresenham(fb, x0, y0 + offset, x1, y1 + offset, color);
        }
    }
}

/// Bresenham's algorithm (non-antialiased). Endpoints must already be
/// clipped near the raster.
fn bresenham(fb: &mut Framebuffer, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        fb.plot(x, y, color);

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

// ============================================================================
// Clipping
// ============================================================================

/// Inclusive clip rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ClipRect {
    pub(crate) min_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_x: f64,
    pub(crate) max_y: f64,
}

const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;

/// Cohen–Sutherland segment clipping. Returns `None` when the segment lies
/// entirely outside `rect`.
pub(crate) fn clip_segment(
    mut start: (f64, f64),
    mut end: (f64, f64),
    rect: ClipRect,
) -> Option<((f64, f64), (f64, f64))> {
    let mut out_start = region_code(start, rect);
    let mut out_end = region_code(end, rect);

    loop {
        if (out_start | out_end) == 0 {
            return Some((start, end));
        }
        if (out_start & out_end) != 0 {
            return None;
        }

        let out_code = if out_start != 0 { out_start } else { out_end };
        let (dx, dy) = (end.0 - start.0, end.1 - start.1);

        let point = if (out_code & TOP) != 0 {
            (start.0 + dx * (rect.min_y - start.1) / dy, rect.min_y)
        } else if (out_code & BOTTOM) != 0 {
            (start.0 + dx * (rect.max_y - start.1) / dy, rect.max_y)
        } else if (out_code & RIGHT) != 0 {
            (rect.max_x, start.1 + dy * (rect.max_x - start.0) / dx)
        } else {
            (rect.min_x, start.1 + dy * (rect.min_x - start.0) / dx)
        };

        // Numerical breakdown on extreme inputs; nothing sensible to draw.
        if !(point.0.is_finite() && point.1.is_finite()) {
            return None;
        }

        if out_code == out_start {
            start = point;
            out_start = region_code(start, rect);
        } else {
            end = point;
            out_end = region_code(end, rect);
        }
    }
}

fn region_code(point: (f64, f64), rect: ClipRect) -> u8 {
    let mut code = 0;
    if point.0 < rect.min_x {
        code |= LEFT;
    } else if point.0 > rect.max_x {
        code |= RIGHT;
    }
    if point.1 < rect.min_y {
        code |= TOP;
    } else if point.1 > rect.max_y {
        code |= BOTTOM;
    }
    code
}

// ============================================================================
// Circle Drawing
// ============================================================================

/// Draw a filled circle using the midpoint algorithm.
///
/// Radius 0 sets the single center pixel.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `center` - Center coordinates
/// * `radius` - Circle radius in pixels
/// * `color` - Fill color
pub fn draw_circle(fb: &mut Framebuffer, center: PixelPoint, radius: u32, color: Rgba) {
    let r = i64::from(radius);
    let (cx, cy) = (center.x, center.y);

    // Entirely off the raster.
    if cx.saturating_add(r) < 0
        || cy.saturating_add(r) < 0
        || cx.saturating_sub(r) >= i64::from(fb.width())
        || cy.saturating_sub(r) >= i64::from(fb.height())
    {
        return;
    }

    if r == 0 {
        fb.plot(cx, cy, color);
        return;
    }

    // Midpoint circle algorithm for filled circle
    let mut x = r;
    let mut y = 0;
    let mut err = 1 - r;

    while x >= y {
        // Draw horizontal scan lines for each octant
        draw_horizontal_line(fb, cx - x, cx + x, cy + y, color);
        draw_horizontal_line(fb, cx - x, cx + x, cy - y, color);
        draw_horizontal_line(fb, cx - y, cx + y, cy + x, color);
        draw_horizontal_line(fb, cx - y, cx + y, cy - x, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Helper to draw a horizontal span (used by filled circle).
#[inline]
fn draw_horizontal_line(fb: &mut Framebuffer, x1: i64, x2: i64, y: i64, color: Rgba) {
    if y < 0 || y >= i64::from(fb.height()) {
        return;
    }

    let x_start = x1.max(0);
    let x_end = (x2 + 1).min(i64::from(fb.width()));

    if x_start < x_end {
        fb.fill_rect(x_start as u32, y as u32, (x_end - x_start) as u32, 1, color);
    }
}

// ============================================================================
// Tests
// ============================================================================
