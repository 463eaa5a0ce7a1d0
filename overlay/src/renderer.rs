//! Primitive rasterizer
//!
//! Turns rect and tetragon geometry plus a packed color into one filled quad
//! on a [`GraphicsDevice`]. Every primitive runs inside a [`PrimitiveGuard`]
//! so the device's blend/texture/depth state and draw color are unchanged
//! once the call returns.

use crate::color::PackedColor;
use crate::device::{GraphicsDevice, PrimitiveGuard, PrimitiveMode, VertexFormat};

/// Axis-aligned screen rect. Width and height are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Negative sizes are clamped to zero
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: width.max(0),
            height: height.max(0),
        }
    }

    pub fn right(&self) -> i32 {
        self.x.wrapping_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.y.wrapping_add(self.height)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Corners counter-clockwise from bottom-left
    pub fn vertices(&self) -> [[f64; 2]; 4] {
        let x = self.x as f64;
        let y = self.y as f64;
        let right = x + self.width as f64;
        let bottom = y + self.height as f64;
        [[x, bottom], [right, bottom], [right, y], [x, y]]
    }
}

/// Four-corner quad described by two x positions, two y positions, the top
/// and bottom edge widths and the left and right edge heights
///
/// The corner assignment is deliberately asymmetric so the same description
/// can produce skewed, trapezoid-style bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tetragon {
    /// x of the upper left corner
    pub x1: i32,
    /// x of the lower left corner
    pub x2: i32,
    /// y of the upper left corner
    pub y1: i32,
    /// y of the lower left corner
    pub y2: i32,
    /// width of the top edge
    pub width1: i32,
    /// width of the bottom edge
    pub width2: i32,
    /// height of the left edge
    pub height1: i32,
    /// height of the right edge
    pub height2: i32,
}

impl Tetragon {
    /// Negative widths are clamped to zero; heights are kept as given
    pub fn new(
        x1: i32,
        x2: i32,
        y1: i32,
        y2: i32,
        width1: i32,
        width2: i32,
        height1: i32,
        height2: i32,
    ) -> Self {
        Self {
            x1,
            x2,
            y1,
            y2,
            width1: width1.max(0),
            width2: width2.max(0),
            height1,
            height2,
        }
    }

    /// Corners in submission order
    pub fn vertices(&self) -> [[f64; 2]; 4] {
        let (x1, x2) = (self.x1 as f64, self.x2 as f64);
        let (y1, y2) = (self.y1 as f64, self.y2 as f64);
        [
            [x1, y1 + self.height1 as f64],
            [x2 + self.width2 as f64, y2 + self.height2 as f64],
            [x1 + self.width1 as f64, y2],
            [x2, y1],
        ]
    }
}

/// Submit one untextured quad in `color`
fn fill_quad<D: GraphicsDevice + ?Sized>(device: &mut D, vertices: [[f64; 2]; 4], color: PackedColor) {
    let mut device = PrimitiveGuard::begin(device, color.rgba_f32());
    device.begin_primitive(PrimitiveMode::Quads, VertexFormat::Position);
    for [x, y] in vertices {
        device.add_vertex(x, y, 0.0);
    }
    device.end_primitive();
}

/// Draw a filled rectangle. No-op for [`PackedColor::TRANSPARENT`].
pub fn draw_rect<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: PackedColor,
) {
    if color.is_transparent() {
        return;
    }
    fill_quad(device, Rect::new(x, y, width, height).vertices(), color);
}

/// Draw a filled tetragon. No-op for [`PackedColor::TRANSPARENT`].
pub fn draw_tetragon<D: GraphicsDevice + ?Sized>(device: &mut D, tetragon: Tetragon, color: PackedColor) {
    if color.is_transparent() {
        return;
    }
    fill_quad(device, tetragon.vertices(), color);
}

/// Frame a box with four 1px strokes: top, left, right, bottom
///
/// Corner pixels are covered by both adjacent strokes.
pub fn draw_outline<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    color: PackedColor,
) {
    draw_rect(device, x, y, width, 1, color);
    draw_rect(device, x, y, 1, height, color);
    draw_rect(device, x.wrapping_add(width).wrapping_sub(1), y, 1, height, color);
    draw_rect(device, x, y.wrapping_add(height).wrapping_sub(1), width, 1, color);
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
