//! Packed color handling and channel arithmetic
//!
//! Colors travel through the HUD as a single `i32` in `0xAARRGGBB` layout.
//! The alpha byte is only honored outside `0..=0xFFFFFF`; anything inside that
//! range is drawn fully opaque, and `-1` is reserved as "skip this draw".

use rpghud_types::Color;

/// A color packed as `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(pub i32);

impl PackedColor {
    /// Sentinel: draw calls receiving this color do nothing
    pub const TRANSPARENT: PackedColor = PackedColor(-1);

    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as i32) << 16) | ((g as i32) << 8) | b as i32)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32) as i32)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub fn is_transparent(self) -> bool {
        self.0 == -1
    }

    /// True for values drawn fully opaque regardless of their top byte
    pub fn is_implicitly_opaque(self) -> bool {
        (0..=0xFF_FFFF).contains(&self.0)
    }

    /// Opacity in `[0, 1]`
    pub fn opacity(self) -> f32 {
        if self.is_implicitly_opaque() {
            1.0
        } else {
            self.alpha() as f32 / 255.0
        }
    }

    pub fn alpha(self) -> u8 {
        ((self.0 >> 24) & 255) as u8
    }

    pub fn red(self) -> u8 {
        ((self.0 >> 16) & 255) as u8
    }

    pub fn green(self) -> u8 {
        ((self.0 >> 8) & 255) as u8
    }

    pub fn blue(self) -> u8 {
        (self.0 & 255) as u8
    }

    /// Channels as device floats `[r, g, b, a]`
    pub fn rgba_f32(self) -> [f32; 4] {
        [
            self.red() as f32 / 255.0,
            self.green() as f32 / 255.0,
            self.blue() as f32 / 255.0,
            self.opacity(),
        ]
    }
}

impl From<Color> for PackedColor {
    fn from(raw: Color) -> Self {
        Self(raw)
    }
}

impl From<PackedColor> for Color {
    fn from(color: PackedColor) -> Self {
        color.0
    }
}

fn pack_rgb(r: i32, g: i32, b: i32) -> PackedColor {
    PackedColor((r.clamp(0, 0xFF) << 16) + (g.clamp(0, 0xFF) << 8) + b.clamp(0, 0xFF))
}

/// Add the R, G and B channels of `offset` to those of `color`, saturating
/// each at 255. The result carries no alpha byte.
pub fn offset_color(color: PackedColor, offset: PackedColor) -> PackedColor {
    pack_rgb(
        color.red() as i32 + offset.red() as i32,
        color.green() as i32 + offset.green() as i32,
        color.blue() as i32 + offset.blue() as i32,
    )
}

/// Darken each channel by `channel / (100 / offset_percent)` using integer
/// division. The result carries no alpha byte.
///
/// # Panics
///
/// Panics on division by zero when `offset_percent` is 0 or greater than 100.
/// Callers pass a percent in `1..=100`, normally [`OFFSET_PERCENT`].
///
/// [`OFFSET_PERCENT`]: crate::widgets::colors::OFFSET_PERCENT
pub fn offset_color_percent(color: PackedColor, offset_percent: i32) -> PackedColor {
    let divisor = 100 / offset_percent;
    let darken = |part: u8| {
        let part = part as i32;
        part - part / divisor
    };
    pack_rgb(darken(color.red()), darken(color.green()), darken(color.blue()))
}
