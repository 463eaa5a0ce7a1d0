//! Bar compositor
//!
//! A custom bar is a box split horizontally into a value-proportional "fill"
//! and the remaining "ground", each split vertically into a light upper half
//! and a dark lower half, optionally framed by a 1px outline:
//!
//! ```text
//! ┌──────────────────────────────┐  outline
//! │██████████████░░░░░░░░░░░░░░░░│  bar light │ ground light  (h / 2)
//! │▓▓▓▓▓▓▓▓▓▓▓▓▓▓▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒│  bar dark  │ ground dark   (h - h / 2)
//! └──────────────────────────────┘
//! ```
//!
//! Values are only clamped at zero. A value above 100 makes the fill wider
//! than the interior and skips the ground entirely.

use crate::color::{PackedColor, offset_color_percent};
use crate::device::GraphicsDevice;
use crate::renderer::{draw_outline, draw_rect};
use crate::utils::round_half_up;
use crate::widgets::colors::{COLOR_DEFAULT, COLOR_OUTLINE, OFFSET_PERCENT};

/// The four fill colors of a bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarColors {
    pub ground_light: PackedColor,
    pub ground_dark: PackedColor,
    pub bar_light: PackedColor,
    pub bar_dark: PackedColor,
}

impl BarColors {
    /// Bar tones over the default grey ground
    pub fn new(bar_light: PackedColor, bar_dark: PackedColor) -> Self {
        Self {
            ground_light: COLOR_DEFAULT[0],
            ground_dark: COLOR_DEFAULT[1],
            bar_light,
            bar_dark,
        }
    }

    /// Light tone as given, dark tone darkened by [`OFFSET_PERCENT`]
    pub fn from_base(color: PackedColor) -> Self {
        Self::new(color, offset_color_percent(color, OFFSET_PERCENT))
    }

    pub fn with_ground(mut self, ground_light: PackedColor, ground_dark: PackedColor) -> Self {
        self.ground_light = ground_light;
        self.ground_dark = ground_dark;
        self
    }
}

/// Pixel layout of a bar, computed before anything is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Inset of the interior, 1 with an outline
    pub offset: i32,
    pub filled_width: i32,
    pub filled_height: i32,
    /// Width of the fill. Not capped at `filled_width`.
    pub percent_filled: i32,
    pub upper_height: i32,
    pub lower_height: i32,
}

impl BarLayout {
    pub fn compute(width: i32, height: i32, value: f64, outlined: bool) -> Self {
        let value = if value < 0.0 { 0.0 } else { value };
        let offset = i32::from(outlined);

        let filled_width = width.wrapping_sub(offset * 2).max(0);
        let filled_height = height.wrapping_sub(offset * 2).max(0);
        let percent_filled = round_half_up(value / 100.0 * filled_width as f64);

        let upper_height = filled_height / 2;
        Self {
            offset,
            filled_width,
            filled_height,
            percent_filled,
            upper_height,
            lower_height: filled_height - upper_height,
        }
    }

    /// Width of the ground region; not positive when the fill covers it
    pub fn ground_width(&self) -> i32 {
        self.filled_width.wrapping_sub(self.percent_filled)
    }
}

/// Draw a custom bar with every parameter given explicitly
///
/// `value` is a percentage. Draw order: outline, fill (light, dark), then
/// ground (light, dark) when any remains.
pub fn draw_custom_bar<D: GraphicsDevice + ?Sized>(
    device: &mut D,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    value: f64,
    colors: BarColors,
    outlined: bool,
    outline_color: PackedColor,
) -> BarLayout {
    let layout = BarLayout::compute(width, height, value, outlined);
    let BarLayout {
        offset,
        percent_filled,
        upper_height,
        lower_height,
        ..
    } = layout;

    if outlined {
        draw_outline(device, x, y, width, height, outline_color);
    }

    let inner_x = x.wrapping_add(offset);
    let inner_y = y.wrapping_add(offset);
    let lower_y = inner_y.wrapping_add(upper_height);

    draw_rect(device, inner_x, inner_y, percent_filled, upper_height, colors.bar_light);
    draw_rect(
        device,
        inner_x,
        lower_y,
        percent_filled,
        lower_height,
        colors.bar_dark,
    );

    let ground_width = layout.ground_width();
    if ground_width > 0 {
        let ground_x = inner_x.wrapping_add(percent_filled);
        draw_rect(device, ground_x, inner_y, ground_width, upper_height, colors.ground_light);
        draw_rect(
            device,
            ground_x,
            lower_y,
            ground_width,
            lower_height,
            colors.ground_dark,
        );
    }

    layout
}

/// Builder over [`draw_custom_bar`] carrying the usual defaults: default grey
/// ground, outlined, black outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CustomBar {
    pub value: f64,
    pub colors: BarColors,
    pub outlined: bool,
    pub outline_color: PackedColor,
}

impl CustomBar {
    pub fn new(value: f64, bar_light: PackedColor, bar_dark: PackedColor) -> Self {
        Self {
            value,
            colors: BarColors::new(bar_light, bar_dark),
            outlined: true,
            outline_color: COLOR_OUTLINE,
        }
    }

    pub fn with_colors(value: f64, colors: BarColors) -> Self {
        Self {
            colors,
            ..Self::new(value, colors.bar_light, colors.bar_dark)
        }
    }

    pub fn with_ground(mut self, ground_light: PackedColor, ground_dark: PackedColor) -> Self {
        self.colors = self.colors.with_ground(ground_light, ground_dark);
        self
    }

    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    /// Set the outline color (keeps the outline enabled)
    pub fn with_outline_color(mut self, color: PackedColor) -> Self {
        self.outlined = true;
        self.outline_color = color;
        self
    }

    pub fn render<D: GraphicsDevice + ?Sized>(
        &self,
        device: &mut D,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> BarLayout {
        draw_custom_bar(
            device,
            x,
            y,
            width,
            height,
            self.value,
            self.colors,
            self.outlined,
            self.outline_color,
        )
    }
}

#[cfg(test)]
#[path = "custom_bar_tests.rs"]
mod tests;
