//! Mount health as a skewed tetragon gauge

use rpghud_types::ElementType;

use crate::device::GraphicsDevice;
use crate::element::Element;
use crate::error::RenderError;
use crate::renderer::{Tetragon, draw_tetragon};
use crate::utils::{percent_of, round_half_up};
use crate::widgets::{COLOR_DEFAULT, COLOR_ORANGE};

use super::{HudContext, HudWidget};

/// Horizontal offset of the top edge relative to the bottom edge
pub const DEFAULT_SKEW: i32 = 4;

/// Parallelogram gauge leaning to the right by `skew` pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountHealthBar {
    pub skew: i32,
}

impl Default for MountHealthBar {
    fn default() -> Self {
        Self { skew: DEFAULT_SKEW }
    }
}

impl MountHealthBar {
    /// Gauge shape for `fill_width` pixels of a bar starting at `(x, y)`
    ///
    /// Fills narrower than the skew lean by their own width instead, so the
    /// bottom edge never extends past `x + fill_width`.
    pub fn shape(&self, x: i32, y: i32, fill_width: i32, height: i32) -> Tetragon {
        let fill_width = fill_width.max(0);
        let s = self.skew.clamp(0, fill_width);
        Tetragon::new(
            x,
            x.wrapping_add(s),
            y,
            y,
            s + fill_width,
            fill_width - s,
            height,
            height,
        )
    }

    /// Filled width, capped to the gauge
    pub fn fill_width(&self, element: &Element, percent: f64) -> i32 {
        let full = element.width().wrapping_sub(self.skew).max(0);
        round_half_up(percent / 100.0 * full as f64).clamp(0, full)
    }
}

impl HudWidget for MountHealthBar {
    fn check_conditions(&self, ctx: &HudContext) -> bool {
        !ctx.player.is_spectator() && ctx.player.living_mount().is_some()
    }

    fn draw_element(
        &self,
        element: &Element,
        device: &mut dyn GraphicsDevice,
        ctx: &HudContext,
    ) -> Result<(), RenderError> {
        let mount = ctx.player.living_mount().ok_or(RenderError::MissingData {
            element: ElementType::HealthMount,
            what: "living mount",
        })?;
        let color = ctx.color_for(ElementType::HealthMount, COLOR_ORANGE);
        let (x, y, height) = (element.pos_x(), element.pos_y(), element.height());

        let full = element.width().wrapping_sub(self.skew).max(0);
        draw_tetragon(device, self.shape(x, y, full, height), COLOR_DEFAULT[0]);

        let filled = self.fill_width(element, percent_of(mount.health, mount.max_health));
        if filled > 0 {
            draw_tetragon(device, self.shape(x, y, filled, height), color);
        }
        Ok(())
    }
}
