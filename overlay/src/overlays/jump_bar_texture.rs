//! Mount jump charge drawn from the interface texture atlas

use crate::device::{GraphicsDevice, TextureKey};
use crate::element::{Element, ScreenMetrics};
use crate::error::RenderError;
use crate::renderer::Rect;
use rpghud_types::ElementType;

use super::{HudContext, HudWidget};

/// Width of the jump bar sprite in the atlas
pub const JUMP_BAR_WIDTH: i32 = 141;
/// Height of the jump bar sprite in the atlas
pub const JUMP_BAR_HEIGHT: i32 = 10;

const EMPTY_UV: (i32, i32) = (0, 160);
const FILLED_UV: (i32, i32) = (0, 150);

/// Jump charge for the texture-based HUD style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JumpBarTexture;

impl JumpBarTexture {
    /// Top-left corner of the bar, centered above the hotbar
    pub fn origin(screen: &ScreenMetrics) -> (i32, i32) {
        (screen.scaled_width / 2 - 71, screen.scaled_height - 80)
    }

    /// Width of the filled part; the charge is truncated to whole percent first
    pub fn filled_width(jump_power: f32) -> i32 {
        let percent = (jump_power * 100.0) as i32;
        (JUMP_BAR_WIDTH as f64 * (percent as f64 / 100.0)) as i32
    }

    /// Element placed at [`Self::origin`]; the position follows the screen
    pub fn element(screen: &ScreenMetrics) -> Element {
        let (x, y) = Self::origin(screen);
        Element::new(ElementType::JumpBar, x, y, JUMP_BAR_WIDTH, JUMP_BAR_HEIGHT, false)
    }
}

impl HudWidget for JumpBarTexture {
    fn check_conditions(&self, ctx: &HudContext) -> bool {
        ctx.player.living_mount().is_some()
    }

    /// Follows the current screen rather than the construction-time element
    fn bounds(&self, _element: &Element, ctx: &HudContext) -> Rect {
        let (x, y) = Self::origin(&ctx.screen);
        Rect::new(x, y, JUMP_BAR_WIDTH, JUMP_BAR_HEIGHT)
    }

    fn draw_element(
        &self,
        _element: &Element,
        device: &mut dyn GraphicsDevice,
        ctx: &HudContext,
    ) -> Result<(), RenderError> {
        let mount = ctx.player.living_mount().ok_or(RenderError::MissingData {
            element: ElementType::JumpBar,
            what: "living mount",
        })?;

        let (x, y) = Self::origin(&ctx.screen);
        device.bind_texture(&TextureKey::INTERFACE);
        device.draw_textured_rect(x, y, EMPTY_UV.0, EMPTY_UV.1, JUMP_BAR_WIDTH, JUMP_BAR_HEIGHT);
        device.draw_textured_rect(
            x,
            y,
            FILLED_UV.0,
            FILLED_UV.1,
            Self::filled_width(mount.jump_power),
            JUMP_BAR_HEIGHT,
        );
        device.bind_texture(&TextureKey::ICONS);
        Ok(())
    }
}
