//! Mount jump charge as a custom bar

use rpghud_types::ElementType;

use crate::device::GraphicsDevice;
use crate::element::Element;
use crate::error::RenderError;
use crate::widgets::{BarColors, COLOR_GREY, CustomBar};

use super::{HudContext, HudWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JumpBar;

impl HudWidget for JumpBar {
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
            element: ElementType::JumpBar,
            what: "living mount",
        })?;
        let color = ctx.color_for(ElementType::JumpBar, COLOR_GREY);

        CustomBar::with_colors(mount.jump_power as f64 * 100.0, BarColors::from_base(color))
            .outlined(ctx.settings.show_outline)
            .render(device, element.pos_x(), element.pos_y(), element.width(), element.height());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::RecordingDevice;
    use crate::element::ScreenMetrics;
    use crate::overlays::{GameMode, MountSnapshot, PlayerSnapshot};
    use rpghud_types::HudSettings;

    fn on_horse(jump_power: f32) -> PlayerSnapshot {
        PlayerSnapshot {
            mount: Some(MountSnapshot {
                living: true,
                health: 30.0,
                max_health: 30.0,
                jump_power,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_quarter_charge() {
        let settings = HudSettings::default();
        let player = on_horse(0.25);
        let ctx = HudContext::new(ScreenMetrics::unscaled(200, 100), &player, &settings);

        let mut device = RecordingDevice::new();
        let element = Element::new(ElementType::JumpBar, 0, 0, 42, 6, true);
        JumpBar.draw_element(&element, &mut device, &ctx).unwrap();

        // inner 40x4, 25% -> 10 px filled
        let rects = device.rects();
        assert_eq!(rects[4], (1.0, 1.0, 10.0, 2.0));
        assert_eq!(rects[6], (11.0, 1.0, 30.0, 2.0));
    }

    #[test]
    fn test_hidden_for_spectators() {
        let settings = HudSettings::default();
        let player = PlayerSnapshot {
            game_mode: GameMode::Spectator,
            ..on_horse(0.5)
        };
        let ctx = HudContext::new(ScreenMetrics::unscaled(200, 100), &player, &settings);
        assert!(!JumpBar.check_conditions(&ctx));
    }
}
