//! Player health as a two-tone custom bar

use rpghud_types::ElementType;

use crate::device::GraphicsDevice;
use crate::element::Element;
use crate::error::RenderError;
use crate::utils::percent_of;
use crate::widgets::{BarColors, COLOR_RED, CustomBar};

use super::{HudContext, HudWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HealthBar;

impl HudWidget for HealthBar {
    fn check_conditions(&self, ctx: &HudContext) -> bool {
        ctx.player.has_survival_hud()
    }

    fn draw_element(
        &self,
        element: &Element,
        device: &mut dyn GraphicsDevice,
        ctx: &HudContext,
    ) -> Result<(), RenderError> {
        let player = ctx.player;
        let color = ctx.color_for(ElementType::Health, COLOR_RED);

        CustomBar::with_colors(
            percent_of(player.health, player.max_health),
            BarColors::from_base(color),
        )
        .outlined(ctx.settings.show_outline)
        .render(device, element.pos_x(), element.pos_y(), element.width(), element.height());
        Ok(())
    }
}
