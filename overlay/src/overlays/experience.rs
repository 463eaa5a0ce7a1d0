//! Experience progress as a thin bar without outline

use rpghud_types::ElementType;

use crate::device::GraphicsDevice;
use crate::element::Element;
use crate::error::RenderError;
use crate::widgets::{BarColors, COLOR_GREEN, CustomBar};

use super::{HudContext, HudWidget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Experience;

impl HudWidget for Experience {
    fn check_conditions(&self, ctx: &HudContext) -> bool {
        ctx.player.has_survival_hud()
    }

    fn draw_element(
        &self,
        element: &Element,
        device: &mut dyn GraphicsDevice,
        ctx: &HudContext,
    ) -> Result<(), RenderError> {
        let color = ctx.color_for(ElementType::Experience, COLOR_GREEN);
        CustomBar::with_colors(
            ctx.player.experience as f64 * 100.0,
            BarColors::from_base(color),
        )
        .outlined(false)
        .render(device, element.pos_x(), element.pos_y(), element.width(), element.height());
        Ok(())
    }
}
