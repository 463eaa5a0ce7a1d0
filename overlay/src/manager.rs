//! HUD frame driver and position editor
//!
//! [`Hud`] owns every [`HudElement`] keyed by [`ElementType`]. Each frame it
//! asks every enabled element whether it should be shown and draws the ones
//! that should. A failing element is logged and skipped; the guards have
//! already restored device state by the time the error reaches the driver.

use std::collections::{BTreeMap, BTreeSet};

use rpghud_types::{ElementPosition, ElementType, HudSettings};
use tracing::{debug, warn};

use crate::color::offset_color;
use crate::device::{GraphicsDevice, ScaleGuard};
use crate::element::{Element, ScreenMetrics};
use crate::overlays::{
    Experience, HealthBar, HudContext, HudElement, HudWidget, JumpBar, JumpBarTexture,
    MountHealthBar,
};
use crate::renderer::draw_outline;
use crate::widgets::{COLOR_DEFAULT, OFFSET_PREVIEW};

/// Which set of widgets the HUD is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HudStyle {
    /// Flat two-tone custom bars
    #[default]
    Default,
    /// Sprites from the interface atlas where available
    Texture,
}

/// Outcome counts of one rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub drawn: usize,
    pub hidden: usize,
    pub disabled: usize,
    pub failed: usize,
}

/// All HUD elements of one style
pub struct Hud {
    style: HudStyle,
    elements: BTreeMap<ElementType, HudElement>,
    editing: BTreeSet<ElementType>,
}

impl Hud {
    /// Build the default layout for `style`
    pub fn new(style: HudStyle, screen: &ScreenMetrics) -> Self {
        let mut hud = Self {
            style,
            elements: BTreeMap::new(),
            editing: BTreeSet::new(),
        };

        hud.insert(HudElement::new(
            Element::new(ElementType::Health, 49, 9, 110, 12, true),
            HealthBar,
        ));
        hud.insert(HudElement::new(
            Element::new(ElementType::HealthMount, 49, 22, 110, 6, true)
                .with_parent(ElementType::Health),
            MountHealthBar::default(),
        ));
        hud.insert(HudElement::new(
            Element::new(ElementType::Experience, 49, 38, 110, 2, true),
            Experience,
        ));
        match style {
            HudStyle::Default => hud.insert(HudElement::new(
                Element::new(ElementType::JumpBar, 49, 30, 110, 6, true),
                JumpBar,
            )),
            HudStyle::Texture => {
                hud.insert(HudElement::new(JumpBarTexture::element(screen), JumpBarTexture))
            }
        }

        hud
    }

    pub fn style(&self) -> HudStyle {
        self.style
    }

    /// Add or replace the element registered for its type
    pub fn insert(&mut self, element: HudElement) {
        self.elements.insert(element.element_type(), element);
    }

    pub fn element(&self, element_type: ElementType) -> Option<&HudElement> {
        self.elements.get(&element_type)
    }

    pub fn elements(&self) -> impl Iterator<Item = &HudElement> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Draw every enabled element whose conditions hold
    pub fn render_frame(&self, device: &mut dyn GraphicsDevice, ctx: &HudContext) -> FrameStats {
        let mut stats = FrameStats::default();

        for (&element_type, hud_element) in &self.elements {
            if !ctx.settings.is_enabled(element_type) {
                stats.disabled += 1;
                continue;
            }

            if self.editing.contains(&element_type) {
                draw_preview_outline(hud_element, device, ctx);
            }

            if !hud_element.check_conditions(ctx) {
                stats.hidden += 1;
                continue;
            }

            match hud_element.draw(device, ctx) {
                Ok(()) => stats.drawn += 1,
                Err(e) => {
                    warn!(element = %element_type, error = %e, "element failed to draw");
                    stats.failed += 1;
                }
            }
        }

        stats
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Position editor
    // ─────────────────────────────────────────────────────────────────────────

    /// Highlight an element while the user is positioning it
    pub fn set_editing(&mut self, element_type: ElementType, editing: bool) {
        if editing {
            self.editing.insert(element_type);
        } else {
            self.editing.remove(&element_type);
        }
    }

    pub fn is_editing(&self, element_type: ElementType) -> bool {
        self.editing.contains(&element_type)
    }

    /// Move a moveable element; false if unknown, fixed, or off screen
    pub fn move_element(
        &mut self,
        element_type: ElementType,
        x: i32,
        y: i32,
        screen: &ScreenMetrics,
    ) -> bool {
        let Some(hud_element) = self.elements.get_mut(&element_type) else {
            debug!(element = %element_type, "move requested for unknown element");
            return false;
        };
        if !hud_element.element.is_moveable() {
            debug!(element = %element_type, "element is not moveable");
            return false;
        }
        hud_element.element.set_pos(x, y, screen)
    }

    /// Put one element back at its default position
    pub fn reset_element(&mut self, element_type: ElementType) -> bool {
        match self.elements.get_mut(&element_type) {
            Some(hud_element) => {
                hud_element.element.set_position_to_default();
                true
            }
            None => false,
        }
    }

    pub fn reset_all(&mut self) {
        for hud_element in self.elements.values_mut() {
            hud_element.element.set_position_to_default();
        }
    }

    /// Apply persisted positions and scales
    ///
    /// Positions go through the validated setter; a stored position that no
    /// longer fits the display leaves the element at its default.
    pub fn apply_settings(&mut self, settings: &HudSettings, screen: &ScreenMetrics) {
        for (&element_type, hud_element) in &mut self.elements {
            let Some(stored) = settings.element(element_type) else {
                continue;
            };
            let element = &mut hud_element.element;

            if let Some(ElementPosition { x, y }) = stored.position
                && element.is_moveable()
                && !element.set_pos(x, y, screen)
            {
                warn!(element = %element_type, x, y, "stored position is off screen, using default");
                element.set_position_to_default();
            }

            if stored.scale != element.scale() && !element.set_scale(stored.scale) {
                warn!(element = %element_type, scale = stored.scale, "ignoring invalid stored scale");
            }
        }
    }

    /// Record current positions and scales into `settings`
    ///
    /// Elements at their default position store no override.
    pub fn capture_settings(&self, settings: &mut HudSettings) {
        for (&element_type, hud_element) in &self.elements {
            let element = &hud_element.element;
            let stored = settings.element_mut(element_type);

            stored.position = (element.is_moveable() && !element.is_at_default()).then(|| {
                ElementPosition {
                    x: element.pos_x(),
                    y: element.pos_y(),
                }
            });
            stored.scale = element.scale();
        }
    }
}

/// Editor highlight around the element's drawn bounds, inside its scale bracket
fn draw_preview_outline(hud_element: &HudElement, device: &mut dyn GraphicsDevice, ctx: &HudContext) {
    let element = &hud_element.element;
    let bounds = hud_element.widget.bounds(element, ctx);
    let mut scaled = ScaleGuard::push(device, element.scale(), element.inverted_scale());
    draw_outline(
        &mut *scaled,
        bounds.x,
        bounds.y,
        bounds.width,
        bounds.height,
        offset_color(COLOR_DEFAULT[0], OFFSET_PREVIEW),
    );
}

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
