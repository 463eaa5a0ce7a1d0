//! Element positioning and lifecycle
//!
//! An [`Element`] is the positional half of a HUD widget: where it sits, how
//! big it is, whether the user may move it and the uniform scale applied
//! around its draw call. Positions change only through [`Element::set_pos`],
//! which validates both axes against the display before committing either.

use rpghud_types::ElementType;
use tracing::debug;

use crate::renderer::Rect;

/// Current display size and the UI-scaled logical size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenMetrics {
    pub display_width: i32,
    pub display_height: i32,
    pub scaled_width: i32,
    pub scaled_height: i32,
}

impl ScreenMetrics {
    /// `gui_scale` below 1 is treated as 1
    pub fn new(display_width: i32, display_height: i32, gui_scale: i32) -> Self {
        let factor = gui_scale.max(1);
        Self {
            display_width,
            display_height,
            scaled_width: (display_width + factor - 1) / factor,
            scaled_height: (display_height + factor - 1) / factor,
        }
    }

    pub fn unscaled(display_width: i32, display_height: i32) -> Self {
        Self::new(display_width, display_height, 1)
    }
}

/// Position, size and scale of one HUD element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    element_type: ElementType,
    pos_x: i32,
    pos_y: i32,
    default_pos_x: i32,
    default_pos_y: i32,
    width: i32,
    height: i32,
    moveable: bool,
    scale: f64,
    scale_inverted: f64,
    parent: ElementType,
}

impl Element {
    /// The initial position doubles as the element's default position
    pub fn new(
        element_type: ElementType,
        pos_x: i32,
        pos_y: i32,
        width: i32,
        height: i32,
        moveable: bool,
    ) -> Self {
        Self {
            element_type,
            pos_x,
            pos_y,
            default_pos_x: pos_x,
            default_pos_y: pos_y,
            width,
            height,
            moveable,
            scale: 1.0,
            scale_inverted: 1.0,
            parent: element_type,
        }
    }

    /// Associate this element with a parent (e.g. mount health under health)
    pub fn with_parent(mut self, parent: ElementType) -> Self {
        self.parent = parent;
        self
    }

    pub fn element_type(&self) -> ElementType {
        self.element_type
    }

    pub fn parent(&self) -> ElementType {
        self.parent
    }

    pub fn pos_x(&self) -> i32 {
        self.pos_x
    }

    pub fn pos_y(&self) -> i32 {
        self.pos_y
    }

    pub fn default_pos(&self) -> (i32, i32) {
        (self.default_pos_x, self.default_pos_y)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_moveable(&self) -> bool {
        self.moveable
    }

    pub fn is_at_default(&self) -> bool {
        (self.pos_x, self.pos_y) == self.default_pos()
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos_x, self.pos_y, self.width, self.height)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn inverted_scale(&self) -> f64 {
        self.scale_inverted
    }

    /// Set the render scale. Only finite, positive values are accepted.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() || scale <= 0.0 {
            debug!(element = %self.element_type, scale, "rejected element scale");
            return false;
        }
        self.scale = scale;
        self.scale_inverted = 1.0 / scale;
        true
    }

    /// Move the element if the new position keeps it on the display
    ///
    /// Valid when `0 <= x < display_width - width` and
    /// `0 <= y < display_height - height`. Either both axes are committed or
    /// neither is.
    pub fn set_pos(&mut self, pos_x: i32, pos_y: i32, screen: &ScreenMetrics) -> bool {
        let x_valid = pos_x >= 0 && pos_x < screen.display_width.wrapping_sub(self.width);
        let y_valid = pos_y >= 0 && pos_y < screen.display_height.wrapping_sub(self.height);

        if x_valid && y_valid {
            self.pos_x = pos_x;
            self.pos_y = pos_y;
        } else {
            debug!(
                element = %self.element_type,
                pos_x,
                pos_y,
                x_valid,
                y_valid,
                "rejected element position"
            );
        }
        x_valid && y_valid
    }

    /// Restore the construction-time position, without validation
    pub fn set_position_to_default(&mut self) {
        self.pos_x = self.default_pos_x;
        self.pos_y = self.default_pos_y;
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
