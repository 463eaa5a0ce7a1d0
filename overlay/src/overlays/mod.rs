//! Concrete HUD elements
//!
//! Each element pairs an [`Element`] (position, size, scale) with a widget
//! that knows when it should be shown and how to draw itself from the
//! current [`PlayerSnapshot`].
//!
//! # HudWidget Trait
//!
//! All widgets implement [`HudWidget`]. The closed [`Widget`] enum dispatches
//! to them so the frame driver can hold every element in one collection.

mod experience;
mod health;
mod jump_bar;
mod jump_bar_texture;
mod mount_health;

pub use experience::Experience;
pub use health::HealthBar;
pub use jump_bar::JumpBar;
pub use jump_bar_texture::JumpBarTexture;
pub use mount_health::MountHealthBar;

use rpghud_types::{ElementType, HudSettings};

use crate::color::PackedColor;
use crate::device::{GraphicsDevice, ScaleGuard};
use crate::element::{Element, ScreenMetrics};
use crate::error::RenderError;
use crate::renderer::Rect;

// ─────────────────────────────────────────────────────────────────────────────
// Frame inputs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Survival,
    Creative,
    Adventure,
    Spectator,
}

/// State of the entity the player is riding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountSnapshot {
    /// False for boats, minecarts and other non-living vehicles
    pub living: bool,
    pub health: f32,
    pub max_health: f32,
    /// Charge of the mount jump, `0.0..=1.0`
    pub jump_power: f32,
}

/// Player data read by widgets for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub health: f32,
    pub max_health: f32,
    pub food: i32,
    pub air: i32,
    /// Progress towards the next level, `0.0..=1.0`
    pub experience: f32,
    pub level: i32,
    pub game_mode: GameMode,
    pub mount: Option<MountSnapshot>,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            health: 20.0,
            max_health: 20.0,
            food: 20,
            air: 300,
            experience: 0.0,
            level: 0,
            game_mode: GameMode::Survival,
            mount: None,
        }
    }
}

impl PlayerSnapshot {
    pub fn is_spectator(&self) -> bool {
        self.game_mode == GameMode::Spectator
    }

    /// Creative and spectator players have no survival stats on screen
    pub fn has_survival_hud(&self) -> bool {
        matches!(self.game_mode, GameMode::Survival | GameMode::Adventure)
    }

    /// The mount, if the player is riding a living entity
    pub fn living_mount(&self) -> Option<&MountSnapshot> {
        self.mount.as_ref().filter(|m| m.living)
    }
}

/// Everything a widget may read while drawing
#[derive(Debug, Clone, Copy)]
pub struct HudContext<'a> {
    pub screen: ScreenMetrics,
    pub player: &'a PlayerSnapshot,
    pub settings: &'a HudSettings,
    pub partial_ticks: f32,
}

impl<'a> HudContext<'a> {
    pub fn new(screen: ScreenMetrics, player: &'a PlayerSnapshot, settings: &'a HudSettings) -> Self {
        Self {
            screen,
            player,
            settings,
            partial_ticks: 0.0,
        }
    }

    /// Main color for an element, honoring user overrides
    pub fn color_for(&self, element_type: ElementType, default: PackedColor) -> PackedColor {
        PackedColor(self.settings.color_for(element_type, default.raw()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget trait
// ─────────────────────────────────────────────────────────────────────────────

/// Capability shared by every HUD element's content
pub trait HudWidget {
    /// Whether the element should be drawn this frame
    fn check_conditions(&self, _ctx: &HudContext) -> bool {
        true
    }

    /// Screen area the widget draws into, the element's box by default
    fn bounds(&self, element: &Element, _ctx: &HudContext) -> Rect {
        element.bounds()
    }

    /// Draw the element's content at its current position
    fn draw_element(
        &self,
        element: &Element,
        device: &mut dyn GraphicsDevice,
        ctx: &HudContext,
    ) -> Result<(), RenderError>;
}

/// The closed set of built-in widgets
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Health(HealthBar),
    MountHealth(MountHealthBar),
    JumpBar(JumpBar),
    JumpBarTexture(JumpBarTexture),
    Experience(Experience),
}

impl Widget {
    fn inner(&self) -> &dyn HudWidget {
        match self {
            Widget::Health(w) => w,
            Widget::MountHealth(w) => w,
            Widget::JumpBar(w) => w,
            Widget::JumpBarTexture(w) => w,
            Widget::Experience(w) => w,
        }
    }
}

impl HudWidget for Widget {
    fn check_conditions(&self, ctx: &HudContext) -> bool {
        self.inner().check_conditions(ctx)
    }

    fn bounds(&self, element: &Element, ctx: &HudContext) -> Rect {
        self.inner().bounds(element, ctx)
    }

    fn draw_element(
        &self,
        element: &Element,
        device: &mut dyn GraphicsDevice,
        ctx: &HudContext,
    ) -> Result<(), RenderError> {
        self.inner().draw_element(element, device, ctx)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HudElement
// ─────────────────────────────────────────────────────────────────────────────

/// An element's placement together with its content
#[derive(Debug, Clone, PartialEq)]
pub struct HudElement {
    pub element: Element,
    pub widget: Widget,
}

impl HudElement {
    pub fn new(element: Element, widget: impl Into<Widget>) -> Self {
        Self {
            element,
            widget: widget.into(),
        }
    }

    pub fn element_type(&self) -> ElementType {
        self.element.element_type()
    }

    pub fn check_conditions(&self, ctx: &HudContext) -> bool {
        self.widget.check_conditions(ctx)
    }

    /// Draw inside the element's scale bracket
    ///
    /// The inverse scale is applied even when the widget fails.
    pub fn draw(&self, device: &mut dyn GraphicsDevice, ctx: &HudContext) -> Result<(), RenderError> {
        let mut scaled = ScaleGuard::push(device, self.element.scale(), self.element.inverted_scale());
        self.widget.draw_element(&self.element, &mut *scaled, ctx)
    }
}

macro_rules! impl_into_widget {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(impl From<$ty> for Widget {
            fn from(widget: $ty) -> Self {
                Widget::$variant(widget)
            }
        })*
    };
}

impl_into_widget! {
    Health => HealthBar,
    MountHealth => MountHealthBar,
    JumpBar => JumpBar,
    JumpBarTexture => JumpBarTexture,
    Experience => Experience,
}
