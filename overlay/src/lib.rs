//! RPG HUD rendering core
//!
//! Draws a role-playing-game style HUD through an abstract immediate-mode
//! graphics device.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    manager                          │
//! │         Hud (frame driver + position editor)        │
//! ├─────────────────────────────────────────────────────┤
//! │                    overlays/                        │
//! │   HealthBar, MountHealthBar, JumpBar, Experience    │
//! │        (concrete elements behind HudWidget)         │
//! ├─────────────────────────────────────────────────────┤
//! │              widgets/  +  element                   │
//! │      CustomBar, palette  /  positioning, scale      │
//! ├─────────────────────────────────────────────────────┤
//! │                    renderer                         │
//! │       rects, tetragons, outlines (+ color math)     │
//! ├─────────────────────────────────────────────────────┤
//! │                    device                           │
//! │  GraphicsDevice, state guards, Recording / Software │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod color;
pub mod device;
pub mod element;
pub mod error;
pub mod manager;
pub mod overlays;
pub mod renderer;
pub mod settings;
pub mod software;
pub mod textures;
pub mod utils;
pub mod widgets;

// Re-export commonly used types
pub use color::{PackedColor, offset_color, offset_color_percent};
pub use device::{GraphicsDevice, PrimitiveGuard, RecordingDevice, ScaleGuard, TextureKey};
pub use element::{Element, ScreenMetrics};
pub use error::{ConfigError, RenderError};
pub use manager::{FrameStats, Hud, HudStyle};
pub use overlays::{GameMode, HudContext, HudElement, HudWidget, MountSnapshot, PlayerSnapshot, Widget};
pub use renderer::{Rect, Tetragon, draw_outline, draw_rect, draw_tetragon};
pub use settings::HudSettingsExt;
pub use software::SoftwareDevice;
pub use widgets::{BarColors, CustomBar, draw_custom_bar};
