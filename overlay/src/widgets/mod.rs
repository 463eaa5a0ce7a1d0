//! Reusable HUD building blocks
//!
//! Widgets draw through any [`GraphicsDevice`](crate::device::GraphicsDevice)
//! and know nothing about the player. The concrete elements in
//! [`overlays`](crate::overlays) compose them.
//!
//! # Available Widgets
//!
//! - [`CustomBar`] - Two-tone bar with optional outline and ground fill

pub mod colors;
mod custom_bar;

pub use colors::*;
pub use custom_bar::{BarColors, BarLayout, CustomBar, draw_custom_bar};
