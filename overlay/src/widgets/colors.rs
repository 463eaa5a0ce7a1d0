//! HUD palette
//!
//! Raw packed colors used by the built-in elements. User overrides come from
//! [`rpghud_types::HudSettings`]; these are the fallbacks.

use crate::color::PackedColor;

pub const COLOR_RED: PackedColor = PackedColor(0xC1_0000);
pub const COLOR_PINK: PackedColor = PackedColor(0xFF_69B4);
pub const COLOR_BROWN: PackedColor = PackedColor(0x8B_4513);
pub const COLOR_WHITE: PackedColor = PackedColor(0xF2_F2F2);
pub const COLOR_ORANGE: PackedColor = PackedColor(0xFF_8400);
pub const COLOR_GREEN: PackedColor = PackedColor(0x3B_C200);
pub const COLOR_PURPLE: PackedColor = PackedColor(0xA4_00F0);
pub const COLOR_BLUE: PackedColor = PackedColor(0x00_5BC2);
pub const COLOR_AQUA: PackedColor = PackedColor(0x00_FFFF);
/// Not pure black: the HUD's "black" is a dark grey
pub const COLOR_BLACK: PackedColor = PackedColor(0x29_2929);
pub const COLOR_GREY: PackedColor = PackedColor(0x8A_8A8A);
pub const COLOR_YELLOW: PackedColor = PackedColor(0xEE_EE00);

/// Two-tone bar background, light then dark
pub const COLOR_DEFAULT: [PackedColor; 2] = [PackedColor(0x4C_4C4C), PackedColor(0x3D_3D3D)];

/// Outline color used when none is given
pub const COLOR_OUTLINE: PackedColor = PackedColor(0x00_0000);

/// Darken step used to derive a bar's dark tone from its light tone
pub const OFFSET_PERCENT: i32 = 25;

/// Brighten offset for the position editor highlight
pub const OFFSET_PREVIEW: PackedColor = PackedColor(0x5A_5A5A);
