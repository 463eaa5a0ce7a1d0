//! Shared settings types for the RPG HUD
//!
//! This crate contains the element registry key and the serializable settings
//! that are shared between the rendering core (rpghud-overlay) and the
//! command line front-end.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// Packed color as `0xAARRGGBB`. Values in `0..=0xFFFFFF` are opaque,
/// `-1` means "do not draw".
pub type Color = i32;

// ─────────────────────────────────────────────────────────────────────────────
// Element Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Identifies each kind of HUD element.
///
/// Used as the settings lookup key and for parent/child association between
/// elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Void,
    Hotbar,
    Health,
    Armor,
    Food,
    HealthMount,
    Air,
    JumpBar,
    Experience,
    Level,
    Clock,
    Details,
    Widget,
}

static ELEMENT_KEYS: phf::Map<&'static str, ElementType> = phf::phf_map! {
    "void" => ElementType::Void,
    "hotbar" => ElementType::Hotbar,
    "health" => ElementType::Health,
    "armor" => ElementType::Armor,
    "food" => ElementType::Food,
    "health_mount" => ElementType::HealthMount,
    "air" => ElementType::Air,
    "jump_bar" => ElementType::JumpBar,
    "experience" => ElementType::Experience,
    "level" => ElementType::Level,
    "clock" => ElementType::Clock,
    "details" => ElementType::Details,
    "widget" => ElementType::Widget,
};

impl ElementType {
    pub const ALL: [ElementType; 13] = [
        ElementType::Void,
        ElementType::Hotbar,
        ElementType::Health,
        ElementType::Armor,
        ElementType::Food,
        ElementType::HealthMount,
        ElementType::Air,
        ElementType::JumpBar,
        ElementType::Experience,
        ElementType::Level,
        ElementType::Clock,
        ElementType::Details,
        ElementType::Widget,
    ];

    /// Stable key used in the settings file and on the command line
    pub fn key(&self) -> &'static str {
        match self {
            ElementType::Void => "void",
            ElementType::Hotbar => "hotbar",
            ElementType::Health => "health",
            ElementType::Armor => "armor",
            ElementType::Food => "food",
            ElementType::HealthMount => "health_mount",
            ElementType::Air => "air",
            ElementType::JumpBar => "jump_bar",
            ElementType::Experience => "experience",
            ElementType::Level => "level",
            ElementType::Clock => "clock",
            ElementType::Details => "details",
            ElementType::Widget => "widget",
        }
    }

    /// Look up an element type by its settings key
    pub fn from_key(key: &str) -> Option<Self> {
        ELEMENT_KEYS.get(key).copied()
    }

    /// Human readable name for menus and logs
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementType::Void => "Void",
            ElementType::Hotbar => "Hotbar",
            ElementType::Health => "Health Bar",
            ElementType::Armor => "Armor",
            ElementType::Food => "Hunger Bar",
            ElementType::HealthMount => "Mount Health",
            ElementType::Air => "Air Bar",
            ElementType::JumpBar => "Jump Bar",
            ElementType::Experience => "Experience Bar",
            ElementType::Level => "Level",
            ElementType::Clock => "Clock",
            ElementType::Details => "Details",
            ElementType::Widget => "Widget",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::from_key(&s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown element type '{s}'"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings
// ─────────────────────────────────────────────────────────────────────────────

/// A persisted screen position for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementPosition {
    pub x: i32,
    pub y: i32,
}

fn default_true() -> bool {
    true
}

fn default_scale() -> f64 {
    1.0
}

/// Per-element user preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSettings {
    /// Position override; `None` keeps the element's built-in default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ElementPosition>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Main color override for bar elements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Default for ElementSettings {
    fn default() -> Self {
        Self {
            position: None,
            enabled: true,
            scale: 1.0,
            color: None,
        }
    }
}

/// All persisted HUD preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudSettings {
    /// Draw the 1px outline around bars
    #[serde(default = "default_true")]
    pub show_outline: bool,
    /// Per-element settings keyed by [`ElementType::key`]
    #[serde(default)]
    pub elements: BTreeMap<String, ElementSettings>,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            show_outline: true,
            elements: BTreeMap::new(),
        }
    }
}

impl HudSettings {
    pub fn element(&self, element_type: ElementType) -> Option<&ElementSettings> {
        self.elements.get(element_type.key())
    }

    /// Get the settings for an element, inserting defaults if absent
    pub fn element_mut(&mut self, element_type: ElementType) -> &mut ElementSettings {
        self.elements
            .entry(element_type.key().to_string())
            .or_default()
    }

    pub fn is_enabled(&self, element_type: ElementType) -> bool {
        self.element(element_type).is_none_or(|e| e.enabled)
    }

    /// Color override for an element, or `default` if none is set
    pub fn color_for(&self, element_type: ElementType, default: Color) -> Color {
        self.element(element_type)
            .and_then(|e| e.color)
            .unwrap_or(default)
    }
}
