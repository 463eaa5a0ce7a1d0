//! Tests for the HUD frame driver and position editor
//!
//! Verifies that:
//! - Elements are drawn only when enabled and their conditions hold
//! - A failing element leaves device state restored
//! - Moves, resets and persisted settings go through validation
//! - Edited elements get the preview highlight

use rpghud_types::{ElementPosition, ElementType, HudSettings};

use super::*;
use crate::color::PackedColor;
use crate::device::{DeviceCall, RecordingDevice};
use crate::error::RenderError;
use crate::overlays::{MountSnapshot, PlayerSnapshot};

// ═══════════════════════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn screen() -> ScreenMetrics {
    ScreenMetrics::unscaled(427, 240)
}

fn riding_player() -> PlayerSnapshot {
    PlayerSnapshot {
        mount: Some(MountSnapshot {
            living: true,
            health: 15.0,
            max_health: 30.0,
            jump_power: 0.4,
        }),
        ..Default::default()
    }
}

fn render(hud: &Hud, player: &PlayerSnapshot, settings: &HudSettings) -> (FrameStats, RecordingDevice) {
    let mut device = RecordingDevice::new();
    let ctx = HudContext::new(screen(), player, settings);
    let stats = hud.render_frame(&mut device, &ctx);
    (stats, device)
}

// ═══════════════════════════════════════════════════════════════════════════
// Layout
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_default_layout_registers_bar_elements() {
    let hud = Hud::new(HudStyle::Default, &screen());
    let types: Vec<_> = hud.elements().map(HudElement::element_type).collect();
    assert_eq!(
        types,
        vec![
            ElementType::Health,
            ElementType::HealthMount,
            ElementType::JumpBar,
            ElementType::Experience,
        ]
    );
    assert!(hud.element(ElementType::JumpBar).unwrap().element.is_moveable());
}

#[test]
fn test_texture_layout_uses_fixed_jump_bar() {
    let hud = Hud::new(HudStyle::Texture, &screen());
    let jump = &hud.element(ElementType::JumpBar).unwrap().element;
    assert!(!jump.is_moveable());
    assert_eq!((jump.pos_x(), jump.pos_y()), (142, 160));
    assert_eq!(hud.element(ElementType::HealthMount).unwrap().element.parent(), ElementType::Health);
}

// ═══════════════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_on_foot_hides_mount_elements() {
    let hud = Hud::new(HudStyle::Default, &screen());
    let (stats, _) = render(&hud, &PlayerSnapshot::default(), &HudSettings::default());
    assert_eq!(
        stats,
        FrameStats {
            drawn: 2,
            hidden: 2,
            disabled: 0,
            failed: 0
        }
    );
}

#[test]
fn test_riding_draws_everything() {
    let hud = Hud::new(HudStyle::Default, &screen());
    let (stats, device) = render(&hud, &riding_player(), &HudSettings::default());
    assert_eq!(stats.drawn, 4);
    assert_eq!(device.state(), &crate::device::DeviceState::default());
}

#[test]
fn test_disabled_elements_are_skipped() {
    let hud = Hud::new(HudStyle::Default, &screen());
    let mut settings = HudSettings::default();
    settings.element_mut(ElementType::Experience).enabled = false;

    let (stats, _) = render(&hud, &PlayerSnapshot::default(), &settings);
    assert_eq!(stats.drawn, 1);
    assert_eq!(stats.disabled, 1);
}

#[test]
fn test_element_scale_is_bracketed() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    let mut settings = HudSettings::default();
    settings.element_mut(ElementType::Health).scale = 2.0;
    hud.apply_settings(&settings, &screen());

    let (_, device) = render(&hud, &PlayerSnapshot::default(), &settings);
    let scales: Vec<_> = device
        .calls()
        .iter()
        .filter_map(|c| match c {
            DeviceCall::Scale([s, _, _]) => Some(*s),
            _ => None,
        })
        .collect();
    // health (2.0 / 0.5) then experience (1.0 / 1.0)
    assert_eq!(scales, vec![2.0, 0.5, 1.0, 1.0]);
    assert_eq!(device.state().scale, 1.0);
}

#[test]
fn test_failed_draw_restores_scale() {
    let screen = screen();
    let mut element = JumpBarTexture::element(&screen);
    element.set_scale(2.0);
    let hud_element = HudElement::new(element, JumpBarTexture);

    let player = PlayerSnapshot::default();
    let settings = HudSettings::default();
    let ctx = HudContext::new(screen, &player, &settings);
    let mut device = RecordingDevice::new();

    let result = hud_element.draw(&mut device, &ctx);
    assert!(matches!(result, Err(RenderError::MissingData { .. })));
    assert_eq!(
        device.calls(),
        &[DeviceCall::Scale([2.0; 3]), DeviceCall::Scale([0.5; 3])]
    );
}

#[test]
fn test_editing_draws_preview_highlight() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    hud.set_editing(ElementType::Health, true);
    assert!(hud.is_editing(ElementType::Health));

    let (_, device) = render(&hud, &PlayerSnapshot::default(), &HudSettings::default());
    let quads = device.quads();
    let highlight = PackedColor(0xA6_A6A6).rgba_f32();
    assert!(quads[..4].iter().all(|q| q.color == highlight));
    assert_eq!(quads[0].as_rect(), (49.0, 9.0, 110.0, 1.0));

    hud.set_editing(ElementType::Health, false);
    let (_, device) = render(&hud, &PlayerSnapshot::default(), &HudSettings::default());
    assert!(device.quads().iter().all(|q| q.color != highlight));
}

#[test]
fn test_editing_highlights_hidden_elements() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    hud.set_editing(ElementType::JumpBar, true);

    let (stats, device) = render(&hud, &PlayerSnapshot::default(), &HudSettings::default());
    assert_eq!(stats.hidden, 2);
    let highlight = PackedColor(0xA6_A6A6).rgba_f32();
    assert_eq!(device.quads().iter().filter(|q| q.color == highlight).count(), 4);
}

// ═══════════════════════════════════════════════════════════════════════════
// Position editor
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_move_element_validates_position() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    assert!(hud.move_element(ElementType::Health, 100, 50, &screen()));
    // 427 - 110 = 317 is flush with the right edge
    assert!(!hud.move_element(ElementType::Health, 317, 50, &screen()));

    let health = &hud.element(ElementType::Health).unwrap().element;
    assert_eq!((health.pos_x(), health.pos_y()), (100, 50));
}

#[test]
fn test_move_rejects_fixed_and_unknown_elements() {
    let mut hud = Hud::new(HudStyle::Texture, &screen());
    assert!(!hud.move_element(ElementType::JumpBar, 10, 10, &screen()));
    assert!(!hud.move_element(ElementType::Clock, 10, 10, &screen()));
}

#[test]
fn test_reset_element_and_reset_all() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    hud.move_element(ElementType::Health, 100, 50, &screen());
    hud.move_element(ElementType::Experience, 10, 200, &screen());

    assert!(hud.reset_element(ElementType::Health));
    assert!(hud.element(ElementType::Health).unwrap().element.is_at_default());
    assert!(!hud.element(ElementType::Experience).unwrap().element.is_at_default());

    hud.reset_all();
    assert!(hud.elements().all(|e| e.element.is_at_default()));
    assert!(!hud.reset_element(ElementType::Clock));
}

// ═══════════════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_capture_then_apply_restores_layout() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    hud.move_element(ElementType::Health, 100, 50, &screen());

    let mut settings = HudSettings::default();
    hud.capture_settings(&mut settings);
    assert_eq!(
        settings.element(ElementType::Health).unwrap().position,
        Some(ElementPosition { x: 100, y: 50 })
    );
    assert_eq!(settings.element(ElementType::Experience).unwrap().position, None);

    let mut restored = Hud::new(HudStyle::Default, &screen());
    restored.apply_settings(&settings, &screen());
    let health = &restored.element(ElementType::Health).unwrap().element;
    assert_eq!((health.pos_x(), health.pos_y()), (100, 50));
}

#[test]
fn test_apply_settings_rejects_off_screen_position() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    let mut settings = HudSettings::default();
    settings.element_mut(ElementType::Health).position = Some(ElementPosition { x: 1000, y: 10 });

    hud.apply_settings(&settings, &screen());
    assert!(hud.element(ElementType::Health).unwrap().element.is_at_default());
}

#[test]
fn test_apply_settings_off_screen_position_restores_default_after_move() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    assert!(hud.move_element(ElementType::Health, 100, 50, &screen()));

    let mut settings = HudSettings::default();
    settings.element_mut(ElementType::Health).position = Some(ElementPosition { x: 1000, y: 10 });
    hud.apply_settings(&settings, &screen());

    let health = &hud.element(ElementType::Health).unwrap().element;
    assert_eq!((health.pos_x(), health.pos_y()), (49, 9));
}

#[test]
fn test_apply_settings_ignores_invalid_scale() {
    let mut hud = Hud::new(HudStyle::Default, &screen());
    let mut settings = HudSettings::default();
    settings.element_mut(ElementType::Health).scale = 0.0;

    hud.apply_settings(&settings, &screen());
    assert_eq!(hud.element(ElementType::Health).unwrap().element.scale(), 1.0);
}

#[test]
fn test_capture_skips_fixed_elements() {
    let hud = Hud::new(HudStyle::Texture, &screen());
    let mut settings = HudSettings::default();
    hud.capture_settings(&mut settings);
    assert_eq!(settings.element(ElementType::JumpBar).unwrap().position, None);
}

#[test]
fn test_texture_jump_bar_highlight_follows_screen_resize() {
    let mut hud = Hud::new(HudStyle::Texture, &screen());
    hud.set_editing(ElementType::JumpBar, true);

    let resized = ScreenMetrics::unscaled(854, 480);
    let player = PlayerSnapshot::default();
    let settings = HudSettings::default();
    let ctx = HudContext::new(resized, &player, &settings);
    let mut device = RecordingDevice::new();
    hud.render_frame(&mut device, &ctx);

    let highlight = PackedColor(0xA6_A6A6).rgba_f32();
    let outline: Vec<_> = device
        .quads()
        .into_iter()
        .filter(|q| q.color == highlight)
        .map(|q| q.as_rect())
        .collect();
    // origin on the resized screen is (854 / 2 - 71, 480 - 80)
    assert_eq!(outline.len(), 4);
    assert_eq!(outline[0], (356.0, 400.0, 141.0, 1.0));
    assert_eq!(outline[3], (356.0, 409.0, 141.0, 1.0));
}
