use std::path::PathBuf;

use rpghud_overlay::{
    ConfigError, Element, GraphicsDevice, Hud, HudContext, HudSettingsExt, HudStyle,
    MountSnapshot, PackedColor, PlayerSnapshot, RecordingDevice, ScaleGuard, ScreenMetrics,
    SoftwareDevice, TextureKey,
    widgets::{BarColors, COLOR_OUTLINE, draw_custom_bar},
};
use rpghud_types::{ElementType, HudSettings};
use tracing::info;

/// Where settings are read from and written to
#[derive(Debug, Clone, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
}

impl SettingsStore {
    /// `None` uses the platform config directory
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<HudSettings, ConfigError> {
        match &self.path {
            Some(path) => HudSettings::load_from(path),
            None => HudSettings::try_load(),
        }
    }

    pub fn save(&self, settings: &HudSettings) -> Result<(), ConfigError> {
        match &self.path {
            Some(path) => settings.save_to(path),
            None => settings.save(),
        }
    }

    pub fn location(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => HudSettings::config_path(),
        }
    }
}

/// Inputs for one rendered frame
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub out: PathBuf,
    pub screen: ScreenMetrics,
    pub gui_scale: i32,
    pub style: HudStyle,
    pub player: PlayerSnapshot,
    pub interface_texture: Option<PathBuf>,
}

/// Render the HUD for `request.player` to a PNG
pub fn render(store: &SettingsStore, request: &RenderRequest) -> Result<(), String> {
    let settings = store.load().map_err(|e| e.to_string())?;
    let screen = request.screen;

    let mut hud = Hud::new(request.style, &screen);
    hud.apply_settings(&settings, &screen);

    let mut device = SoftwareDevice::new(screen.display_width as u32, screen.display_height as u32)
        .map_err(|e| e.to_string())?;
    if let Some(path) = &request.interface_texture {
        device
            .textures_mut()
            .load_png_file(TextureKey::INTERFACE, path)
            .map_err(|e| e.to_string())?;
    }

    let ctx = HudContext::new(screen, &request.player, &settings);
    let gui_scale = request.gui_scale.max(1) as f64;
    let stats = {
        let mut scaled = ScaleGuard::push(&mut device as &mut dyn GraphicsDevice, gui_scale, 1.0 / gui_scale);
        hud.render_frame(&mut *scaled, &ctx)
    };

    device.save_png(&request.out).map_err(|e| e.to_string())?;
    info!(
        out = %request.out.display(),
        drawn = stats.drawn,
        hidden = stats.hidden,
        disabled = stats.disabled,
        failed = stats.failed,
        "frame rendered"
    );
    Ok(())
}

/// Bar geometry for the `trace` command
#[derive(Debug, Clone, Copy)]
pub struct BarRequest {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub value: f64,
    pub color: i32,
    pub outlined: bool,
}

/// Draw one custom bar on a recording device and return the call log
pub fn trace_bar(bar: &BarRequest) -> Vec<String> {
    let mut device = RecordingDevice::new();
    let layout = draw_custom_bar(
        &mut device,
        bar.x,
        bar.y,
        bar.width,
        bar.height,
        bar.value,
        BarColors::from_base(PackedColor(bar.color)),
        bar.outlined,
        COLOR_OUTLINE,
    );

    let mut lines = vec![format!("{layout:?}")];
    lines.extend(device.calls().iter().map(|call| format!("{call:?}")));
    lines
}

/// Move an element and persist the new position
pub fn move_element(
    store: &SettingsStore,
    screen: &ScreenMetrics,
    element: ElementType,
    x: i32,
    y: i32,
) -> Result<(), String> {
    let mut settings = store.load().map_err(|e| e.to_string())?;
    let mut hud = Hud::new(HudStyle::Default, screen);
    hud.apply_settings(&settings, screen);

    if !hud.move_element(element, x, y, screen) {
        return Err(format!(
            "cannot move {} to ({x}, {y}) on a {}x{} display",
            element.display_name(),
            screen.display_width,
            screen.display_height
        ));
    }

    hud.capture_settings(&mut settings);
    store.save(&settings).map_err(|e| e.to_string())?;
    info!(element = %element, x, y, "element moved");
    Ok(())
}

/// Reset one element (or all) to the default position and persist
pub fn reset(
    store: &SettingsStore,
    screen: &ScreenMetrics,
    element: Option<ElementType>,
) -> Result<(), String> {
    let mut settings = store.load().map_err(|e| e.to_string())?;
    let mut hud = Hud::new(HudStyle::Default, screen);
    hud.apply_settings(&settings, screen);

    match element {
        Some(element) => {
            if !hud.reset_element(element) {
                return Err(format!("{} is not part of the HUD", element.display_name()));
            }
            info!(element = %element, "element reset");
        }
        None => {
            hud.reset_all();
            info!("all elements reset");
        }
    }

    hud.capture_settings(&mut settings);
    store.save(&settings).map_err(|e| e.to_string())
}

/// Describe the effective layout, one line per element
pub fn show(store: &SettingsStore, screen: &ScreenMetrics) -> Result<Vec<String>, String> {
    let settings = store.load().map_err(|e| e.to_string())?;
    let mut hud = Hud::new(HudStyle::Default, screen);
    hud.apply_settings(&settings, screen);

    let mut lines = Vec::new();
    if let Ok(path) = store.location() {
        lines.push(format!("settings: {}", path.display()));
    }
    lines.push(format!("outline: {}", settings.show_outline));
    lines.extend(hud.elements().map(|e| describe(&e.element, &settings)));
    Ok(lines)
}

fn describe(element: &Element, settings: &HudSettings) -> String {
    let ty = element.element_type();
    format!(
        "{:<12} {:>4},{:<4} {:>3}x{:<3} scale {:.2}{}{}",
        ty.key(),
        element.pos_x(),
        element.pos_y(),
        element.width(),
        element.height(),
        element.scale(),
        if element.is_at_default() { "" } else { " (moved)" },
        if settings.is_enabled(ty) { "" } else { " [disabled]" },
    )
}

/// Player snapshot assembled from command line values
pub fn player_snapshot(
    health: f32,
    max_health: f32,
    experience: f32,
    riding: bool,
    jump: f32,
) -> PlayerSnapshot {
    PlayerSnapshot {
        health,
        max_health,
        experience,
        mount: riding.then_some(MountSnapshot {
            living: true,
            health: 20.0,
            max_health: 20.0,
            jump_power: jump.clamp(0.0, 1.0),
        }),
        ..Default::default()
    }
}
