//! Graphics device abstraction
//!
//! The HUD never talks to a concrete graphics API. Everything it draws goes
//! through [`GraphicsDevice`], a small immediate-mode surface modelled on a
//! fixed-function GL state machine. Device state is global and unlocked, so
//! every primitive brackets its changes with a [`PrimitiveGuard`] and every
//! element brackets its transform with a [`ScaleGuard`]. Both restore on drop,
//! including when a draw step returns early or unwinds.

use std::borrow::Cow;
use std::fmt;
use std::ops::{Deref, DerefMut};

// ─────────────────────────────────────────────────────────────────────────────
// Device vocabulary
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of primitive assembled between `begin_primitive` and `end_primitive`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    /// Every four vertices form one filled quad
    Quads,
}

impl PrimitiveMode {
    /// The GL enum value for this mode
    pub fn gl_mode(&self) -> u32 {
        match self {
            PrimitiveMode::Quads => 7,
        }
    }
}

/// Layout of each submitted vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexFormat {
    Position,
    PositionTex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
}

/// Opaque texture identifier resolved by the device (`namespace:path`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureKey(Cow<'static, str>);

impl TextureKey {
    /// HUD interface atlas (bars, frames)
    pub const INTERFACE: TextureKey = TextureKey::from_static("rpghud:textures/interface.png");
    /// Vanilla icon atlas, left bound after a widget is done with its own atlas
    pub const ICONS: TextureKey = TextureKey::from_static("minecraft:textures/gui/icons.png");

    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    pub fn new(key: impl Into<String>) -> Self {
        Self(Cow::Owned(key.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part, `minecraft` if none is given
    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or("minecraft", |(ns, _)| ns)
    }

    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(&self.0, |(_, path)| path)
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Device trait
// ─────────────────────────────────────────────────────────────────────────────

/// Immediate-mode graphics device consumed by the HUD
///
/// Implementations own the global render state. Callers are expected to leave
/// that state exactly as they found it; see [`PrimitiveGuard`].
pub trait GraphicsDevice {
    fn enable_blend(&mut self);
    fn disable_blend(&mut self);
    fn enable_texture(&mut self);
    fn disable_texture(&mut self);
    fn enable_depth(&mut self);
    fn disable_depth(&mut self);
    fn blend_func_separate(
        &mut self,
        src: BlendFactor,
        dst: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    );
    /// Set the active draw color, channels in `[0, 1]`
    fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32);
    fn bind_texture(&mut self, texture: &TextureKey);
    fn begin_primitive(&mut self, mode: PrimitiveMode, format: VertexFormat);
    fn add_vertex(&mut self, x: f64, y: f64, z: f64);
    fn end_primitive(&mut self);
    /// Blit the `(u, v, width, height)` region of the bound texture to `(x, y)`
    fn draw_textured_rect(&mut self, x: i32, y: i32, u: i32, v: i32, width: i32, height: i32);
    /// Multiply the current transform by a scale
    fn scale(&mut self, sx: f64, sy: f64, sz: f64);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scoped state guards
// ─────────────────────────────────────────────────────────────────────────────

/// Holds the device in "untextured, blended, no depth" state for one primitive
///
/// Acquiring the guard issues enable blend, disable texture, the standard
/// alpha blend function, the draw color and disable depth, in that order.
/// Dropping it issues enable texture, disable blend, enable depth and resets
/// the color to opaque white.
pub struct PrimitiveGuard<'a, D: GraphicsDevice + ?Sized> {
    device: &'a mut D,
}

impl<'a, D: GraphicsDevice + ?Sized> PrimitiveGuard<'a, D> {
    pub fn begin(device: &'a mut D, [r, g, b, a]: [f32; 4]) -> Self {
        device.enable_blend();
        device.disable_texture();
        device.blend_func_separate(
            BlendFactor::SrcAlpha,
            BlendFactor::OneMinusSrcAlpha,
            BlendFactor::One,
            BlendFactor::Zero,
        );
        device.set_color(r, g, b, a);
        device.disable_depth();
        Self { device }
    }
}

impl<D: GraphicsDevice + ?Sized> Deref for PrimitiveGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.device
    }
}

impl<D: GraphicsDevice + ?Sized> DerefMut for PrimitiveGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.device
    }
}

impl<D: GraphicsDevice + ?Sized> Drop for PrimitiveGuard<'_, D> {
    fn drop(&mut self) {
        self.device.enable_texture();
        self.device.disable_blend();
        self.device.enable_depth();
        self.device.set_color(1.0, 1.0, 1.0, 1.0);
    }
}

/// Applies a uniform scale for the guard's lifetime, then its inverse
pub struct ScaleGuard<'a, D: GraphicsDevice + ?Sized> {
    device: &'a mut D,
    inverse: f64,
}

impl<'a, D: GraphicsDevice + ?Sized> ScaleGuard<'a, D> {
    /// `inverse` is passed in rather than derived so elements can reuse their
    /// precomputed value
    pub fn push(device: &'a mut D, scale: f64, inverse: f64) -> Self {
        device.scale(scale, scale, scale);
        Self { device, inverse }
    }
}

impl<D: GraphicsDevice + ?Sized> Deref for ScaleGuard<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.device
    }
}

impl<D: GraphicsDevice + ?Sized> DerefMut for ScaleGuard<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.device
    }
}

impl<D: GraphicsDevice + ?Sized> Drop for ScaleGuard<'_, D> {
    fn drop(&mut self) {
        self.device.scale(self.inverse, self.inverse, self.inverse);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Recording device
// ─────────────────────────────────────────────────────────────────────────────

/// One call made against a [`RecordingDevice`]
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCall {
    EnableBlend,
    DisableBlend,
    EnableTexture,
    DisableTexture,
    EnableDepth,
    DisableDepth,
    BlendFuncSeparate(BlendFactor, BlendFactor, BlendFactor, BlendFactor),
    SetColor([f32; 4]),
    BindTexture(TextureKey),
    BeginPrimitive(PrimitiveMode, VertexFormat),
    AddVertex([f64; 3]),
    EndPrimitive,
    DrawTexturedRect {
        x: i32,
        y: i32,
        u: i32,
        v: i32,
        width: i32,
        height: i32,
    },
    Scale([f64; 3]),
}

/// Observable render state of a [`RecordingDevice`]
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceState {
    pub blend: bool,
    pub texture: bool,
    pub depth: bool,
    pub color: [f32; 4],
    pub bound_texture: Option<TextureKey>,
    pub scale: f64,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            blend: false,
            texture: true,
            depth: true,
            color: [1.0; 4],
            bound_texture: None,
            scale: 1.0,
        }
    }
}

/// A filled quad reconstructed from recorded calls
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuad {
    pub color: [f32; 4],
    pub vertices: [[f64; 2]; 4],
}

impl RecordedQuad {
    /// Interpret the quad as an axis-aligned rect `(x, y, width, height)`,
    /// assuming the bottom-left, bottom-right, top-right, top-left winding
    pub fn as_rect(&self) -> (f64, f64, f64, f64) {
        let [bl, br, _, tl] = self.vertices;
        (tl[0], tl[1], br[0] - bl[0], bl[1] - tl[1])
    }
}

/// A device that performs no rendering and records every call it receives
#[derive(Debug, Default)]
pub struct RecordingDevice {
    calls: Vec<DeviceCall>,
    state: DeviceState,
}

impl RecordingDevice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DeviceCall] {
        &self.calls
    }

    pub fn take_calls(&mut self) -> Vec<DeviceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Quads submitted so far, with the color active when each was ended
    pub fn quads(&self) -> Vec<RecordedQuad> {
        let mut quads = Vec::new();
        let mut color = [1.0; 4];
        let mut pending: Vec<[f64; 2]> = Vec::new();

        for call in &self.calls {
            match call {
                DeviceCall::SetColor(c) => color = *c,
                DeviceCall::BeginPrimitive(..) => pending.clear(),
                DeviceCall::AddVertex([x, y, _]) => pending.push([*x, *y]),
                DeviceCall::EndPrimitive => {
                    for chunk in pending.chunks_exact(4) {
                        quads.push(RecordedQuad {
                            color,
                            vertices: [chunk[0], chunk[1], chunk[2], chunk[3]],
                        });
                    }
                    pending.clear();
                }
                _ => {}
            }
        }

        quads
    }

    /// Axis-aligned rects submitted so far, see [`RecordedQuad::as_rect`]
    pub fn rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.quads().iter().map(RecordedQuad::as_rect).collect()
    }
}

impl GraphicsDevice for RecordingDevice {
    fn enable_blend(&mut self) {
        self.state.blend = true;
        self.calls.push(DeviceCall::EnableBlend);
    }

    fn disable_blend(&mut self) {
        self.state.blend = false;
        self.calls.push(DeviceCall::DisableBlend);
    }

    fn enable_texture(&mut self) {
        self.state.texture = true;
        self.calls.push(DeviceCall::EnableTexture);
    }

    fn disable_texture(&mut self) {
        self.state.texture = false;
        self.calls.push(DeviceCall::DisableTexture);
    }

    fn enable_depth(&mut self) {
        self.state.depth = true;
        self.calls.push(DeviceCall::EnableDepth);
    }

    fn disable_depth(&mut self) {
        self.state.depth = false;
        self.calls.push(DeviceCall::DisableDepth);
    }

    fn blend_func_separate(
        &mut self,
        src: BlendFactor,
        dst: BlendFactor,
        src_alpha: BlendFactor,
        dst_alpha: BlendFactor,
    ) {
        self.calls
            .push(DeviceCall::BlendFuncSeparate(src, dst, src_alpha, dst_alpha));
    }

    fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.state.color = [r, g, b, a];
        self.calls.push(DeviceCall::SetColor([r, g, b, a]));
    }

    fn bind_texture(&mut self, texture: &TextureKey) {
        self.state.bound_texture = Some(texture.clone());
        self.calls.push(DeviceCall::BindTexture(texture.clone()));
    }

    fn begin_primitive(&mut self, mode: PrimitiveMode, format: VertexFormat) {
        self.calls.push(DeviceCall::BeginPrimitive(mode, format));
    }

    fn add_vertex(&mut self, x: f64, y: f64, z: f64) {
        self.calls.push(DeviceCall::AddVertex([x, y, z]));
    }

    fn end_primitive(&mut self) {
        self.calls.push(DeviceCall::EndPrimitive);
    }

    fn draw_textured_rect(&mut self, x: i32, y: i32, u: i32, v: i32, width: i32, height: i32) {
        self.calls.push(DeviceCall::DrawTexturedRect {
            x,
            y,
            u,
            v,
            width,
            height,
        });
    }

    fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.state.scale *= sx;
        self.calls.push(DeviceCall::Scale([sx, sy, sz]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_primitive_guard_call_order() {
        let mut device = RecordingDevice::new();
        {
            let mut guard = PrimitiveGuard::begin(&mut device, [0.5, 0.25, 1.0, 1.0]);
            guard.begin_primitive(PrimitiveMode::Quads, VertexFormat::Position);
            guard.end_primitive();
        }

        assert_eq!(
            device.calls(),
            &[
                DeviceCall::EnableBlend,
                DeviceCall::DisableTexture,
                DeviceCall::BlendFuncSeparate(
                    BlendFactor::SrcAlpha,
                    BlendFactor::OneMinusSrcAlpha,
                    BlendFactor::One,
                    BlendFactor::Zero,
                ),
                DeviceCall::SetColor([0.5, 0.25, 1.0, 1.0]),
                DeviceCall::DisableDepth,
                DeviceCall::BeginPrimitive(PrimitiveMode::Quads, VertexFormat::Position),
                DeviceCall::EndPrimitive,
                DeviceCall::EnableTexture,
                DeviceCall::DisableBlend,
                DeviceCall::EnableDepth,
                DeviceCall::SetColor([1.0, 1.0, 1.0, 1.0]),
            ]
        );
        assert_eq!(device.state(), &DeviceState::default());
    }

    #[test]
    fn test_primitive_guard_restores_state_on_panic() {
        let mut device = RecordingDevice::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let mut guard = PrimitiveGuard::begin(&mut device, [1.0, 0.0, 0.0, 0.5]);
            guard.begin_primitive(PrimitiveMode::Quads, VertexFormat::Position);
            panic!("widget blew up mid-primitive");
        }));

        assert!(result.is_err());
        assert_eq!(device.state(), &DeviceState::default());
    }

    #[test]
    fn test_scale_guard_applies_inverse_on_drop() {
        let mut device = RecordingDevice::new();
        {
            let _guard = ScaleGuard::push(&mut device, 2.0, 0.5);
        }
        assert_eq!(
            device.calls(),
            &[DeviceCall::Scale([2.0; 3]), DeviceCall::Scale([0.5; 3])]
        );
        assert_eq!(device.state().scale, 1.0);
    }

    #[test]
    fn test_texture_key_parts() {
        assert_eq!(TextureKey::INTERFACE.namespace(), "rpghud");
        assert_eq!(TextureKey::INTERFACE.path(), "textures/interface.png");
        let bare = TextureKey::new("textures/gui/widgets.png");
        assert_eq!(bare.namespace(), "minecraft");
        assert_eq!(bare.path(), "textures/gui/widgets.png");
    }

    #[test]
    fn test_recorded_quad_as_rect() {
        let quad = RecordedQuad {
            color: [1.0; 4],
            vertices: [[3.0, 9.0], [8.0, 9.0], [8.0, 4.0], [3.0, 4.0]],
        };
        assert_eq!(quad.as_rect(), (3.0, 4.0, 5.0, 5.0));
    }
}
