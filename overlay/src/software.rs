//! Software graphics device backed by tiny-skia
//!
//! Renders the HUD into an in-memory RGBA pixmap so frames can be inspected
//! or written to disk without a GPU context. Quads are filled without
//! anti-aliasing so integer rects land on exact pixels.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tiny_skia::{
    BlendMode, Color, FillRule, FilterQuality, IntRect, Paint, PathBuilder, Pixmap, PixmapPaint,
    Transform,
};
use tracing::{trace, warn};

use crate::device::{BlendFactor, GraphicsDevice, PrimitiveMode, TextureKey, VertexFormat};
use crate::error::RenderError;
use crate::textures::TextureCache;

/// Render target for the HUD with fixed-function style state
pub struct SoftwareDevice {
    pixmap: Pixmap,
    textures: TextureCache,
    blend: bool,
    texture: bool,
    depth: bool,
    color: [f32; 4],
    bound_texture: Option<TextureKey>,
    scale: f64,
    primitive: Option<(PrimitiveMode, VertexFormat)>,
    vertices: Vec<[f64; 2]>,
}

impl SoftwareDevice {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidCanvas { width, height })?;
        Ok(Self {
            pixmap,
            textures: TextureCache::new(),
            blend: false,
            texture: true,
            depth: true,
            color: [1.0; 4],
            bound_texture: None,
            scale: 1.0,
            primitive: None,
            vertices: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reset every pixel to fully transparent
    pub fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.textures
    }

    /// Current accumulated scale factor
    pub fn current_scale(&self) -> f64 {
        self.scale
    }

    /// Straight (non-premultiplied) RGBA of one pixel
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Straight RGBA bytes of the whole canvas, row-major
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect()
    }

    /// Write the canvas to a PNG file
    pub fn save_png(&self, path: &Path) -> Result<(), RenderError> {
        let file = File::create(path).map_err(|source| RenderError::WriteImage {
            path: path.to_path_buf(),
            source,
        })?;
        let encode_err = |source| RenderError::EncodePng {
            path: path.to_path_buf(),
            source,
        };

        let mut encoder = png::Encoder::new(BufWriter::new(file), self.width(), self.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(encode_err)?;
        writer.write_image_data(&self.to_rgba()).map_err(encode_err)?;
        writer.finish().map_err(encode_err)?;
        Ok(())
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale as f32, self.scale as f32)
    }

    fn blend_mode(&self) -> BlendMode {
        if self.blend {
            BlendMode::SourceOver
        } else {
            BlendMode::Source
        }
    }

    fn paint(&self) -> Option<Paint<'static>> {
        let [r, g, b, a] = self.color.map(|c| c.clamp(0.0, 1.0));
        let mut paint = Paint::default();
        paint.set_color(Color::from_rgba(r, g, b, a)?);
        paint.anti_alias = false;
        paint.blend_mode = self.blend_mode();
        Some(paint)
    }

    fn fill_pending_quads(&mut self) {
        let Some(paint) = self.paint() else {
            return;
        };
        let transform = self.transform();

        for quad in self.vertices.chunks_exact(4) {
            let mut pb = PathBuilder::new();
            pb.move_to(quad[0][0] as f32, quad[0][1] as f32);
            for v in &quad[1..] {
                pb.line_to(v[0] as f32, v[1] as f32);
            }
            pb.close();

            // Degenerate quads produce no path
            if let Some(path) = pb.finish() {
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, transform, None);
            }
        }
    }
}

impl GraphicsDevice for SoftwareDevice {
    fn enable_blend(&mut self) {
        self.blend = true;
    }

    fn disable_blend(&mut self) {
        self.blend = false;
    }

    fn enable_texture(&mut self) {
        self.texture = true;
    }

    fn disable_texture(&mut self) {
        self.texture = false;
    }

    fn enable_depth(&mut self) {
        self.depth = true;
    }

    fn disable_depth(&mut self) {
        self.depth = false;
    }

    fn blend_func_separate(
        &mut self,
        _src: BlendFactor,
        _dst: BlendFactor,
        _src_alpha: BlendFactor,
        _dst_alpha: BlendFactor,
    ) {
        // Only straight alpha-over is supported, which is what the HUD requests
    }

    fn set_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        self.color = [r, g, b, a];
    }

    fn bind_texture(&mut self, texture: &TextureKey) {
        self.bound_texture = Some(texture.clone());
    }

    fn begin_primitive(&mut self, mode: PrimitiveMode, format: VertexFormat) {
        if self.primitive.is_some() {
            warn!("begin_primitive while a primitive is open, discarding pending vertices");
        }
        self.primitive = Some((mode, format));
        self.vertices.clear();
    }

    fn add_vertex(&mut self, x: f64, y: f64, _z: f64) {
        self.vertices.push([x, y]);
    }

    fn end_primitive(&mut self) {
        match self.primitive.take() {
            Some((PrimitiveMode::Quads, _)) => {
                trace!(vertices = self.vertices.len(), color = ?self.color, "fill quads");
                self.fill_pending_quads();
            }
            None => warn!("end_primitive without begin_primitive"),
        }
        self.vertices.clear();
    }

    fn draw_textured_rect(&mut self, x: i32, y: i32, u: i32, v: i32, width: i32, height: i32) {
        if width <= 0 || height <= 0 {
            return;
        }
        let Some(key) = &self.bound_texture else {
            warn!("draw_textured_rect with no texture bound");
            return;
        };
        let Some(texture) = self.textures.get(key) else {
            warn!(texture = %key, "texture not loaded, skipping blit");
            return;
        };
        let Some(region) = IntRect::from_xywh(u, v, width as u32, height as u32)
            .and_then(|r| texture.clone_rect(r))
        else {
            warn!(texture = %key, u, v, width, height, "texture region out of bounds");
            return;
        };

        trace!(texture = %key, x, y, u, v, width, height, "blit texture region");
        let paint = PixmapPaint {
            opacity: self.color[3].clamp(0.0, 1.0),
            // Atlas texels always composite over the frame
            blend_mode: BlendMode::SourceOver,
            quality: FilterQuality::Nearest,
        };
        let transform = self.transform();
        self.pixmap
            .draw_pixmap(x, y, region.as_ref(), &paint, transform, None);
    }

    fn scale(&mut self, sx: f64, _sy: f64, _sz: f64) {
        self.scale *= sx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PackedColor;
    use crate::device::ScaleGuard;
    use crate::renderer::draw_rect;
    use crate::textures::tests::encode_rgba;

    fn device() -> SoftwareDevice {
        SoftwareDevice::new(16, 16).unwrap()
    }

    #[test]
    fn test_new_rejects_empty_canvas() {
        assert!(matches!(
            SoftwareDevice::new(0, 10),
            Err(RenderError::InvalidCanvas { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_draw_rect_fills_exact_pixels() {
        let mut device = device();
        draw_rect(&mut device, 2, 2, 4, 3, PackedColor(0xFF0000));

        assert_eq!(device.pixel(2, 2), Some([255, 0, 0, 255]));
        assert_eq!(device.pixel(5, 4), Some([255, 0, 0, 255]));
        assert_eq!(device.pixel(6, 2), Some([0, 0, 0, 0]));
        assert_eq!(device.pixel(2, 5), Some([0, 0, 0, 0]));
        assert_eq!(device.pixel(1, 2), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_transparent_draw_leaves_canvas_untouched() {
        let mut device = device();
        draw_rect(&mut device, 0, 0, 16, 16, PackedColor::TRANSPARENT);
        assert!(device.to_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_translucent_rect_blends_over() {
        let mut device = device();
        draw_rect(&mut device, 0, 0, 4, 4, PackedColor(0x0000FF));
        draw_rect(&mut device, 0, 0, 4, 4, PackedColor::from_argb(0x80, 0xFF, 0, 0));

        let [r, _, b, a] = device.pixel(1, 1).unwrap();
        assert_eq!(a, 255);
        assert!((126..=130).contains(&r), "red was {r}");
        assert!((125..=129).contains(&b), "blue was {b}");
    }

    #[test]
    fn test_state_restored_after_primitive() {
        let mut device = device();
        draw_rect(&mut device, 0, 0, 4, 4, PackedColor(0x00FF00));
        assert!(!device.blend);
        assert!(device.texture);
        assert!(device.depth);
        assert_eq!(device.color, [1.0; 4]);
        assert!(device.primitive.is_none());
    }

    #[test]
    fn test_scale_guard_scales_fills() {
        let mut device = device();
        {
            let mut scaled = ScaleGuard::push(&mut device, 2.0, 0.5);
            draw_rect(&mut *scaled, 1, 1, 2, 2, PackedColor(0xFFFFFF));
        }
        assert_eq!(device.current_scale(), 1.0);
        assert_eq!(device.pixel(2, 2), Some([255, 255, 255, 255]));
        assert_eq!(device.pixel(5, 5), Some([255, 255, 255, 255]));
        assert_eq!(device.pixel(6, 6), Some([0, 0, 0, 0]));
        assert_eq!(device.pixel(1, 1), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_textured_rect_blits_region() {
        let mut device = device();
        // 2x2 atlas: red, green / blue, white
        let atlas = encode_rgba(
            2,
            2,
            &[
                255, 0, 0, 255, 0, 255, 0, 255, //
                0, 0, 255, 255, 255, 255, 255, 255,
            ],
        );
        device
            .textures_mut()
            .load_png(TextureKey::INTERFACE, &atlas)
            .unwrap();

        device.bind_texture(&TextureKey::INTERFACE);
        device.draw_textured_rect(5, 6, 1, 0, 1, 2);

        assert_eq!(device.pixel(5, 6), Some([0, 255, 0, 255]));
        assert_eq!(device.pixel(5, 7), Some([255, 255, 255, 255]));
        assert_eq!(device.pixel(4, 6), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_textured_rect_missing_texture_is_skipped() {
        let mut device = device();
        device.bind_texture(&TextureKey::ICONS);
        device.draw_textured_rect(0, 0, 0, 0, 4, 4);
        assert!(device.to_rgba().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_resets_pixels() {
        let mut device = device();
        draw_rect(&mut device, 0, 0, 16, 16, PackedColor(0x123456));
        device.clear();
        assert_eq!(device.pixel(8, 8), Some([0, 0, 0, 0]));
    }

    #[test]
    fn test_save_png_round_trips_dimensions() {
        let mut device = device();
        draw_rect(&mut device, 0, 0, 8, 8, PackedColor(0x3BC200));

        let dir = std::env::temp_dir().join(format!("rpghud-software-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("frame.png");
        device.save_png(&path).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let reader = decoder.read_info().unwrap();
        assert_eq!((reader.info().width, reader.info().height), (16, 16));

        std::fs::remove_dir_all(&dir).ok();
    }
}
