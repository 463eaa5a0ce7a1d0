//! Texture loading and caching for the software device
//!
//! Textures are decoded from PNG once and kept as premultiplied pixmaps keyed
//! by their [`TextureKey`].

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tiny_skia::{ColorU8, Pixmap};
use tracing::debug;

use crate::device::TextureKey;
use crate::error::RenderError;

/// Decoded textures available to a device
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<TextureKey, Pixmap>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: TextureKey, pixmap: Pixmap) {
        debug!(texture = %key, width = pixmap.width(), height = pixmap.height(), "texture registered");
        self.textures.insert(key, pixmap);
    }

    pub fn get(&self, key: &TextureKey) -> Option<&Pixmap> {
        self.textures.get(key)
    }

    pub fn contains(&self, key: &TextureKey) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Decode PNG bytes and register them under `key`
    pub fn load_png(&mut self, key: TextureKey, data: &[u8]) -> Result<(), RenderError> {
        let pixmap = decode_png(key.as_str(), data)?;
        self.insert(key, pixmap);
        Ok(())
    }

    /// Read a PNG file from disk and register it under `key`
    pub fn load_png_file(&mut self, key: TextureKey, path: &Path) -> Result<(), RenderError> {
        let read_err = |source| RenderError::ReadTexture {
            path: path.to_path_buf(),
            source,
        };
        let mut data = Vec::new();
        BufReader::new(File::open(path).map_err(read_err)?)
            .read_to_end(&mut data)
            .map_err(read_err)?;
        self.load_png(key, &data)
    }
}

/// Decode PNG data to a premultiplied pixmap
fn decode_png(key: &str, data: &[u8]) -> Result<Pixmap, RenderError> {
    let decode_err = |source| RenderError::DecodeTexture {
        key: key.to_string(),
        source,
    };

    let mut decoder = png::Decoder::new(data);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(decode_err)?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).map_err(decode_err)?;
    let data = &buf[..info.buffer_size()];

    let channels = match info.color_type {
        png::ColorType::Rgba => 4,
        png::ColorType::Rgb => 3,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Grayscale => 1,
        other => {
            return Err(RenderError::UnsupportedColorType {
                key: key.to_string(),
                color_type: format!("{other:?}"),
            });
        }
    };

    let mut pixmap = Pixmap::new(info.width, info.height).ok_or(RenderError::InvalidCanvas {
        width: info.width,
        height: info.height,
    })?;

    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(data.chunks_exact(channels)) {
        let [r, g, b, a] = match *src {
            [r, g, b, a] => [r, g, b, a],
            [r, g, b] => [r, g, b, 255],
            [gray, alpha] => [gray, gray, gray, alpha],
            [gray] => [gray, gray, gray, 255],
            _ => [0, 0, 0, 0],
        };
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Ok(pixmap)
}
