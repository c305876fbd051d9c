//! Texture loading and caching for materials.
//!
//! Decodes images from disk into [`ImageBuffer`]s that textured materials
//! can share.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glint_math::Color;

use crate::image_buffer::{Channels, ImageBuffer, ImageIoError, ImageIoResult};

/// Cache for loaded textures.
///
/// Each path is decoded once; every material that names it shares the
/// same buffer.
pub struct TextureCache {
    /// Cached textures by path as written in the scene
    textures: HashMap<String, Arc<ImageBuffer>>,

    /// Base directory for resolving relative paths
    base_dir: Option<PathBuf>,
}

impl TextureCache {
    /// Create a new empty texture cache.
    pub fn new() -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: None,
        }
    }

    /// Create a texture cache with a base directory for relative paths.
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            textures: HashMap::new(),
            base_dir: Some(base_dir.into()),
        }
    }

    /// Load a texture from file, using cache if available.
    pub fn load(&mut self, path: &str) -> ImageIoResult<Arc<ImageBuffer>> {
        if let Some(texture) = self.textures.get(path) {
            return Ok(texture.clone());
        }

        let full_path = self.resolve_path(path);
        let texture = Arc::new(load_texture(&full_path)?);
        self.textures.insert(path.to_string(), texture.clone());

        log::debug!(
            "Loaded texture: {} ({}x{}, {} channel(s))",
            path,
            texture.width(),
            texture.height(),
            texture.channels().count()
        );

        Ok(texture)
    }

    /// Check if a texture is cached.
    pub fn is_cached(&self, path: &str) -> bool {
        self.textures.contains_key(path)
    }

    /// Get the number of cached textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Resolve a path relative to the base directory.
    fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);

        if path.is_absolute() {
            path.to_path_buf()
        } else if let Some(base) = &self.base_dir {
            base.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

impl Default for TextureCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image file into an [`ImageBuffer`] with components in [0, 1].
///
/// Gray (and gray + alpha) images load as single-channel buffers; anything
/// else is read as RGB. Alpha is dropped.
pub fn load_texture(path: &Path) -> ImageIoResult<ImageBuffer> {
    let img = image::open(path)?;
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(ImageIoError::Unsupported(format!(
            "{} has no pixels",
            path.display()
        )));
    }

    let texture = if img.color().channel_count() <= 2 {
        let pixels = img
            .to_luma8()
            .pixels()
            .map(|p| Color::splat(byte_to_unit(p[0])))
            .collect();
        ImageBuffer::from_pixels(width, height, pixels).with_channels(Channels::Gray)
    } else {
        let pixels = img
            .to_rgb8()
            .pixels()
            .map(|p| {
                Color::new(
                    byte_to_unit(p[0]),
                    byte_to_unit(p[1]),
                    byte_to_unit(p[2]),
                )
            })
            .collect();
        ImageBuffer::from_pixels(width, height, pixels)
    };

    Ok(texture)
}

#[inline]
fn byte_to_unit(value: u8) -> f64 {
    f64::from(value) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_test_png(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut img = image::RgbImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 0, 255]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_load_texture() {
        let path = write_test_png("glint_texture_load_test.png");
        let texture = load_texture(&path).unwrap();

        assert_eq!(texture.width(), 2);
        assert_eq!(texture.height(), 1);
        assert_eq!(texture.channels(), Channels::Rgb);
        assert_eq!(texture.get(0, 0), Color::new(1.0, 0.0, 0.0));
        assert_eq!(texture.get(1, 0), Color::new(0.0, 0.0, 1.0));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_load_gray_texture() {
        let path = std::env::temp_dir().join("glint_texture_gray_test.png");
        image::GrayImage::from_pixel(1, 1, image::Luma([255]))
            .save(&path)
            .unwrap();

        let texture = load_texture(&path).unwrap();
        assert_eq!(texture.channels(), Channels::Gray);
        assert_eq!(texture.get(0, 0), Color::ONE);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_texture_cache_shares_buffers() {
        let path = write_test_png("glint_texture_cache_test.png");
        let mut cache = TextureCache::with_base_dir(std::env::temp_dir());
        assert!(cache.is_empty());

        let a = cache.load("glint_texture_cache_test.png").unwrap();
        let b = cache.load("glint_texture_cache_test.png").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
        assert!(cache.is_cached("glint_texture_cache_test.png"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_texture_errors() {
        let mut cache = TextureCache::new();
        assert!(cache.load("/definitely/not/here.png").is_err());
        assert!(cache.is_empty());
    }
}
