//! In-memory raster shared by textures and render output.

use std::path::Path;

use glint_math::Color;
use thiserror::Error;

/// Errors that can occur while decoding or encoding images.
#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Unsupported image: {0}")]
    Unsupported(String),
}

pub type ImageIoResult<T> = Result<T, ImageIoError>;

/// Channel layout an image is read from or written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Channels {
    Gray,
    #[default]
    Rgb,
}

impl Channels {
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// A `height` x `width` grid of colors stored row-major.
///
/// Gray images still store full colors (with equal components); the
/// channel layout only matters when encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new RGB image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            channels: Channels::Rgb,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Wrap existing row-major pixels.
    ///
    /// # Panics
    ///
    /// Panics if `pixels` does not hold exactly `width * height` colors.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "pixel count does not match {width}x{height}"
        );
        Self {
            width,
            height,
            channels: Channels::Rgb,
            pixels,
        }
    }

    /// Set the channel layout used when encoding.
    pub fn with_channels(mut self, channels: Channels) -> Self {
        self.channels = channels;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable row-major pixel storage.
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} image",
            self.width,
            self.height
        );
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.pixels[idx] = color;
    }

    /// One row of pixels.
    pub fn row(&self, y: u32) -> &[Color] {
        let start = self.index(0, y);
        &self.pixels[start..start + self.width as usize]
    }

    /// Convert to packed RGB bytes, clamping components into [0, 1].
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Convert to one gray byte per pixel (mean of the channels).
    pub fn to_luma8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .map(|c| unit_to_u8((c.x + c.y + c.z) / 3.0))
            .collect()
    }

    /// Encode as an 8-bit PNG using this buffer's channel layout.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ImageIoResult<()> {
        let path = path.as_ref();
        let layout_error =
            || ImageIoError::Unsupported(format!("{}x{} buffer", self.width, self.height));

        match self.channels {
            Channels::Rgb => {
                image::RgbImage::from_raw(self.width, self.height, self.to_rgb8())
                    .ok_or_else(layout_error)?
                    .save_with_format(path, image::ImageFormat::Png)?;
            }
            Channels::Gray => {
                image::GrayImage::from_raw(self.width, self.height, self.to_luma8())
                    .ok_or_else(layout_error)?
                    .save_with_format(path, image::ImageFormat::Png)?;
            }
        }

        log::debug!("Wrote {}x{} PNG to {}", self.width, self.height, path.display());
        Ok(())
    }
}

#[inline]
fn unit_to_u8(x: f64) -> u8 {
    (255.0 * x.clamp(0.0, 1.0)) as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [unit_to_u8(color.x), unit_to_u8(color.y), unit_to_u8(color.z)]
}
