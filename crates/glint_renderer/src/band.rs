//! Horizontal band scheduling.
//!
//! The image is split into contiguous bands of whole rows, one per worker.
//! Each band owns a disjoint slice of the output buffer, so workers write
//! their pixels directly without any locking.

use glint_core::Scene;
use glint_math::Color;

use crate::camera::Camera;
use crate::renderer::render_pixel;

/// A run of whole image rows rendered by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row of the band
    pub start_row: u32,
    /// Number of rows in the band
    pub rows: u32,
    /// Index of this band in top-to-bottom order
    pub index: usize,
}

impl Band {
    /// Create a new band.
    pub fn new(start_row: u32, rows: u32, index: usize) -> Self {
        Self { start_row, rows, index }
    }

    /// One past the last row of the band.
    pub fn end_row(&self) -> u32 {
        self.start_row + self.rows
    }

    /// Get the total number of pixels in this band for an image `width` wide.
    pub fn pixel_count(&self, width: u32) -> usize {
        self.rows as usize * width as usize
    }
}

/// Split `height` rows into `workers` bands of equal size.
///
/// The last band also takes the remainder rows. `workers` must be in
/// `1..=height`.
pub fn generate_bands(height: u32, workers: u32) -> Vec<Band> {
    debug_assert!(workers >= 1 && workers <= height);

    let rows_per_band = height / workers;
    (0..workers)
        .map(|i| {
            let start_row = i * rows_per_band;
            let rows = if i + 1 == workers {
                height - start_row
            } else {
                rows_per_band
            };
            Band::new(start_row, rows, i as usize)
        })
        .collect()
}

/// Render every pixel of `band` into `pixels`, row-major.
///
/// `pixels` is the band's slice of the output buffer.
pub fn render_band(band: &Band, scene: &Scene, camera: &Camera, pixels: &mut [Color]) {
    let width = scene.width as usize;
    debug_assert_eq!(pixels.len(), band.pixel_count(scene.width));

    for (local_y, row) in pixels.chunks_mut(width).enumerate() {
        let y = band.start_row + local_y as u32;
        for (x, pixel) in row.iter_mut().enumerate() {
            *pixel = render_pixel(scene, camera, x as u32, y);
        }
    }

    log::debug!(
        "Band {} (rows {}..{}) done",
        band.index,
        band.start_row,
        band.end_row()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_bands_exact_fit() {
        let bands = generate_bands(100, 4);
        assert_eq!(bands.len(), 4);
        assert!(bands.iter().all(|b| b.rows == 25));

        let total_rows: u32 = bands.iter().map(|b| b.rows).sum();
        assert_eq!(total_rows, 100);
    }

    #[test]
    fn test_remainder_goes_to_last_band() {
        let bands = generate_bands(10, 3);
        assert_eq!(
            bands,
            vec![Band::new(0, 3, 0), Band::new(3, 3, 1), Band::new(6, 4, 2)]
        );
    }

    #[test]
    fn test_bands_are_contiguous() {
        let bands = generate_bands(37, 5);
        for pair in bands.windows(2) {
            assert_eq!(pair[0].end_row(), pair[1].start_row);
        }
        assert_eq!(bands.last().unwrap().end_row(), 37);
    }

    #[test]
    fn test_single_worker_and_one_row_per_worker() {
        assert_eq!(generate_bands(7, 1), vec![Band::new(0, 7, 0)]);

        let bands = generate_bands(4, 4);
        assert!(bands.iter().all(|b| b.rows == 1));
    }

    #[test]
    fn test_render_band_fills_slice() {
        let scene = Scene::new(4, 6, 90.0).with_background(Color::ONE);
        let camera = Camera::for_scene(&scene);
        let band = Band::new(2, 3, 0);

        let mut pixels = vec![Color::ZERO; band.pixel_count(4)];
        render_band(&band, &scene, &camera, &mut pixels);
        assert!(pixels.iter().all(|&c| c == Color::ONE));
    }
}
