//! Parallel whole-image rendering.

use std::num::NonZeroUsize;
use std::time::Instant;

use glint_core::{ImageBuffer, Scene};
use glint_math::Color;
use rayon::prelude::*;
use thiserror::Error;

use crate::band::{generate_bands, render_band};
use crate::camera::Camera;
use crate::shading::trace;

/// Errors that can occur while rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("image has zero size ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of worker threads, each rendering one band of rows
    pub workers: usize,
}

impl RenderConfig {
    /// Use exactly `workers` worker threads.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            workers: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

/// Render `scene` with the default configuration.
pub fn render(scene: &Scene) -> RenderResult<ImageBuffer> {
    render_with(scene, &RenderConfig::default())
}

/// Render `scene` into a new image using `config.workers` threads.
///
/// The worker count is clamped to the image height. Every worker writes a
/// disjoint band of rows, so the result is identical for any worker count.
pub fn render_with(scene: &Scene, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    if config.workers == 0 {
        return Err(RenderError::InvalidWorkerCount);
    }
    if scene.width == 0 || scene.height == 0 {
        return Err(RenderError::EmptyImage {
            width: scene.width,
            height: scene.height,
        });
    }

    let workers = config.workers.min(scene.height as usize);
    let camera = Camera::for_scene(scene);
    let bands = generate_bands(scene.height, workers as u32);

    log::info!(
        "Rendering {}x{} ({} objects, {} lights) on {} workers",
        scene.width,
        scene.height,
        scene.object_count(),
        scene.light_count(),
        workers
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(scene.width, scene.height);
    let mut remaining: &mut [Color] = image.pixels_mut();
    let mut jobs = Vec::with_capacity(bands.len());
    for band in bands {
        let (pixels, rest) =
            std::mem::take(&mut remaining).split_at_mut(band.pixel_count(scene.width));
        jobs.push((band, pixels));
        remaining = rest;
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("glint-worker-{i}"))
        .build()?;
    pool.install(|| {
        jobs.into_par_iter()
            .for_each(|(band, pixels)| render_band(&band, scene, &camera, pixels));
    });

    log::info!("Rendered in {:.2?}", start.elapsed());
    Ok(image)
}

/// Render a single pixel.
pub fn render_pixel(scene: &Scene, camera: &Camera, x: u32, y: u32) -> Color {
    trace(scene, &camera.get_ray(x, y))
}
