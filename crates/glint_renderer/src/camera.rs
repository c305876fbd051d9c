//! Camera for primary ray generation.

use glint_core::Scene;
use glint_math::{normalize, Ray, Vec3};

/// A pinhole camera at the origin looking down -Z with +Y up.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Vertical field of view in degrees
    vfov: f64,

    // Cached computed values (set by initialize())
    fov_adjust: f64,
    aspect_ratio: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 800,
            image_height: 600,
            vfov: 90.0,
            fov_adjust: 1.0,
            aspect_ratio: 800.0 / 600.0,
        }
    }

    /// Build an initialized camera matching a scene's raster and field of view.
    pub fn for_scene(scene: &Scene) -> Self {
        let mut camera = Self::new()
            .with_resolution(scene.width, scene.height)
            .with_fov(scene.fov);
        camera.initialize();
        camera
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov(mut self, vfov: f64) -> Self {
        self.vfov = vfov;
        self
    }

    /// Initialize the camera (must be called before generating rays).
    pub fn initialize(&mut self) {
        self.fov_adjust = (self.vfov.to_radians() / 2.0).tan();
        self.aspect_ratio = f64::from(self.image_width) / f64::from(self.image_height);
    }

    /// Generate the primary ray through the center of pixel (x, y).
    ///
    /// Pixel (0, 0) is the top-left corner of the image.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let width = f64::from(self.image_width);
        let height = f64::from(self.image_height);

        let sensor_x =
            (((f64::from(x) + 0.5) / width) * 2.0 - 1.0) * self.aspect_ratio * self.fov_adjust;
        let sensor_y = (1.0 - ((f64::from(y) + 0.5) / height) * 2.0) * self.fov_adjust;

        Ray::new(Vec3::ZERO, normalize(Vec3::new(sensor_x, sensor_y, -1.0)))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
