//! The scene: everything a render needs, owned in one value.

use glint_math::Color;

use crate::light::Light;
use crate::object::Object;

/// Default offset along the normal for shadow and secondary rays.
pub const DEFAULT_SHADOW_BIAS: f64 = 1e-13;

/// Default bound on reflection/refraction bounces.
pub const DEFAULT_MAX_RECURSION_DEPTH: u32 = 4;

/// A complete scene: raster settings, camera field of view, objects and lights.
///
/// The camera sits at the origin looking down -Z. Objects and lights are
/// read-only while rendering.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Raster width in pixels (> 0)
    pub width: u32,

    /// Raster height in pixels (> 0)
    pub height: u32,

    /// Vertical field of view in degrees
    pub fov: f64,

    /// Offset along the surface normal for shadow and secondary rays
    pub shadow_bias: f64,

    /// Bounce limit; 0 disables reflection and refraction entirely
    pub max_recursion_depth: u32,

    /// Color of pixels whose primary ray hits nothing
    pub background: Color,

    pub objects: Vec<Object>,
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene with default bias, depth and a black background.
    pub fn new(width: u32, height: u32, fov: f64) -> Self {
        Self {
            width,
            height,
            fov,
            shadow_bias: DEFAULT_SHADOW_BIAS,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            background: Color::ZERO,
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_shadow_bias(mut self, shadow_bias: f64) -> Self {
        self.shadow_bias = shadow_bias;
        self
    }

    pub fn with_max_recursion_depth(mut self, depth: u32) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Add an object; the scene takes ownership.
    pub fn add_object(&mut self, object: impl Into<Object>) {
        self.objects.push(object.into());
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}
