//! glint renderer - CPU recursive ray tracing
//!
//! Whitted-style ray tracer: one primary ray per pixel, Lambertian
//! shading with hard shadows, and recursive mirror and glass rays.
//! Rows are split into bands rendered in parallel on a rayon pool.

mod band;
mod camera;
mod intersect;
mod renderer;
mod shading;

pub use band::{generate_bands, render_band, Band};
pub use camera::Camera;
pub use intersect::{closest_intersection, is_in_light, Hit};
pub use renderer::{render, render_pixel, render_with, RenderConfig, RenderError, RenderResult};
pub use shading::{cast_ray, diffuse_color, fresnel, trace};

/// Re-export common types from glint_core and glint_math
pub use glint_core::{ImageBuffer, Scene};
pub use glint_math::{Color, Ray, Vec3};
