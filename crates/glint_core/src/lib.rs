//! glint core - the scene model for the glint ray tracer.
//!
//! This crate provides:
//!
//! - **Scene model**: `Scene`, `Object` (spheres and planes), `Material`,
//!   `Light`, and the `ImageBuffer` raster
//! - **Geometry queries**: intersection, surface normals and texture
//!   coordinates through the `Geometry` trait
//! - **I/O adapters**: JSON scene loading, texture decoding, PNG encoding
//!
//! # Example
//!
//! ```ignore
//! use glint_core::load_scene;
//!
//! let scene = load_scene("demos/spheres.json")?;
//! println!("{} objects, {} lights", scene.object_count(), scene.light_count());
//! ```

pub mod image_buffer;
pub mod light;
pub mod loader;
pub mod material;
pub mod object;
pub mod plane;
pub mod scene;
pub mod sphere;
pub mod texture;

// Re-export commonly used types
pub use image_buffer::{color_to_rgb8, Channels, ImageBuffer, ImageIoError, ImageIoResult};
pub use light::Light;
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use material::{Coloration, Material, Surface};
pub use object::{Geometry, Object, TexCoord};
pub use plane::Plane;
pub use scene::{Scene, DEFAULT_MAX_RECURSION_DEPTH, DEFAULT_SHADOW_BIAS};
pub use sphere::Sphere;
pub use texture::{load_texture, TextureCache};

pub use glint_math::{Color, Ray, Vec3};
