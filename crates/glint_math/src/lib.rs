//! glint math: vectors, rays and intervals shared by the glint crates.
//!
//! All geometry is double precision. `Vec3` and `Color` are both aliases
//! of glam's `DVec3`; the alias only documents intent.

// Re-export the glam types we build on
pub use glam::DVec3;

mod interval;
mod ray;
mod vec;

pub use interval::Interval;
pub use ray::Ray;
pub use vec::{clamp_unit, cross, normalize, reflect};

/// A point or direction in world space.
pub type Vec3 = DVec3;

/// Linear RGB color, components nominally in [0, 1].
pub type Color = DVec3;
