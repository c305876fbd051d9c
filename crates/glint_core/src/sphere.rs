//! Sphere primitive.

use std::f64::consts::PI;

use glint_math::{normalize, Ray, Vec3};

use crate::material::Material;
use crate::object::{Geometry, TexCoord};

/// A sphere with a material.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(center: Vec3, radius: f64, material: Material) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Geometry for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // Project the center onto the ray, then compare the squared
        // perpendicular distance against the squared radius
        let l = self.center - ray.origin;
        let adj = l.dot(ray.direction);
        let d2 = l.length_squared() - adj * adj;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let t0 = adj - thc;
        let t1 = adj + thc;
        if t0 < 0.0 && t1 < 0.0 {
            return None;
        }

        // t0 <= t1, so a negative t0 means the origin is inside the sphere
        Some(if t0 >= 0.0 { t0 } else { t1 })
    }

    fn surface_normal(&self, hit_point: Vec3) -> Vec3 {
        normalize(hit_point - self.center)
    }

    fn tex_coord(&self, hit_point: Vec3) -> TexCoord {
        let hit_vec = hit_point - self.center;
        // Hit points can sit a hair outside the surface
        let cos_theta = (hit_vec.y / self.radius).clamp(-1.0, 1.0);
        TexCoord {
            u: (1.0 + hit_vec.z.atan2(hit_vec.x) / PI) * 0.5,
            v: cos_theta.acos() / PI,
        }
    }
}
