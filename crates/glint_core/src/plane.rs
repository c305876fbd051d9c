//! Infinite plane primitive.

use glint_math::{cross, normalize, Ray, Vec3};

use crate::material::Material;
use crate::object::{Geometry, TexCoord};

/// Rays closer to parallel than this never hit a plane.
const PARALLEL_EPSILON: f64 = 1e-6;

/// Squared length below which `normal x forward` counts as degenerate.
const DEGENERATE_AXIS_EPSILON: f64 = 1e-12;

/// An infinite plane with a material.
///
/// `normal` is stored unit length and points away from the side the plane
/// is seen from: a floor below the camera stores `(0, -1, 0)`. The reported
/// surface normal is always the negated stored normal.
#[derive(Debug, Clone)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
    pub material: Material,
}

impl Plane {
    /// Create a new plane, normalizing `normal`.
    ///
    /// # Panics
    ///
    /// Panics if `normal` is the zero vector.
    pub fn new(point: Vec3, normal: Vec3, material: Material) -> Self {
        Self {
            point,
            normal: normalize(normal),
            material,
        }
    }

    /// In-plane orthonormal basis used for texture mapping.
    fn basis(&self) -> (Vec3, Vec3) {
        let mut x_axis = cross(self.normal, Vec3::Z);
        if x_axis.length_squared() < DEGENERATE_AXIS_EPSILON {
            // Normal is (nearly) parallel to forward, fall back to up
            x_axis = cross(self.normal, Vec3::Y);
        }
        let x_axis = normalize(x_axis);
        let y_axis = cross(self.normal, x_axis);
        (x_axis, y_axis)
    }
}

impl Geometry for Plane {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // Equivalent to dot(surface_normal, direction) < -epsilon: the ray
        // must face the visible side
        let denom = self.normal.dot(ray.direction);
        if denom <= PARALLEL_EPSILON {
            return None;
        }

        let distance = (self.point - ray.origin).dot(self.normal) / denom;
        (distance >= 0.0).then_some(distance)
    }

    fn surface_normal(&self, _hit_point: Vec3) -> Vec3 {
        -self.normal
    }

    fn tex_coord(&self, hit_point: Vec3) -> TexCoord {
        let (x_axis, y_axis) = self.basis();
        let hit_vec = hit_point - self.point;
        TexCoord {
            u: hit_vec.dot(x_axis),
            v: hit_vec.dot(y_axis),
        }
    }
}
