//! Scene objects and the geometry queries the renderer runs against them.

use glint_math::{Ray, Vec3};

use crate::material::Material;
use crate::plane::Plane;
use crate::sphere::Sphere;

/// A 2D surface coordinate used to index textures.
///
/// Sphere coordinates land in [0, 1]; plane coordinates are unbounded and
/// rely on texture wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TexCoord {
    pub u: f64,
    pub v: f64,
}

impl TexCoord {
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }
}

/// Geometry queries every object kind answers.
pub trait Geometry {
    /// Distance along `ray` to the nearest hit in front of its origin.
    ///
    /// A returned distance is always >= 0.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Unit surface normal at a point on the surface.
    fn surface_normal(&self, hit_point: Vec3) -> Vec3;

    /// Texture coordinate of a point on the surface.
    fn tex_coord(&self, hit_point: Vec3) -> TexCoord;
}

/// A renderable object: a shape plus the material covering it.
#[derive(Debug, Clone)]
pub enum Object {
    Sphere(Sphere),
    Plane(Plane),
}

impl Object {
    /// The material of this object.
    pub fn material(&self) -> &Material {
        match self {
            Object::Sphere(sphere) => &sphere.material,
            Object::Plane(plane) => &plane.material,
        }
    }
}

impl Geometry for Object {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(ray),
            Object::Plane(plane) => plane.intersect(ray),
        }
    }

    fn surface_normal(&self, hit_point: Vec3) -> Vec3 {
        match self {
            Object::Sphere(sphere) => sphere.surface_normal(hit_point),
            Object::Plane(plane) => plane.surface_normal(hit_point),
        }
    }

    fn tex_coord(&self, hit_point: Vec3) -> TexCoord {
        match self {
            Object::Sphere(sphere) => sphere.tex_coord(hit_point),
            Object::Plane(plane) => plane.tex_coord(hit_point),
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Self {
        Object::Sphere(sphere)
    }
}

impl From<Plane> for Object {
    fn from(plane: Plane) -> Self {
        Object::Plane(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;
    use glint_math::Color;

    #[test]
    fn test_object_dispatch() {
        let material = Material::diffuse(Color::new(1.0, 0.0, 0.0), 0.5);
        let object: Object = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material).into();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let distance = object.intersect(&ray).unwrap();
        assert!((distance - 4.0).abs() < 1e-9);
        assert_eq!(object.surface_normal(ray.at(distance)), Vec3::Z);
        assert_eq!(object.material().albedo, 0.5);
    }
}
