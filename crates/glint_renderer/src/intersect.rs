//! Closest-hit and shadow queries over the scene's object list.
//!
//! Brute force: every query tests every object.

use glint_core::{Geometry, Object, Scene};
use glint_math::{Interval, Ray, Vec3};

/// The nearest object along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub object: &'a Object,
    /// Distance along the ray direction from its origin
    pub distance: f64,
}

/// Find the closest object hit by `ray`.
///
/// On exactly equal distances the object earlier in `objects` wins.
pub fn closest_intersection<'a>(objects: &'a [Object], ray: &Ray) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;

    for object in objects {
        let Some(distance) = object.intersect(ray) else {
            continue;
        };
        debug_assert!(Interval::FORWARD.contains(distance));

        match closest {
            Some(hit) if distance >= hit.distance => {}
            _ => closest = Some(Hit { object, distance }),
        }
    }

    closest
}

/// Whether `hit_point` can see a light `light_distance` away along `dir_to_light`.
///
/// The shadow ray starts `shadow_bias` off the surface along
/// `surface_normal`; without that offset it can hit the very surface it
/// leaves. Anything beyond the light cannot occlude it.
pub fn is_in_light(
    surface_normal: Vec3,
    hit_point: Vec3,
    dir_to_light: Vec3,
    light_distance: f64,
    scene: &Scene,
) -> bool {
    let shadow_ray = Ray::new(hit_point + surface_normal * scene.shadow_bias, dir_to_light);
    let occluding = Interval::new(0.0, light_distance);

    match closest_intersection(&scene.objects, &shadow_ray) {
        Some(hit) => !occluding.contains_before_max(hit.distance),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glint_core::{Material, Plane, Sphere};
    use glint_math::Color;

    fn sphere(z: f64, radius: f64) -> Object {
        Sphere::new(Vec3::new(0.0, 0.0, z), radius, Material::default()).into()
    }

    #[test]
    fn test_closest_of_two() {
        // Hits at 3.0 and 7.0, listed far-first
        let objects = vec![sphere(-8.0, 1.0), sphere(-4.0, 1.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = closest_intersection(&objects, &ray).unwrap();
        assert_relative_eq!(hit.distance, 3.0, epsilon = 1e-12);
        assert!(std::ptr::eq(hit.object, &objects[1]));
    }

    #[test]
    fn test_no_hit() {
        let objects = vec![sphere(-8.0, 1.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(closest_intersection(&objects, &ray).is_none());
        assert!(closest_intersection(&[], &ray).is_none());
    }

    #[test]
    fn test_tie_goes_to_first() {
        let objects = vec![sphere(-5.0, 1.0), sphere(-5.0, 1.0)];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = closest_intersection(&objects, &ray).unwrap();
        assert!(std::ptr::eq(hit.object, &objects[0]));
    }

    #[test]
    fn test_mixed_shapes() {
        let objects: Vec<Object> = vec![
            Plane::new(Vec3::new(0.0, 0.0, -10.0), Vec3::NEG_Z, Material::default()).into(),
            sphere(-5.0, 1.0),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = closest_intersection(&objects, &ray).unwrap();
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-12);

        // Off to the side only the wall is hit
        let ray = Ray::new(Vec3::new(3.0, 0.0, 0.0), Vec3::NEG_Z);
        let hit = closest_intersection(&objects, &ray).unwrap();
        assert_relative_eq!(hit.distance, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shadow_from_occluder() {
        let mut scene = Scene::new(1, 1, 90.0).with_shadow_bias(1e-9);
        // Occluder between the surface point and the light above it
        scene.add_object(Sphere::new(Vec3::new(0.0, 5.0, 0.0), 1.0, Material::default()));

        let light_pos = Vec3::new(0.0, 10.0, 0.0);
        let hit_point = Vec3::ZERO;
        let dir = (light_pos - hit_point).normalize();
        assert!(!is_in_light(Vec3::Y, hit_point, dir, 10.0, &scene));

        scene.objects.clear();
        assert!(is_in_light(Vec3::Y, hit_point, dir, 10.0, &scene));
    }

    #[test]
    fn test_occluder_beyond_light_is_ignored() {
        let mut scene = Scene::new(1, 1, 90.0);
        scene.add_object(Sphere::new(Vec3::new(0.0, 20.0, 0.0), 1.0, Material::default()));

        assert!(is_in_light(Vec3::Y, Vec3::ZERO, Vec3::Y, 10.0, &scene));
        // A directional light is infinitely far away, so the same sphere shadows
        assert!(!is_in_light(Vec3::Y, Vec3::ZERO, Vec3::Y, f64::INFINITY, &scene));
    }

    #[test]
    fn test_bias_prevents_self_shadowing() {
        let mut scene = Scene::new(1, 1, 90.0).with_shadow_bias(1e-6);
        let ball = Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Material::diffuse(Color::ONE, 1.0));
        scene.add_object(ball);

        // Point on the top of the ball, light straight above
        let hit_point = Vec3::new(0.0, 1.0, -5.0);
        assert!(is_in_light(Vec3::Y, hit_point, Vec3::Y, f64::INFINITY, &scene));
    }
}
