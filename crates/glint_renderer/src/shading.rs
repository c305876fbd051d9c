//! Shading and recursive ray casting.
//!
//! Diffuse surfaces are lit by a Lambertian sum over all lights. Reflective
//! and refractive surfaces blend that with recursively cast rays until the
//! scene's maximum recursion depth is exceeded.

use std::f64::consts::PI;

use glint_core::{Geometry, Object, Scene, Surface};
use glint_math::{clamp_unit, Color, Ray, Vec3};

use crate::intersect::{closest_intersection, is_in_light, Hit};

/// Color seen along a primary ray.
///
/// Misses show the scene background. Hits are shaded at depth zero.
pub fn trace(scene: &Scene, ray: &Ray) -> Color {
    match closest_intersection(&scene.objects, ray) {
        Some(hit) => shade_hit(scene, ray, &hit, 0),
        None => scene.background,
    }
}

/// Color seen along a secondary ray cast at recursion level `depth`.
///
/// Returns black past the maximum recursion depth and on a miss. Only
/// primary rays see the background.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth > scene.max_recursion_depth {
        return Color::ZERO;
    }

    match closest_intersection(&scene.objects, ray) {
        Some(hit) => shade_hit(scene, ray, &hit, depth),
        None => Color::ZERO,
    }
}

/// Lambertian shading of `object` at `hit_point`, clamped to [0, 1].
///
/// Each light contributes `albedo / PI * max(0, n . l) * intensity` of its
/// color times the surface color, or nothing when the point is shadowed.
pub fn diffuse_color(scene: &Scene, object: &Object, hit_point: Vec3, surface_normal: Vec3) -> Color {
    let material = object.material();
    let surface_color = material.color_at(object.tex_coord(hit_point));
    let light_reflected = material.albedo / PI;

    let mut color = Color::ZERO;
    for light in &scene.lights {
        let light_distance = light.distance_to(hit_point);
        if light_distance == 0.0 {
            // Point light sitting on the surface: no direction to it
            continue;
        }
        let dir_to_light = light.direction_from(hit_point);

        let light_intensity =
            if is_in_light(surface_normal, hit_point, dir_to_light, light_distance, scene) {
                light.intensity_at(hit_point)
            } else {
                0.0
            };
        let light_power = surface_normal.dot(dir_to_light).max(0.0) * light_intensity;

        color += surface_color * light.color() * light_power * light_reflected;
    }

    clamp_unit(color)
}

fn shade_hit(scene: &Scene, ray: &Ray, hit: &Hit, depth: u32) -> Color {
    let hit_point = ray.at(hit.distance);
    let surface_normal = hit.object.surface_normal(hit_point);
    let diffuse = diffuse_color(scene, hit.object, hit_point, surface_normal);

    match hit.object.material().surface {
        Surface::Diffuse => diffuse,
        Surface::Reflective { reflectivity } => {
            let reflection_ray =
                Ray::reflection(surface_normal, ray.direction, hit_point, scene.shadow_bias);
            diffuse * (1.0 - reflectivity)
                + cast_ray(scene, &reflection_ray, depth + 1) * reflectivity
        }
        Surface::Refractive {
            index,
            transparency,
        } => {
            let surface_color = hit.object.material().color_at(hit.object.tex_coord(hit_point));
            let through = refracted_color(scene, ray, hit_point, surface_normal, index, depth);
            diffuse * (1.0 - transparency) + through * transparency * surface_color
        }
    }
}

/// Fresnel blend of the reflected and transmitted light at a refractive surface.
fn refracted_color(
    scene: &Scene,
    ray: &Ray,
    hit_point: Vec3,
    surface_normal: Vec3,
    index: f64,
    depth: u32,
) -> Color {
    let kr = fresnel(ray.direction, surface_normal, index);

    // Reflect off the side the ray arrived from
    let facing_normal = if ray.direction.dot(surface_normal) < 0.0 {
        surface_normal
    } else {
        -surface_normal
    };
    let reflection_ray =
        Ray::reflection(facing_normal, ray.direction, hit_point, scene.shadow_bias);
    let reflection = cast_ray(scene, &reflection_ray, depth + 1);

    if kr >= 1.0 {
        return reflection;
    }

    let transmission =
        Ray::transmission(surface_normal, ray.direction, hit_point, scene.shadow_bias, index)
            .map_or(Color::ZERO, |transmission_ray| {
                cast_ray(scene, &transmission_ray, depth + 1)
            });

    reflection * kr + transmission * (1.0 - kr)
}

/// Fraction of light reflected at a dielectric boundary.
///
/// Returns 1.0 under total internal reflection and 0.0 for a matched index.
pub fn fresnel(incident: Vec3, normal: Vec3, index: f64) -> f64 {
    if index == 1.0 {
        // No boundary to reflect from
        return 0.0;
    }

    let i_dot_n = incident.dot(normal);
    let (eta_i, eta_t) = if i_dot_n > 0.0 {
        (index, 1.0)
    } else {
        (1.0, index)
    };

    let sin_t = eta_i / eta_t * (1.0 - i_dot_n * i_dot_n).max(0.0).sqrt();
    if sin_t > 1.0 {
        return 1.0;
    }

    let cos_t = (1.0 - sin_t * sin_t).max(0.0).sqrt();
    let cos_i = i_dot_n.abs();
    let r_s = ((eta_t * cos_i) - (eta_i * cos_t)) / ((eta_t * cos_i) + (eta_i * cos_t));
    let r_p = ((eta_i * cos_i) - (eta_t * cos_t)) / ((eta_i * cos_i) + (eta_t * cos_t));
    (r_s * r_s + r_p * r_p) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glint_core::{Light, Material, Plane, Sphere};

    fn lit_sphere_scene(material: Material) -> Scene {
        let mut scene = Scene::new(1, 1, 90.0);
        scene.add_object(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material));
        // Light shining straight down -Z onto the sphere's front
        scene.add_light(Light::directional(Vec3::NEG_Z, Color::ONE, 1.0));
        scene
    }

    #[test]
    fn test_diffuse_head_on() {
        let scene = lit_sphere_scene(Material::diffuse(Color::ONE, 1.0));
        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Z));

        // n . l = 1, so each channel is albedo / PI * intensity
        assert_relative_eq!(color.x, 1.0 / PI, epsilon = 1e-9);
        assert_relative_eq!(color.y, 1.0 / PI, epsilon = 1e-9);
        assert_relative_eq!(color.z, 1.0 / PI, epsilon = 1e-9);
    }

    #[test]
    fn test_diffuse_is_clamped() {
        let mut scene = lit_sphere_scene(Material::diffuse(Color::ONE, 1.0));
        scene.lights[0] = Light::directional(Vec3::NEG_Z, Color::ONE, 100.0);

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert_eq!(color, Color::ONE);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let mut scene = lit_sphere_scene(Material::diffuse(Color::ONE, 1.0));
        scene.lights[0] = Light::directional(Vec3::Z, Color::ONE, 1.0);

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert_eq!(color, Color::ZERO);
    }

    #[test]
    fn test_miss_shows_background_only_for_primary_rays() {
        let scene = Scene::new(1, 1, 90.0).with_background(Color::new(0.2, 0.4, 0.6));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert_eq!(trace(&scene, &ray), Color::new(0.2, 0.4, 0.6));
        assert_eq!(cast_ray(&scene, &ray, 1), Color::ZERO);
    }

    #[test]
    fn test_cast_ray_past_max_depth_is_black() {
        let scene = lit_sphere_scene(Material::diffuse(Color::ONE, 1.0)).with_max_recursion_depth(2);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        assert!(cast_ray(&scene, &ray, 2).x > 0.0);
        assert_eq!(cast_ray(&scene, &ray, 3), Color::ZERO);
    }

    #[test]
    fn test_reflectivity_zero_is_pure_diffuse() {
        let diffuse = Material::diffuse(Color::new(1.0, 0.5, 0.25), 0.8);
        let mirror = diffuse
            .clone()
            .with_surface(Surface::Reflective { reflectivity: 0.0 });

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let expected = trace(&lit_sphere_scene(diffuse), &ray);
        let actual = trace(&lit_sphere_scene(mirror), &ray);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_perfect_mirror_shows_reflected_object() {
        let mut scene = Scene::new(1, 1, 90.0).with_shadow_bias(1e-9);
        // Mirror floor at y = -1 facing up
        scene.add_object(Plane::new(
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::NEG_Y,
            Material::diffuse(Color::ONE, 1.0).with_surface(Surface::Reflective { reflectivity: 1.0 }),
        ));
        // Red ball on the reflected path of the view ray
        scene.add_object(Sphere::new(
            Vec3::new(0.0, 1.0, -3.0),
            0.5,
            Material::diffuse(Color::new(1.0, 0.0, 0.0), 1.0),
        ));
        // Light above everything: the side of the ball seen in the mirror is dark
        scene.add_light(Light::directional(Vec3::NEG_Y, Color::ONE, 1.0));

        // Looking down at 45 degrees onto the floor at (0, -1, -1)
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0).normalize());
        assert_eq!(trace(&scene, &ray), Color::ZERO);

        // Light just below the ball lights the side seen in the mirror
        scene.lights[0] = Light::point(Vec3::new(0.0, 0.0, -3.0), Color::ONE, 10.0);
        let color = trace(&scene, &ray);
        assert!(color.x > 0.0);
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn test_fresnel_normal_incidence() {
        // ((n - 1) / (n + 1))^2 for glass
        let kr = fresnel(Vec3::NEG_Z, Vec3::Z, 1.5);
        assert_relative_eq!(kr, 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_fresnel_total_internal_reflection() {
        // Leaving glass at a grazing angle
        let incident = Vec3::new(0.9, 0.0, 0.1).normalize();
        assert_eq!(fresnel(incident, Vec3::Z, 1.5), 1.0);
    }

    #[test]
    fn test_fresnel_grazing_approaches_one() {
        let incident = Vec3::new(1.0, 0.0, -1e-4).normalize();
        assert!(fresnel(incident, Vec3::Z, 1.5) > 0.99);
    }

    #[test]
    fn test_fresnel_matched_index_is_zero() {
        // Grazing incidence used to divide zero by zero
        assert_eq!(fresnel(Vec3::X, Vec3::Z, 1.0), 0.0);
        assert_eq!(fresnel(Vec3::NEG_Z, Vec3::Z, 1.0), 0.0);
    }

    #[test]
    fn test_point_light_on_surface_is_skipped() {
        let mut scene = Scene::new(1, 1, 90.0);
        scene.add_object(Plane::new(
            Vec3::new(0.0, -2.0, 0.0),
            Vec3::NEG_Y,
            Material::diffuse(Color::ONE, 1.0),
        ));
        // Light exactly where the ray lands
        scene.add_light(Light::point(Vec3::new(0.0, -2.0, 0.0), Color::ONE, 100.0));

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Y));
        assert_eq!(color, Color::ZERO);

        // Other lights still contribute
        scene.add_light(Light::directional(Vec3::NEG_Y, Color::ONE, 1.0));
        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Y));
        assert_relative_eq!(color.x, 1.0 / PI, epsilon = 1e-9);
    }

    #[test]
    fn test_opaque_refractive_equals_diffuse() {
        let diffuse = Material::diffuse(Color::ONE, 0.5);
        let glass = diffuse.clone().with_surface(Surface::Refractive {
            index: 1.5,
            transparency: 0.0,
        });

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let expected = trace(&lit_sphere_scene(diffuse), &ray);
        let actual = trace(&lit_sphere_scene(glass), &ray);
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-12);
    }

    #[test]
    fn test_clear_glass_shows_background_object() {
        let mut scene = Scene::new(1, 1, 90.0).with_shadow_bias(1e-9);
        scene.add_object(Sphere::new(
            Vec3::new(0.0, 0.0, -5.0),
            1.0,
            Material::diffuse(Color::ONE, 1.0).with_surface(Surface::Refractive {
                index: 1.0,
                transparency: 1.0,
            }),
        ));
        // Wall behind the ball, lit head on
        scene.add_object(Plane::new(
            Vec3::new(0.0, 0.0, -20.0),
            Vec3::NEG_Z,
            Material::diffuse(Color::new(0.0, 1.0, 0.0), 1.0),
        ));
        scene.add_light(Light::point(Vec3::new(0.0, 0.0, -10.0), Color::ONE, 4.0 * PI * 100.0));

        let color = trace(&scene, &Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        // Index 1.0 reflects nothing, so the wall shows through
        assert!(color.y > 0.0);
        assert_eq!(color.x, 0.0);
    }
}
