//! Render a small built-in scene.
//!
//! Builds a row of diffuse, mirror and glass spheres over a floor and saves
//! the result to `render_demo.png`.
//!
//! Run with: cargo run --release -p glint_renderer --example render_demo

use glint_core::{Light, Material, Plane, Sphere, Surface};
use glint_renderer::{render_with, Color, RenderConfig, Scene, Vec3};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    println!("glint - Render Demo");
    println!("==================");

    let start = std::time::Instant::now();
    let scene = build_scene();
    println!(
        "Scene built in {:?} ({} objects, {} lights)",
        start.elapsed(),
        scene.object_count(),
        scene.light_count()
    );

    let config = RenderConfig::default();
    println!(
        "Rendering {}x{} on {} workers...",
        scene.width, scene.height, config.workers
    );

    let start = std::time::Instant::now();
    let image = render_with(&scene, &config).expect("Render failed");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "render_demo.png";
    image.save_png(filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(800, 450, 60.0)
        .with_shadow_bias(1e-9)
        .with_background(Color::new(0.25, 0.35, 0.5));

    // Floor
    scene.add_object(Plane::new(
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::NEG_Y,
        Material::diffuse(Color::new(0.6, 0.6, 0.6), 0.3),
    ));

    // Three main spheres
    scene.add_object(Sphere::new(
        Vec3::new(-2.5, 0.0, -6.0),
        1.0,
        Material::diffuse(Color::new(0.4, 0.2, 0.1), 0.6),
    ));
    scene.add_object(Sphere::new(
        Vec3::new(0.0, 0.0, -7.0),
        1.0,
        Material::diffuse(Color::new(0.7, 0.6, 0.5), 0.2)
            .with_surface(Surface::Reflective { reflectivity: 0.8 }),
    ));
    scene.add_object(Sphere::new(
        Vec3::new(2.5, 0.0, -6.0),
        1.0,
        Material::diffuse(Color::ONE, 0.18).with_surface(Surface::Refractive {
            index: 1.5,
            transparency: 0.9,
        }),
    ));

    // A row of small spheres further back
    for i in 0..7 {
        let x = -4.5 + 1.5 * i as f64;
        let tint = i as f64 / 6.0;
        scene.add_object(Sphere::new(
            Vec3::new(x, -0.7, -11.0),
            0.3,
            Material::diffuse(Color::new(tint, 0.5, 1.0 - tint), 0.5),
        ));
    }

    scene.add_light(Light::directional(
        Vec3::new(-0.4, -1.0, -0.6),
        Color::new(1.0, 0.95, 0.9),
        12.0,
    ));
    scene.add_light(Light::point(
        Vec3::new(3.0, 4.0, -3.0),
        Color::new(0.8, 0.9, 1.0),
        2000.0,
    ));

    scene
}
