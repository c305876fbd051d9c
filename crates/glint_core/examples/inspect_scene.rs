//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- demos/spheres.json

use std::env;

use glint_core::{load_scene, Coloration, Light, Object, Surface};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene.json>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- demos/spheres.json");
        println!("  cargo run --example inspect_scene -- demos/mirrors.json");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", path);
            println!("Size: {}x{} @ {:.1} deg fov", scene.width, scene.height, scene.fov);
            println!(
                "Shadow bias: {:e}, max depth: {}",
                scene.shadow_bias, scene.max_recursion_depth
            );

            println!("\n--- Objects ---");
            for (i, object) in scene.objects.iter().enumerate() {
                let shape = match object {
                    Object::Sphere(s) => format!(
                        "sphere r={:.2} at ({:.2}, {:.2}, {:.2})",
                        s.radius, s.center.x, s.center.y, s.center.z
                    ),
                    Object::Plane(p) => format!(
                        "plane through ({:.2}, {:.2}, {:.2}) normal ({:.2}, {:.2}, {:.2})",
                        p.point.x, p.point.y, p.point.z, p.normal.x, p.normal.y, p.normal.z
                    ),
                };
                let material = object.material();
                let coloration = match &material.coloration {
                    Coloration::Color(c) => format!("color ({:.2}, {:.2}, {:.2})", c.x, c.y, c.z),
                    Coloration::Texture(t) => format!("texture {}x{}", t.width(), t.height()),
                };
                let surface = match material.surface {
                    Surface::Diffuse => "diffuse".to_string(),
                    Surface::Reflective { reflectivity } => format!("reflective {reflectivity:.2}"),
                    Surface::Refractive {
                        index,
                        transparency,
                    } => format!("refractive n={index:.2} t={transparency:.2}"),
                };
                println!(
                    "  [{}] {} - {}, albedo {:.2}, {}",
                    i, shape, coloration, material.albedo, surface
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                match light {
                    Light::Directional {
                        direction,
                        intensity,
                        ..
                    } => println!(
                        "  [{}] directional ({:.2}, {:.2}, {:.2}) x {:.1}",
                        i, direction.x, direction.y, direction.z, intensity
                    ),
                    Light::Point {
                        position,
                        intensity,
                        ..
                    } => println!(
                        "  [{}] point at ({:.2}, {:.2}, {:.2}) x {:.1}",
                        i, position.x, position.y, position.z, intensity
                    ),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
