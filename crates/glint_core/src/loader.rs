//! JSON scene loading.
//!
//! The file format mirrors the scene model directly:
//!
//! ```json
//! {
//!   "width": 800, "height": 600, "fov": 90.0,
//!   "shadow_bias": 1e-13, "max_recursion_depth": 4,
//!   "background": { "r": 0.4, "g": 0.6, "b": 1.0 },
//!   "objects": [
//!     { "sphere": { "center": { "x": 0.0, "y": 0.0, "z": -5.0 }, "radius": 1.0,
//!                   "material": { "coloration": { "color": { "r": 1.0, "g": 0.2, "b": 0.2 } },
//!                                 "albedo": 0.18, "surface": "diffuse" } } },
//!     { "plane": { "point": { "x": 0.0, "y": -2.0, "z": 0.0 },
//!                  "normal": { "x": 0.0, "y": -1.0, "z": 0.0 },
//!                  "material": { "coloration": { "texture": "checker.png" }, "albedo": 0.18 } } }
//!   ],
//!   "lights": [
//!     { "directional": { "direction": { "x": 0.0, "y": -1.0, "z": -1.0 },
//!                        "color": { "r": 1.0, "g": 1.0, "b": 1.0 }, "intensity": 20.0 } }
//!   ]
//! }
//! ```
//!
//! Texture paths are resolved relative to the scene file.

use std::fs;
use std::path::{Path, PathBuf};

use glint_math::{Color, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::image_buffer::ImageIoError;
use crate::light::Light;
use crate::material::{Coloration, Material, Surface};
use crate::object::Object;
use crate::plane::Plane;
use crate::scene::{Scene, DEFAULT_MAX_RECURSION_DEPTH, DEFAULT_SHADOW_BIAS};
use crate::sphere::Sphere;
use crate::texture::TextureCache;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to load texture {path}: {source}")]
    Texture {
        path: String,
        #[source]
        source: ImageIoError,
    },

    #[error("Invalid scene: {0}")]
    Invalid(String),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[derive(Deserialize, Debug, Clone, Copy)]
struct Vec3Def {
    x: f64,
    y: f64,
    z: f64,
}

impl From<Vec3Def> for Vec3 {
    fn from(v: Vec3Def) -> Self {
        Vec3::new(v.x, v.y, v.z)
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
struct RgbDef {
    r: f64,
    g: f64,
    b: f64,
}

impl From<RgbDef> for Color {
    fn from(c: RgbDef) -> Self {
        Color::new(c.r, c.g, c.b)
    }
}

#[derive(Deserialize, Debug)]
struct SceneDef {
    width: u32,
    height: u32,
    fov: f64,
    #[serde(default = "default_shadow_bias")]
    shadow_bias: f64,
    #[serde(default = "default_max_recursion_depth")]
    max_recursion_depth: u32,
    #[serde(default)]
    background: Option<RgbDef>,
    #[serde(default)]
    objects: Vec<ObjectDef>,
    #[serde(default)]
    lights: Vec<LightDef>,
}

fn default_shadow_bias() -> f64 {
    DEFAULT_SHADOW_BIAS
}

fn default_max_recursion_depth() -> u32 {
    DEFAULT_MAX_RECURSION_DEPTH
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
enum ObjectDef {
    Sphere {
        center: Vec3Def,
        radius: f64,
        material: MaterialDef,
    },
    Plane {
        point: Vec3Def,
        normal: Vec3Def,
        material: MaterialDef,
    },
}

#[derive(Deserialize, Debug)]
struct MaterialDef {
    coloration: ColorationDef,
    albedo: f64,
    #[serde(default)]
    surface: SurfaceDef,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
enum ColorationDef {
    Color(RgbDef),
    Texture(String),
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "snake_case")]
enum SurfaceDef {
    #[default]
    Diffuse,
    Reflective {
        reflectivity: f64,
    },
    Refractive {
        index: f64,
        transparency: f64,
    },
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
enum LightDef {
    Directional {
        direction: Vec3Def,
        color: RgbDef,
        intensity: f64,
    },
    Point {
        position: Vec3Def,
        color: RgbDef,
        intensity: f64,
    },
}

/// Load a scene from a JSON file.
///
/// Relative texture paths are resolved against the file's directory.
pub fn load_scene(path: impl AsRef<Path>) -> LoadResult<Scene> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

    let scene = load_scene_from_str(&json, base_dir)?;
    log::info!(
        "Loaded scene {}: {}x{}, {} objects, {} lights",
        path.display(),
        scene.width,
        scene.height,
        scene.object_count(),
        scene.light_count()
    );
    Ok(scene)
}

/// Load a scene from a JSON string, resolving textures against `base_dir`.
pub fn load_scene_from_str(json: &str, base_dir: impl Into<PathBuf>) -> LoadResult<Scene> {
    let def: SceneDef = serde_json::from_str(json)?;
    let mut textures = TextureCache::with_base_dir(base_dir);
    build_scene(def, &mut textures)
}

fn build_scene(def: SceneDef, textures: &mut TextureCache) -> LoadResult<Scene> {
    if def.width == 0 || def.height == 0 {
        return invalid(format!(
            "image size must be non-zero, got {}x{}",
            def.width, def.height
        ));
    }
    if !(def.fov > 0.0 && def.fov < 180.0) {
        return invalid(format!("fov must be in (0, 180) degrees, got {}", def.fov));
    }
    if !(def.shadow_bias >= 0.0 && def.shadow_bias.is_finite()) {
        return invalid(format!("shadow_bias must be >= 0, got {}", def.shadow_bias));
    }

    let mut scene = Scene::new(def.width, def.height, def.fov)
        .with_shadow_bias(def.shadow_bias)
        .with_max_recursion_depth(def.max_recursion_depth)
        .with_background(def.background.map(Color::from).unwrap_or(Color::ZERO));

    for (i, object) in def.objects.into_iter().enumerate() {
        let object = build_object(object, textures)
            .map_err(|e| annotate(e, &format!("object {i}")))?;
        scene.add_object(object);
    }

    for (i, light) in def.lights.into_iter().enumerate() {
        let light = build_light(light).map_err(|e| annotate(e, &format!("light {i}")))?;
        scene.add_light(light);
    }

    if scene.lights.is_empty() {
        log::warn!("Scene has no lights; every hit will render black");
    }

    Ok(scene)
}

fn build_object(def: ObjectDef, textures: &mut TextureCache) -> LoadResult<Object> {
    match def {
        ObjectDef::Sphere {
            center,
            radius,
            material,
        } => {
            if !(radius > 0.0 && radius.is_finite()) {
                return invalid(format!("sphere radius must be positive, got {radius}"));
            }
            let material = build_material(material, textures)?;
            Ok(Sphere::new(center.into(), radius, material).into())
        }
        ObjectDef::Plane {
            point,
            normal,
            material,
        } => {
            let normal = non_zero(normal.into(), "plane normal")?;
            let material = build_material(material, textures)?;
            Ok(Plane::new(point.into(), normal, material).into())
        }
    }
}

fn build_material(def: MaterialDef, textures: &mut TextureCache) -> LoadResult<Material> {
    unit_range(def.albedo, "albedo")?;

    let coloration = match def.coloration {
        ColorationDef::Color(color) => Coloration::Color(color.into()),
        ColorationDef::Texture(path) => {
            let texture = textures
                .load(&path)
                .map_err(|source| LoadError::Texture { path, source })?;
            Coloration::Texture(texture)
        }
    };

    let surface = match def.surface {
        SurfaceDef::Diffuse => Surface::Diffuse,
        SurfaceDef::Reflective { reflectivity } => {
            unit_range(reflectivity, "reflectivity")?;
            Surface::Reflective { reflectivity }
        }
        SurfaceDef::Refractive {
            index,
            transparency,
        } => {
            if !(index > 0.0 && index.is_finite()) {
                return invalid(format!("refractive index must be positive, got {index}"));
            }
            unit_range(transparency, "transparency")?;
            Surface::Refractive {
                index,
                transparency,
            }
        }
    };

    Ok(Material {
        coloration,
        albedo: def.albedo,
        surface,
    })
}

fn build_light(def: LightDef) -> LoadResult<Light> {
    match def {
        LightDef::Directional {
            direction,
            color,
            intensity,
        } => {
            let direction = non_zero(direction.into(), "light direction")?;
            non_negative(intensity, "light intensity")?;
            Ok(Light::directional(direction, color.into(), intensity))
        }
        LightDef::Point {
            position,
            color,
            intensity,
        } => {
            non_negative(intensity, "light intensity")?;
            Ok(Light::point(position.into(), color.into(), intensity))
        }
    }
}

fn invalid<T>(message: String) -> LoadResult<T> {
    Err(LoadError::Invalid(message))
}

fn annotate(error: LoadError, context: &str) -> LoadError {
    match error {
        LoadError::Invalid(message) => LoadError::Invalid(format!("{context}: {message}")),
        other => other,
    }
}

fn unit_range(value: f64, name: &str) -> LoadResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        invalid(format!("{name} must be in [0, 1], got {value}"))
    }
}

fn non_negative(value: f64, name: &str) -> LoadResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        invalid(format!("{name} must be >= 0, got {value}"))
    }
}

fn non_zero(v: Vec3, name: &str) -> LoadResult<Vec3> {
    let len = v.length();
    if len > 0.0 && len.is_finite() {
        Ok(v)
    } else {
        invalid(format!("{name} must be a non-zero vector"))
    }
}
