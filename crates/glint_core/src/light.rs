//! Light sources.

use std::f64::consts::PI;

use glint_math::{normalize, Color, Vec3};

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Parallel light from infinitely far away, travelling along `direction`.
    Directional {
        direction: Vec3,
        color: Color,
        intensity: f64,
    },
    /// Light radiating from a point, falling off with the square of distance.
    Point {
        position: Vec3,
        color: Color,
        intensity: f64,
    },
}

impl Light {
    pub fn directional(direction: Vec3, color: Color, intensity: f64) -> Self {
        Light::Directional {
            direction,
            color,
            intensity,
        }
    }

    /// A point light. Shading skips it for a surface point at exactly `position`.
    pub fn point(position: Vec3, color: Color, intensity: f64) -> Self {
        Light::Point {
            position,
            color,
            intensity,
        }
    }

    pub fn color(&self) -> Color {
        match *self {
            Light::Directional { color, .. } | Light::Point { color, .. } => color,
        }
    }

    /// Unit direction from `point` toward the light.
    ///
    /// # Panics
    ///
    /// Panics for a point light when `point` is the light's position.
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        match *self {
            Light::Directional { direction, .. } => normalize(-direction),
            Light::Point { position, .. } => normalize(position - point),
        }
    }

    /// Intensity arriving at `point`.
    pub fn intensity_at(&self, point: Vec3) -> f64 {
        match *self {
            Light::Directional { intensity, .. } => intensity,
            Light::Point {
                position,
                intensity,
                ..
            } => {
                let r2 = (position - point).length_squared();
                intensity / (4.0 * PI * r2)
            }
        }
    }

    /// Distance from `point` to the light, infinite for directional lights.
    pub fn distance_to(&self, point: Vec3) -> f64 {
        match *self {
            Light::Directional { .. } => f64::INFINITY,
            Light::Point { position, .. } => (position - point).length(),
        }
    }
}
