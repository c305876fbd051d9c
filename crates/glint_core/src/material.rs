//! Surface materials: base coloration plus how the surface treats light.

use std::sync::Arc;

use glint_math::Color;

use crate::image_buffer::ImageBuffer;
use crate::object::TexCoord;

/// Where a surface gets its base color from.
#[derive(Debug, Clone)]
pub enum Coloration {
    /// One flat color everywhere.
    Color(Color),
    /// A repeating image indexed by the object's texture coordinates.
    Texture(Arc<ImageBuffer>),
}

impl Coloration {
    /// Base color at a texture coordinate.
    pub fn color_at(&self, tex_coord: TexCoord) -> Color {
        match self {
            Coloration::Color(color) => *color,
            Coloration::Texture(texture) => {
                let x = wrap(tex_coord.u, texture.width());
                let y = wrap(tex_coord.v, texture.height());
                texture.get(x, y)
            }
        }
    }
}

/// Map a texture coordinate onto a pixel index, repeating every `bound` pixels.
fn wrap(coord: f64, bound: u32) -> u32 {
    let bound = i64::from(bound);
    // `as` truncates toward zero (and saturates), matching integer modulo below
    let wrapped = (coord * bound as f64) as i64 % bound;
    let wrapped = if wrapped < 0 { wrapped + bound } else { wrapped };
    wrapped as u32
}

/// How a surface treats light beyond plain diffuse reflection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Surface {
    #[default]
    Diffuse,
    /// Mirror-like; `reflectivity` in [0, 1] blends the reflection over the diffuse term.
    Reflective { reflectivity: f64 },
    /// Transparent; `index` is the index of refraction, `transparency` in [0, 1].
    Refractive { index: f64, transparency: f64 },
}

/// A surface material.
#[derive(Debug, Clone)]
pub struct Material {
    pub coloration: Coloration,
    /// Fraction of incident light reflected diffusely, in [0, 1].
    pub albedo: f64,
    pub surface: Surface,
}

impl Material {
    /// A flat-colored diffuse material.
    pub fn diffuse(color: Color, albedo: f64) -> Self {
        Self {
            coloration: Coloration::Color(color),
            albedo,
            surface: Surface::Diffuse,
        }
    }

    /// A textured diffuse material.
    pub fn textured(texture: Arc<ImageBuffer>, albedo: f64) -> Self {
        Self {
            coloration: Coloration::Texture(texture),
            albedo,
            surface: Surface::Diffuse,
        }
    }

    /// Replace the surface behavior.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surface = surface;
        self
    }

    /// Base color at a texture coordinate.
    #[inline]
    pub fn color_at(&self, tex_coord: TexCoord) -> Color {
        self.coloration.color_at(tex_coord)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::diffuse(Color::splat(0.5), 0.18)
    }
}
