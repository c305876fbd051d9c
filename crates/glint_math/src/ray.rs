use crate::vec::reflect;
use crate::Vec3;

/// Index of refraction of the medium rays travel through between objects.
pub const AMBIENT_INDEX: f64 = 1.0;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is conventionally unit length so that the parameter of
/// [`Ray::at`] is a world-space distance.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Build the mirror ray leaving `hit_point`.
    ///
    /// The origin is pushed `bias` along `normal` so the new ray does not
    /// immediately re-hit the surface it leaves.
    pub fn reflection(normal: Vec3, incident: Vec3, hit_point: Vec3, bias: f64) -> Self {
        Self {
            origin: hit_point + normal * bias,
            direction: reflect(incident, normal),
        }
    }

    /// Build the refracted ray entering (or leaving) a surface with index `index`.
    ///
    /// Rays arriving against `normal` are entering the object; rays arriving
    /// along it are leaving, in which case the normal is flipped and the
    /// indices swapped. Returns `None` on total internal reflection.
    pub fn transmission(
        normal: Vec3,
        incident: Vec3,
        hit_point: Vec3,
        bias: f64,
        index: f64,
    ) -> Option<Self> {
        let mut ref_n = normal;
        let mut eta_i = AMBIENT_INDEX;
        let mut eta_t = index;
        let mut i_dot_n = incident.dot(normal);
        if i_dot_n < 0.0 {
            // Outside the surface
            i_dot_n = -i_dot_n;
        } else {
            // Inside, so invert the normal and swap the indices
            ref_n = -normal;
            std::mem::swap(&mut eta_i, &mut eta_t);
        }

        let eta = eta_i / eta_t;
        let k = 1.0 - (eta * eta) * (1.0 - i_dot_n * i_dot_n);
        if k < 0.0 {
            return None;
        }

        Some(Self {
            origin: hit_point - ref_n * bias,
            direction: (incident + i_dot_n * ref_n) * eta - ref_n * k.sqrt(),
        })
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self {
            origin: Vec3::ZERO,
            direction: Vec3::NEG_Z,
        }
    }
}
