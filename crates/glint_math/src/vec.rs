//! Small vector helpers on top of glam.
//!
//! Everything here works on values: vectors are `Copy` and every helper
//! returns a fresh vector instead of mutating its input.

use crate::Vec3;

/// Scale `v` to unit length.
///
/// # Panics
///
/// Normalizing the zero vector (or a vector with non-finite length) is a
/// programming error and panics.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    assert!(
        len > 0.0 && len.is_finite(),
        "cannot normalize degenerate vector {v:?}"
    );
    v / len
}

/// Clamp every component into [0, 1].
#[inline]
pub fn clamp_unit(v: Vec3) -> Vec3 {
    v.clamp(Vec3::ZERO, Vec3::ONE)
}

/// Right-handed cross product `u x v`.
#[inline]
pub fn cross(u: Vec3, v: Vec3) -> Vec3 {
    u.cross(v)
}

/// Mirror `incident` about `normal` (which must be unit length).
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}
