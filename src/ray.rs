//! Ray representation for ray casting.
//!
//! A ray is defined as r(t) = origin + t * direction, a semi-infinite line used
//! for primary (camera) and shadow intersection queries.

use crate::vector::Vector3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The per-pixel screen-plane point for primary rays, a surface hit point
    /// for shadow rays.
    pub origin: Vector3,

    /// Direction vector of the ray.
    ///
    /// The type does not require unit length, but every ray the renderer
    /// builds is normalized first: the sphere test assumes it.
    pub direction: Vector3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }
}
