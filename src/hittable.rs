//! Ray-object intersection system.
//!
//! Defines the Hittable trait for geometric primitives and the Hit record
//! returned by a successful intersection query.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::vector::Vector3;

/// Ray-object intersection information.
///
/// Only produced on a successful intersection; there is no "empty" record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Point where the ray intersects the object
    pub point: Vector3,
    /// Surface normal at the intersection point (unit vector)
    ///
    /// Outward for spheres; for triangles it follows the vertex winding and
    /// is not flipped toward the incoming ray.
    pub normal: Vector3,
    /// Distance along the ray to the intersection point
    pub t: f32,
}

/// Trait for objects that can be intersected by rays.
///
/// Must be thread-safe (Sync + Send) so a read-only scene can be shared
/// across render threads.
pub trait Hittable: Sync + Send {
    /// Test for ray intersection within the given parameter range.
    ///
    /// Returns the hit record, or `None` when the ray misses.
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit>;
}
