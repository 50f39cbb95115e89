//! Triangle primitive using the Möller–Trumbore intersection test.

use std::sync::Arc;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{normalized, Vector3};

/// Threshold for the parallel-ray test and the minimum accepted `t`.
pub const EPSILON: f32 = 1e-7;

/// Flat-shaded triangle given by three vertices.
///
/// The face normal is `normalize(cross(p2 - p1, p3 - p1))`, so its
/// orientation depends on the winding order of the vertices.
#[derive(Debug, Clone)]
pub struct Triangle {
    /// First vertex.
    pub p1: Vector3,
    /// Second vertex.
    pub p2: Vector3,
    /// Third vertex.
    pub p3: Vector3,
    /// Material shared with other objects of the scene.
    pub material: Arc<Material>,
}

impl Triangle {
    /// Create a triangle from its vertices.
    pub fn new(p1: Vector3, p2: Vector3, p3: Vector3, material: Arc<Material>) -> Self {
        Self {
            p1,
            p2,
            p3,
            material,
        }
    }
}

impl Hittable for Triangle {
    /// Only the fixed [`EPSILON`] lower bound is applied; `_ray_t` is ignored.
    fn intersect(&self, ray: &Ray, _ray_t: Interval) -> Option<Hit> {
        let e1 = self.p2 - self.p1;
        let e2 = self.p3 - self.p1;

        let h = ray.direction.cross(e2);
        let a = e1.dot(h);
        if a.abs() < EPSILON {
            // Parallel to the triangle plane, or degenerate triangle
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - self.p1;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(e1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * e2.dot(q);
        if t <= EPSILON {
            return None;
        }

        Some(Hit {
            point: ray.at(t),
            normal: normalized(e1.cross(e2)),
            t,
        })
    }
}
