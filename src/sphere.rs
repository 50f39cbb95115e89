//! Sphere primitive for ray casting.
//!
//! Implements ray-sphere intersection using the half-b form of the quadratic
//! with a unit-length ray direction.

use std::sync::Arc;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::material::Material;
use crate::ray::Ray;
use crate::vector::{normalized, Vector3};

/// Sphere primitive defined by center, radius, and material.
#[derive(Debug, Clone)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: Vector3,

    /// Radius of the sphere.
    pub radius: f32,

    /// Material shared with other objects of the scene.
    pub material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vector3, radius: f32, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    fn hit_at(&self, ray: &Ray, t: f32) -> Hit {
        let point = ray.at(t);
        Hit {
            point,
            normal: normalized(point - self.center),
            t,
        }
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        // Leading coefficient is 1 for a unit direction: t^2 + 2bt + c = 0
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Near root first, the far one only if the near one is out of range
        let near = -b - sqrtd;
        if ray_t.surrounds(near) {
            return Some(self.hit_at(ray, near));
        }
        let far = -b + sqrtd;
        if ray_t.surrounds(far) {
            return Some(self.hit_at(ray, far));
        }

        None
    }
}
