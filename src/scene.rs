//! Scene description: an ordered list of objects and an ordered list of lights.
//!
//! Built once before rendering and only read while tracing, so a `&Scene` can
//! be shared by every render thread without locking.

use std::sync::Arc;

use log::debug;

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::light::Light;
use crate::material::Material;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::triangle::Triangle;

/// Geometric object of the scene.
///
/// Dispatches statically over the supported shapes.
#[derive(Debug, Clone)]
pub enum SceneObject {
    /// Sphere primitive.
    Sphere(Sphere),
    /// Flat triangle.
    Triangle(Triangle),
}

impl SceneObject {
    /// Material of the object.
    pub fn material(&self) -> &Arc<Material> {
        match self {
            SceneObject::Sphere(sphere) => &sphere.material,
            SceneObject::Triangle(triangle) => &triangle.material,
        }
    }
}

impl Hittable for SceneObject {
    fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<Hit> {
        match self {
            SceneObject::Sphere(sphere) => sphere.intersect(ray, ray_t),
            SceneObject::Triangle(triangle) => triangle.intersect(ray, ray_t),
        }
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl From<Triangle> for SceneObject {
    fn from(triangle: Triangle) -> Self {
        SceneObject::Triangle(triangle)
    }
}

/// Objects and lights to render.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Objects in insertion order.
    pub objects: Vec<SceneObject>,
    /// Lights in insertion order.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the scene.
    pub fn add(&mut self, object: impl Into<SceneObject>) {
        let object = object.into();
        debug!("Adding object #{}: {:?}", self.objects.len(), object);
        self.objects.push(object);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        debug!("Adding light #{}: {:?}", self.lights.len(), light);
        self.lights.push(light);
    }

    /// Find the object whose hit point is closest to the ray origin.
    ///
    /// Candidates are ranked by squared Euclidean distance from `ray.origin`
    /// to the hit point; ties keep the earlier object. Returns the object's
    /// index with its hit record.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(usize, Hit)> {
        let mut nearest: Option<(usize, Hit)> = None;
        let mut closest_so_far = f32::INFINITY;

        for (index, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.intersect(ray, Interval::DEFAULT) {
                let distance = (hit.point - ray.origin).length_squared();
                if distance < closest_so_far {
                    closest_so_far = distance;
                    nearest = Some((index, hit));
                }
            }
        }

        nearest
    }
}
