//! Phong shading with hard shadows.
//!
//! For the nearest object along a primary ray, each light adds up to three
//! terms selected by its [`LightMode`](crate::light::LightMode):
//!
//! - ambient: `material.ambient`
//! - diffuse: `max(0, N·L) * material.diffuse / d²`, with `d` the distance
//!   from the hit point to the light
//! - specular: `max(0, V·R) ^ (material.specular * light.intensity)`, where
//!   `R = 2(L·N)N - L` and `V` points back along the primary ray
//!
//! A light is occluded when a shadow ray from the hit point meets another
//! object strictly closer than the light; occluded lights keep only their
//! ambient term. The sum over all lights is clipped to `[0, 1]`.

use crate::hittable::{Hit, Hittable};
use crate::interval::Interval;
use crate::light::Light;
use crate::material::Material;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{clamp_color, Color, Vector3, VectorExt};

/// Shade the primary `ray` against `scene`.
///
/// Returns black when nothing is hit; there is no global ambient floor.
pub fn trace_phong(ray: &Ray, scene: &Scene) -> Color {
    let Some((nearest, hit)) = scene.nearest_hit(ray) else {
        return Color::ZERO;
    };
    let material = scene.objects[nearest].material();

    let color = scene
        .lights
        .iter()
        .fold(Color::ZERO, |color, light| {
            color + light_contribution(ray, &hit, nearest, material, light, scene)
        });

    clamp_color(color)
}

/// Color one light adds at `hit`, before clamping.
fn light_contribution(
    ray: &Ray,
    hit: &Hit,
    nearest: usize,
    material: &Material,
    light: &Light,
    scene: &Scene,
) -> Color {
    let mut light_dir = light.position - hit.point;
    let distance_light = light_dir.length_squared();
    light_dir.normalize_in_place();

    let mut intensity: f32 = 0.0;
    let mut specular: f32 = 0.0;

    if light.mode.ambient() {
        intensity += material.ambient;
    }

    if !is_occluded(hit, light_dir, distance_light, nearest, scene) {
        if light.mode.diffuse() {
            let attenuation = 1.0 / distance_light;
            intensity += attenuation * hit.normal.dot(light_dir).max(0.0) * material.diffuse;
        }

        if light.mode.specular() {
            let reflected = 2.0 * light_dir.dot(hit.normal) * hit.normal - light_dir;
            let view_dir = -ray.direction;
            specular = view_dir
                .dot(reflected)
                .max(0.0)
                .powf(material.specular * light.intensity);
        }
    }

    light.color * material.color * light.intensity * intensity
        + light.color * light.intensity * specular
}

/// Whether any object other than `nearest` blocks the way from `hit` to the light.
///
/// `distance_light` and every shadow-hit distance are squared and measured
/// from `hit.point`.
fn is_occluded(
    hit: &Hit,
    light_dir: Vector3,
    distance_light: f32,
    nearest: usize,
    scene: &Scene,
) -> bool {
    let shadow_ray = Ray::new(hit.point, light_dir);

    scene
        .objects
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != nearest)
        .filter_map(|(_, object)| object.intersect(&shadow_ray, Interval::DEFAULT))
        .any(|shadow_hit| (shadow_hit.point - hit.point).length_squared() < distance_light)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::light::LightMode;
    use crate::sphere::Sphere;
    use crate::triangle::Triangle;

    fn red() -> Arc<Material> {
        Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 0.2, 10.0, 8.0))
    }

    fn axis_ray() -> Ray {
        Ray::new(Vector3::ZERO, Vector3::Z)
    }

    /// Red sphere whose entry point on the z axis is (0, 0, 9), facing -z.
    fn target_scene(mode: LightMode) -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vector3::new(0.0, 0.0, 10.0), 1.0, red()));
        scene.add_light(Light::new(Vector3::new(0.0, 5.0, 4.0), Color::ONE, 1.0, mode));
        scene
    }

    /// Small sphere on the segment between (0, 0, 9) and the light at (0, 5, 4).
    fn add_occluder(scene: &mut Scene) {
        scene.add(Sphere::new(Vector3::new(0.0, 2.5, 6.5), 0.5, red()));
    }

    #[test]
    fn miss_is_black() {
        let scene = target_scene(LightMode::Phong);
        let ray = Ray::new(Vector3::ZERO, Vector3::Y);
        assert_eq!(trace_phong(&ray, &scene), Color::ZERO);
    }

    #[test]
    fn hit_without_lights_is_black() {
        let mut scene = target_scene(LightMode::Phong);
        scene.lights.clear();
        assert_eq!(trace_phong(&axis_ray(), &scene), Color::ZERO);
    }

    #[test]
    fn ambient_light_adds_material_ambient() {
        let scene = target_scene(LightMode::Ambient);
        let color = trace_phong(&axis_ray(), &scene);
        assert!(color.abs_diff_eq(Color::new(0.2, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn diffuse_uses_inverse_square_falloff() {
        let scene = target_scene(LightMode::Diffuse);
        let color = trace_phong(&axis_ray(), &scene);

        // N = -z, L = (0, 5, -5) / sqrt(50), d² = 50
        let expected = (1.0 / 50.0) * std::f32::consts::FRAC_1_SQRT_2 * 10.0;
        assert!((color.x - expected).abs() < 1e-5, "{color}");
        assert_eq!(color.y, 0.0);
        assert_eq!(color.z, 0.0);
    }

    #[test]
    fn occluder_keeps_only_ambient_for_phong_light() {
        let mut scene = target_scene(LightMode::Phong);
        let lit = trace_phong(&axis_ray(), &scene);

        add_occluder(&mut scene);
        let shadowed = trace_phong(&axis_ray(), &scene);

        assert!(shadowed.abs_diff_eq(Color::new(0.2, 0.0, 0.0), 1e-6));
        assert!(lit.x > shadowed.x);
    }

    #[test]
    fn occluder_zeroes_diffuse_and_specular_lights() {
        for mode in [LightMode::Diffuse, LightMode::Specular] {
            let mut scene = target_scene(mode);
            add_occluder(&mut scene);
            assert_eq!(trace_phong(&axis_ray(), &scene), Color::ZERO);
        }
    }

    #[test]
    fn object_beyond_light_does_not_shadow() {
        let mut scene = target_scene(LightMode::Diffuse);
        let lit = trace_phong(&axis_ray(), &scene);

        // On the shadow ray's line, but past the light
        scene.add(Sphere::new(Vector3::new(0.0, 8.0, 1.0), 0.5, red()));
        assert_eq!(trace_phong(&axis_ray(), &scene), lit);
    }

    #[test]
    fn occlusion_is_decided_per_light() {
        let mut scene = target_scene(LightMode::Diffuse);
        add_occluder(&mut scene);
        // Mirror image of the blocked light, with a clear path
        scene.add_light(Light::new(Vector3::new(0.0, -5.0, 4.0), Color::ONE, 1.0, LightMode::Diffuse));

        let color = trace_phong(&axis_ray(), &scene);
        let expected = (1.0 / 50.0) * std::f32::consts::FRAC_1_SQRT_2 * 10.0;
        assert!((color.x - expected).abs() < 1e-5, "{color}");
    }

    #[test]
    fn specular_peaks_when_light_is_behind_viewer() {
        let material = Arc::new(Material::new(Color::new(0.0, 0.0, 1.0), 0.0, 0.0, 4.0));
        let mut scene = Scene::new();
        scene.add(Triangle::new(
            Vector3::new(-1.0, -1.0, 5.0),
            Vector3::new(0.0, 1.0, 5.0),
            Vector3::new(1.0, -1.0, 5.0),
            material,
        ));
        scene.add_light(Light::new(
            Vector3::new(0.0, 0.0, -5.0),
            Color::new(0.5, 0.5, 0.5),
            1.0,
            LightMode::Specular,
        ));

        // N = -z, L = -z, R = -z, V = -z: the highlight term is exactly 1
        let color = trace_phong(&axis_ray(), &scene);
        assert!(color.abs_diff_eq(Color::new(0.5, 0.5, 0.5), 1e-6));
    }

    #[test]
    fn backfacing_light_gives_no_diffuse_or_specular() {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vector3::new(0.0, 0.0, 10.0), 1.0, red()));
        scene.add_light(Light::new(Vector3::new(0.0, 0.0, 20.0), Color::ONE, 1.0, LightMode::Phong));

        // Hit at (0, 0, 9) faces away from a light behind the sphere
        let color = trace_phong(&axis_ray(), &scene);
        assert!(color.abs_diff_eq(Color::new(0.2, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn bright_lights_clip_to_one() {
        let mut scene = target_scene(LightMode::Ambient);
        for _ in 0..10 {
            scene.add_light(Light::new(Vector3::ZERO, Color::ONE, 1.0, LightMode::Ambient));
        }
        let color = trace_phong(&axis_ray(), &scene);
        assert_eq!(color.x, 1.0);
        assert!(color.cmpge(Color::ZERO).all());
    }
}
