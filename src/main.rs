use std::sync::Arc;

use clap::Parser;
use log::{debug, info};

use raycaster::camera::Camera;
use raycaster::light::{Light, LightMode};
use raycaster::material::Material;
use raycaster::output::save_image;
use raycaster::scene::Scene;
use raycaster::sphere::Sphere;
use raycaster::triangle::Triangle;
use raycaster::vector::{Color, Vector3};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Create the built-in scene: two spheres over a floor, one light per mode
fn create_scene() -> Scene {
    let mut scene = Scene::new();

    let red = Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 0.1, 40.0, 16.0));
    let stone = Arc::new(Material::new(Color::new(0.8, 0.8, 0.75), 0.1, 40.0, 8.0));

    scene.add(Sphere::new(Vector3::new(0.0, 0.0, 10.0), 1.0, red));
    scene.add(Sphere::new(Vector3::new(1.6, -0.4, 12.0), 0.6, stone.clone()));

    // Floor at y = -1, wound so the normal faces +y
    scene.add(Triangle::new(
        Vector3::new(-5.0, -1.0, 5.0),
        Vector3::new(-5.0, -1.0, 20.0),
        Vector3::new(5.0, -1.0, 5.0),
        stone.clone(),
    ));
    scene.add(Triangle::new(
        Vector3::new(5.0, -1.0, 5.0),
        Vector3::new(-5.0, -1.0, 20.0),
        Vector3::new(5.0, -1.0, 20.0),
        stone,
    ));

    scene.add_light(Light::new(Vector3::new(10.0, 0.0, 10.0), Color::ONE, 1.0, LightMode::Phong));
    scene.add_light(Light::new(
        Vector3::new(-4.0, 6.0, 4.0),
        Color::new(1.0, 0.9, 0.7),
        1.0,
        LightMode::Diffuse,
    ));
    scene.add_light(Light::new(Vector3::new(0.0, 5.0, 0.0), Color::ONE, 2.0, LightMode::Specular));
    scene.add_light(Light::new(
        Vector3::new(0.0, 0.0, 0.0),
        Color::new(0.4, 0.5, 1.0),
        0.5,
        LightMode::Ambient,
    ));

    debug!("Scene has {} objects and {} lights", scene.objects.len(), scene.lights.len());
    scene
}

fn main() {
    let args = Args::parse();

    init_logger(args.log_level());

    // Log application startup with version information
    info!("Raycaster - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));
    info!("Image resolution: {}x{}, vertical fov: {}°", args.width, args.height, args.fov);

    let scene = create_scene();
    let camera = Camera::new(args.width, args.height, args.fov);

    let image = if args.sequential {
        camera.render_sequential(&scene)
    } else {
        camera.render(&scene)
    };

    if let Err(e) = save_image(&image, &args.output) {
        log::error!("Failed to save {}: {}", args.output, e);
        std::process::exit(1);
    }
}
