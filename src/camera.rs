//! Camera for primary ray generation and scene rendering

use image::{ImageBuffer, Rgba};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::ray::Ray;
use crate::scene::Scene;
use crate::shading::trace_phong;
use crate::vector::{Color, Vector3, VectorExt};

/// Linear float framebuffer, four channels `[R, G, B, _]` per pixel.
///
/// Pixel `(x, y)` starts at float offset `(y * width + x) * 4`; the fourth
/// channel is left at 0. Row 0 is the bottom of the picture.
pub type FrameBuffer = ImageBuffer<Rgba<f32>, Vec<f32>>;

/// Screen-plane camera looking down +z.
///
/// Every pixel gets its own ray origin `(s, t, 0)` on the screen plane, and
/// the direction is `(origin - position) + forward`, normalized. This is not
/// a look-at pinhole: rays do not share a single eye point.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Eye point the screen-plane offsets are measured from
    pub position: Vector3,
    /// Offset added to every ray direction before normalization
    pub forward: Vector3,

    /// Width over height
    aspect_ratio: f32,
    /// 1 / image_width
    inv_width: f32,
    /// 1 / image_height
    inv_height: f32,
    /// tan(vfov / 2)
    angle: f32,
}

impl Camera {
    /// Creates a camera for a `width` x `height` image with vertical field of
    /// view `vfov` in degrees.
    pub fn new(width: u32, height: u32, vfov: f32) -> Self {
        // A zero dimension would only give infinite screen coordinates
        let image_width = width.max(1);
        let image_height = height.max(1);

        let angle = (vfov / 2.0).to_radians().tan();
        let camera = Self {
            image_width,
            image_height,
            vfov,
            position: Vector3::new(0.0, 0.0, -0.2),
            forward: Vector3::new(0.0, 0.0, 1.0),
            aspect_ratio: image_width as f32 / image_height as f32,
            inv_width: 1.0 / image_width as f32,
            inv_height: 1.0 / image_height as f32,
            angle,
        };
        debug!("Camera: {:?}", camera);
        camera
    }

    /// Generate the primary ray of pixel `(x, y)`.
    pub fn get_ray(&self, x: u32, y: u32) -> Ray {
        let s = (2.0 * x as f32 * self.inv_width - 1.0) * self.angle * self.aspect_ratio;
        let t = (2.0 * y as f32 * self.inv_height - 1.0) * self.angle;

        let origin = Vector3::new(s, t, 0.0);
        let mut direction = origin - self.position + self.forward;
        direction.normalize_in_place();

        Ray::new(origin, direction)
    }

    /// Shade pixel `(x, y)`.
    pub fn pixel_color(&self, scene: &Scene, x: u32, y: u32) -> Color {
        trace_phong(&self.get_ray(x, y), scene)
    }

    /// Renders the scene, distributing pixels over the rayon thread pool.
    ///
    /// The scene is only read, so no synchronization is needed; each pixel
    /// is written by exactly one task.
    pub fn render(&self, scene: &Scene) -> FrameBuffer {
        let mut image = FrameBuffer::new(self.image_width, self.image_height);

        info!("Generating image using {} CPU cores...", rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        image.enumerate_pixels_mut().par_bridge().for_each(|(x, y, pixel)| {
            write_color(pixel, self.pixel_color(scene, x, y));
            pb.inc(1);
        });

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    /// Renders the scene on the calling thread, rows bottom to top.
    pub fn render_sequential(&self, scene: &Scene) -> FrameBuffer {
        let mut image = FrameBuffer::new(self.image_width, self.image_height);

        info!("Generating image on a single thread...");
        let generation_start = std::time::Instant::now();
        let pb = self.progress_bar();

        for (x, y, pixel) in image.enumerate_pixels_mut() {
            write_color(pixel, self.pixel_color(scene, x, y));
            pb.inc(1);
        }

        pb.finish();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        image
    }

    fn progress_bar(&self) -> ProgressBar {
        let pb = ProgressBar::new(self.image_width as u64 * self.image_height as u64);
        let style = ProgressStyle::default_bar()
            .template("{bar:40} {pos}/{len} ETA: {eta}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

fn write_color(pixel: &mut Rgba<f32>, color: Color) {
    pixel.0[..3].copy_from_slice(&color.to_array());
}
