//! Raycaster: offline Phong ray caster
//!
//! One primary ray per pixel, nearest-hit search over spheres and triangles,
//! and local Phong shading from point lights with hard shadows. Renders into
//! a linear float framebuffer that can be written as TGA, PNG or EXR.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod hittable;
pub mod interval;
pub mod light;
pub mod material;
pub mod output;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod triangle;
pub mod vector;
