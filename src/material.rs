//! Surface material for Phong shading.

use crate::vector::Color;

/// Color plus the three Phong coefficients.
///
/// Immutable once built and shared between objects through `Arc<Material>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base surface color.
    pub color: Color,
    /// Constant contribution added by ambient lights.
    pub ambient: f32,
    /// Lambertian coefficient.
    pub diffuse: f32,
    /// Phong exponent of the specular lobe (an exponent, not a weight).
    pub specular: f32,
}

impl Material {
    /// Create a material from its color and coefficients.
    pub fn new(color: Color, ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self {
            color,
            ambient,
            diffuse,
            specular,
        }
    }
}
