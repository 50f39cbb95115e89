//! Point lights and the shading terms they contribute.

use crate::vector::{Color, Vector3};

/// Selects which Phong terms a light contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightMode {
    /// Constant term only.
    Ambient,
    /// Lambertian term only, with inverse-square falloff.
    Diffuse,
    /// Specular highlight only.
    Specular,
    /// Ambient, diffuse and specular together.
    Phong,
}

impl LightMode {
    /// Whether the ambient term is added.
    pub fn ambient(self) -> bool {
        matches!(self, LightMode::Ambient | LightMode::Phong)
    }

    /// Whether the diffuse term is added.
    pub fn diffuse(self) -> bool {
        matches!(self, LightMode::Diffuse | LightMode::Phong)
    }

    /// Whether the specular term is added.
    pub fn specular(self) -> bool {
        matches!(self, LightMode::Specular | LightMode::Phong)
    }
}

/// Point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// World-space position.
    pub position: Vector3,
    /// Emitted color.
    pub color: Color,
    /// Scalar multiplier on the color; it also scales the specular exponent.
    pub intensity: f32,
    /// Terms contributed by this light.
    pub mode: LightMode,
}

impl Light {
    /// Create a light.
    pub fn new(position: Vector3, color: Color, intensity: f32, mode: LightMode) -> Self {
        Self {
            position,
            color,
            intensity,
            mode,
        }
    }
}
