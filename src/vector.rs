//! Vector algebra shared by geometry and shading.
//!
//! A single 3-component type serves as point, direction and RGB color. The
//! free operators (add, sub, scalar and component-wise multiply, dot, cross,
//! length) come from glam's `Vec3A`; the in-place operations the renderer
//! relies on are provided by [`VectorExt`].

use glam::Vec3A;

/// 3D vector used for points, directions and colors.
pub type Vector3 = Vec3A;

/// RGB color type using Vec3A for SIMD optimization.
///
/// Channels are unconstrained; callers clamp with [`clamp_color`] where a
/// displayable value is needed.
pub type Color = Vec3A;

/// In-place operations on [`Vector3`].
pub trait VectorExt {
    /// Divide every component by the Euclidean length.
    ///
    /// The length must be non-zero. A zero vector produces NaN components;
    /// this is not checked.
    fn normalize_in_place(&mut self);

    /// Replace each channel with the arithmetic mean of itself and `other`.
    fn mix_color(&mut self, other: Color);

    /// Multiply each channel by the matching channel of `other`.
    fn multiply_color(&mut self, other: Color);
}

impl VectorExt for Vec3A {
    fn normalize_in_place(&mut self) {
        let length = self.length();
        *self /= length;
    }

    fn mix_color(&mut self, other: Color) {
        *self = (*self + other) * 0.5;
    }

    fn multiply_color(&mut self, other: Color) {
        *self *= other;
    }
}

/// Hard-clip every channel to `[0, 1]`.
pub fn clamp_color(color: Color) -> Color {
    color.clamp(Color::ZERO, Color::ONE)
}

/// Return `v` normalized through [`VectorExt::normalize_in_place`].
pub fn normalized(mut v: Vector3) -> Vector3 {
    v.normalize_in_place();
    v
}
