//! Parametric ranges for ray intersection queries.

/// Open interval (min, max) of accepted ray parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound, excluded.
    pub min: f32,
    /// Upper bound, excluded.
    pub max: f32,
}

/// Lower bound applied to every query by default, keeps a surface from
/// intersecting itself at the ray origin.
pub const T_MIN: f32 = 0.001;

impl Interval {
    /// Range used when the caller has no bounds of its own: `(0.001, +inf)`.
    pub const DEFAULT: Interval = Interval {
        min: T_MIN,
        max: f32::INFINITY,
    };

    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::DEFAULT
    }
}
