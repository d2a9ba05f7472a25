use crate::{Color, Vector};

/// A shadow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shadow {
    /// The color of the shadow.
    pub color: Color,

    /// The offset of the shadow.
    pub offset: Vector,

    /// The blur radius of the shadow.
    pub blur_radius: f32,
}

impl Shadow {
    /// Approximates a drop shadow for the given elevation.
    ///
    /// An elevation of zero (or less) produces no shadow at all.
    pub fn from_elevation(elevation: f32) -> Self {
        if elevation <= 0.0 {
            return Self::default();
        }

        Self {
            color: Color::BLACK.scale_alpha(0.35),
            offset: Vector::new(0.0, elevation),
            blur_radius: (elevation * 0.6).max(1.0),
        }
    }
}
