/// A 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// The X component of the [`Vector`]
    pub x: f32,

    /// The Y component of the [`Vector`]
    pub y: f32,
}

impl Vector {
    /// The zero [`Vector`].
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new [`Vector`] with the given components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
