//! Space around some content.

/// An amount of space to pad for each side of a box.
///
/// You can leverage the `From` trait to build [`Padding`] conveniently:
///
/// ```
/// # use fab_menu_core::Padding;
/// let padding = Padding::from(20.0);            // 20px on all sides
/// let padding = Padding::from([10.0, 20.0]);    // top/bottom 10px, left/right 20px
/// ```
///
/// Normally, the layout methods take `impl Into<Padding>`, so you can use
/// the previous forms directly. The builder methods set a single side:
///
/// ```
/// # use fab_menu_core::Padding;
/// let padding = Padding::ZERO.left(38.0);
///
/// assert_eq!(padding.horizontal(), 38.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Padding {
    /// Top padding
    pub top: f32,
    /// Right padding
    pub right: f32,
    /// Bottom padding
    pub bottom: f32,
    /// Left padding
    pub left: f32,
}

impl Padding {
    /// Padding of zero
    pub const ZERO: Padding = Padding {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create a [`Padding`] that is equal on all sides.
    pub const fn new(padding: f32) -> Padding {
        Padding {
            top: padding,
            right: padding,
            bottom: padding,
            left: padding,
        }
    }

    /// Sets the [`top`] of the [`Padding`].
    ///
    /// [`top`]: Self::top
    #[must_use]
    pub fn top(self, top: f32) -> Self {
        Self { top, ..self }
    }

    /// Sets the [`bottom`] of the [`Padding`].
    ///
    /// [`bottom`]: Self::bottom
    #[must_use]
    pub fn bottom(self, bottom: f32) -> Self {
        Self { bottom, ..self }
    }

    /// Sets the [`left`] of the [`Padding`].
    ///
    /// [`left`]: Self::left
    #[must_use]
    pub fn left(self, left: f32) -> Self {
        Self { left, ..self }
    }

    /// Sets the [`right`] of the [`Padding`].
    ///
    /// [`right`]: Self::right
    #[must_use]
    pub fn right(self, right: f32) -> Self {
        Self { right, ..self }
    }

    /// Sets both [`top`] and [`bottom`] of the [`Padding`].
    ///
    /// [`top`]: Self::top
    /// [`bottom`]: Self::bottom
    #[must_use]
    pub fn top_bottom(self, value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            ..self
        }
    }

    /// Returns the total amount of vertical [`Padding`].
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    /// Returns the total amount of horizontal [`Padding`].
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }
}

impl From<f32> for Padding {
    fn from(padding: f32) -> Self {
        Padding::new(padding)
    }
}

impl From<[f32; 2]> for Padding {
    fn from(p: [f32; 2]) -> Self {
        Padding {
            top: p[0],
            right: p[1],
            bottom: p[0],
            left: p[1],
        }
    }
}
