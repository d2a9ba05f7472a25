use crate::Point;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    /// X coordinate of the top-left corner.
    pub x: f32,

    /// Y coordinate of the top-left corner.
    pub y: f32,

    /// Width of the rectangle.
    pub width: f32,

    /// Height of the rectangle.
    pub height: f32,
}

impl Rectangle {
    /// Creates a new [`Rectangle`] with its top-left corner in the given
    /// [`Point`] and with the provided dimensions.
    pub const fn new(top_left: Point, width: f32, height: f32) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            width,
            height,
        }
    }

    /// Returns true if the given [`Point`] is contained in the [`Rectangle`].
    pub fn contains(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x < self.x + self.width
            && self.y <= point.y
            && point.y < self.y + self.height
    }

    /// Returns the [`Rectangle`] grown by the given [`Padding`] on each side.
    ///
    /// [`Padding`]: crate::Padding
    #[must_use]
    pub fn expand(self, padding: crate::Padding) -> Self {
        Self {
            x: self.x - padding.left,
            y: self.y - padding.top,
            width: self.width + padding.horizontal(),
            height: self.height + padding.vertical(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Padding;

    #[test]
    fn contains_is_half_open() {
        let bounds = Rectangle::new(Point::new(10.0, 10.0), 40.0, 40.0);

        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(49.9, 49.9)));
        assert!(!bounds.contains(Point::new(50.0, 20.0)));
        assert!(!bounds.contains(Point::ORIGIN));
    }

    #[test]
    fn expand_grows_each_side() {
        let bounds = Rectangle::new(Point::new(10.0, 10.0), 40.0, 40.0)
            .expand(Padding::ZERO.left(38.0).top(2.0).bottom(2.0));

        assert_eq!(bounds, Rectangle::new(Point::new(-28.0, 8.0), 78.0, 44.0));
    }
}
