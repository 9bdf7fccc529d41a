use serde::Deserialize;

pub type Point = euclid::default::Point2D<f64>;
pub type Vector = euclid::default::Vector2D<f64>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    euclid::vec2(x, y)
}

/// Axis-aligned rectangle in the screen convention: `top` is the smaller y.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn min(&self) -> Point {
        point(self.left, self.top)
    }

    pub fn max(&self) -> Point {
        point(self.right, self.bottom)
    }

    pub fn is_well_formed(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left <= self.right
            && self.top <= self.bottom
    }

    pub fn contains(&self, position: Point) -> bool {
        position.x >= self.left
            && position.x <= self.right
            && position.y >= self.top
            && position.y <= self.bottom
    }

    /// Component-wise clamp. Never panics, even on inverted bounds.
    pub fn clamp(&self, position: Point) -> Point {
        point(
            position.x.max(self.left).min(self.right),
            position.y.max(self.top).min(self.bottom),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_sticks_to_nearest_edge() {
        let bounds = Bounds::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(bounds.clamp(point(-5.0, 25.0)), point(0.0, 20.0));
        assert_eq!(bounds.clamp(point(3.0, 4.0)), point(3.0, 4.0));
    }

    #[test]
    fn inverted_bounds_are_not_well_formed() {
        assert!(Bounds::new(0.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Bounds::new(2.0, 0.0, 1.0, 1.0).is_well_formed());
        assert!(!Bounds::new(0.0, 0.0, f64::NAN, 1.0).is_well_formed());
    }
}
