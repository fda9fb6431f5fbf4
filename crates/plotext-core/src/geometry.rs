// File: crates/plotext-core/src/geometry.rs
// Summary: Y-up points and rectangles in page length units.

/// A point in page coordinates. X grows to the right, Y grows upward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its lower-left (`min`) and upper-right
/// (`max`) corners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub const fn from_min_max(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self { min: Point::new(xmin, ymin), max: Point::new(xmax, ymax) }
    }

    /// Rectangle anchored at the origin with the given size.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::from_min_max(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 { self.max.x - self.min.x }
    pub fn height(&self) -> f64 { self.max.y - self.min.y }

    /// Move the four edges independently: `left`/`bottom` are added to
    /// `min`, `right`/`top` are added to `max`. A negative `right` or `top`
    /// therefore shrinks the rectangle, a negative `left` or `bottom` grows it.
    pub fn crop(&self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self::from_min_max(
            self.min.x + left,
            self.min.y + bottom,
            self.max.x + right,
            self.max.y + top,
        )
    }

    /// Shrink by the given (non-negative) insets on each side.
    pub fn inset(&self, left: f64, right: f64, bottom: f64, top: f64) -> Self {
        self.crop(left, -right, bottom, -top)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// True when `other` lies inside `self`, allowing `eps` of slack.
    pub fn encloses(&self, other: &Rect, eps: f64) -> bool {
        other.min.x >= self.min.x - eps
            && other.min.y >= self.min.y - eps
            && other.max.x <= self.max.x + eps
            && other.max.y <= self.max.y + eps
    }

    /// Closed outline, starting and ending at `min`.
    pub fn outline(&self) -> [Point; 5] {
        [
            self.min,
            Point::new(self.min.x, self.max.y),
            self.max,
            Point::new(self.max.x, self.min.y),
            self.min,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crop_moves_edges_independently() {
        let r = Rect::from_min_max(0.0, 0.0, 10.0, 20.0);
        let c = r.crop(1.0, -2.0, 3.0, -4.0);
        assert_eq!(c, Rect::from_min_max(1.0, 3.0, 8.0, 16.0));
        assert_eq!(c.width(), 7.0);
        assert_eq!(c.height(), 13.0);
    }

    #[test]
    fn negative_left_crop_expands() {
        let r = Rect::from_size(10.0, 10.0);
        let c = r.crop(-5.0, 5.0, 0.0, 0.0);
        assert_eq!(c.width(), 20.0);
        assert!(c.encloses(&r, 0.0));
    }
}
