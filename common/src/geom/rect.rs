use super::point::Point;

/// Axis-aligned rectangle on the integer grid. Bounds are inclusive: a rectangle
/// whose corners coincide still covers one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point<i64>,
    pub max: Point<i64>,
}

impl Rect {
    pub fn new(min: Point<i64>, max: Point<i64>) -> Self {
        Self { min, max }
    }

    /// Builds the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point<i64>, b: Point<i64>) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn width(&self) -> u64 {
        self.min.x.abs_diff(self.max.x) + 1
    }
    pub fn height(&self) -> u64 {
        self.min.y.abs_diff(self.max.y) + 1
    }
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    pub fn is_degenerate(&self) -> bool {
        self.min.x == self.max.x || self.min.y == self.max.y
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(
            (self.min.x as f64 + self.max.x as f64) / 2.0,
            (self.min.y as f64 + self.max.y as f64) / 2.0,
        )
    }

    /// True when `p` lies in the open interior, off every side.
    pub fn contains_strictly(&self, p: Point<f64>) -> bool {
        p.x > self.min.x as f64
            && p.x < self.max.x as f64
            && p.y > self.min.y as f64
            && p.y < self.max.y as f64
    }
}
