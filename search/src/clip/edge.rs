use inscribe_common::geom::point::Point;
use inscribe_common::geom::rect::Rect;

/// One side of the clip window. Each side keeps the open half-plane facing the
/// window's interior, so a vertex lying on the cut line counts as outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClipEdge {
    Left,
    Top,
    Right,
    Bottom,
}

impl ClipEdge {
    /// The order in which the window's sides are applied.
    pub const ORDER: [ClipEdge; 4] = [
        ClipEdge::Left,
        ClipEdge::Top,
        ClipEdge::Right,
        ClipEdge::Bottom,
    ];

    /// Position of this side's cut line.
    pub fn value(self, rect: &Rect) -> f64 {
        match self {
            ClipEdge::Left => rect.min.x as f64,
            ClipEdge::Top => rect.max.y as f64,
            ClipEdge::Right => rect.max.x as f64,
            ClipEdge::Bottom => rect.min.y as f64,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, ClipEdge::Left | ClipEdge::Right)
    }

    #[inline]
    pub fn is_inside(self, p: Point<f64>, value: f64) -> bool {
        match self {
            ClipEdge::Left => p.x > value,
            ClipEdge::Top => p.y < value,
            ClipEdge::Right => p.x < value,
            ClipEdge::Bottom => p.y > value,
        }
    }

    /// Where segment `a -> b` meets the cut line.
    ///
    /// Only called for segments with one endpoint on each side. Such a segment
    /// cannot be parallel to the cut line, so the divisor is never zero.
    pub fn intersect(self, a: Point<f64>, b: Point<f64>, value: f64) -> Point<f64> {
        let d = b - a;
        if self.is_vertical() {
            debug_assert!(d.x != 0.0);
            Point::new(value, a.y + d.y * (value - a.x) / d.x)
        } else {
            debug_assert!(d.y != 0.0);
            Point::new(a.x + d.x * (value - a.y) / d.y, value)
        }
    }
}
