use crate::db::indices::PointId;
use crate::geom::point::Point;
use crate::geom::polygon::{self, Winding};
use crate::geom::rect::Rect;

/// The ordered input vertices. The order is the polygon's boundary walk, the
/// last vertex closing back onto the first. Nothing mutates it after loading.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    points: Vec<Point<i64>>,
}

impl PointStore {
    pub fn new(points: Vec<Point<i64>>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point<i64>] {
        &self.points
    }

    #[inline]
    pub fn get(&self, id: PointId) -> Point<i64> {
        self.points[id.index()]
    }

    /// Enough vertices to enclose any area.
    pub fn is_polygon(&self) -> bool {
        self.points.len() >= 3
    }

    pub fn winding(&self) -> Winding {
        polygon::winding(&self.points)
    }

    pub fn bounding_rect(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        Some(
            self.points
                .iter()
                .fold(Rect::new(first, first), |r, p| Rect {
                    min: Point::new(r.min.x.min(p.x), r.min.y.min(p.y)),
                    max: Point::new(r.max.x.max(p.x), r.max.y.max(p.y)),
                }),
        )
    }
}

impl FromIterator<Point<i64>> for PointStore {
    fn from_iter<I: IntoIterator<Item = Point<i64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
