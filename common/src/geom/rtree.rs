use super::point::Point;
use super::rect::Rect;
use crate::db::indices::PointId;
use rstar::{AABB, RTree};

pub struct PointIndex {
    tree: RTree<IndexedPoint>,
}

struct IndexedPoint {
    pos: [f64; 2],
    id: PointId,
}

impl rstar::RTreeObject for IndexedPoint {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.pos)
    }
}

impl PointIndex {
    pub fn build(points: &[Point<i64>]) -> Self {
        let items = points
            .iter()
            .enumerate()
            .map(|(i, p)| IndexedPoint {
                pos: [p.x as f64, p.y as f64],
                id: PointId::new(i),
            })
            .collect();
        Self {
            tree: RTree::bulk_load(items),
        }
    }

    /// Ids of the points in the open interior of `rect`.
    pub fn query_interior(&self, rect: Rect) -> Vec<PointId> {
        self.tree
            .locate_in_envelope(&Self::envelope_of(rect))
            .filter(|item| rect.contains_strictly(Point::new(item.pos[0], item.pos[1])))
            .map(|item| item.id)
            .collect()
    }

    fn envelope_of(rect: Rect) -> AABB<[f64; 2]> {
        AABB::from_corners(
            [rect.min.x as f64, rect.min.y as f64],
            [rect.max.x as f64, rect.max.y as f64],
        )
    }
}
