use inscribe_common::db::core::PointStore;
use inscribe_common::db::indices::PointId;
use inscribe_common::geom::point::Point;
use inscribe_common::geom::rect::Rect;

/// A rectangle proposal spanned by two input vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub first: PointId,
    pub second: PointId,
    pub rect: Rect,
    pub area: u64,
}

impl Candidate {
    pub fn new(first: PointId, a: Point<i64>, second: PointId, b: Point<i64>) -> Self {
        let rect = Rect::from_corners(a, b);
        Self {
            first,
            second,
            rect,
            area: rect.area(),
        }
    }
}

/// Every unordered pair `i < j` of the store, in generation order. Built once
/// and shared by both queries.
#[derive(Clone, Debug, Default)]
pub struct CandidateSet {
    candidates: Vec<Candidate>,
}

impl CandidateSet {
    pub fn generate(store: &PointStore) -> Self {
        let points = store.points();
        let n = points.len();
        let mut candidates = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for (i, &a) in points.iter().enumerate() {
            for (j, &b) in points.iter().enumerate().skip(i + 1) {
                candidates.push(Candidate::new(PointId::new(i), a, PointId::new(j), b));
            }
        }

        log::debug!("Generated {} candidates from {} points", candidates.len(), n);
        Self { candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn as_slice(&self) -> &[Candidate] {
        &self.candidates
    }

    /// First candidate carrying the maximum area.
    pub fn largest(&self) -> Option<Candidate> {
        self.candidates
            .iter()
            .copied()
            .reduce(|best, c| if c.area > best.area { c } else { best })
    }

    /// A new list ordered by descending area. The sort is stable, so equal
    /// areas keep generation order.
    pub fn descending(&self) -> Vec<Candidate> {
        let mut ordered = self.candidates.clone();
        ordered.sort_by(|a, b| b.area.cmp(&a.area));
        ordered
    }
}

/// Maximum pairwise area without materializing the candidates. Zero for fewer
/// than two points.
pub fn largest_pair_area(points: &[Point<i64>]) -> u64 {
    points
        .iter()
        .enumerate()
        .flat_map(move |(i, &a)| {
            points[i + 1..]
                .iter()
                .map(move |&b| Rect::from_corners(a, b).area())
        })
        .max()
        .unwrap_or(0)
}
