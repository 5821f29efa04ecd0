use crate::candidates::Candidate;
use crate::clip;
use inscribe_common::geom::point::Point;
use inscribe_common::geom::polygon;
use inscribe_common::util::config::SearchConfig;
use rayon::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Verdict {
    /// The clipped polygon is exactly the candidate rectangle.
    Inscribed,
    NoOverlap,
    VertexCount(usize),
    AreaMismatch { expected: u64, found: f64 },
}

impl Verdict {
    pub fn is_inscribed(&self) -> bool {
        matches!(self, Verdict::Inscribed)
    }
}

/// Clips the polygon to the candidate's rectangle and tests for an exact
/// match: four vertices whose inclusive bounding-box area equals the
/// candidate's area.
pub fn verify(polygon: &[Point<i64>], candidate: &Candidate) -> Verdict {
    let clipped = clip::clip_to_rect(polygon, &candidate.rect);
    if clipped.is_empty() {
        return Verdict::NoOverlap;
    }
    if clipped.len() != 4 {
        return Verdict::VertexCount(clipped.len());
    }

    let found = polygon::inclusive_area(&clipped).unwrap_or(0.0);
    if found == candidate.area as f64 {
        Verdict::Inscribed
    } else {
        Verdict::AreaMismatch {
            expected: candidate.area,
            found,
        }
    }
}

/// Scans `ordered` (descending by area) for the first inscribed candidate.
/// Every larger candidate has been rejected by then, so the hit is a largest
/// one.
pub fn find_inscribed(polygon: &[Point<i64>], ordered: &[Candidate]) -> Option<Candidate> {
    debug_assert!(ordered.windows(2).all(|w| w[0].area >= w[1].area));

    for (rank, candidate) in ordered.iter().enumerate() {
        let verdict = verify(polygon, candidate);
        log::trace!("candidate {} area {}: {:?}", rank, candidate.area, verdict);
        if verdict.is_inscribed() {
            log::debug!("Match after {} rejected candidates", rank);
            return Some(*candidate);
        }
    }
    None
}

/// Parallel form of [`find_inscribed`]. Rayon's `find_first` reports the
/// match earliest in list order, so the result equals the sequential scan.
pub fn find_inscribed_par(polygon: &[Point<i64>], ordered: &[Candidate]) -> Option<Candidate> {
    debug_assert!(ordered.windows(2).all(|w| w[0].area >= w[1].area));

    ordered
        .par_iter()
        .find_first(|candidate| verify(polygon, candidate).is_inscribed())
        .copied()
}

/// Picks the scan for the configured mode and list size.
pub fn search(
    polygon: &[Point<i64>],
    ordered: &[Candidate],
    config: &SearchConfig,
) -> Option<Candidate> {
    if polygon.len() < 3 {
        log::warn!(
            "{} vertices do not form a polygon; skipping inscribed search",
            polygon.len()
        );
        return None;
    }

    if config.parallel && ordered.len() >= config.parallel_threshold {
        log::info!(
            "Verifying {} candidates on {} threads",
            ordered.len(),
            rayon::current_num_threads()
        );
        find_inscribed_par(polygon, ordered)
    } else {
        log::info!("Verifying {} candidates", ordered.len());
        find_inscribed(polygon, ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::CandidateSet;
    use inscribe_common::db::core::PointStore;
    use inscribe_common::db::indices::PointId;

    fn store(coords: &[(i64, i64)]) -> PointStore {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn verdicts_for_notched_rectangle() {
        let s = store(&[(0, 0), (0, 3), (4, 3), (4, 0), (2, 1)]);
        let ordered = CandidateSet::generate(&s).descending();

        // Full bounding box: the notch vertex survives clipping.
        assert_eq!(verify(s.points(), &ordered[0]), Verdict::VertexCount(7));
        assert_eq!(verify(s.points(), &ordered[2]), Verdict::Inscribed);
    }

    #[test]
    fn area_mismatch_is_reported() {
        // The window's upper corners fall outside the triangle; clipping still
        // leaves four vertices but they span a smaller box.
        let s = store(&[(0, 0), (0, 4), (4, 0)]);
        let c = Candidate::new(
            PointId::new(0),
            Point::new(0, 1),
            PointId::new(2),
            Point::new(4, 3),
        );
        assert_eq!(
            verify(s.points(), &c),
            Verdict::AreaMismatch {
                expected: 15,
                found: 12.0
            }
        );
    }

    #[test]
    fn disjoint_candidate_has_no_overlap() {
        let s = store(&[(0, 0), (0, 4), (4, 0)]);
        let c = Candidate::new(
            PointId::new(0),
            Point::new(5, 5),
            PointId::new(1),
            Point::new(8, 8),
        );
        assert_eq!(verify(s.points(), &c), Verdict::NoOverlap);
    }

    #[test]
    fn parallel_scan_matches_sequential() {
        let s = store(&[(7, 1), (11, 1), (11, 7), (9, 7), (9, 5), (2, 5), (2, 3), (7, 3)]);
        let ordered = CandidateSet::generate(&s).descending();

        let seq = find_inscribed(s.points(), &ordered);
        let par = find_inscribed_par(s.points(), &ordered);
        assert_eq!(seq, par);
        assert_eq!(seq.map(|c| c.area), Some(24));
    }

    #[test]
    fn search_skips_non_polygons() {
        let s = store(&[(0, 0), (3, 3)]);
        let ordered = CandidateSet::generate(&s).descending();
        assert_eq!(search(s.points(), &ordered, &SearchConfig::default()), None);
    }
}
