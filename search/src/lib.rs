pub mod candidates;
pub mod clip;
pub mod verifier;

use candidates::{Candidate, CandidateSet};
use inscribe_common::db::core::PointStore;
use inscribe_common::util::config::SearchConfig;
use inscribe_common::util::profiler::ScopedTimer;

/// Results of both queries over one point set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    pub largest: Option<Candidate>,
    pub inscribed: Option<Candidate>,
}

impl Solution {
    pub fn largest_area(&self) -> u64 {
        self.largest.map_or(0, |c| c.area)
    }
    pub fn inscribed_area(&self) -> u64 {
        self.inscribed.map_or(0, |c| c.area)
    }
}

/// Largest rectangle spanned by any two points. Zero for fewer than two points.
pub fn largest_area(store: &PointStore) -> u64 {
    let _timer = ScopedTimer::new("Largest pairwise rectangle");
    candidates::largest_pair_area(store.points())
}

/// Largest rectangle spanned by two points that the polygon covers exactly.
pub fn largest_inscribed(store: &PointStore, config: &SearchConfig) -> Option<Candidate> {
    let set = CandidateSet::generate(store);
    inscribed_from(store, &set, config)
}

pub fn largest_inscribed_area(store: &PointStore, config: &SearchConfig) -> u64 {
    largest_inscribed(store, config).map_or(0, |c| c.area)
}

/// Runs both queries over a single candidate set.
pub fn solve(store: &PointStore, config: &SearchConfig) -> Solution {
    let set = {
        let _timer = ScopedTimer::new("Candidate generation");
        CandidateSet::generate(store)
    };
    log::info!("{} points, {} candidate rectangles", store.len(), set.len());

    Solution {
        largest: set.largest(),
        inscribed: inscribed_from(store, &set, config),
    }
}

fn inscribed_from(
    store: &PointStore,
    set: &CandidateSet,
    config: &SearchConfig,
) -> Option<Candidate> {
    let ordered = set.descending();
    let _timer = ScopedTimer::new("Inscribed rectangle search");
    let found = verifier::search(store.points(), &ordered, config);
    match &found {
        Some(c) => log::info!(
            "Inscribed rectangle {} .. {} spanned by {} and {}",
            c.rect.min,
            c.rect.max,
            c.first,
            c.second
        ),
        None => log::warn!("No candidate is inscribed in the polygon"),
    }
    found
}
