//! Filtering and ranking of the venue list.
//!
//! Both functions are pure: the dataset is only borrowed and the same
//! inputs always produce the same output.

use crate::domain::criteria::FilterCriteria;
use crate::domain::model::Venue;
use std::cmp::Reverse;

/// Returns true when `venue` satisfies every non-empty field of `criteria`.
pub fn matches(venue: &Venue, criteria: &FilterCriteria) -> bool {
    if !criteria.search.is_empty() && !venue.matches_text(&criteria.search.to_lowercase()) {
        return false;
    }

    if !criteria.country.is_empty() && venue.country != criteria.country {
        return false;
    }

    if !criteria.stakes.is_empty() && venue.stakes != criteria.stakes {
        return false;
    }

    if !criteria.games.is_empty() && !venue.offers_any(&criteria.games) {
        return false;
    }

    true
}

/// Matching venues, featured first, then by rating descending.
/// Ties keep dataset order (`sort_by_key` is stable).
pub fn select<'a>(venues: &'a [Venue], criteria: &FilterCriteria) -> Vec<&'a Venue> {
    let mut selected: Vec<&Venue> = venues.iter().filter(|v| matches(v, criteria)).collect();
    selected.sort_by_key(|v| (Reverse(v.featured), Reverse(v.rating)));

    tracing::trace!(
        "Selected {} of {} venues",
        selected.len(),
        venues.len()
    );
    selected
}

/// Counts shown to the user above the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
    pub featured_shown: usize,
}

impl ResultSummary {
    pub fn new(results: &[&Venue], total: usize) -> Self {
        Self {
            shown: results.len(),
            total,
            featured_shown: results.iter().filter(|v| v.featured).count(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.shown == self.total
    }

    pub fn has_featured(&self) -> bool {
        self.featured_shown > 0
    }
}
