use crate::domain::model::Venue;
use std::cmp::Reverse;
use std::collections::HashSet;

pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 3;

/// 依資料順序取前 `limit` 個精選場館
pub fn featured(venues: &[Venue], limit: usize) -> Vec<&Venue> {
    venues.iter().filter(|v| v.featured).take(limit).collect()
}

/// 依評分排序（同分保持原順序）取前 `limit` 個
pub fn top_rated(venues: &[Venue], limit: usize) -> Vec<&Venue> {
    let mut ranked: Vec<&Venue> = venues.iter().collect();
    ranked.sort_by_key(|v| Reverse(v.rating));
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectoryStats {
    pub venue_count: usize,
    pub country_count: usize,
    pub total_tables: u64,
    /// Rounded to one decimal place.
    pub average_rating: f64,
}

impl DirectoryStats {
    pub fn from_venues(venues: &[Venue]) -> Self {
        let country_count = venues
            .iter()
            .map(|v| v.country.as_str())
            .collect::<HashSet<_>>()
            .len();
        let total_tables = venues.iter().map(|v| u64::from(v.tables)).sum();

        let average_rating = if venues.is_empty() {
            0.0
        } else {
            let sum: u32 = venues.iter().map(|v| u32::from(v.rating)).sum();
            (sum as f64 / venues.len() as f64 * 10.0).round() / 10.0
        };

        Self {
            venue_count: venues.len(),
            country_count,
            total_tables,
            average_rating,
        }
    }
}
