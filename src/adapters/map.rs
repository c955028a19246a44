use crate::core::{Marker, MarkerSink, Venue};
use crate::domain::model::MAX_RATING;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlotOutcome {
    pub placed: usize,
    pub skipped: usize,
}

pub fn rating_stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

pub fn popup_text(venue: &Venue) -> String {
    format!(
        "{}\n{}\n{} ({}/{})\n{} tables • {}",
        venue.name,
        venue.location(),
        rating_stars(venue.rating),
        venue.rating,
        MAX_RATING,
        venue.tables,
        venue.hours
    )
}

/// 依結果順序放置標記；沒有座標的場館略過而不視為錯誤
pub fn plot<'a>(venues: impl IntoIterator<Item = &'a Venue>, sink: &mut impl MarkerSink) -> PlotOutcome {
    let mut outcome = PlotOutcome::default();

    for venue in venues {
        match venue.coordinates {
            Some(position) => {
                sink.place(Marker {
                    venue_id: venue.id.clone(),
                    position,
                    featured: venue.featured,
                    popup: popup_text(venue),
                });
                outcome.placed += 1;
            }
            None => {
                tracing::debug!("Venue {} has no coordinates, not plotted", venue.id);
                outcome.skipped += 1;
            }
        }
    }

    outcome
}

/// Keeps markers in memory; used by the text map view and in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub markers: Vec<Marker>,
}

impl MarkerSink for CollectingSink {
    fn place(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}
