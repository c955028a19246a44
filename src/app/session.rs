use crate::core::catalog::VenueCatalog;
use crate::core::engine::{self, ResultSummary};
use crate::core::vocabulary::Vocabulary;
use crate::core::{CriteriaChange, FilterCriteria, Marker, Result, Venue, VenueId};
use crate::domain::selection::Selection;
use crate::utils::error::DirectoryError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    Map,
}

impl ViewMode {
    pub const NAMES: [&'static str; 2] = ["grid", "map"];
}

impl FromStr for ViewMode {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "map" => Ok(ViewMode::Map),
            other => Err(DirectoryError::InvalidConfigValueError {
                field: "view".to_string(),
                value: other.to_string(),
                reason: format!("Valid views: {}", ViewMode::NAMES.join(", ")),
            }),
        }
    }
}

/// UI state for one user: current criteria, detail selection and view mode.
///
/// The catalog is borrowed; every interaction replaces `criteria` or
/// `selection` with a new value.
pub struct Session<'c> {
    catalog: &'c VenueCatalog,
    vocabulary: Vocabulary,
    criteria: FilterCriteria,
    selection: Selection,
    view: ViewMode,
}

impl<'c> Session<'c> {
    pub fn new(catalog: &'c VenueCatalog) -> Self {
        Self {
            catalog,
            vocabulary: Vocabulary::from_venues(catalog.venues()),
            criteria: FilterCriteria::default(),
            selection: Selection::default(),
            view: ViewMode::default(),
        }
    }

    pub fn catalog(&self) -> &'c VenueCatalog {
        self.catalog
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn apply(&mut self, change: CriteriaChange) {
        tracing::debug!("🔧 Criteria change: {:?}", change);
        self.criteria = self.criteria.apply(change);
    }

    pub fn results(&self) -> Vec<&'c Venue> {
        engine::select(self.catalog.venues(), &self.criteria)
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(&self.results(), self.catalog.len())
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 開啟詳細檢視；若已有開啟的場館則直接取代
    pub fn open_detail(&mut self, id: &VenueId) -> Result<&'c Venue> {
        let venue = self.catalog.get(id)?;
        tracing::debug!("Opening detail for {} ({})", venue.name, venue.id);

        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.select(venue.clone());
        Ok(venue)
    }

    pub fn activate_marker(&mut self, marker: &Marker) -> Result<&'c Venue> {
        self.open_detail(&marker.venue_id)
    }

    pub fn close_detail(&mut self) {
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.clear();
    }
}
