use crate::domain::model::Venue;

/// Which venue the detail view is showing, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    NoSelection,
    Selected(Venue),
}

impl Selection {
    /// Replaces whatever is currently shown.
    pub fn select(self, venue: Venue) -> Self {
        Selection::Selected(venue)
    }

    pub fn clear(self) -> Self {
        Selection::NoSelection
    }

    pub fn current(&self) -> Option<&Venue> {
        match self {
            Selection::Selected(venue) => Some(venue),
            Selection::NoSelection => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}
