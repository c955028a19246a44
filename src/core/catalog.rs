use crate::domain::model::{Venue, VenueId};
use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::Validate;
use std::collections::HashSet;

/// The validated, immutable venue dataset.
#[derive(Debug, Clone, Default)]
pub struct VenueCatalog {
    venues: Vec<Venue>,
}

impl VenueCatalog {
    /// 驗證每筆場館資料，並拒絕重複的 id
    pub fn new(venues: Vec<Venue>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(venues.len());

        for venue in &venues {
            venue.validate()?;
            if !seen.insert(&venue.id) {
                return Err(DirectoryError::DuplicateVenueId {
                    id: venue.id.to_string(),
                });
            }
        }

        tracing::debug!("Catalog built with {} venues", venues.len());
        Ok(Self { venues })
    }

    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn get(&self, id: &VenueId) -> Result<&Venue> {
        self.venues
            .iter()
            .find(|venue| &venue.id == id)
            .ok_or_else(|| DirectoryError::VenueNotFound { id: id.to_string() })
    }
}
