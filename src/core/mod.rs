pub mod catalog;
pub mod engine;
pub mod highlights;
pub mod vocabulary;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::domain::criteria::{CriteriaChange, FilterCriteria};
pub use crate::domain::model::{Coordinates, Venue, VenueId};
pub use crate::domain::ports::{Marker, MarkerSink, Storage, VenueSource};
pub use crate::utils::error::Result;
