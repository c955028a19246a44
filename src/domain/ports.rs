use crate::domain::model::{Coordinates, Venue, VenueId};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Supplies the raw venue dataset. Validation happens when the records are
/// turned into a catalog, not here.
#[async_trait]
pub trait VenueSource: Send + Sync {
    async fn load(&self) -> Result<Vec<Venue>>;

    fn describe(&self) -> String;
}

/// One map marker; activating it should select `venue_id`.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub venue_id: VenueId,
    pub position: Coordinates,
    pub featured: bool,
    pub popup: String,
}

/// The map provider, reduced to "place a marker here".
pub trait MarkerSink {
    fn place(&mut self, marker: Marker);
}
