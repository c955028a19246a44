use crate::domain::model::{Venue, VenueId};

pub(crate) fn venue(id: &str, featured: bool, rating: u8) -> Venue {
    Venue {
        id: VenueId::new(id),
        name: format!("Room {}", id),
        city: "Rozvadov".to_string(),
        country: "Czech Republic".to_string(),
        rating,
        stakes: "€1/€2 - €10/€25".to_string(),
        games: vec!["Stud".to_string()],
        hours: "24/7".to_string(),
        tables: 10,
        coordinates: None,
        featured,
    }
}
