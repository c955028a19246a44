use crate::utils::error::{DirectoryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VenueId(String);

impl VenueId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// 緯度與經度必須同時存在
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// 由兩個可選欄位組成座標；只給其中一個視為錯誤
    pub fn from_parts(
        venue_id: &str,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Option<Self>> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Ok(Some(Self::new(lat, lng))),
            (None, None) => Ok(None),
            (Some(_), None) => Err(DirectoryError::InvalidVenueError {
                venue_id: venue_id.to_string(),
                field: "longitude".to_string(),
                reason: "latitude given without longitude".to_string(),
            }),
            (None, Some(_)) => Err(DirectoryError::InvalidVenueError {
                venue_id: venue_id.to_string(),
                field: "latitude".to_string(),
                reason: "longitude given without latitude".to_string(),
            }),
        }
    }
}

/// A single poker room in the directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VenueRecord", into = "VenueRecord")]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub rating: u8,
    pub stakes: String,
    pub games: Vec<String>,
    pub hours: String,
    pub tables: u32,
    pub coordinates: Option<Coordinates>,
    pub featured: bool,
}

impl Venue {
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.city.to_lowercase().contains(needle)
            || self.country.to_lowercase().contains(needle)
    }

    pub fn offers_any(&self, games: &BTreeSet<String>) -> bool {
        self.games.iter().any(|game| games.contains(game))
    }

    pub fn is_plottable(&self) -> bool {
        self.coordinates.is_some()
    }

    /// 名稱轉小寫並移除所有空白，用於聯絡資訊
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    pub fn contact_email(&self) -> String {
        format!("info@{}.com", self.slug())
    }

    pub fn website(&self) -> String {
        format!("www.{}.com", self.slug())
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }
}

impl Validate for Venue {
    fn validate(&self) -> Result<()> {
        let id = self.id.as_str();
        validate_non_empty_string(id, "id", id)?;
        validate_non_empty_string(id, "name", &self.name)?;
        validate_range(id, "rating", self.rating, 0, MAX_RATING)?;

        if self.games.is_empty() {
            return Err(DirectoryError::InvalidVenueError {
                venue_id: id.to_string(),
                field: "games".to_string(),
                reason: "A venue must offer at least one game".to_string(),
            });
        }
        for game in &self.games {
            validate_non_empty_string(id, "games", game)?;
        }

        if let Some(coords) = &self.coordinates {
            validate_range(id, "latitude", coords.latitude, -90.0, 90.0)?;
            validate_range(id, "longitude", coords.longitude, -180.0, 180.0)?;
        }

        Ok(())
    }
}

/// Flat wire shape of a venue, as stored in venue data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub rating: u8,
    pub stakes: String,
    pub games: Vec<String>,
    pub hours: String,
    pub tables: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub featured: bool,
}

impl TryFrom<VenueRecord> for Venue {
    type Error = DirectoryError;

    fn try_from(record: VenueRecord) -> Result<Self> {
        let coordinates = Coordinates::from_parts(&record.id, record.latitude, record.longitude)?;
        Ok(Venue {
            id: VenueId::new(record.id),
            name: record.name,
            city: record.city,
            country: record.country,
            rating: record.rating,
            stakes: record.stakes,
            games: record.games,
            hours: record.hours,
            tables: record.tables,
            coordinates,
            featured: record.featured,
        })
    }
}

impl From<Venue> for VenueRecord {
    fn from(venue: Venue) -> Self {
        VenueRecord {
            id: venue.id.0,
            name: venue.name,
            city: venue.city,
            country: venue.country,
            rating: venue.rating,
            stakes: venue.stakes,
            games: venue.games,
            hours: venue.hours,
            tables: venue.tables,
            latitude: venue.coordinates.map(|c| c.latitude),
            longitude: venue.coordinates.map(|c| c.longitude),
            featured: venue.featured,
        }
    }
}
