use crate::core::{Result, Storage, Venue, VenueSource};
use crate::domain::model::VenueRecord;
use crate::utils::error::DirectoryError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenueFormat {
    Json,
    Csv,
    Toml,
}

impl VenueFormat {
    /// 依副檔名判斷格式
    pub fn from_path(path: &str) -> Result<Self> {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(VenueFormat::Json),
            Some("csv") => Ok(VenueFormat::Csv),
            Some("toml") => Ok(VenueFormat::Toml),
            _ => Err(DirectoryError::UnsupportedFormat {
                path: path.to_string(),
            }),
        }
    }

    pub fn decode(&self, data: &[u8]) -> Result<Vec<Venue>> {
        let records = match self {
            VenueFormat::Json => serde_json::from_slice::<Vec<VenueRecord>>(data)?,
            VenueFormat::Csv => decode_csv(data)?,
            VenueFormat::Toml => decode_toml(data)?,
        };

        records.into_iter().map(Venue::try_from).collect()
    }
}

/// CSV rows list games separated by `|`; empty coordinate cells mean "no position".
#[derive(Debug, Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    city: String,
    country: String,
    rating: u8,
    stakes: String,
    games: String,
    hours: String,
    tables: u32,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    featured: Option<bool>,
}

impl From<CsvRow> for VenueRecord {
    fn from(row: CsvRow) -> Self {
        VenueRecord {
            id: row.id,
            name: row.name,
            city: row.city,
            country: row.country,
            rating: row.rating,
            stakes: row.stakes,
            games: row
                .games
                .split('|')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect(),
            hours: row.hours,
            tables: row.tables,
            latitude: row.latitude,
            longitude: row.longitude,
            featured: row.featured.unwrap_or(false),
        }
    }
}

fn decode_csv(data: &[u8]) -> Result<Vec<VenueRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(row?.into());
    }
    Ok(records)
}

#[derive(Debug, Deserialize)]
struct TomlVenueFile {
    #[serde(default)]
    venues: Vec<VenueRecord>,
}

fn decode_toml(data: &[u8]) -> Result<Vec<VenueRecord>> {
    let content = std::str::from_utf8(data).map_err(|e| DirectoryError::DataFileError {
        message: format!("Venue file is not valid UTF-8: {}", e),
    })?;

    let file: TomlVenueFile = toml::from_str(content).map_err(|e| DirectoryError::DataFileError {
        message: format!("TOML parsing error: {}", e),
    })?;
    Ok(file.venues)
}

/// Venue records read from a data file through a [`Storage`] backend.
pub struct FileSource<S: Storage> {
    storage: S,
    path: String,
}

impl<S: Storage> FileSource<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }
}

#[async_trait]
impl<S: Storage> VenueSource for FileSource<S> {
    async fn load(&self) -> Result<Vec<Venue>> {
        let format = VenueFormat::from_path(&self.path)?;
        let data = self.storage.read_file(&self.path).await?;
        let venues = format.decode(&data)?;

        tracing::info!("📥 Loaded {} venues from {} ({:?})", venues.len(), self.path, format);
        Ok(venues)
    }

    fn describe(&self) -> String {
        format!("file '{}'", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::VenueCatalog;
    use crate::core::Coordinates;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(VenueFormat::from_path("rooms.json").unwrap(), VenueFormat::Json);
        assert_eq!(VenueFormat::from_path("data/rooms.CSV").unwrap(), VenueFormat::Csv);
        assert_eq!(VenueFormat::from_path("rooms.toml").unwrap(), VenueFormat::Toml);
        assert!(matches!(
            VenueFormat::from_path("rooms.xml"),
            Err(DirectoryError::UnsupportedFormat { .. })
        ));
        assert!(VenueFormat::from_path("rooms").is_err());
    }

    #[test]
    fn test_decode_csv() {
        let csv = "\
id,name,city,country,rating,stakes,games,hours,tables,latitude,longitude,featured
1,Aria Poker Room,Las Vegas,USA,5,$1/$3 - $25/$50,Texas Hold'em|Omaha,24/7,24,36.1073,-115.1766,true
7,Aspers Casino London,London,UK,4,£1/£2 - £5/£10,Texas Hold'em| Omaha ,24/7,25,,,
";
        let venues = VenueFormat::Csv.decode(csv.as_bytes()).unwrap();
        assert_eq!(venues.len(), 2);
        assert!(venues[0].featured);
        assert_eq!(venues[0].coordinates, Some(Coordinates::new(36.1073, -115.1766)));
        assert_eq!(venues[1].games, vec!["Texas Hold'em", "Omaha"]);
        assert_eq!(venues[1].coordinates, None);
        assert!(!venues[1].featured);
    }

    #[test]
    fn test_nan_coordinates_rejected_by_catalog() {
        let csv = "\
id,name,city,country,rating,stakes,games,hours,tables,latitude,longitude
3,Crown Casino Melbourne,Melbourne,Australia,4,A$1/A$2,PLO,24/7,40,NaN,NaN
";
        let venues = VenueFormat::Csv.decode(csv.as_bytes()).unwrap();
        let result = VenueCatalog::new(venues);
        assert!(matches!(
            result,
            Err(DirectoryError::InvalidVenueError { field, .. }) if field == "latitude"
        ));
    }

    #[test]
    fn test_decode_toml() {
        let toml = r#"
[[venues]]
id = "2"
name = "Casino de Monte-Carlo"
city = "Monaco"
country = "Monaco"
rating = 5
stakes = "€5/€10 - €50/€100"
games = ["Texas Hold'em", "Stud"]
hours = "2:00 PM - 4:00 AM"
tables = 12
featured = true
"#;
        let venues = VenueFormat::Toml.decode(toml.as_bytes()).unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].city, "Monaco");
        assert!(venues[0].coordinates.is_none());
    }

    #[test]
    fn test_broken_toml_is_data_error() {
        let broken = VenueFormat::Toml.decode(b"[[venues]\nid = 1");
        assert!(matches!(broken, Err(DirectoryError::DataFileError { .. })));

        let not_utf8 = VenueFormat::Toml.decode(&[0xff, 0xfe, 0x00]);
        let err = not_utf8.unwrap_err();
        assert_eq!(err.category(), crate::utils::error::ErrorCategory::Data);
    }

    #[test]
    fn test_decode_json_rejects_half_coordinates() {
        let json = r#"[{
            "id": "3", "name": "Crown Casino Melbourne", "city": "Melbourne",
            "country": "Australia", "rating": 4, "stakes": "A$1/A$2",
            "games": ["PLO"], "hours": "24/7", "tables": 40, "longitude": 144.9
        }]"#;
        let result = VenueFormat::Json.decode(json.as_bytes());
        assert!(matches!(
            result,
            Err(DirectoryError::InvalidVenueError { field, .. }) if field == "latitude"
        ));
    }
}
