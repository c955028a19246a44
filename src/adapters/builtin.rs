use crate::core::{Coordinates, Result, Venue, VenueId, VenueSource};
use async_trait::async_trait;

#[allow(clippy::too_many_arguments)]
fn room(
    id: &str,
    name: &str,
    city: &str,
    country: &str,
    rating: u8,
    stakes: &str,
    games: &[&str],
    hours: &str,
    tables: u32,
    position: (f64, f64),
    featured: bool,
) -> Venue {
    Venue {
        id: VenueId::new(id),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        rating,
        stakes: stakes.to_string(),
        games: games.iter().map(|g| g.to_string()).collect(),
        hours: hours.to_string(),
        tables,
        coordinates: Some(Coordinates::new(position.0, position.1)),
        featured,
    }
}

/// The directory shipped with the binary.
pub fn builtin_venues() -> Vec<Venue> {
    vec![
        room(
            "1",
            "Aria Poker Room",
            "Las Vegas",
            "USA",
            5,
            "$1/$3 - $25/$50",
            &["Texas Hold'em", "Omaha", "Mixed Games"],
            "24/7",
            24,
            (36.1073, -115.1766),
            true,
        ),
        room(
            "2",
            "Casino de Monte-Carlo",
            "Monaco",
            "Monaco",
            5,
            "€5/€10 - €50/€100",
            &["Texas Hold'em", "Stud", "Tournament"],
            "2:00 PM - 4:00 AM",
            12,
            (43.7396, 7.4281),
            true,
        ),
        room(
            "3",
            "Crown Casino Melbourne",
            "Melbourne",
            "Australia",
            4,
            "A$1/A$2 - A$10/A$20",
            &["Texas Hold'em", "Omaha", "PLO"],
            "24/7",
            40,
            (-37.8235, 144.9582),
            false,
        ),
        room(
            "4",
            "Casino Barcelona",
            "Barcelona",
            "Spain",
            4,
            "€1/€2 - €5/€10",
            &["Texas Hold'em", "Tournament"],
            "4:00 PM - 6:00 AM",
            18,
            (41.3853, 2.1967),
            false,
        ),
        room(
            "5",
            "Bellagio Poker Room",
            "Las Vegas",
            "USA",
            5,
            "$2/$5 - $100/$200",
            &["Texas Hold'em", "Omaha", "Mixed Games", "Tournament"],
            "24/7",
            32,
            (36.1126, -115.1767),
            false,
        ),
        room(
            "6",
            "EPT Prague",
            "Prague",
            "Czech Republic",
            4,
            "€2/€5 - €25/€50",
            &["Texas Hold'em", "Tournament", "Cash Games"],
            "Varies",
            60,
            (50.0755, 14.4378),
            false,
        ),
        room(
            "7",
            "Aspers Casino London",
            "London",
            "UK",
            4,
            "£1/£2 - £5/£10",
            &["Texas Hold'em", "Omaha"],
            "24/7",
            25,
            (51.5432, -0.0087),
            false,
        ),
        room(
            "8",
            "Marina Bay Sands",
            "Singapore",
            "Singapore",
            5,
            "S$5/S$10 - S$25/S$50",
            &["Texas Hold'em", "Omaha", "Tournament"],
            "24/7",
            16,
            (1.2834, 103.8607),
            false,
        ),
        room(
            "9",
            "Casino de Deauville",
            "Deauville",
            "France",
            4,
            "€2/€5 - €10/€20",
            &["Texas Hold'em", "Tournament"],
            "9:00 PM - 4:00 AM",
            14,
            (49.3591, 0.0703),
            false,
        ),
        room(
            "10",
            "Wynn Las Vegas",
            "Las Vegas",
            "USA",
            5,
            "$2/$5 - $50/$100",
            &["Texas Hold'em", "Omaha", "Mixed Games"],
            "24/7",
            26,
            (36.1264, -115.1657),
            false,
        ),
        room(
            "11",
            "Macau Poker Cup",
            "Macau",
            "China",
            4,
            "HK$25/HK$50 - HK$100/HK$200",
            &["Texas Hold'em", "Tournament"],
            "Varies",
            50,
            (22.1987, 113.5439),
            false,
        ),
        room(
            "12",
            "King's Casino Rozvadov",
            "Rozvadov",
            "Czech Republic",
            4,
            "€1/€2 - €10/€25",
            &["Texas Hold'em", "Omaha", "Mixed Games", "Tournament"],
            "24/7",
            200,
            (49.6696, 12.5544),
            false,
        ),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct BuiltinSource;

#[async_trait]
impl VenueSource for BuiltinSource {
    async fn load(&self) -> Result<Vec<Venue>> {
        Ok(builtin_venues())
    }

    fn describe(&self) -> String {
        "built-in directory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::VenueCatalog;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let catalog = VenueCatalog::new(builtin_venues()).unwrap();
        assert_eq!(catalog.len(), 12);
        assert!(catalog.venues().iter().all(|v| v.is_plottable()));
    }

    #[test]
    fn test_builtin_source_loads() {
        let venues = tokio_test::block_on(BuiltinSource.load()).unwrap();
        assert_eq!(venues.len(), 12);
        assert_eq!(venues[0].name, "Aria Poker Room");
    }
}
