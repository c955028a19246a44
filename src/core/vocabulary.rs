use crate::domain::model::Venue;
use std::collections::BTreeSet;

/// Distinct filter values present in a dataset, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    pub countries: Vec<String>,
    pub games: Vec<String>,
    pub stakes: Vec<String>,
}

impl Vocabulary {
    pub fn from_venues(venues: &[Venue]) -> Self {
        Self {
            countries: distinct(venues.iter().map(|v| v.country.as_str())),
            games: distinct(venues.iter().flat_map(|v| v.games.iter().map(String::as_str))),
            stakes: distinct(venues.iter().map(|v| v.stakes.as_str())),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::venue;

    #[test]
    fn test_values_are_sorted_and_unique() {
        let mut a = venue("a", false, 3);
        a.country = "USA".to_string();
        a.games = vec!["Omaha".to_string(), "Texas Hold'em".to_string()];
        a.stakes = "$2/$5".to_string();
        let mut b = venue("b", false, 4);
        b.country = "France".to_string();
        b.games = vec!["Texas Hold'em".to_string(), "Mixed Games".to_string()];
        b.stakes = "$1/$3".to_string();
        let mut c = venue("c", false, 4);
        c.country = "USA".to_string();
        c.stakes = "$2/$5".to_string();

        let vocabulary = Vocabulary::from_venues(&[a, b, c]);
        assert_eq!(vocabulary.countries, vec!["France", "USA"]);
        assert_eq!(
            vocabulary.games,
            vec!["Mixed Games", "Omaha", "Stud", "Texas Hold'em"]
        );
        assert_eq!(vocabulary.stakes, vec!["$1/$3", "$2/$5"]);
    }

    #[test]
    fn test_empty_dataset_has_empty_vocabulary() {
        assert_eq!(Vocabulary::from_venues(&[]), Vocabulary::default());
    }
}
