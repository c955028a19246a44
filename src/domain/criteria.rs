use std::collections::BTreeSet;

/// The user's current search text and selected filters.
///
/// Values are never edited in place by callers; every user interaction
/// produces a new `FilterCriteria` through [`FilterCriteria::apply`] or one
/// of the `with_*` helpers. An empty field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    pub country: String,
    pub stakes: String,
    pub games: BTreeSet<String>,
}

/// A single partial change coming from the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaChange {
    Search(String),
    Country(String),
    Stakes(String),
    ToggleGame(String),
    Clear,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&self, change: CriteriaChange) -> Self {
        match change {
            CriteriaChange::Search(search) => self.with_search(search),
            CriteriaChange::Country(country) => self.with_country(country),
            CriteriaChange::Stakes(stakes) => self.with_stakes(stakes),
            CriteriaChange::ToggleGame(game) => self.toggle_game(game),
            CriteriaChange::Clear => self.cleared(),
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_country(&self, country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            ..self.clone()
        }
    }

    pub fn with_stakes(&self, stakes: impl Into<String>) -> Self {
        Self {
            stakes: stakes.into(),
            ..self.clone()
        }
    }

    /// 已選取則移除，未選取則加入
    pub fn toggle_game(&self, game: impl Into<String>) -> Self {
        let game = game.into();
        let mut games = self.games.clone();
        if !games.remove(&game) {
            games.insert(game);
        }
        Self {
            games,
            ..self.clone()
        }
    }

    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.country.is_empty()
            || !self.stakes.is_empty()
            || !self.games.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_active_filters() {
        assert!(!FilterCriteria::new().has_active_filters());
    }

    #[test]
    fn test_updates_do_not_touch_original() {
        let original = FilterCriteria::new().with_country("USA");
        let updated = original.apply(CriteriaChange::Search("vegas".to_string()));

        assert_eq!(original.search, "");
        assert_eq!(updated.search, "vegas");
        assert_eq!(updated.country, "USA");
    }

    #[test]
    fn test_toggle_twice_restores_game_set() {
        let empty = FilterCriteria::new();
        let once = empty.toggle_game("Omaha");
        assert!(once.games.contains("Omaha"));
        assert!(once.has_active_filters());

        let twice = once.toggle_game("Omaha");
        assert_eq!(twice, empty);
    }

    #[test]
    fn test_toggle_keeps_other_games() {
        let criteria = FilterCriteria::new()
            .toggle_game("Omaha")
            .toggle_game("Stud")
            .toggle_game("Omaha");
        assert_eq!(criteria.games.iter().collect::<Vec<_>>(), vec!["Stud"]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let busy = FilterCriteria::new()
            .with_search("casino")
            .with_country("Spain")
            .with_stakes("€1/€2 - €5/€10")
            .toggle_game("Tournament");
        assert!(busy.has_active_filters());

        let cleared = busy.apply(CriteriaChange::Clear);
        assert_eq!(cleared, FilterCriteria::default());
        assert!(!cleared.has_active_filters());
    }

    #[test]
    fn test_each_field_activates_filters() {
        assert!(FilterCriteria::new().with_search("a").has_active_filters());
        assert!(FilterCriteria::new().with_country("UK").has_active_filters());
        assert!(FilterCriteria::new().with_stakes("£1/£2").has_active_filters());
    }
}
