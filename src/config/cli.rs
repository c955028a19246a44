use crate::app::session::ViewMode;
use crate::core::CriteriaChange;
use crate::utils::error::Result;
use crate::utils::validation::{validate_one_of, validate_path, validate_positive_number, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "poker-rooms")]
#[command(about = "Search and browse poker rooms around the world")]
pub struct CliConfig {
    /// Venue data file (.json, .csv or .toml); the built-in directory is used when omitted
    #[arg(long)]
    pub data: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Case-insensitive text matched against name, city and country
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub stakes: Option<String>,

    /// Game to filter by; repeat to match any of several games
    #[arg(short, long = "game")]
    pub games: Vec<String>,

    /// grid or map
    #[arg(long)]
    pub view: Option<String>,

    /// Show the detail view for one venue id
    #[arg(long)]
    pub show: Option<String>,

    /// Show featured and top-rated rooms with directory statistics
    #[arg(long)]
    pub highlights: bool,

    /// List the countries, games and stakes available for filtering
    #[arg(long)]
    pub vocabulary: bool,

    #[arg(long)]
    pub highlight_limit: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 將命令列的篩選參數轉成依序套用的變更
    pub fn criteria_changes(&self) -> Vec<CriteriaChange> {
        let mut changes = Vec::new();
        if let Some(search) = &self.search {
            changes.push(CriteriaChange::Search(search.clone()));
        }
        if let Some(country) = &self.country {
            changes.push(CriteriaChange::Country(country.clone()));
        }
        if let Some(stakes) = &self.stakes {
            changes.push(CriteriaChange::Stakes(stakes.clone()));
        }
        let mut seen = std::collections::BTreeSet::new();
        for game in &self.games {
            if seen.insert(game) {
                changes.push(CriteriaChange::ToggleGame(game.clone()));
            }
        }
        changes
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(data) = &self.data {
            validate_path("data", data)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(view) = &self.view {
            validate_one_of("view", &view.to_ascii_lowercase(), &ViewMode::NAMES)?;
        }
        if let Some(limit) = self.highlight_limit {
            validate_positive_number("highlight_limit", limit, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filters() {
        let config = CliConfig::parse_from([
            "poker-rooms",
            "--search",
            "vegas",
            "--game",
            "Omaha",
            "-g",
            "Stud",
            "--game",
            "Omaha",
            "--view",
            "map",
        ]);
        assert!(config.validate().is_ok());

        let changes = config.criteria_changes();
        assert_eq!(
            changes,
            vec![
                CriteriaChange::Search("vegas".to_string()),
                CriteriaChange::ToggleGame("Omaha".to_string()),
                CriteriaChange::ToggleGame("Stud".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_view() {
        let config = CliConfig::parse_from(["poker-rooms", "--view", "table"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_highlight_limit() {
        let config = CliConfig::parse_from(["poker-rooms", "--highlight-limit", "0"]);
        assert!(config.validate().is_err());
    }
}
