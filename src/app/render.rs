//! Plain-text views over the engine's output.

use crate::adapters::map::{plot, rating_stars, CollectingSink};
use crate::app::session::{Session, ViewMode};
use crate::core::engine::ResultSummary;
use crate::core::highlights::{self, DirectoryStats};
use crate::core::vocabulary::Vocabulary;
use crate::core::Venue;

pub const NO_RESULTS: &str =
    "No poker rooms matched your search.\nAdjust the filters and try again.";

pub fn render_summary(summary: &ResultSummary) -> String {
    let mut out = if summary.is_unfiltered() {
        format!("{} poker rooms", summary.shown)
    } else {
        format!(
            "{} rooms match the search (of {})",
            summary.shown, summary.total
        )
    };
    if summary.has_featured() {
        out.push_str("  ● featured");
    }
    out
}

pub fn render_card(venue: &Venue) -> String {
    let badge = if venue.featured { "  [Featured]" } else { "" };
    format!(
        "{name}{badge}\n  {location}\n  {stars} {rating}/5\n  Stakes: {stakes} | {tables} Tables | {hours}\n  {games}\n",
        name = venue.name,
        location = venue.location(),
        stars = rating_stars(venue.rating),
        rating = venue.rating,
        stakes = venue.stakes,
        tables = venue.tables,
        hours = venue.hours,
        games = venue.games.join(" · "),
    )
}

pub fn render_grid(venues: &[&Venue]) -> String {
    venues
        .iter()
        .map(|v| render_card(v))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_map(venues: &[&Venue]) -> String {
    let mut sink = CollectingSink::default();
    let outcome = plot(venues.iter().copied(), &mut sink);

    let mut lines = vec![format!("{} poker rooms on the map", outcome.placed)];
    lines.extend(sink.markers.iter().map(|marker| {
        let pin = if marker.featured { "◉" } else { "●" };
        format!(
            "{} [{:>8.4}, {:>9.4}] #{} {}",
            pin,
            marker.position.latitude,
            marker.position.longitude,
            marker.venue_id,
            marker.popup.lines().next().unwrap_or_default()
        )
    }));
    if outcome.skipped > 0 {
        lines.push(format!("({} without a map position)", outcome.skipped));
    }
    to_text(lines)
}

pub fn render_detail(venue: &Venue) -> String {
    let mut lines = vec![venue.name.clone()];
    if venue.featured {
        lines.push("[Featured]".to_string());
    }
    lines.extend([
        venue.location(),
        format!("{} {}/5", rating_stars(venue.rating), venue.rating),
        String::new(),
        format!("Stakes: {}", venue.stakes),
        format!("Tables: {}", venue.tables),
        format!("Hours:  {}", venue.hours),
        format!("Games:  {}", venue.games.join(", ")),
        String::new(),
        format!("Email:   {}", venue.contact_email()),
        format!("Website: {}", venue.website()),
    ]);
    to_text(lines)
}

fn to_text(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// 依目前檢視模式輸出結果；沒有結果時兩種模式都顯示同一訊息
pub fn render_results(session: &Session<'_>) -> String {
    let results = session.results();
    let summary = ResultSummary::new(&results, session.catalog().len());

    let body = if results.is_empty() {
        NO_RESULTS.to_string()
    } else {
        match session.view() {
            ViewMode::Grid => render_grid(&results),
            ViewMode::Map => render_map(&results),
        }
    };

    format!("{}\n\n{}", render_summary(&summary), body)
}

pub fn render_vocabulary(vocabulary: &Vocabulary) -> String {
    format!(
        "Countries: {}\nGames:     {}\nStakes:    {}\n",
        vocabulary.countries.join(", "),
        vocabulary.games.join(", "),
        vocabulary.stakes.join(", ")
    )
}

pub fn render_highlights(venues: &[Venue], limit: usize) -> String {
    let mut lines = vec!["Featured poker rooms".to_string()];
    lines.extend(highlights::featured(venues, limit).into_iter().map(|venue| {
        format!(
            "  {} ({}) {}",
            venue.name,
            venue.location(),
            rating_stars(venue.rating)
        )
    }));

    lines.push(String::new());
    lines.push("Top rated".to_string());
    lines.extend(
        highlights::top_rated(venues, limit)
            .into_iter()
            .enumerate()
            .map(|(rank, venue)| {
                format!(
                    "  #{} {} - {} ({})",
                    rank + 1,
                    venue.name,
                    venue.rating,
                    venue.stakes
                )
            }),
    );

    let stats = DirectoryStats::from_venues(venues);
    lines.push(String::new());
    lines.push(format!(
        "{} rooms | {} countries | {} tables | average rating {:.1}",
        stats.venue_count, stats.country_count, stats.total_tables, stats.average_rating
    ));
    to_text(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::builtin::builtin_venues;
    use crate::core::catalog::VenueCatalog;
    use crate::core::test_support::venue;
    use crate::core::CriteriaChange;

    #[test]
    fn test_summary_text() {
        let all = ResultSummary { shown: 12, total: 12, featured_shown: 2 };
        assert_eq!(render_summary(&all), "12 poker rooms  ● featured");

        let some = ResultSummary { shown: 3, total: 12, featured_shown: 0 };
        assert_eq!(render_summary(&some), "3 rooms match the search (of 12)");
    }

    #[test]
    fn test_empty_results_message_in_both_views() {
        let catalog = VenueCatalog::new(builtin_venues()).unwrap();
        let mut session = Session::new(&catalog);
        session.apply(CriteriaChange::Country("Atlantis".to_string()));

        assert!(render_results(&session).ends_with(NO_RESULTS));
        session.set_view(ViewMode::Map);
        assert!(render_results(&session).ends_with(NO_RESULTS));
    }

    #[test]
    fn test_map_reports_unplotted_venues() {
        let room = venue("1", false, 4);
        let text = render_map(&[&room]);
        assert!(text.starts_with("0 poker rooms on the map"));
        assert!(text.contains("(1 without a map position)"));
    }

    #[test]
    fn test_detail_lists_contact_lines() {
        let venues = builtin_venues();
        let text = render_detail(&venues[1]);
        assert!(text.starts_with("Casino de Monte-Carlo\n[Featured]\n"));
        assert!(text.contains("Email:   info@casinodemonte-carlo.com"));
        assert!(text.contains("Website: www.casinodemonte-carlo.com"));
    }

    #[test]
    fn test_detail_layout() {
        let room = venue("1", false, 4);
        assert_eq!(
            render_detail(&room),
            "Room 1\n\
             Rozvadov, Czech Republic\n\
             ★★★★☆ 4/5\n\
             \n\
             Stakes: €1/€2 - €10/€25\n\
             Tables: 10\n\
             Hours:  24/7\n\
             Games:  Stud\n\
             \n\
             Email:   info@room1.com\n\
             Website: www.room1.com\n"
        );
    }

    #[test]
    fn test_highlights_footer() {
        let text = render_highlights(&builtin_venues(), 3);
        assert!(text.contains("  #1 Aria Poker Room - 5"));
        assert!(text.ends_with("12 rooms | 9 countries | 517 tables | average rating 4.4\n"));
    }
}
