use crate::api_football::FixtureRow;
use crate::form::TeamFormSummary;
use crate::outcome_prob::ProbabilityDistribution;

pub const TEAM_NOT_FOUND: &str = "Team not found.";
pub const MATCHUP_NOT_FOUND: &str = "Could not find one of the teams.";
pub const NOT_ENOUGH_DATA: &str = "Not enough data.";
pub const NOT_ENOUGH_DATA_TO_ESTIMATE: &str = "Not enough data to estimate.";
pub const MATCHUP_USAGE: &str = "Usage: probs <team A> | <team B>";

pub fn render_form(label: &str, s: &TeamFormSummary) -> String {
    format!(
        "{label} (last {}):\nWins: {}  Draws: {}  Losses: {}\nAvg goals for: {:.2}  against: {:.2}",
        s.played, s.wins, s.draws, s.losses, s.avg_goals_for, s.avg_goals_against
    )
}

pub fn render_probabilities(home: &str, away: &str, p: &ProbabilityDistribution) -> String {
    format!(
        "{home} vs {away}\nHome: {:.1}%  Draw: {:.1}%  Away: {:.1}%",
        p.home_pct, p.draw_pct, p.away_pct
    )
}

pub fn render_fixture_list(title: &str, rows: &[FixtureRow], limit: usize) -> String {
    if rows.is_empty() {
        return format!("{title}\nNo fixtures found.");
    }
    let mut lines = vec![title.to_string()];
    for row in rows.iter().take(limit) {
        lines.push(fixture_line(row));
    }
    if rows.len() > limit {
        lines.push(format!("... and {} more", rows.len() - limit));
    }
    lines.join("\n")
}

fn fixture_line(row: &FixtureRow) -> String {
    let when: String = row.kickoff.replacen('T', " ", 1).chars().take(16).collect();
    match (row.home_goals, row.away_goals) {
        (Some(h), Some(a)) => format!("{when}  {} {h}-{a} {}", row.home_name, row.away_name),
        _ => format!("{when}  {} vs {}", row.home_name, row.away_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(home: &str, away: &str, goals: Option<(u32, u32)>) -> FixtureRow {
        FixtureRow {
            fixture_id: 1,
            kickoff: "2024-05-18T16:30:00+00:00".to_string(),
            status: "NS".to_string(),
            league: "Primeira Liga".to_string(),
            home_id: 1,
            home_name: home.to_string(),
            away_id: 2,
            away_name: away.to_string(),
            home_goals: goals.map(|g| g.0),
            away_goals: goals.map(|g| g.1),
        }
    }

    #[test]
    fn form_uses_two_decimals() {
        let s = TeamFormSummary {
            played: 5,
            wins: 3,
            draws: 1,
            losses: 1,
            avg_goals_for: 2.0,
            avg_goals_against: 0.6,
        };
        let text = render_form("Benfica", &s);
        assert!(text.starts_with("Benfica (last 5):"));
        assert!(text.contains("Wins: 3  Draws: 1  Losses: 1"));
        assert!(text.contains("for: 2.00  against: 0.60"));
    }

    #[test]
    fn probabilities_use_one_decimal() {
        let p = ProbabilityDistribution {
            home_pct: 64.4,
            draw_pct: 4.8,
            away_pct: 30.9,
        };
        assert_eq!(
            render_probabilities("A", "B", &p),
            "A vs B\nHome: 64.4%  Draw: 4.8%  Away: 30.9%"
        );
    }

    #[test]
    fn fixture_list_truncates() {
        let rows = vec![row("A", "B", Some((2, 1))), row("C", "D", None), row("E", "F", None)];
        let text = render_fixture_list("Today", &rows, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Today");
        assert_eq!(lines[1], "2024-05-18 16:30  A 2-1 B");
        assert_eq!(lines[2], "2024-05-18 16:30  C vs D");
        assert_eq!(lines[3], "... and 1 more");
    }

    #[test]
    fn empty_fixture_list() {
        assert_eq!(render_fixture_list("Next", &[], 5), "Next\nNo fixtures found.");
    }
}
