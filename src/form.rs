use serde::{Deserialize, Serialize};

pub type TeamId = u32;

/// One historical fixture. A `None` score means the match has not been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub home_team_id: TeamId,
    pub away_team_id: TeamId,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

impl MatchResult {
    /// Goals (for, against) from the point of view of `team_id`, if the match is
    /// completed and the team took part in it.
    pub fn goals_for_team(&self, team_id: TeamId) -> Option<(u32, u32)> {
        let (Some(home), Some(away)) = (self.home_score, self.away_score) else {
            return None;
        };
        if self.home_team_id == team_id {
            Some((home, away))
        } else if self.away_team_id == team_id {
            Some((away, home))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamFormSummary {
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub avg_goals_for: f64,
    pub avg_goals_against: f64,
}

impl TeamFormSummary {
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        self.wins as f64 / self.played as f64
    }
}

/// Reduce a team's recent matches into a form summary.
///
/// The slice is taken as the whole form window; callers bound it. Matches without
/// both scores, or not involving `team_id`, are skipped. Returns `None` when nothing
/// was countable, so "no games" never looks like a zero-filled summary.
pub fn summarize(team_id: TeamId, matches: &[MatchResult]) -> Option<TeamFormSummary> {
    let mut played = 0u32;
    let mut wins = 0u32;
    let mut draws = 0u32;
    let mut losses = 0u32;
    let mut goals_for = 0u64;
    let mut goals_against = 0u64;

    for m in matches {
        let Some((gf, ga)) = m.goals_for_team(team_id) else {
            continue;
        };
        played += 1;
        goals_for += u64::from(gf);
        goals_against += u64::from(ga);
        match gf.cmp(&ga) {
            std::cmp::Ordering::Greater => wins += 1,
            std::cmp::Ordering::Equal => draws += 1,
            std::cmp::Ordering::Less => losses += 1,
        }
    }

    if played == 0 {
        return None;
    }

    let n = played as f64;
    Some(TeamFormSummary {
        played,
        wins,
        draws,
        losses,
        avg_goals_for: round_to(goals_for as f64 / n, 2),
        avg_goals_against: round_to(goals_against as f64 / n, 2),
    })
}

/// Round to `decimals` places on the exact decimal value of `v`. Formatting is
/// correctly rounded, so 0.025 (stored just above the half) becomes 0.03.
pub(crate) fn round_to(v: f64, decimals: usize) -> f64 {
    format!("{v:.decimals$}").parse().unwrap_or(v)
}
