use serde::{Deserialize, Serialize};

use crate::form::{TeamFormSummary, round_to};

/// Weight of the win rate relative to average goals scored in a team's form score.
pub const WIN_RATE_WEIGHT: f64 = 0.5;
/// Lower bound on the draw share before normalization.
pub const DRAW_FLOOR_PCT: f64 = 5.0;

/// Used when neither side has scored or won anything in its window.
pub const FALLBACK_DISTRIBUTION: ProbabilityDistribution = ProbabilityDistribution {
    home_pct: 40.0,
    draw_pct: 20.0,
    away_pct: 40.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityDistribution {
    pub home_pct: f64,
    pub draw_pct: f64,
    pub away_pct: f64,
}

impl ProbabilityDistribution {
    pub fn total(&self) -> f64 {
        self.home_pct + self.draw_pct + self.away_pct
    }
}

pub fn form_score(summary: &TeamFormSummary) -> f64 {
    summary.avg_goals_for + WIN_RATE_WEIGHT * summary.win_rate()
}

/// Estimate home/draw/away percentages for a matchup. `None` if either side has no form.
pub fn estimate(
    home: Option<&TeamFormSummary>,
    away: Option<&TeamFormSummary>,
) -> Option<ProbabilityDistribution> {
    let (Some(home), Some(away)) = (home, away) else {
        return None;
    };
    Some(estimate_pair(home, away))
}

pub fn estimate_pair(home: &TeamFormSummary, away: &TeamFormSummary) -> ProbabilityDistribution {
    let s_home = form_score(home);
    let s_away = form_score(away);
    let total = s_home + s_away;
    if total <= 0.0 {
        return FALLBACK_DISTRIBUTION;
    }

    let raw_home = round_to(s_home / total * 100.0, 1);
    let raw_away = round_to(s_away / total * 100.0, 1);
    let raw_draw = round_to((100.0 - (raw_home + raw_away)).max(DRAW_FLOOR_PCT), 1);

    // The floor and the independent rounding leave the raw shares off 100; rescale.
    let sum = raw_home + raw_draw + raw_away;
    ProbabilityDistribution {
        home_pct: round_to(raw_home * 100.0 / sum, 1),
        draw_pct: round_to(raw_draw * 100.0 / sum, 1),
        away_pct: round_to(raw_away * 100.0 / sum, 1),
    }
}
