use matchform::form::{MatchResult, TeamFormSummary, summarize};
use matchform::outcome_prob::{DRAW_FLOOR_PCT, FALLBACK_DISTRIBUTION, estimate, estimate_pair};

fn result(home: u32, away: u32, score: Option<(u32, u32)>) -> MatchResult {
    MatchResult {
        home_team_id: home,
        away_team_id: away,
        home_score: score.map(|s| s.0),
        away_score: score.map(|s| s.1),
    }
}

fn form(played: u32, wins: u32, draws: u32, losses: u32, avg_for: f64) -> TeamFormSummary {
    TeamFormSummary {
        played,
        wins,
        draws,
        losses,
        avg_goals_for: avg_for,
        avg_goals_against: 1.2,
    }
}

/// Deterministic spread of histories: every score pair up to 4-4, seen from both sides.
fn histories() -> Vec<Vec<MatchResult>> {
    let mut out = Vec::new();
    for len in 1..=6u32 {
        for seed in 0..25u32 {
            let matches = (0..len)
                .map(|i| {
                    let k = seed * 7 + i * 3;
                    let score = if k % 11 == 0 { None } else { Some((k % 5, (k / 5) % 5)) };
                    if k % 2 == 0 {
                        result(1, 100 + k, score)
                    } else {
                        result(100 + k, 1, score)
                    }
                })
                .collect();
            out.push(matches);
        }
    }
    out
}

#[test]
fn summaries_satisfy_count_and_average_invariants() {
    for matches in histories() {
        let completed: Vec<_> = matches
            .iter()
            .filter_map(|m| m.goals_for_team(1))
            .collect();
        match summarize(1, &matches) {
            None => assert!(completed.is_empty()),
            Some(s) => {
                assert_eq!(s.played as usize, completed.len());
                assert_eq!(s.played, s.wins + s.draws + s.losses);
                let gf: u32 = completed.iter().map(|c| c.0).sum();
                let ga: u32 = completed.iter().map(|c| c.1).sum();
                let n = s.played as f64;
                assert!((s.avg_goals_for - gf as f64 / n).abs() <= 0.005 + 1e-9);
                assert!((s.avg_goals_against - ga as f64 / n).abs() <= 0.005 + 1e-9);
            }
        }
    }
}

#[test]
fn estimates_sum_to_one_hundred() {
    let forms: Vec<TeamFormSummary> = histories()
        .iter()
        .filter_map(|m| summarize(1, m))
        .collect();
    assert!(!forms.is_empty());
    for a in forms.iter().step_by(3) {
        for b in forms.iter().step_by(5) {
            let p = estimate_pair(a, b);
            assert!((p.total() - 100.0).abs() <= 0.2, "{p:?}");
            assert!(p.home_pct >= 0.0 && p.away_pct >= 0.0);
            // Normalization can pull the floored share just under the floor, never far.
            assert!(p.draw_pct >= DRAW_FLOOR_PCT * 100.0 / 105.0 - 0.05, "{p:?}");
        }
    }
}

#[test]
fn documented_scenario() {
    let a = form(5, 3, 1, 1, 2.0);
    let b = form(5, 1, 1, 3, 1.0);
    let p = estimate(Some(&a), Some(&b)).expect("both sides have form");
    assert!((p.home_pct - 64.4).abs() < 1e-9);
    assert!((p.draw_pct - 4.8).abs() < 1e-9);
    assert!((p.away_pct - 30.9).abs() < 1e-9);
    assert!((p.total() - 100.1).abs() < 1e-9);
}

#[test]
fn no_goals_no_wins_is_fixed_fallback() {
    let a = form(3, 0, 1, 2, 0.0);
    let b = form(3, 0, 3, 0, 0.0);
    let p = estimate(Some(&a), Some(&b)).expect("both sides have form");
    assert_eq!(p, FALLBACK_DISTRIBUTION);
    assert_eq!((p.home_pct, p.draw_pct, p.away_pct), (40.0, 20.0, 40.0));
}

#[test]
fn all_null_scores_yield_no_estimate() {
    let unplayed = vec![result(1, 2, None), result(3, 1, None)];
    let a = summarize(1, &unplayed);
    assert!(a.is_none());

    let b = summarize(2, &[result(2, 5, Some((1, 0)))]);
    assert!(b.is_some());
    assert!(estimate(a.as_ref(), b.as_ref()).is_none());
}
