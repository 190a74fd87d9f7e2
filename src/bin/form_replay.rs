use std::path::PathBuf;

use matchform::form::summarize;
use matchform::outcome_prob::estimate;
use matchform::replay::load_case;
use matchform::report::{NOT_ENOUGH_DATA, NOT_ENOUGH_DATA_TO_ESTIMATE, render_form, render_probabilities};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("tests/fixtures/replay_case.json"));

    let case = load_case(&path)?;

    // Recorded histories only; no network, so the same file always prints the same numbers.
    let home_form = summarize(case.home.id, &case.home.matches);
    let away_form = summarize(case.away.id, &case.away.matches);

    for (team, form) in [(&case.home, &home_form), (&case.away, &away_form)] {
        match form {
            Some(s) => println!("{}\n", render_form(&team.label(), s)),
            None => println!("{}: {NOT_ENOUGH_DATA}\n", team.label()),
        }
    }

    match estimate(home_form.as_ref(), away_form.as_ref()) {
        Some(p) => println!(
            "{}",
            render_probabilities(&case.home.label(), &case.away.label(), &p)
        ),
        None => println!("{NOT_ENOUGH_DATA_TO_ESTIMATE}"),
    }

    Ok(())
}
