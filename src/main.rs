use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use matchform::api_football::{ApiFootball, FixtureRow, today_iso};
use matchform::config::AppConfig;
use matchform::form::summarize;
use matchform::matchup::parse_matchup;
use matchform::outcome_prob::estimate;
use matchform::report::{
    MATCHUP_NOT_FOUND, MATCHUP_USAGE, NOT_ENOUGH_DATA, NOT_ENOUGH_DATA_TO_ESTIMATE,
    TEAM_NOT_FOUND, render_fixture_list, render_form, render_probabilities,
};

#[derive(Parser)]
#[command(name = "matchform")]
#[command(about = "Recent form and outcome estimates for football teams", long_about = None)]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Fixtures per team used for form (overrides FORM_WINDOW)
    #[arg(long, global = true)]
    window: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recent form of one team
    Stats {
        #[arg(required = true, num_args = 1..)]
        team: Vec<String>,
    },
    /// Home/draw/away estimate, e.g. `probs "Benfica | Porto"`
    Probs {
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },
    /// Today's fixtures
    Today,
    /// Upcoming fixtures
    Next,
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = AppConfig::from_env()?.with_form_window(cli.window);
    let api = ApiFootball::new(&cfg)?;

    let out = match &cli.command {
        Command::Stats { team } => cmd_stats(&api, &cfg, &team.join(" "), cli.json)?,
        Command::Probs { query } => cmd_probs(&api, &cfg, &query.join(" "), cli.json)?,
        Command::Today => {
            let date = today_iso();
            let rows = fixtures_or_empty(api.fixtures_on(&date));
            render_rows(&format!("Fixtures today ({date}):"), &rows, &cfg, cli.json)?
        }
        Command::Next => {
            let rows = fixtures_or_empty(api.next_fixtures(cfg.next_fixtures));
            render_rows("Upcoming fixtures:", &rows, &cfg, cli.json)?
        }
    };
    println!("{out}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "matchform=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn cmd_stats(api: &ApiFootball, cfg: &AppConfig, team: &str, as_json: bool) -> Result<String> {
    let team = team.trim();
    let Some(team_id) = api.resolve_team_id(team) else {
        return message(TEAM_NOT_FOUND, as_json);
    };
    let form = summarize(team_id, &api.recent_results(team_id, cfg.form_window));

    if as_json {
        return to_json(&json!({ "team": team, "team_id": team_id, "form": form }));
    }
    Ok(match form {
        Some(s) => render_form(team, &s),
        None => NOT_ENOUGH_DATA.to_string(),
    })
}

fn cmd_probs(api: &ApiFootball, cfg: &AppConfig, query: &str, as_json: bool) -> Result<String> {
    let Some(m) = parse_matchup(query) else {
        return message(MATCHUP_USAGE, as_json);
    };

    let (home_id, away_id) = rayon::join(
        || api.resolve_team_id(&m.home),
        || api.resolve_team_id(&m.away),
    );
    let (Some(home_id), Some(away_id)) = (home_id, away_id) else {
        return message(MATCHUP_NOT_FOUND, as_json);
    };

    let window = cfg.form_window;
    let (home_form, away_form) = rayon::join(
        || summarize(home_id, &api.recent_results(home_id, window)),
        || summarize(away_id, &api.recent_results(away_id, window)),
    );
    let probs = estimate(home_form.as_ref(), away_form.as_ref());

    if as_json {
        return to_json(&json!({
            "home": { "team": m.home, "team_id": home_id, "form": home_form },
            "away": { "team": m.away, "team_id": away_id, "form": away_form },
            "probabilities": probs,
        }));
    }
    Ok(match probs {
        Some(p) => render_probabilities(&m.home, &m.away, &p),
        None => NOT_ENOUGH_DATA_TO_ESTIMATE.to_string(),
    })
}

fn fixtures_or_empty(res: Result<Vec<FixtureRow>>) -> Vec<FixtureRow> {
    res.unwrap_or_else(|err| {
        let err = format!("{err:#}");
        warn!(error = %err, "fixture listing failed");
        Vec::new()
    })
}

fn render_rows(title: &str, rows: &[FixtureRow], cfg: &AppConfig, as_json: bool) -> Result<String> {
    if as_json {
        let shown = &rows[..rows.len().min(cfg.list_limit)];
        return to_json(&shown);
    }
    Ok(render_fixture_list(title, rows, cfg.list_limit))
}

fn message(text: &str, as_json: bool) -> Result<String> {
    if as_json {
        return to_json(&json!({ "message": text }));
    }
    Ok(text.to_string())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}
