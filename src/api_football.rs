use anyhow::{Context, Result, anyhow, bail};
use chrono::Utc;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::form::{MatchResult, TeamId};
use crate::http_client::http_client;

const API_KEY_HEADER: &str = "x-apisports-key";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamHit {
    pub id: TeamId,
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRow {
    pub fixture_id: u64,
    pub kickoff: String,
    pub status: String,
    pub league: String,
    pub home_id: TeamId,
    pub home_name: String,
    pub away_id: TeamId,
    pub away_name: String,
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
}

impl FixtureRow {
    pub fn result(&self) -> MatchResult {
        MatchResult {
            home_team_id: self.home_id,
            away_team_id: self.away_id,
            home_score: self.home_goals,
            away_score: self.away_goals,
        }
    }
}

pub struct ApiFootball {
    client: &'static Client,
    base_url: String,
    api_key: String,
}

impl ApiFootball {
    pub fn new(cfg: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: http_client(cfg.request_timeout)?,
            base_url: cfg.api_url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }

    pub fn search_teams(&self, name: &str) -> Result<Vec<TeamHit>> {
        let body = self
            .get("/teams", &[("search", name.trim().to_string())])
            .context("team search request failed")?;
        parse_teams_json(&body)
    }

    /// First search hit, the same pick a user gets when typing a bare name.
    pub fn find_team_id(&self, name: &str) -> Result<Option<TeamId>> {
        Ok(self.search_teams(name)?.first().map(|t| t.id))
    }

    /// Like `find_team_id`, but upstream failures read as "not found".
    pub fn resolve_team_id(&self, name: &str) -> Option<TeamId> {
        match self.find_team_id(name) {
            Ok(Some(id)) => {
                info!(team = name, id, "resolved team");
                Some(id)
            }
            Ok(None) => None,
            Err(err) => {
                let err = format!("{err:#}");
                warn!(team = name, error = %err, "team lookup failed");
                None
            }
        }
    }

    /// The `last` most recent fixtures of a team. This is the form window the
    /// aggregator trusts; nothing downstream trims it again.
    pub fn last_fixtures(&self, team_id: TeamId, last: u32) -> Result<Vec<FixtureRow>> {
        let body = self
            .get(
                "/fixtures",
                &[("team", team_id.to_string()), ("last", last.to_string())],
            )
            .context("team fixtures request failed")?;
        parse_fixtures_json(&body)
    }

    pub fn fixtures_on(&self, date: &str) -> Result<Vec<FixtureRow>> {
        let body = self
            .get("/fixtures", &[("date", date.to_string())])
            .context("fixtures by date request failed")?;
        parse_fixtures_json(&body)
    }

    pub fn next_fixtures(&self, n: u32) -> Result<Vec<FixtureRow>> {
        let body = self
            .get("/fixtures", &[("next", n.to_string())])
            .context("next fixtures request failed")?;
        parse_fixtures_json(&body)
    }

    /// Recent results for aggregation. Any upstream failure becomes an empty
    /// history so the aggregator reports "no data" instead of a transport error.
    pub fn recent_results(&self, team_id: TeamId, last: u32) -> Vec<MatchResult> {
        match self.last_fixtures(team_id, last) {
            Ok(rows) => rows.iter().map(FixtureRow::result).collect(),
            Err(err) => {
                let err = format!("{err:#}");
                warn!(team_id, error = %err, "fixture fetch failed");
                Vec::new()
            }
        }
    }

    fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "api-football request");
        let resp = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(query)
            .send()
            .context("request failed")?;
        let status = resp.status();
        let body = resp.text().context("failed reading body")?;
        if !status.is_success() {
            bail!("http {status}: {body}");
        }
        Ok(body)
    }
}

pub fn today_iso() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    errors: Value,
    #[serde(default)]
    response: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiTeamItem {
    team: ApiTeam,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    id: u32,
    name: String,
    #[serde(default)]
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiFixtureItem {
    fixture: ApiFixture,
    #[serde(default)]
    league: Option<ApiLeague>,
    teams: ApiTeams,
    #[serde(default)]
    goals: Option<ApiPair>,
    #[serde(default)]
    score: Option<ApiScore>,
}

#[derive(Debug, Deserialize)]
struct ApiFixture {
    id: u64,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    status: Option<ApiStatus>,
}

#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    short: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiLeague {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiTeams {
    home: ApiSide,
    away: ApiSide,
}

#[derive(Debug, Deserialize)]
struct ApiSide {
    id: u32,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiScore {
    #[serde(default)]
    fulltime: Option<ApiPair>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiPair {
    #[serde(default)]
    home: Option<i64>,
    #[serde(default)]
    away: Option<i64>,
}

pub fn parse_teams_json(raw: &str) -> Result<Vec<TeamHit>> {
    let Some(items) = parse_envelope(raw)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ApiTeamItem>(item).ok())
        .map(|item| TeamHit {
            id: item.team.id,
            name: item.team.name,
            country: item.team.country,
        })
        .collect())
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<FixtureRow>> {
    let Some(items) = parse_envelope(raw)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| serde_json::from_value::<ApiFixtureItem>(item).ok())
        .map(fixture_row)
        .collect())
}

fn fixture_row(item: ApiFixtureItem) -> FixtureRow {
    // Full time is the settled result; `goals` only when the score block is missing,
    // since during play it carries the live count.
    let pair = match item.score.and_then(|s| s.fulltime) {
        Some(ft) => ft,
        None => item.goals.unwrap_or_default(),
    };
    FixtureRow {
        fixture_id: item.fixture.id,
        kickoff: item.fixture.date.unwrap_or_default(),
        status: item
            .fixture
            .status
            .and_then(|s| s.short)
            .unwrap_or_default(),
        league: item.league.and_then(|l| l.name).unwrap_or_default(),
        home_id: item.teams.home.id,
        home_name: item.teams.home.name.unwrap_or_default(),
        away_id: item.teams.away.id,
        away_name: item.teams.away.name.unwrap_or_default(),
        home_goals: pair.home.and_then(|g| u32::try_from(g).ok()),
        away_goals: pair.away.and_then(|g| u32::try_from(g).ok()),
    }
}

fn parse_envelope(raw: &str) -> Result<Option<Vec<Value>>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }
    let env: Envelope = serde_json::from_str(trimmed).context("invalid api-football json")?;
    if let Some(msg) = api_errors(&env.errors) {
        return Err(anyhow!("api-football error: {msg}"));
    }
    Ok(env.response)
}

fn api_errors(errors: &Value) -> Option<String> {
    let parts: Vec<String> = match errors {
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| match v.as_str() {
                Some(s) => format!("{k}: {s}"),
                None => format!("{k}: {v}"),
            })
            .collect(),
        Value::Array(items) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
            .collect(),
        Value::String(s) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    };
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}
