use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::form::{MatchResult, TeamId};

/// Two recorded histories for an offline estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayCase {
    pub home: ReplayTeam,
    pub away: ReplayTeam,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayTeam {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

impl ReplayTeam {
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| format!("team {}", self.id))
    }
}

pub fn parse_case(raw: &str) -> Result<ReplayCase> {
    serde_json::from_str(raw).context("invalid replay case json")
}

pub fn load_case(path: &Path) -> Result<ReplayCase> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_case(&raw)
}
