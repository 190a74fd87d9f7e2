use std::env;
use std::time::Duration;

use anyhow::{Result, bail};

pub const DEFAULT_API_URL: &str = "https://v3.football.api-sports.io";
const DEFAULT_FORM_WINDOW: u32 = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LIST_LIMIT: usize = 30;
const DEFAULT_NEXT_FIXTURES: u32 = 20;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub api_url: String,
    pub form_window: u32,
    pub request_timeout: Duration,
    pub list_limit: usize,
    pub next_fixtures: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let Some(api_key) = env_string("API_KEY") else {
            bail!("API_KEY is not set (export it or put it in .env)");
        };
        let api_url = env_string("API_URL")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let form_window = env_parse("FORM_WINDOW", DEFAULT_FORM_WINDOW).clamp(1, 20);
        let timeout_secs = env_parse("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS).clamp(1, 120);
        let list_limit = env_parse("LIST_LIMIT", DEFAULT_LIST_LIMIT).clamp(1, 200);
        let next_fixtures = env_parse("NEXT_FIXTURES", DEFAULT_NEXT_FIXTURES).clamp(1, 100);

        Ok(Self {
            api_key,
            api_url,
            form_window,
            request_timeout: Duration::from_secs(timeout_secs),
            list_limit,
            next_fixtures,
        })
    }

    pub fn with_form_window(mut self, window: Option<u32>) -> Self {
        if let Some(w) = window {
            self.form_window = w.clamp(1, 20);
        }
        self
    }
}

fn env_string(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
