use crate::error::{Error, Result};
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const MAX_REPOS_PER_PAGE: u32 = 100;
pub const MAX_COMMIT_WINDOW_DAYS: i64 = 36_500;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub user_agent: String,
    pub repos_per_page: u32,
    pub commit_window_days: i64,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source. Malformed numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(Error::Config(format!(
                "GITHUB_API_URL must be an http(s) URL, got {}",
                api_base_url
            )));
        }

        let user_agent = lookup("GITHUB_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "gitreceipt/0.1".to_string());

        let repos_per_page = lookup("REPOS_PER_PAGE")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(MAX_REPOS_PER_PAGE)
            .clamp(1, MAX_REPOS_PER_PAGE);

        let commit_window_days = lookup("COMMIT_WINDOW_DAYS")
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|days| (1..=MAX_COMMIT_WINDOW_DAYS).contains(days))
            .unwrap_or(30);

        let request_timeout = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(30));

        Ok(Self {
            api_base_url,
            user_agent,
            repos_per_page,
            commit_window_days,
            request_timeout,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            user_agent: "gitreceipt/0.1".to_string(),
            repos_per_page: MAX_REPOS_PER_PAGE,
            commit_window_days: 30,
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    pub repos_per_page: u32,
    pub commit_window_days: i64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AggregatorConfig {
    fn from(config: &Config) -> Self {
        Self {
            repos_per_page: config.repos_per_page,
            commit_window_days: config.commit_window_days,
        }
    }
}
