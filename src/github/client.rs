use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{Config, MAX_REPOS_PER_PAGE};
use crate::error::{Error, Result};
use crate::github::source::ProfileSource;
use crate::models::{ActivityEvent, ProfileSummary, RepositoryRecord};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url, username)
    }

    pub fn repos_url(&self, username: &str, per_page: u32) -> String {
        format!(
            "{}/users/{}/repos?type=owner&per_page={}",
            self.base_url,
            username,
            per_page.clamp(1, MAX_REPOS_PER_PAGE)
        )
    }

    pub fn events_url(&self, username: &str) -> String {
        format!("{}/users/{}/events/public", self.base_url, username)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, username: &str) -> Result<T> {
        tracing::debug!("Fetching: {}", url);
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UserNotFound(username.to_string()));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "GET {} failed: {} - {}",
                url, status, body
            )));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn get_user(&self, username: &str) -> Result<ProfileSummary> {
        tracing::info!("Fetching user: {}", username);
        self.get_json(&self.user_url(username), username).await
    }

    async fn get_user_repos(&self, username: &str, per_page: u32) -> Result<Vec<RepositoryRecord>> {
        tracing::info!("Fetching repositories for: {}", username);
        self.get_json(&self.repos_url(username, per_page), username)
            .await
    }

    async fn get_user_events(&self, username: &str) -> Result<Vec<ActivityEvent>> {
        tracing::info!("Fetching public events for: {}", username);
        self.get_json(&self.events_url(username), username).await
    }

    fn name(&self) -> &str {
        "github"
    }
}
