//! GitHub client. The only place that talks to the GitHub REST API.
//!
//! Pure pass-through: one upstream request per call, no retries, no caching.
//! Non-success statuses are reported back so handlers can relay them unchanged.
use reqwest::{header::ACCEPT, Client, ClientBuilder, Url};
use serde::{de::DeserializeOwned, Deserialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;
use crate::errors::AppError;

pub mod handlers;
pub mod models;

const GITHUB_ACCEPT: &str = "application/vnd.github+json";
pub const DEFAULT_REPO_SORT: &str = "updated";
pub const DEFAULT_REPO_PER_PAGE: &str = "10";

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API responded with {0}")]
    Status(u16),

    #[error("Invalid GitHub API base URL: {0}")]
    InvalidBaseUrl(String),
}

impl GithubError {
    /// Maps the failure onto the HTTP error returned to our caller.
    /// Upstream statuses are relayed; anything else becomes a 500 carrying `message`.
    pub fn relay(self, message: &'static str) -> AppError {
        match self {
            GithubError::Status(status) => AppError::Upstream(status),
            source => AppError::Proxy { message, source },
        }
    }
}

/// Query parameters forwarded to the repository listing.
/// Values pass through verbatim; missing or empty ones fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoQuery {
    pub sort: Option<String>,
    pub per_page: Option<String>,
}

impl RepoQuery {
    pub fn new(sort: &str, per_page: &str) -> Self {
        Self {
            sort: Some(sort.to_string()),
            per_page: Some(per_page.to_string()),
        }
    }

    pub fn sort(&self) -> &str {
        non_empty(self.sort.as_deref()).unwrap_or(DEFAULT_REPO_SORT)
    }

    pub fn per_page(&self) -> &str {
        non_empty(self.per_page.as_deref()).unwrap_or(DEFAULT_REPO_PER_PAGE)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    pub fn new(config: &Config) -> Result<Self, GithubError> {
        let client = Self::client_builder(config).build()?;
        Self::with_client(client, &config.github_api_url)
    }

    /// Outbound client settings shared by every GitHub request.
    pub fn client_builder(config: &Config) -> ClientBuilder {
        Client::builder().user_agent(config.github_user_agent.as_str())
    }

    /// Wraps a preconfigured `reqwest::Client`. The client is expected to set a
    /// User-Agent, which GitHub requires.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, GithubError> {
        let base_url =
            Url::parse(base_url).map_err(|_| GithubError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(GithubError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    /// GET /users/{username}
    pub async fn fetch_user<T: DeserializeOwned>(&self, username: &str) -> Result<T, GithubError> {
        let url = self.users_url(&[username])?;
        self.get_json(url).await
    }

    /// GET /users/{username}/repos?sort=..&per_page=..
    pub async fn fetch_repos<T: DeserializeOwned>(
        &self,
        username: &str,
        query: &RepoQuery,
    ) -> Result<T, GithubError> {
        let mut url = self.users_url(&[username, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", query.sort())
            .append_pair("per_page", query.per_page());
        self.get_json(url).await
    }

    /// Builds `{base}/users/<segments..>`. Each segment is percent-encoded, so a
    /// username can never escape its path segment.
    fn users_url(&self, segments: &[&str]) -> Result<Url, GithubError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GithubError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("users")
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GithubError> {
        debug!("GitHub request: GET {url}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}
