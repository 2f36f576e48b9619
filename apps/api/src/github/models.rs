use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::github::GithubError;

/// Subset of `/users/{username}` the profile card uses. Every field is optional;
/// GitHub's schema is not enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubUser {
    pub login: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub public_repos: Option<u64>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
}

/// Subset of one entry of `/users/{username}/repos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubRepo {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
}

/// Explicit outcome of one upstream query. The presentation layer decides what to
/// show on failure; no fixture data is ever substituted here.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Fetched<T> {
    Ok { data: T },
    Error { error: String },
}

impl<T> Fetched<T> {
    /// Upstream statuses are reported as such; transport failures get `failure`.
    pub fn from_result(result: Result<T, GithubError>, failure: &str) -> Self {
        match result {
            Ok(data) => Fetched::Ok { data },
            Err(e @ GithubError::Status(_)) => {
                warn!("{failure}: {e}");
                Fetched::Error {
                    error: e.to_string(),
                }
            }
            Err(e) => {
                error!("{failure}: {e}");
                Fetched::Error {
                    error: failure.to_string(),
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GithubOverview {
    pub user: Fetched<GithubUser>,
    pub repos: Fetched<Vec<GithubRepo>>,
}
