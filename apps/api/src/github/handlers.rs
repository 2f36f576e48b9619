use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::github::models::{Fetched, GithubOverview, GithubRepo, GithubUser};
use crate::github::RepoQuery;
use crate::state::AppState;

const USER_FAILURE: &str = "Failed to fetch GitHub user data";
const REPOS_FAILURE: &str = "Failed to fetch GitHub repositories";

/// GET /api/github/user/:username
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    let user = state
        .github
        .fetch_user::<Value>(&username)
        .await
        .map_err(|e| e.relay(USER_FAILURE))?;
    Ok(Json(user))
}

/// GET /api/github/repos/:username
pub async fn handle_get_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<RepoQuery>,
) -> Result<Json<Value>, AppError> {
    let repos = state
        .github
        .fetch_repos::<Value>(&username, &query)
        .await
        .map_err(|e| e.relay(REPOS_FAILURE))?;
    Ok(Json(repos))
}

/// GET /api/github/overview/:username
/// Profile plus top-starred repositories, each reported as its own result.
pub async fn handle_get_overview(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<GithubOverview> {
    let user = state.github.fetch_user::<GithubUser>(&username).await;
    let repos = state
        .github
        .fetch_repos::<Vec<GithubRepo>>(&username, &RepoQuery::new("stars", "6"))
        .await;

    Json(GithubOverview {
        user: Fetched::from_result(user, USER_FAILURE),
        repos: Fetched::from_result(repos, REPOS_FAILURE),
    })
}
