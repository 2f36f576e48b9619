use std::sync::Arc;

use crate::config::Config;
use crate::github::GithubClient;
use crate::models::resume::ResumeRecord;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything in here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub github: GithubClient,
    pub resume: Arc<ResumeRecord>,
}
