pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::contact::handlers as contact;
use crate::github::handlers as github;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // GitHub proxy
        .route("/api/github/user/:username", get(github::handle_get_user))
        .route("/api/github/repos/:username", get(github::handle_get_repos))
        .route(
            "/api/github/overview/:username",
            get(github::handle_get_overview),
        )
        // Contact intake
        .route("/api/contact", post(contact::handle_contact))
        // Resume and derived views
        .route("/api/resume", get(resume::handle_get_resume))
        .route("/api/resume/view", get(resume::handle_get_view))
        .route("/api/resume/projects", get(resume::handle_get_projects))
        .route("/api/resume/skills", get(resume::handle_get_skills))
        .route("/api/resume/experience", get(resume::handle_get_experience))
        .with_state(state)
}
