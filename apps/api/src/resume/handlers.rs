use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::resume::{Project, ResumeRecord};
use crate::state::AppState;
use crate::view::experience::{experience_timeline, TimelineEntry};
use crate::view::projects::{filter_projects_by_keyword, keyword_chips};
use crate::view::skills::{group_skills_by_category, SkillGroup};
use crate::view::{derive_view_state, normalize_keyword, parse_categories};

#[derive(Debug, Deserialize)]
pub struct ViewQuery {
    pub keyword: Option<String>,
    pub categories: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    pub categories: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListResponse<'a> {
    pub keywords: Vec<String>,
    pub selected_keyword: Option<&'a str>,
    pub projects: Vec<&'a Project>,
}

/// GET /api/resume
pub async fn handle_get_resume(State(state): State<AppState>) -> Json<ResumeRecord> {
    Json(state.resume.as_ref().clone())
}

/// GET /api/resume/view
pub async fn handle_get_view(
    State(state): State<AppState>,
    Query(params): Query<ViewQuery>,
) -> Response {
    let categories = parse_categories(params.categories.as_deref());
    let keyword = normalize_keyword(params.keyword.as_deref());
    let view = derive_view_state(&state.resume, keyword, &categories);
    Json(view).into_response()
}

/// GET /api/resume/projects
pub async fn handle_get_projects(
    State(state): State<AppState>,
    Query(params): Query<KeywordQuery>,
) -> Response {
    let keyword = normalize_keyword(params.keyword.as_deref());
    let listing = ProjectListResponse {
        keywords: keyword_chips(&state.resume.projects),
        selected_keyword: keyword,
        projects: filter_projects_by_keyword(&state.resume.projects, keyword),
    };
    Json(listing).into_response()
}

/// GET /api/resume/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(params): Query<CategoriesQuery>,
) -> Json<Vec<SkillGroup>> {
    let categories = parse_categories(params.categories.as_deref());
    Json(group_skills_by_category(&state.resume.skills, &categories))
}

/// GET /api/resume/experience
pub async fn handle_get_experience(State(state): State<AppState>) -> Json<Vec<TimelineEntry>> {
    Json(experience_timeline(&state.resume.work))
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use crate::test_support::{http_client, spawn_app};

    async fn get(path: &str) -> Value {
        let app = spawn_app("http://127.0.0.1:9").await;
        http_client()
            .get(format!("{app}{path}"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_resume_is_served() {
        let body = get("/api/resume").await;
        assert_eq!(body["basics"]["name"], "Gaurav Kumar");
        assert_eq!(body["work"][0]["startDate"], "2022-04-01");
        assert!(body["work"][0]["endDate"].is_null());
    }

    #[tokio::test]
    async fn test_projects_filtered_by_keyword() {
        let body = get("/api/resume/projects?keyword=C%23").await;
        assert_eq!(body["selectedKeyword"], "C#");
        let names: Vec<&str> = body["projects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Web App for Employee Self Help", "5S Principles Web Application"]
        );
        assert_eq!(body["keywords"][0], "ASP.NET");
    }

    #[tokio::test]
    async fn test_empty_keyword_selects_all() {
        let body = get("/api/resume/projects?keyword=").await;
        assert!(body["selectedKeyword"].is_null());
        assert_eq!(body["projects"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_skills_with_category_override() {
        let body = get("/api/resume/skills?categories=Tools%20%26%20Platforms,Unknown").await;
        let groups = body.as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0]["category"], "Tools & Platforms");
        assert_eq!(groups[0]["skills"].as_array().unwrap().len(), 3);
        assert!(groups[1]["skills"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_experience_timeline() {
        let body = get("/api/resume/experience").await;
        assert_eq!(body[0]["dateRange"], "Apr 2022 - Present");
        assert_eq!(body[0]["current"], true);
        assert_eq!(body[3]["dateRange"], "Feb 2018 - Dec 2018");
    }

    #[tokio::test]
    async fn test_view_state() {
        let body = get("/api/resume/view?keyword=Qt").await;
        assert_eq!(body["selectedKeyword"], "Qt");
        assert_eq!(body["projects"].as_array().unwrap().len(), 1);
        assert_eq!(body["skillGroups"][0]["category"], "Technical");
        assert_eq!(body["experience"].as_array().unwrap().len(), 4);
    }
}
