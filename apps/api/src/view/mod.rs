//! View Derivation: pure projections of the resume into display-ready shapes.
//!
//! Nothing here allocates state that outlives a request; every function is total over
//! well-formed resume content and leaves its inputs untouched.

pub mod dates;
pub mod experience;
pub mod projects;
pub mod skills;

use serde::Serialize;

use crate::models::resume::{Project, ResumeRecord};

use experience::{experience_timeline, TimelineEntry};
use projects::{filter_projects_by_keyword, keyword_chips};
use skills::{group_skills_by_category, SkillGroup, DEFAULT_SKILL_CATEGORIES};

/// Everything the presentation layer renders for one filter/category selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedViewState<'a> {
    pub selected_keyword: Option<String>,
    pub keywords: Vec<String>,
    pub projects: Vec<&'a Project>,
    pub skill_groups: Vec<SkillGroup>,
    pub experience: Vec<TimelineEntry>,
}

pub fn derive_view_state<'a, S: AsRef<str>>(
    resume: &'a ResumeRecord,
    keyword: Option<&str>,
    categories: &[S],
) -> DerivedViewState<'a> {
    DerivedViewState {
        selected_keyword: keyword.map(str::to_string),
        keywords: keyword_chips(&resume.projects),
        projects: filter_projects_by_keyword(&resume.projects, keyword),
        skill_groups: group_skills_by_category(&resume.skills, categories),
        experience: experience_timeline(&resume.work),
    }
}

/// Parses a comma-separated category list. Blank input falls back to the defaults.
pub fn parse_categories(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if parsed.is_empty() {
        DEFAULT_SKILL_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        parsed
    }
}

/// Empty keyword query parameters mean "no filter".
pub fn normalize_keyword(raw: Option<&str>) -> Option<&str> {
    raw.filter(|k| !k.is_empty())
}
