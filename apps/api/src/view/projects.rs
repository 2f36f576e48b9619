use std::collections::HashSet;

use crate::models::resume::Project;

/// Number of keyword filter chips shown next to "All Projects".
pub const MAX_KEYWORD_CHIPS: usize = 6;

/// Every keyword used across `projects`, deduplicated, in first-seen order.
pub fn distinct_project_keywords(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    projects
        .iter()
        .flat_map(|p| p.keywords.iter())
        .filter(|k| seen.insert(*k))
        .cloned()
        .collect()
}

/// The leading distinct keywords offered as filter chips.
pub fn keyword_chips(projects: &[Project]) -> Vec<String> {
    let mut keywords = distinct_project_keywords(projects);
    keywords.truncate(MAX_KEYWORD_CHIPS);
    keywords
}

/// `None` selects every project; otherwise projects whose keywords contain an
/// exact, case-sensitive match. Order is preserved.
pub fn filter_projects_by_keyword<'a>(
    projects: &'a [Project],
    keyword: Option<&str>,
) -> Vec<&'a Project> {
    match keyword {
        None => projects.iter().collect(),
        Some(k) => projects
            .iter()
            .filter(|p| p.keywords.iter().any(|pk| pk == k))
            .collect(),
    }
}
