use serde::Serialize;

use crate::models::resume::Skill;
use crate::resume::validation::MAX_SKILL_LEVEL;

/// Display order of the skill sections.
pub const DEFAULT_SKILL_CATEGORIES: &[&str] = &[
    "Technical",
    "Tools & Platforms",
    "Testing",
    "Frontend",
    "Libraries & State",
    "Methodologies",
];

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub name: String,
    pub keywords: Vec<String>,
    pub level: Option<u32>,
    /// Width of the proficiency bar in percent; absent when the skill has no level.
    pub bar_width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<SkillView>,
}

/// Buckets skills under each requested category, in the requested order.
/// Skills keep their original relative order; unknown categories get an empty bucket
/// and skills in unrequested categories are left out.
pub fn group_skills_by_category<S: AsRef<str>>(skills: &[Skill], categories: &[S]) -> Vec<SkillGroup> {
    categories
        .iter()
        .map(|category| {
            let category = category.as_ref();
            SkillGroup {
                category: category.to_string(),
                skills: skills
                    .iter()
                    .filter(|s| s.category == category)
                    .map(to_view)
                    .collect(),
            }
        })
        .collect()
}

/// Proportional bar width for a skill level, clamped to [0, 100].
pub fn skill_bar_width(level: Option<u32>) -> Option<u32> {
    level.map(|l| l.min(MAX_SKILL_LEVEL))
}

fn to_view(skill: &Skill) -> SkillView {
    SkillView {
        name: skill.name.clone(),
        keywords: skill.keywords.clone(),
        level: skill.level,
        bar_width: skill_bar_width(skill.level),
    }
}
