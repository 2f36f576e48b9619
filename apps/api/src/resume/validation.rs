use serde::Serialize;

use crate::models::resume::ResumeRecord;

pub const MAX_SKILL_LEVEL: u32 = 100;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContentIssue {
    /// JSON-path-like location of the offending field, e.g. `skills[2].level`.
    pub field: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeValidationResult {
    pub passed: bool,
    pub issues: Vec<ContentIssue>,
}

/// Checks the content invariants the view layer relies on.
///
/// FAIL conditions:
/// - Blank `basics.name`
/// - Blank company or position on a work entry
/// - Work `endDate` earlier than its `startDate`
/// - Blank skill name or category
/// - Skill `level` above 100
///
/// Date parseability is already guaranteed by deserialization.
pub fn validate_resume(resume: &ResumeRecord) -> ResumeValidationResult {
    let mut issues = Vec::new();

    if resume.basics.name.trim().is_empty() {
        issues.push(issue("basics.name", "must not be blank"));
    }

    for (i, job) in resume.work.iter().enumerate() {
        if job.company.trim().is_empty() {
            issues.push(issue(format!("work[{i}].company"), "must not be blank"));
        }
        if job.position.trim().is_empty() {
            issues.push(issue(format!("work[{i}].position"), "must not be blank"));
        }
        if let Some(end) = job.end_date {
            if end < job.start_date {
                issues.push(issue(
                    format!("work[{i}].endDate"),
                    format!("{end} is before startDate {}", job.start_date),
                ));
            }
        }
    }

    for (i, skill) in resume.skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            issues.push(issue(format!("skills[{i}].name"), "must not be blank"));
        }
        if skill.category.trim().is_empty() {
            issues.push(issue(format!("skills[{i}].category"), "must not be blank"));
        }
        if let Some(level) = skill.level {
            if level > MAX_SKILL_LEVEL {
                issues.push(issue(
                    format!("skills[{i}].level"),
                    format!("{level} is outside 0..={MAX_SKILL_LEVEL}"),
                ));
            }
        }
    }

    ResumeValidationResult {
        passed: issues.is_empty(),
        issues,
    }
}

fn issue(field: impl Into<String>, reason: impl Into<String>) -> ContentIssue {
    ContentIssue {
        field: field.into(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::embedded_resume;
    use chrono::NaiveDate;

    #[test]
    fn test_embedded_resume_is_valid() {
        let result = validate_resume(&embedded_resume().unwrap());
        assert!(result.passed, "Issues: {:?}", result.issues);
    }

    #[test]
    fn test_level_out_of_range_is_reported() {
        let mut resume = embedded_resume().unwrap();
        resume.skills[1].level = Some(140);
        let result = validate_resume(&resume);
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, "skills[1].level");
    }

    #[test]
    fn test_boundary_levels_pass() {
        let mut resume = embedded_resume().unwrap();
        resume.skills[0].level = Some(0);
        resume.skills[1].level = Some(100);
        assert!(validate_resume(&resume).passed);
    }

    #[test]
    fn test_end_before_start_is_reported() {
        let mut resume = embedded_resume().unwrap();
        resume.work[1].end_date = NaiveDate::from_ymd_opt(2020, 1, 1);
        let result = validate_resume(&resume);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, "work[1].endDate");
    }

    #[test]
    fn test_every_issue_is_collected() {
        let mut resume = embedded_resume().unwrap();
        resume.basics.name = "  ".into();
        resume.work[0].company = String::new();
        resume.skills[0].category = String::new();
        let result = validate_resume(&resume);
        let fields: Vec<_> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["basics.name", "work[0].company", "skills[0].category"]
        );
    }
}
