//! Resume Data Store: the static resume served by the portfolio.
//!
//! Loaded once at startup and shared read-only. Content defects abort startup;
//! they are never surfaced as per-request errors.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::models::resume::ResumeRecord;

pub mod handlers;
pub mod validation;

use validation::validate_resume;

const EMBEDDED_RESUME: &str = include_str!("../../data/resume.json");

/// Parses the resume document compiled into the binary.
pub fn embedded_resume() -> Result<ResumeRecord> {
    serde_json::from_str(EMBEDDED_RESUME).context("Embedded resume document is malformed")
}

/// Loads the resume from `path` when given, otherwise the embedded document,
/// and rejects content that violates the view invariants.
pub fn load_resume(path: Option<&Path>) -> Result<ResumeRecord> {
    let resume = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read resume from {}", path.display()))?;
            serde_json::from_str::<ResumeRecord>(&raw)
                .with_context(|| format!("Resume at {} is malformed", path.display()))?
        }
        None => embedded_resume()?,
    };

    let report = validate_resume(&resume);
    if !report.passed {
        let details = report
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.reason))
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Resume content is invalid: {details}");
    }

    info!(
        "Resume loaded for {} ({} work entries, {} skills, {} projects)",
        resume.basics.name,
        resume.work.len(),
        resume.skills.len(),
        resume.projects.len()
    );

    Ok(resume)
}
