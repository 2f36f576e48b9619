use serde::Serialize;

use crate::models::resume::Work;
use crate::view::dates::format_date_range;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub company: String,
    pub position: String,
    pub website: Option<String>,
    pub date_range: String,
    pub current: bool,
    pub highlights: Vec<String>,
}

/// Work history as timeline entries, in resume order.
pub fn experience_timeline(work: &[Work]) -> Vec<TimelineEntry> {
    work.iter()
        .map(|job| TimelineEntry {
            company: job.company.clone(),
            position: job.position.clone(),
            website: job.website.clone(),
            date_range: format_date_range(job.start_date, job.end_date),
            current: job.end_date.is_none(),
            highlights: job.highlights.clone(),
        })
        .collect()
}
