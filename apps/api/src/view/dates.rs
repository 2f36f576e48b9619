use chrono::NaiveDate;

pub const OPEN_ENDED_LABEL: &str = "Present";

/// Formats a date as abbreviated English month and year, e.g. `Apr 2022`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Renders `Mon YYYY - Mon YYYY`, or `Mon YYYY - Present` when `end` is `None`.
pub fn format_date_range(start: NaiveDate, end: Option<NaiveDate>) -> String {
    let end = match end {
        Some(d) => format_month_year(d),
        None => OPEN_ENDED_LABEL.to_string(),
    };
    format!("{} - {}", format_month_year(start), end)
}
