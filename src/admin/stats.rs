//! Registration statistics for the admin dashboard.

use serde::Serialize;

use crate::model::{Consultant, Inquiry, Project};

/// Per-month registration counts across the three collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyStat {
    /// Month prefix, `YYYY-MM`
    pub month: String,
    pub consultants: usize,
    pub projects: usize,
    pub inquiries: usize,
}

/// Count registrations per month prefix. An entity counts toward a
/// month when its creation timestamp starts with that prefix, which
/// works for both date-only and full-datetime stamps.
pub fn monthly_stats(
    months: &[&str],
    consultants: &[Consultant],
    projects: &[Project],
    inquiries: &[Inquiry],
) -> Vec<MonthlyStat> {
    months
        .iter()
        .map(|month| MonthlyStat {
            month: month.to_string(),
            consultants: count_by_month(consultants.iter().map(|c| c.created_at.as_str()), month),
            projects: count_by_month(projects.iter().map(|p| p.created_at.as_str()), month),
            inquiries: count_by_month(inquiries.iter().map(|i| i.created_at.as_str()), month),
        })
        .collect()
}

fn count_by_month<'a>(timestamps: impl Iterator<Item = &'a str>, month: &str) -> usize {
    timestamps.filter(|ts| ts.starts_with(month)).count()
}
