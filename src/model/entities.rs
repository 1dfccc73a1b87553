//! Directory entity types.
//!
//! All three entity kinds are independent top-level records keyed by a
//! UUID string. `Inquiry.target_id` is a soft reference: the target may
//! have been deleted, and readers must tolerate that.
//!
//! Wire format is camelCase JSON; the fixture documents and all
//! persisted snapshots use the same shape.

use serde::{Deserialize, Serialize};

/// Billing basis for a consultant's preferred rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    Hourly,
    Daily,
    Monthly,
}

/// A preferred rate: billing basis plus a positive amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    #[serde(rename = "type")]
    pub rate_type: RateType,
    pub amount: u64,
}

/// How a project expects the work to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkStyle {
    Remote,
    Onsite,
    Hybrid,
}

/// What kind of entity an inquiry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Project,
    Consultant,
}

/// A registered consultant profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultant {
    pub id: String,
    pub name: String,
    pub experience_years: u32,
    pub preferred_rate: Rate,
    pub preferred_utilization: u32,
    pub base_location: String,
    pub remote: bool,
    /// Non-empty after validated creation, insertion order preserved.
    pub skills: Vec<String>,
    pub industries: Vec<String>,
    /// Earliest availability, `YYYY-MM-DD`.
    pub available_from: String,
    pub engagement_length: String,
    pub bio: String,
    pub contact: String,
    /// Creation date, `YYYY-MM-DD`. Lexicographic order is
    /// chronological order.
    pub created_at: String,
}

/// A registered engagement opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Redacted company label shown on public surfaces.
    pub masked_company: String,
    pub description: String,
    /// Non-empty after validated creation.
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    pub role: String,
    pub utilization: u32,
    /// Invariant: `rate_lower <= rate_upper`.
    pub rate_lower: u64,
    pub rate_upper: u64,
    pub engagement_length: String,
    pub start_date: String,
    pub work_style: WorkStyle,
    pub location: String,
    pub industry: String,
    pub contact: String,
    pub created_at: String,
}

/// An inquiry about a project or a consultant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    /// Soft reference; may dangle after the target is deleted.
    pub target_id: String,
    pub target_type: TargetType,
    pub name: String,
    pub email: String,
    pub message: String,
    /// Full RFC 3339 datetime, unlike the date-only entity timestamps.
    pub created_at: String,
}

impl Project {
    /// Derives the redacted company label: first character plus a fixed
    /// suffix, so the company is recognizable to its own staff without
    /// being published.
    pub fn mask_company(company: &str) -> String {
        match company.chars().next() {
            Some(first) => format!("{}-***", first),
            None => String::from("-***"),
        }
    }

    /// Required and nice-to-have skills as one sequence, for
    /// membership tests.
    pub fn all_skills(&self) -> impl Iterator<Item = &String> {
        self.required_skills
            .iter()
            .chain(self.nice_to_have_skills.iter())
    }
}
