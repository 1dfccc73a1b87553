//! Predicate filtering for the two search surfaces.
//!
//! A query is a bag of optional criteria. Every present criterion must
//! hold (AND semantics); an absent criterion imposes no constraint.
//! Filtering never mutates or reorders its input.

use crate::model::{Consultant, Project, WorkStyle};

/// Search criteria over projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    /// Case-insensitive substring against title or description
    pub keyword: Option<String>,
    /// Exact role category
    pub role: Option<String>,
    /// Every requested tag must appear in required + nice-to-have
    pub skills: Vec<String>,
    /// Candidate's floor; matches when it does not exceed the
    /// project's upper bound (range overlap, not point comparison)
    pub rate_min: Option<u64>,
    /// Candidate's ceiling; matches when it is not below the
    /// project's lower bound
    pub rate_max: Option<u64>,
    /// Minimum utilization target
    pub utilization: Option<u32>,
    /// Exact work style
    pub work_style: Option<WorkStyle>,
    /// Exact industry
    pub industry: Option<String>,
}

impl ProjectQuery {
    /// Whether a project satisfies every present criterion.
    pub fn matches(&self, project: &Project) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !project.title.to_lowercase().contains(&keyword)
                && !project.description.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        if let Some(role) = &self.role {
            if &project.role != role {
                return false;
            }
        }
        if let Some(work_style) = self.work_style {
            if project.work_style != work_style {
                return false;
            }
        }
        if let Some(industry) = &self.industry {
            if &project.industry != industry {
                return false;
            }
        }
        if !self
            .skills
            .iter()
            .all(|skill| project.all_skills().any(|tag| tag == skill))
        {
            return false;
        }
        if let Some(rate_min) = self.rate_min {
            if project.rate_upper < rate_min {
                return false;
            }
        }
        if let Some(rate_max) = self.rate_max {
            if project.rate_lower > rate_max {
                return false;
            }
        }
        if let Some(utilization) = self.utilization {
            if project.utilization < utilization {
                return false;
            }
        }
        true
    }
}

/// Search criteria over consultants.
#[derive(Debug, Clone, Default)]
pub struct ConsultantQuery {
    /// Case-insensitive substring against name or bio
    pub keyword: Option<String>,
    /// Every requested tag must appear in the consultant's skill set
    pub skills: Vec<String>,
    /// Minimum years of experience
    pub experience: Option<u32>,
    /// Maximum acceptable preferred-rate amount
    pub rate_max: Option<u64>,
    /// Minimum preferred utilization
    pub utilization: Option<u32>,
    /// Exact base location
    pub location: Option<String>,
    /// Tri-state: `None` unconstrained, `Some(flag)` exact match
    pub remote: Option<bool>,
    /// Industry tag membership
    pub industry: Option<String>,
}

impl ConsultantQuery {
    /// Whether a consultant satisfies every present criterion.
    pub fn matches(&self, consultant: &Consultant) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !consultant.name.to_lowercase().contains(&keyword)
                && !consultant.bio.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }
        if !self
            .skills
            .iter()
            .all(|skill| consultant.skills.contains(skill))
        {
            return false;
        }
        if let Some(experience) = self.experience {
            if consultant.experience_years < experience {
                return false;
            }
        }
        if let Some(rate_max) = self.rate_max {
            if consultant.preferred_rate.amount > rate_max {
                return false;
            }
        }
        if let Some(utilization) = self.utilization {
            if consultant.preferred_utilization < utilization {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if &consultant.base_location != location {
                return false;
            }
        }
        if let Some(remote) = self.remote {
            if consultant.remote != remote {
                return false;
            }
        }
        if let Some(industry) = &self.industry {
            if !consultant.industries.contains(industry) {
                return false;
            }
        }
        true
    }
}

/// Projects satisfying the query, original order preserved.
pub fn filter_projects(projects: &[Project], query: &ProjectQuery) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| query.matches(project))
        .cloned()
        .collect()
}

/// Consultants satisfying the query, original order preserved.
pub fn filter_consultants(
    consultants: &[Consultant],
    query: &ConsultantQuery,
) -> Vec<Consultant> {
    consultants
        .iter()
        .filter(|consultant| query.matches(consultant))
        .cloned()
        .collect()
}
