//! Result sorting for the search surfaces.
//!
//! Sorting is stable, deterministic, and operates on a copy of the
//! input. Timestamps and dates are `YYYY-MM-DD` strings, so
//! lexicographic comparison is chronological comparison.

use crate::model::{Consultant, Project};

/// Named sort strategies over projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSort {
    /// Creation timestamp descending
    #[default]
    New,
    /// Rate upper bound descending
    RateHigh,
    /// Start date ascending
    StartSoon,
}

/// Named sort strategies over consultants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsultantSort {
    /// Creation timestamp descending
    #[default]
    New,
    /// Preferred rate amount ascending
    RateLow,
    /// Experience years descending
    Experience,
}

/// Projects sorted by the given strategy; input untouched.
pub fn sort_projects(projects: &[Project], sort: ProjectSort) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    match sort {
        ProjectSort::New => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ProjectSort::RateHigh => sorted.sort_by(|a, b| b.rate_upper.cmp(&a.rate_upper)),
        ProjectSort::StartSoon => sorted.sort_by(|a, b| a.start_date.cmp(&b.start_date)),
    }
    sorted
}

/// Consultants sorted by the given strategy; input untouched.
pub fn sort_consultants(consultants: &[Consultant], sort: ConsultantSort) -> Vec<Consultant> {
    let mut sorted = consultants.to_vec();
    match sort {
        ConsultantSort::New => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        ConsultantSort::RateLow => {
            sorted.sort_by(|a, b| a.preferred_rate.amount.cmp(&b.preferred_rate.amount))
        }
        ConsultantSort::Experience => {
            sorted.sort_by(|a, b| b.experience_years.cmp(&a.experience_years))
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Rate, RateType, WorkStyle};

    fn project(id: &str, created_at: &str, rate_upper: u64, start_date: &str) -> Project {
        Project {
            id: id.to_string(),
            title: "title".to_string(),
            company: "Acme".to_string(),
            masked_company: "A-***".to_string(),
            description: "description".to_string(),
            required_skills: vec!["SQL".to_string()],
            nice_to_have_skills: Vec::new(),
            role: "PM".to_string(),
            utilization: 80,
            rate_lower: 500000,
            rate_upper,
            engagement_length: "6 months".to_string(),
            start_date: start_date.to_string(),
            work_style: WorkStyle::Remote,
            location: "Tokyo".to_string(),
            industry: "Retail".to_string(),
            contact: "pm@example.com".to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn consultant(id: &str, created_at: &str, amount: u64, years: u32) -> Consultant {
        Consultant {
            id: id.to_string(),
            name: "name".to_string(),
            experience_years: years,
            preferred_rate: Rate {
                rate_type: RateType::Monthly,
                amount,
            },
            preferred_utilization: 80,
            base_location: "Tokyo".to_string(),
            remote: true,
            skills: vec!["PMO".to_string()],
            industries: Vec::new(),
            available_from: "2024-05-01".to_string(),
            engagement_length: "6 months".to_string(),
            bio: "bio".to_string(),
            contact: "c@example.com".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_new_is_created_at_descending() {
        let projects = vec![
            project("old", "2024-02-01", 0, "2024-05-01"),
            project("new", "2024-03-15", 0, "2024-05-01"),
            project("mid", "2024-03-01", 0, "2024-05-01"),
        ];
        let sorted = sort_projects(&projects, ProjectSort::New);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_rate_high_descending() {
        let projects = vec![
            project("a", "2024-03-01", 800000, "2024-05-01"),
            project("b", "2024-03-01", 1300000, "2024-05-01"),
            project("c", "2024-03-01", 900000, "2024-05-01"),
        ];
        let sorted = sort_projects(&projects, ProjectSort::RateHigh);
        for pair in sorted.windows(2) {
            assert!(pair[0].rate_upper >= pair[1].rate_upper);
        }
        assert_eq!(sorted[0].id, "b");
    }

    #[test]
    fn test_start_soon_ascending() {
        let projects = vec![
            project("late", "2024-03-01", 0, "2024-07-01"),
            project("soon", "2024-03-01", 0, "2024-04-15"),
        ];
        let sorted = sort_projects(&projects, ProjectSort::StartSoon);
        assert_eq!(sorted[0].id, "soon");
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let projects = vec![
            project("first", "2024-03-01", 900000, "2024-05-01"),
            project("second", "2024-03-01", 900000, "2024-05-01"),
            project("third", "2024-03-01", 900000, "2024-05-01"),
        ];
        let sorted = sort_projects(&projects, ProjectSort::RateHigh);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let projects = vec![
            project("a", "2024-02-01", 0, "2024-05-01"),
            project("b", "2024-03-01", 0, "2024-05-01"),
        ];
        let _ = sort_projects(&projects, ProjectSort::New);
        assert_eq!(projects[0].id, "a");
    }

    #[test]
    fn test_consultant_rate_low_ascending() {
        let consultants = vec![
            consultant("pricey", "2024-03-01", 1500000, 10),
            consultant("value", "2024-03-01", 700000, 10),
        ];
        let sorted = sort_consultants(&consultants, ConsultantSort::RateLow);
        assert_eq!(sorted[0].id, "value");
    }

    #[test]
    fn test_consultant_experience_descending() {
        let consultants = vec![
            consultant("junior", "2024-03-01", 700000, 3),
            consultant("senior", "2024-03-01", 700000, 20),
        ];
        let sorted = sort_consultants(&consultants, ConsultantSort::Experience);
        assert_eq!(sorted[0].id, "senior");
    }
}
