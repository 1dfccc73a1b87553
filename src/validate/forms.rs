//! Submission forms and their validation.
//!
//! A form is the validated intermediate record between untrusted
//! input and a stored entity. `validate` reports every failing field
//! at once; `build` constructs the entity only from a form whose error
//! map came back empty, synthesizing the id and creation timestamp at
//! that point. Entities are never built from unvalidated input.

use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::model::{Consultant, Inquiry, Project, Rate, RateType, TargetType, WorkStyle};

use super::rules::{has_tags, has_text, in_range, is_email};
use super::FieldErrors;

/// Candidate consultant registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantForm {
    pub name: String,
    pub experience_years: f64,
    pub preferred_rate_type: RateType,
    pub preferred_rate_amount: f64,
    pub preferred_utilization: f64,
    pub base_location: String,
    pub remote: bool,
    pub skills: Vec<String>,
    #[serde(default)]
    pub industries: Vec<String>,
    pub available_from: String,
    #[serde(default)]
    pub engagement_length: String,
    pub bio: String,
    pub contact: String,
}

impl ConsultantForm {
    /// Evaluate every rule; an empty map means the form is valid.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !has_text(&self.name) {
            errors.insert("name", "name is required".to_string());
        }
        if !in_range(self.preferred_utilization, Some(10.0), Some(100.0)) {
            errors.insert(
                "preferredUtilization",
                "preferred utilization must be a number between 10 and 100".to_string(),
            );
        }
        if !in_range(self.preferred_rate_amount, Some(1000.0), None) {
            errors.insert(
                "preferredRateAmount",
                "preferred rate must be a number of at least 1000".to_string(),
            );
        }
        if !has_text(&self.base_location) {
            errors.insert("baseLocation", "base location is required".to_string());
        }
        if !has_tags(&self.skills) {
            errors.insert("skills", "at least one skill is required".to_string());
        }
        if !in_range(self.experience_years, Some(0.0), Some(50.0)) {
            errors.insert(
                "experienceYears",
                "experience years must be between 0 and 50".to_string(),
            );
        }
        if !has_text(&self.available_from) {
            errors.insert("availableFrom", "availability date is required".to_string());
        }
        if !has_text(&self.bio) {
            errors.insert("bio", "bio is required".to_string());
        }
        if !is_email(&self.contact) {
            errors.insert("contact", "enter a valid email address".to_string());
        }
        errors
    }

    /// Validate, then construct the entity with a fresh id and
    /// creation date.
    pub fn build(self) -> Result<Consultant, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Consultant {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            experience_years: self.experience_years as u32,
            preferred_rate: Rate {
                rate_type: self.preferred_rate_type,
                amount: self.preferred_rate_amount as u64,
            },
            preferred_utilization: self.preferred_utilization as u32,
            base_location: self.base_location,
            remote: self.remote,
            skills: dedup_tags(self.skills),
            industries: dedup_tags(self.industries),
            available_from: self.available_from,
            engagement_length: self.engagement_length,
            bio: self.bio,
            contact: self.contact,
            created_at: today(),
        })
    }
}

/// Candidate project registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectForm {
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub nice_to_have_skills: Vec<String>,
    pub role: String,
    pub utilization: f64,
    pub rate_lower: f64,
    pub rate_upper: f64,
    #[serde(default)]
    pub engagement_length: String,
    pub start_date: String,
    pub work_style: WorkStyle,
    pub location: String,
    #[serde(default)]
    pub industry: String,
    pub contact_email: String,
}

impl ProjectForm {
    /// Evaluate every rule; an empty map means the form is valid.
    ///
    /// The upper rate bound is checked against the submitted lower
    /// bound, so the lower bound's own rule runs first.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !has_text(&self.company_name) {
            errors.insert("companyName", "company name is required".to_string());
        }
        if !has_text(&self.contact_email) {
            errors.insert("contactEmail", "contact email is required".to_string());
        } else if !is_email(&self.contact_email) {
            errors.insert("contactEmail", "enter a valid email address".to_string());
        }
        if !has_text(&self.title) {
            errors.insert("title", "title is required".to_string());
        }
        if !has_text(&self.description) {
            errors.insert("description", "description is required".to_string());
        }
        if !has_text(&self.role) {
            errors.insert("role", "role is required".to_string());
        }
        if !has_tags(&self.required_skills) {
            errors.insert(
                "requiredSkills",
                "at least one required skill is needed".to_string(),
            );
        }
        if !in_range(self.utilization, Some(10.0), Some(100.0)) {
            errors.insert(
                "utilization",
                "utilization must be a number between 10 and 100".to_string(),
            );
        }
        if !in_range(self.rate_lower, Some(100000.0), None) {
            errors.insert(
                "rateLower",
                "rate lower bound must be a number of at least 100000".to_string(),
            );
        }
        if !in_range(self.rate_upper, Some(self.rate_lower), None) {
            errors.insert(
                "rateUpper",
                "rate upper bound must be at least the lower bound".to_string(),
            );
        }
        if !has_text(&self.location) {
            errors.insert("location", "location is required".to_string());
        }
        if !has_text(&self.start_date) {
            errors.insert("startDate", "start date is required".to_string());
        }
        errors
    }

    /// Validate, then construct the entity with a fresh id, the masked
    /// company label, and the creation date.
    pub fn build(self) -> Result<Project, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let masked_company = Project::mask_company(&self.company_name);
        Ok(Project {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            company: self.company_name,
            masked_company,
            description: self.description,
            required_skills: dedup_tags(self.required_skills),
            nice_to_have_skills: dedup_tags(self.nice_to_have_skills),
            role: self.role,
            utilization: self.utilization as u32,
            rate_lower: self.rate_lower as u64,
            rate_upper: self.rate_upper as u64,
            engagement_length: self.engagement_length,
            start_date: self.start_date,
            work_style: self.work_style,
            location: self.location,
            industry: self.industry,
            contact: self.contact_email,
            created_at: today(),
        })
    }
}

/// Candidate inquiry about a project or a consultant.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryForm {
    pub target_id: String,
    pub target_type: TargetType,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    /// Evaluate every rule; an empty map means the form is valid.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if !has_text(&self.name) {
            errors.insert("name", "name is required".to_string());
        }
        if !is_email(&self.email) {
            errors.insert("email", "enter a valid email address".to_string());
        }
        if !has_text(&self.message) {
            errors.insert("message", "message is required".to_string());
        }
        errors
    }

    /// Validate, then construct the entity with a fresh id and a full
    /// datetime stamp.
    ///
    /// The target id is taken as given: it is a soft reference and is
    /// not checked against the target collection.
    pub fn build(self) -> Result<Inquiry, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(Inquiry {
            id: Uuid::new_v4().to_string(),
            target_id: self.target_id,
            target_type: self.target_type,
            name: self.name,
            email: self.email,
            message: self.message,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

// Order-preserving dedup; tag sets disallow duplicates.
fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
