//! Validation Layer Tests
//!
//! Tests for invariants:
//! - rules evaluate independently; every failing field is reported
//! - the project rate-upper bound is validated against the submitted
//!   rate-lower value
//! - entities are only constructed from forms whose error map is empty
//! - build() synthesizes a fresh unique id and a creation timestamp

use consultbridge::model::{RateType, TargetType, WorkStyle};
use consultbridge::validate::{ConsultantForm, InquiryForm, ProjectForm};

// =============================================================================
// Test Utilities
// =============================================================================

fn consultant_form() -> ConsultantForm {
    ConsultantForm {
        name: "Sato Kenji".to_string(),
        experience_years: 12.0,
        preferred_rate_type: RateType::Monthly,
        preferred_rate_amount: 1000000.0,
        preferred_utilization: 60.0,
        base_location: "東京都".to_string(),
        remote: true,
        skills: vec!["PMO".to_string(), "戦略".to_string()],
        industries: vec!["製造".to_string()],
        available_from: "2024-05-01".to_string(),
        engagement_length: "6ヶ月〜".to_string(),
        bio: "プログラムマネジメントが専門".to_string(),
        contact: "sato@example.com".to_string(),
    }
}

fn project_form() -> ProjectForm {
    ProjectForm {
        title: "基幹システム刷新PMO支援".to_string(),
        company_name: "三協精機株式会社".to_string(),
        description: "ERP移行プロジェクトのPMO支援".to_string(),
        required_skills: vec!["PMO".to_string()],
        nice_to_have_skills: vec!["SAP".to_string()],
        role: "PMO".to_string(),
        utilization: 80.0,
        rate_lower: 1000000.0,
        rate_upper: 1300000.0,
        engagement_length: "12ヶ月".to_string(),
        start_date: "2024-06-01".to_string(),
        work_style: WorkStyle::Hybrid,
        location: "東京都".to_string(),
        industry: "製造".to_string(),
        contact_email: "recruit@example.com".to_string(),
    }
}

// =============================================================================
// Cross-field rate rule
// =============================================================================

#[test]
fn test_rate_upper_below_lower_errors_on_rate_upper() {
    let mut form = project_form();
    form.rate_lower = 800000.0;
    form.rate_upper = 500000.0;

    let errors = form.validate();

    assert!(errors.contains_key("rateUpper"));
    assert!(!errors.contains_key("rateLower"));
}

#[test]
fn test_rate_upper_equal_to_lower_is_valid() {
    let mut form = project_form();
    form.rate_lower = 800000.0;
    form.rate_upper = 800000.0;

    assert!(form.validate().is_empty());
}

#[test]
fn test_rate_lower_below_floor_is_rejected() {
    let mut form = project_form();
    form.rate_lower = 50000.0;

    assert!(form.validate().contains_key("rateLower"));
}

// =============================================================================
// Independent evaluation
// =============================================================================

#[test]
fn test_every_failing_field_is_reported() {
    let mut form = project_form();
    form.title = String::new();
    form.required_skills = Vec::new();
    form.utilization = 5.0;
    form.contact_email = "not-an-email".to_string();

    let errors = form.validate();

    assert_eq!(errors.len(), 4);
    assert!(errors.contains_key("title"));
    assert!(errors.contains_key("requiredSkills"));
    assert!(errors.contains_key("utilization"));
    assert!(errors.contains_key("contactEmail"));
}

#[test]
fn test_valid_forms_have_empty_error_maps() {
    assert!(consultant_form().validate().is_empty());
    assert!(project_form().validate().is_empty());
}

// =============================================================================
// Field rules
// =============================================================================

#[test]
fn test_email_shape_is_enforced() {
    let mut form = consultant_form();
    for bad in ["plainaddress", "missing@tld", "@no-local.com "] {
        form.contact = bad.to_string();
        assert!(
            form.validate().contains_key("contact"),
            "'{}' should be rejected",
            bad
        );
    }

    form.contact = "valid@example.co.jp".to_string();
    assert!(!form.validate().contains_key("contact"));
}

#[test]
fn test_skills_must_be_non_empty() {
    let mut form = consultant_form();
    form.skills = Vec::new();

    assert!(form.validate().contains_key("skills"));
}

#[test]
fn test_experience_upper_bound() {
    let mut form = consultant_form();
    form.experience_years = 51.0;
    assert!(form.validate().contains_key("experienceYears"));

    form.experience_years = 0.0;
    assert!(!form.validate().contains_key("experienceYears"));
}

#[test]
fn test_non_finite_numbers_are_rejected() {
    let mut form = consultant_form();
    form.preferred_utilization = f64::NAN;

    assert!(form.validate().contains_key("preferredUtilization"));
}

// =============================================================================
// Entity construction
// =============================================================================

#[test]
fn test_build_fails_with_the_error_map() {
    let mut form = consultant_form();
    form.name = String::new();

    let errors = form.build().unwrap_err();
    assert!(errors.contains_key("name"));
}

#[test]
fn test_build_synthesizes_unique_ids() {
    let first = consultant_form().build().unwrap();
    let second = consultant_form().build().unwrap();

    assert_ne!(first.id, second.id);
    assert!(!first.created_at.is_empty());
}

#[test]
fn test_built_consultant_upholds_skill_invariant() {
    let consultant = consultant_form().build().unwrap();
    assert!(!consultant.skills.is_empty());
}

#[test]
fn test_built_project_upholds_rate_invariant() {
    let project = project_form().build().unwrap();
    assert!(project.rate_lower <= project.rate_upper);
    assert_eq!(project.masked_company, "三-***");
}

#[test]
fn test_inquiry_email_shape_is_enforced() {
    let form = InquiryForm {
        target_id: "p1".to_string(),
        target_type: TargetType::Project,
        name: "Tanaka".to_string(),
        email: "not-an-email".to_string(),
        message: "Still open?".to_string(),
    };

    assert!(form.validate().contains_key("email"));
}
