//! Seed & Version Gate Tests
//!
//! Tests for invariants:
//! - a matching version marker skips fixture access entirely and
//!   leaves the persisted snapshots byte-identical
//! - a marker mismatch replaces consultants and projects wholesale and
//!   resets inquiries to empty
//! - any fixture failure leaves prior persisted state untouched

use std::cell::RefCell;

use consultbridge::model::{Consultant, Inquiry, Project, Rate, RateType, TargetType, WorkStyle};
use consultbridge::seed::{
    FixtureSource, SeedError, SeedManager, SeedOutcome, SeedResult, StaticFixtureSource,
    CONSULTANTS_FIXTURE, DATA_VERSION, PROJECTS_FIXTURE,
};
use consultbridge::store::{MemoryBackend, Store};

// =============================================================================
// Test Utilities
// =============================================================================

fn consultant(id: &str) -> Consultant {
    Consultant {
        id: id.to_string(),
        name: "Sato Kenji".to_string(),
        experience_years: 12,
        preferred_rate: Rate {
            rate_type: RateType::Monthly,
            amount: 1000000,
        },
        preferred_utilization: 60,
        base_location: "東京都".to_string(),
        remote: true,
        skills: vec!["PMO".to_string()],
        industries: vec!["製造".to_string()],
        available_from: "2024-05-01".to_string(),
        engagement_length: "6ヶ月〜".to_string(),
        bio: "bio".to_string(),
        contact: "sato@example.com".to_string(),
        created_at: "2024-03-10".to_string(),
    }
}

fn project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "案件".to_string(),
        company: "Acme".to_string(),
        masked_company: "A-***".to_string(),
        description: "description".to_string(),
        required_skills: vec!["SQL".to_string()],
        nice_to_have_skills: Vec::new(),
        role: "PM".to_string(),
        utilization: 80,
        rate_lower: 700000,
        rate_upper: 900000,
        engagement_length: "6ヶ月".to_string(),
        start_date: "2024-05-01".to_string(),
        work_style: WorkStyle::Remote,
        location: "東京都".to_string(),
        industry: "小売".to_string(),
        contact: "pm@example.com".to_string(),
        created_at: "2024-03-01".to_string(),
    }
}

fn inquiry(id: &str) -> Inquiry {
    Inquiry {
        id: id.to_string(),
        target_id: "p1".to_string(),
        target_type: TargetType::Project,
        name: "Tanaka".to_string(),
        email: "tanaka@example.com".to_string(),
        message: "interested".to_string(),
        created_at: "2024-03-05T10:15:00.000Z".to_string(),
    }
}

fn fixtures(consultants: &[Consultant], projects: &[Project]) -> StaticFixtureSource {
    StaticFixtureSource::new()
        .with_document(
            CONSULTANTS_FIXTURE,
            serde_json::to_vec(consultants).unwrap(),
        )
        .with_document(PROJECTS_FIXTURE, serde_json::to_vec(projects).unwrap())
}

/// Wraps a source and counts how many documents were requested.
struct CountingSource {
    inner: StaticFixtureSource,
    loads: RefCell<usize>,
}

impl CountingSource {
    fn new(inner: StaticFixtureSource) -> Self {
        Self {
            inner,
            loads: RefCell::new(0),
        }
    }

    fn loads(&self) -> usize {
        *self.loads.borrow()
    }
}

impl FixtureSource for CountingSource {
    fn load(&self, name: &str) -> SeedResult<Vec<u8>> {
        *self.loads.borrow_mut() += 1;
        self.inner.load(name)
    }
}

// =============================================================================
// First seed
// =============================================================================

#[test]
fn test_first_seed_populates_all_collections() {
    let store = Store::new(MemoryBackend::new());
    let source = fixtures(&[consultant("c1"), consultant("c2")], &[project("p1")]);

    let outcome = SeedManager::new(&store).ensure_seeded(&source).unwrap();

    assert_eq!(outcome, SeedOutcome::Seeded);
    assert_eq!(store.consultants().list().len(), 2);
    assert_eq!(store.projects().list().len(), 1);
    assert!(store.inquiries().list().is_empty());
    assert_eq!(store.version_marker().as_deref(), Some(DATA_VERSION));
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn test_second_seed_performs_no_fixture_access() {
    let store = Store::new(MemoryBackend::new());
    let source = CountingSource::new(fixtures(&[consultant("c1")], &[project("p1")]));

    SeedManager::new(&store).ensure_seeded(&source).unwrap();
    let loads_after_first = source.loads();
    assert_eq!(loads_after_first, 2);

    let outcome = SeedManager::new(&store).ensure_seeded(&source).unwrap();

    assert_eq!(outcome, SeedOutcome::UpToDate);
    assert_eq!(source.loads(), loads_after_first, "no further fixture loads");
}

#[test]
fn test_second_seed_leaves_snapshots_byte_identical() {
    let store = Store::new(MemoryBackend::new());
    let source = fixtures(&[consultant("c1")], &[project("p1")]);

    SeedManager::new(&store).ensure_seeded(&source).unwrap();

    // user data written after the first seed must also survive
    store.inquiries().add(inquiry("i1")).unwrap();

    let before: Vec<Option<String>> = [
        "consultbridge:consultants",
        "consultbridge:projects",
        "consultbridge:inquiries",
        "consultbridge:version",
    ]
    .iter()
    .map(|key| store.backend().raw(key))
    .collect();

    SeedManager::new(&store).ensure_seeded(&source).unwrap();

    let after: Vec<Option<String>> = [
        "consultbridge:consultants",
        "consultbridge:projects",
        "consultbridge:inquiries",
        "consultbridge:version",
    ]
    .iter()
    .map(|key| store.backend().raw(key))
    .collect();

    assert_eq!(before, after);
}

// =============================================================================
// Version mismatch
// =============================================================================

#[test]
fn test_stale_marker_triggers_full_replace() {
    let store = Store::new(MemoryBackend::new());
    store.consultants().replace_all(&[consultant("old")]).unwrap();
    store.inquiries().add(inquiry("i1")).unwrap();
    store.set_version_marker("2023-01-01").unwrap();

    let source = fixtures(&[consultant("c1")], &[project("p1")]);
    let outcome = SeedManager::new(&store).ensure_seeded(&source).unwrap();

    assert_eq!(outcome, SeedOutcome::Seeded);
    let consultants = store.consultants().list();
    assert_eq!(consultants.len(), 1);
    assert_eq!(consultants[0].id, "c1", "replace, not merge");
    assert!(store.inquiries().list().is_empty(), "inquiries reset");
    assert_eq!(store.version_marker().as_deref(), Some(DATA_VERSION));
}

// =============================================================================
// Failure atomicity
// =============================================================================

#[test]
fn test_missing_fixture_leaves_prior_state_untouched() {
    let store = Store::new(MemoryBackend::new());
    store.consultants().replace_all(&[consultant("old")]).unwrap();
    store.set_version_marker("2023-01-01").unwrap();

    // consultants fixture present, projects fixture missing
    let source = StaticFixtureSource::new().with_document(
        CONSULTANTS_FIXTURE,
        serde_json::to_vec(&[consultant("c1")]).unwrap(),
    );

    let err = SeedManager::new(&store).ensure_seeded(&source).unwrap_err();
    assert!(matches!(err, SeedError::FetchFailed { .. }));

    let consultants = store.consultants().list();
    assert_eq!(consultants.len(), 1);
    assert_eq!(consultants[0].id, "old");
    assert_eq!(store.version_marker().as_deref(), Some("2023-01-01"));
}

#[test]
fn test_malformed_fixture_leaves_prior_state_untouched() {
    let store = Store::new(MemoryBackend::new());
    store.projects().replace_all(&[project("old")]).unwrap();
    store.set_version_marker("2023-01-01").unwrap();

    let source = StaticFixtureSource::new()
        .with_document(CONSULTANTS_FIXTURE, "[]")
        .with_document(PROJECTS_FIXTURE, "{broken");

    let err = SeedManager::new(&store).ensure_seeded(&source).unwrap_err();
    assert!(matches!(err, SeedError::Malformed { .. }));

    assert_eq!(store.projects().list()[0].id, "old");
    assert_eq!(store.version_marker().as_deref(), Some("2023-01-01"));
}

#[test]
fn test_failed_seed_can_be_retried_explicitly() {
    let store = Store::new(MemoryBackend::new());

    let broken = StaticFixtureSource::new();
    assert!(SeedManager::new(&store).ensure_seeded(&broken).is_err());

    // a later call with a working source succeeds; nothing is cached
    let source = fixtures(&[consultant("c1")], &[project("p1")]);
    let outcome = SeedManager::new(&store).ensure_seeded(&source).unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded);
}
