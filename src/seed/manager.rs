//! Seed & version gate.
//!
//! A one-shot migration gate keyed by a version string: a marker
//! mismatch always triggers a full replace of the seeded collections,
//! never an incremental patch.

use crate::model::{Consultant, Inquiry, Project};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::store::{KvBackend, Store};

use super::errors::SeedResult;
use super::source::FixtureSource;

/// Version of the canonical dataset. Bumping this forces a reseed on
/// next start.
pub const DATA_VERSION: &str = "2024-03-25";

/// Fixture document holding the consultant list
pub const CONSULTANTS_FIXTURE: &str = "consultants.json";

/// Fixture document holding the project list
pub const PROJECTS_FIXTURE: &str = "projects.json";

/// What the seed gate did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Marker matched; nothing was read or written
    UpToDate,
    /// Collections were replaced from fixtures and the marker updated
    Seeded,
}

/// Ensures the store holds the current canonical dataset.
pub struct SeedManager<'a, B: KvBackend> {
    store: &'a Store<B>,
}

impl<'a, B: KvBackend> SeedManager<'a, B> {
    /// Create a manager over the given store.
    pub fn new(store: &'a Store<B>) -> Self {
        Self { store }
    }

    /// Seed the store unless the persisted marker already matches
    /// [`DATA_VERSION`].
    ///
    /// Both fixture documents are loaded and decoded before the first
    /// write, so a failure leaves prior persisted state untouched. On
    /// success the consultants and projects collections are replaced,
    /// inquiries reset to empty, and the marker written last.
    pub fn ensure_seeded(&self, source: &dyn FixtureSource) -> SeedResult<SeedOutcome> {
        if self.store.version_marker().as_deref() == Some(DATA_VERSION) {
            log_event(Event::SeedSkip);
            return Ok(SeedOutcome::UpToDate);
        }

        log_event_with_fields(Event::SeedStart, &[("version", DATA_VERSION)]);

        match self.replace_from_fixtures(source) {
            Ok(()) => {
                log_event_with_fields(Event::SeedComplete, &[("version", DATA_VERSION)]);
                Ok(SeedOutcome::Seeded)
            }
            Err(e) => {
                log_event_with_fields(Event::SeedFailed, &[("reason", &e.to_string())]);
                Err(e)
            }
        }
    }

    fn replace_from_fixtures(&self, source: &dyn FixtureSource) -> SeedResult<()> {
        let consultants = load_fixture::<Consultant>(source, CONSULTANTS_FIXTURE)?;
        let projects = load_fixture::<Project>(source, PROJECTS_FIXTURE)?;

        self.store.consultants().replace_all(&consultants)?;
        self.store.projects().replace_all(&projects)?;
        self.store.inquiries().replace_all(&Vec::<Inquiry>::new())?;
        self.store.set_version_marker(DATA_VERSION)?;
        Ok(())
    }
}

fn load_fixture<T: serde::de::DeserializeOwned>(
    source: &dyn FixtureSource,
    name: &str,
) -> SeedResult<Vec<T>> {
    let bytes = source.load(name)?;
    serde_json::from_slice(&bytes).map_err(|e| super::errors::SeedError::Malformed {
        name: name.to_string(),
        source: e,
    })
}
