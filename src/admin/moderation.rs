//! Moderation edits.
//!
//! The admin surface edits a fixed subset of fields; everything else
//! on the stored record is preserved. An edit against an id that no
//! longer exists is reported as not-applied rather than failing, so a
//! stale admin view cannot crash the session.

use serde::Deserialize;

use crate::model::Rate;
use crate::store::{KvBackend, Store, StoreResult};

/// The consultant fields the admin surface may change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantEdit {
    pub id: String,
    pub name: String,
    pub preferred_rate: Rate,
    pub preferred_utilization: u32,
    pub contact: String,
}

/// The project fields the admin surface may change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEdit {
    pub id: String,
    pub title: String,
    pub rate_lower: u64,
    pub rate_upper: u64,
    pub utilization: u32,
    pub contact: String,
}

/// Apply a consultant edit. Returns whether a record was changed.
pub fn edit_consultant<B: KvBackend>(
    store: &Store<B>,
    edit: ConsultantEdit,
) -> StoreResult<bool> {
    let Some(mut existing) = store.consultants().get(&edit.id) else {
        return Ok(false);
    };
    existing.name = edit.name;
    existing.preferred_rate = edit.preferred_rate;
    existing.preferred_utilization = edit.preferred_utilization;
    existing.contact = edit.contact;
    store.consultants().update(existing)?;
    Ok(true)
}

/// Apply a project edit. Returns whether a record was changed.
pub fn edit_project<B: KvBackend>(store: &Store<B>, edit: ProjectEdit) -> StoreResult<bool> {
    let Some(mut existing) = store.projects().get(&edit.id) else {
        return Ok(false);
    };
    existing.title = edit.title;
    existing.rate_lower = edit.rate_lower;
    existing.rate_upper = edit.rate_upper;
    existing.utilization = edit.utilization;
    existing.contact = edit.contact;
    store.projects().update(existing)?;
    Ok(true)
}
