//! Validation layer: per-field rules and the submission form types.
//!
//! Validation failures are data, not errors: a map from field name to
//! message, empty when the form is valid.

mod forms;
mod rules;

use std::collections::BTreeMap;

/// Field name → error message. Empty means valid. BTreeMap keeps the
/// rendered order deterministic.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub use forms::{ConsultantForm, InquiryForm, ProjectForm};
pub use rules::{has_tags, has_text, in_range, is_email};
