//! Seeding: versioned population of the store from fixture documents.

mod errors;
mod manager;
mod source;

pub use errors::{SeedError, SeedResult};
pub use manager::{
    SeedManager, SeedOutcome, CONSULTANTS_FIXTURE, DATA_VERSION, PROJECTS_FIXTURE,
};
pub use source::{DirFixtureSource, FixtureSource, StaticFixtureSource};
