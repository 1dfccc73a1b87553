//! consultbridge - a local-first marketplace directory for consultants
//! and projects

pub mod admin;
pub mod cli;
pub mod model;
pub mod observability;
pub mod query;
pub mod seed;
pub mod store;
pub mod validate;
