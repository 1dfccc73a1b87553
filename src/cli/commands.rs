//! CLI command implementations.
//!
//! Commands are thin: open the store, call the subsystem, print one
//! JSON line. All semantics live in the library modules.

use std::path::Path;

use serde_json::json;

use crate::admin::{
    edit_consultant, edit_project, monthly_stats, AdminGate, ConsultantEdit, ProjectEdit,
};
use crate::query::{
    filter_consultants, filter_projects, paginate, sort_consultants, sort_projects,
    ConsultantQuery, ProjectQuery,
};
use crate::seed::{DirFixtureSource, SeedManager, SeedOutcome, DATA_VERSION};
use crate::store::{DirBackend, KvBackend, Store};
use crate::validate::{ConsultantForm, FieldErrors, InquiryForm, ProjectForm};

use super::args::{AdminAction, Cli, CollectionArg, Command, RegisterTarget, SearchTarget};
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_error, write_json};

/// Results per page on both search surfaces
const PAGE_SIZE: usize = 6;

/// Months shown on the stats dashboard when none are requested
const DEFAULT_STATS_MONTHS: [&str; 5] =
    ["2024-02", "2024-03", "2024-04", "2024-05", "2024-06"];

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cli: Cli) -> CliResult<()> {
    let backend = DirBackend::open(&cli.data_dir)?;
    let store = Store::new(backend);

    match cli.command {
        Command::Seed { fixtures } => seed(&store, &fixtures),
        Command::Search { target } => search(&store, target),
        Command::Register { target } => register(&store, target),
        Command::Inquire {
            target_type,
            target_id,
            name,
            email,
            message,
        } => inquire(
            &store,
            InquiryForm {
                target_id,
                target_type: target_type.into(),
                name,
                email,
                message,
            },
        ),
        Command::Admin { passcode, action } => admin(&store, &passcode, action),
    }
}

/// Run the seed gate against a fixtures directory.
fn seed<B: KvBackend>(store: &Store<B>, fixtures: &Path) -> CliResult<()> {
    let source = DirFixtureSource::new(fixtures);
    let outcome = SeedManager::new(store).ensure_seeded(&source)?;
    write_json(&json!({
        "seeded": matches!(outcome, SeedOutcome::Seeded),
        "version": DATA_VERSION,
    }))
}

/// Filter, sort, and paginate one of the search surfaces.
fn search<B: KvBackend>(store: &Store<B>, target: SearchTarget) -> CliResult<()> {
    match target {
        SearchTarget::Projects {
            keyword,
            role,
            skills,
            rate_min,
            rate_max,
            utilization,
            work_style,
            industry,
            sort,
            page,
        } => {
            let query = ProjectQuery {
                keyword,
                role,
                skills,
                rate_min,
                rate_max,
                utilization,
                work_style: work_style.map(Into::into),
                industry,
            };
            let filtered = filter_projects(&store.projects().list(), &query);
            let sorted = sort_projects(&filtered, sort.into());
            let result = paginate(&sorted, page, PAGE_SIZE);
            write_json(&json!({
                "items": serde_json::to_value(&result.items)?,
                "page": page,
                "totalPages": result.total_pages,
                "totalItems": sorted.len(),
            }))
        }
        SearchTarget::Consultants {
            keyword,
            skills,
            experience,
            rate_max,
            utilization,
            location,
            remote,
            industry,
            sort,
            page,
        } => {
            let query = ConsultantQuery {
                keyword,
                skills,
                experience,
                rate_max,
                utilization,
                location,
                remote,
                industry,
            };
            let filtered = filter_consultants(&store.consultants().list(), &query);
            let sorted = sort_consultants(&filtered, sort.into());
            let result = paginate(&sorted, page, PAGE_SIZE);
            write_json(&json!({
                "items": serde_json::to_value(&result.items)?,
                "page": page,
                "totalPages": result.total_pages,
                "totalItems": sorted.len(),
            }))
        }
    }
}

/// Validate a submitted form document and add the entity.
fn register<B: KvBackend>(store: &Store<B>, target: RegisterTarget) -> CliResult<()> {
    match target {
        RegisterTarget::Consultant { file } => {
            let form: ConsultantForm = read_document(&file)?;
            match form.build() {
                Ok(consultant) => {
                    let id = consultant.id.clone();
                    store.consultants().add(consultant)?;
                    write_json(&json!({"registered": "consultant", "id": id}))
                }
                Err(errors) => fail_validation(errors),
            }
        }
        RegisterTarget::Project { file } => {
            let form: ProjectForm = read_document(&file)?;
            match form.build() {
                Ok(project) => {
                    let id = project.id.clone();
                    store.projects().add(project)?;
                    write_json(&json!({"registered": "project", "id": id}))
                }
                Err(errors) => fail_validation(errors),
            }
        }
    }
}

/// Validate and record an inquiry. The target id is a soft reference
/// and is stored as given.
fn inquire<B: KvBackend>(store: &Store<B>, form: InquiryForm) -> CliResult<()> {
    match form.build() {
        Ok(inquiry) => {
            let id = inquiry.id.clone();
            let target_id = inquiry.target_id.clone();
            store.inquiries().add(inquiry)?;
            write_json(&json!({"inquiryId": id, "targetId": target_id}))
        }
        Err(errors) => fail_validation(errors),
    }
}

/// Gate, then run one administrative action.
fn admin<B: KvBackend>(store: &Store<B>, passcode: &str, action: AdminAction) -> CliResult<()> {
    let mut gate = AdminGate::new();
    if !gate.unlock(passcode) {
        return Err(CliError::PasscodeRejected);
    }

    match action {
        AdminAction::List { collection } => match collection {
            CollectionArg::Consultants => {
                write_json(&serde_json::to_value(store.consultants().list())?)
            }
            CollectionArg::Projects => {
                write_json(&serde_json::to_value(store.projects().list())?)
            }
            CollectionArg::Inquiries => {
                write_json(&serde_json::to_value(store.inquiries().list())?)
            }
        },
        AdminAction::Stats { months } => {
            let months = if months.is_empty() {
                DEFAULT_STATS_MONTHS.map(String::from).to_vec()
            } else {
                months
            };
            let month_refs: Vec<&str> = months.iter().map(String::as_str).collect();
            let stats = monthly_stats(
                &month_refs,
                &store.consultants().list(),
                &store.projects().list(),
                &store.inquiries().list(),
            );
            write_json(&serde_json::to_value(stats)?)
        }
        AdminAction::Delete { collection, id } => {
            match collection {
                CollectionArg::Consultants => store.consultants().remove(&id)?,
                CollectionArg::Projects => store.projects().remove(&id)?,
                CollectionArg::Inquiries => store.inquiries().remove(&id)?,
            }
            write_json(&json!({"deleted": id}))
        }
        AdminAction::EditConsultant { file } => {
            let edit: ConsultantEdit = read_document(&file)?;
            let applied = edit_consultant(store, edit)?;
            write_json(&json!({"applied": applied}))
        }
        AdminAction::EditProject { file } => {
            let edit: ProjectEdit = read_document(&file)?;
            let applied = edit_project(store, edit)?;
            write_json(&json!({"applied": applied}))
        }
    }
}

/// Print the per-field error map, then fail the command.
fn fail_validation(errors: FieldErrors) -> CliResult<()> {
    let count = errors.len();
    write_error(&json!({
        "error": "validation_failed",
        "fields": errors,
    }))?;
    Err(CliError::Validation(count))
}
