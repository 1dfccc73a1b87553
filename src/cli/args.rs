//! CLI argument definitions using clap
//!
//! Commands:
//! - consultbridge seed [--fixtures <dir>]
//! - consultbridge search projects|consultants [criteria...]
//! - consultbridge register consultant|project --file <json>
//! - consultbridge inquire --target-type <t> --target-id <id> ...
//! - consultbridge admin --passcode <code> <action>

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::{TargetType, WorkStyle};
use crate::query::{ConsultantSort, ProjectSort};

/// ConsultBridge - a local-first marketplace directory
#[derive(Parser, Debug)]
#[command(name = "consultbridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory for persisted collections
    #[arg(long, global = true, default_value = "./data")]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Seed the store from fixture documents if the dataset version changed
    Seed {
        /// Directory holding consultants.json and projects.json
        #[arg(long, default_value = "./mock")]
        fixtures: PathBuf,
    },

    /// Search a collection: filter, sort, paginate
    Search {
        #[command(subcommand)]
        target: SearchTarget,
    },

    /// Register a new entity from a form document
    Register {
        #[command(subcommand)]
        target: RegisterTarget,
    },

    /// Record an inquiry about a project or a consultant
    Inquire {
        #[arg(long, value_enum)]
        target_type: TargetTypeArg,
        #[arg(long)]
        target_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },

    /// Administrative maintenance (passcode required)
    Admin {
        #[arg(long)]
        passcode: String,
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum SearchTarget {
    /// Search projects
    Projects {
        /// Substring match against title or description
        #[arg(long)]
        keyword: Option<String>,
        /// Exact role category
        #[arg(long)]
        role: Option<String>,
        /// Required skill tag; repeat for more than one
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        rate_min: Option<u64>,
        #[arg(long)]
        rate_max: Option<u64>,
        /// Minimum utilization target
        #[arg(long)]
        utilization: Option<u32>,
        #[arg(long, value_enum)]
        work_style: Option<WorkStyleArg>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long, value_enum, default_value = "new")]
        sort: ProjectSortArg,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Search consultants
    Consultants {
        /// Substring match against name or bio
        #[arg(long)]
        keyword: Option<String>,
        /// Required skill tag; repeat for more than one
        #[arg(long = "skill")]
        skills: Vec<String>,
        /// Minimum years of experience
        #[arg(long)]
        experience: Option<u32>,
        /// Maximum preferred rate amount
        #[arg(long)]
        rate_max: Option<u64>,
        /// Minimum preferred utilization
        #[arg(long)]
        utilization: Option<u32>,
        /// Exact base location
        #[arg(long)]
        location: Option<String>,
        /// Remote-capable flag; omit to leave unconstrained
        #[arg(long)]
        remote: Option<bool>,
        #[arg(long)]
        industry: Option<String>,
        #[arg(long, value_enum, default_value = "new")]
        sort: ConsultantSortArg,
        /// 1-based page number
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegisterTarget {
    /// Register a consultant from a form document
    Consultant {
        /// Path to the form JSON
        #[arg(long)]
        file: PathBuf,
    },
    /// Register a project from a form document
    Project {
        /// Path to the form JSON
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum AdminAction {
    /// List a collection in insertion order
    List {
        #[arg(long, value_enum)]
        collection: CollectionArg,
    },
    /// Monthly registration counts
    Stats {
        /// Month prefix (YYYY-MM); repeat for more than one
        #[arg(long = "month")]
        months: Vec<String>,
    },
    /// Delete a record by id
    Delete {
        #[arg(long, value_enum)]
        collection: CollectionArg,
        #[arg(long)]
        id: String,
    },
    /// Apply a consultant edit from an edit document
    EditConsultant {
        #[arg(long)]
        file: PathBuf,
    },
    /// Apply a project edit from an edit document
    EditProject {
        #[arg(long)]
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum WorkStyleArg {
    Remote,
    Onsite,
    Hybrid,
}

impl From<WorkStyleArg> for WorkStyle {
    fn from(arg: WorkStyleArg) -> Self {
        match arg {
            WorkStyleArg::Remote => WorkStyle::Remote,
            WorkStyleArg::Onsite => WorkStyle::Onsite,
            WorkStyleArg::Hybrid => WorkStyle::Hybrid,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TargetTypeArg {
    Project,
    Consultant,
}

impl From<TargetTypeArg> for TargetType {
    fn from(arg: TargetTypeArg) -> Self {
        match arg {
            TargetTypeArg::Project => TargetType::Project,
            TargetTypeArg::Consultant => TargetType::Consultant,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProjectSortArg {
    New,
    RateHigh,
    StartSoon,
}

impl From<ProjectSortArg> for ProjectSort {
    fn from(arg: ProjectSortArg) -> Self {
        match arg {
            ProjectSortArg::New => ProjectSort::New,
            ProjectSortArg::RateHigh => ProjectSort::RateHigh,
            ProjectSortArg::StartSoon => ProjectSort::StartSoon,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConsultantSortArg {
    New,
    RateLow,
    Experience,
}

impl From<ConsultantSortArg> for ConsultantSort {
    fn from(arg: ConsultantSortArg) -> Self {
        match arg {
            ConsultantSortArg::New => ConsultantSort::New,
            ConsultantSortArg::RateLow => ConsultantSort::RateLow,
            ConsultantSortArg::Experience => ConsultantSort::Experience,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollectionArg {
    Consultants,
    Projects,
    Inquiries,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
