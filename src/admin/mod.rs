//! Administrative surface: passcode gate, moderation edits, and
//! dashboard statistics.

mod gate;
mod moderation;
mod stats;

pub use gate::{AdminGate, PASSCODE};
pub use moderation::{edit_consultant, edit_project, ConsultantEdit, ProjectEdit};
pub use stats::{monthly_stats, MonthlyStat};
