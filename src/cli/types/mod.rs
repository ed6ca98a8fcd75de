//! Type-safe wrappers and enums for football-data.org requests.

pub mod competition;
pub mod ids;
pub mod report;

pub use competition::{competition_identifier, resolve_alias, Competition, COMPETITION_ALIASES};
pub use ids::{ApiToken, CompetitionId};
pub use report::{CommandSelection, ReportKind, TeamFilter};
