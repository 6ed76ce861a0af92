//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod history_repo;
pub mod project_repo;
pub mod team_roster_repo;

pub use history_repo::HistoryRepo;
pub use project_repo::ProjectRepo;
pub use team_roster_repo::TeamRosterRepo;
