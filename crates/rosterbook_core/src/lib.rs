//! Core domain logic for RosterBook.
//! This crate is the single source of truth for roster invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{Field, Student, StudentValidationError};
pub use repo::snapshot_repo::{
    SnapshotError, SnapshotRepository, SnapshotResult, SqliteSnapshotRepository, ROSTER_SLOT,
};
pub use repo::student_store::{StoreError, StoreResult, StudentStore};
pub use service::roster_service::{
    FormState, Mode, Notice, RosterError, RosterResult, RosterService,
};
pub use view::table::{build_table_view, TableQuery, TableView, PAGE_SIZE};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
