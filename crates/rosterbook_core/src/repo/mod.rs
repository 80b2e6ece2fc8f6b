//! Repository layer: the in-memory record store and its persistence seam.
//!
//! # Responsibility
//! - Define the snapshot persistence contract and its SQLite implementation.
//! - Own the ordered in-memory roster and its uniqueness invariant.
//!
//! # Invariants
//! - Store writes validate the record before admission.
//! - Every successful store mutation writes exactly one full snapshot;
//!   rejected mutations write none.

pub mod snapshot_repo;
pub mod student_store;
