//! In-memory record store with write-through snapshot persistence.
//!
//! # Responsibility
//! - Own the ordered roster and enforce its uniqueness invariant.
//! - Write one full snapshot per successful mutation.
//!
//! # Invariants
//! - At most one record per `student_id` at any time.
//! - `replace` preserves the record's insertion position.
//! - Rejected mutations leave both the roster and the snapshot untouched.
//! - A snapshot save failure never rolls back the in-memory mutation; the
//!   next successful mutation rewrites the full snapshot.

use crate::model::student::{Student, StudentValidationError};
use crate::repo::snapshot_repo::{SnapshotError, SnapshotRepository};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation error for the record store.
#[derive(Debug)]
pub enum StoreError {
    Validation(StudentValidationError),
    /// Insert targeted an id that is already enrolled.
    DuplicateId(String),
    /// Replace/remove targeted an id absent from the roster.
    NotFound(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "student already enrolled: {id}"),
            Self::NotFound(id) => write!(f, "student not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) | Self::NotFound(_) => None,
        }
    }
}

impl From<StudentValidationError> for StoreError {
    fn from(value: StudentValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Ordered roster store backed by a snapshot repository.
pub struct StudentStore<S: SnapshotRepository> {
    students: Vec<Student>,
    snapshots: S,
}

impl<S: SnapshotRepository> StudentStore<S> {
    /// Opens the store, loading the prior snapshot exactly once.
    ///
    /// A missing snapshot yields an empty roster.
    pub fn open(snapshots: S) -> Result<Self, SnapshotError> {
        let students = snapshots.load()?;
        info!(
            "event=roster_load module=repo status=ok count={}",
            students.len()
        );
        Ok(Self {
            students,
            snapshots,
        })
    }

    /// Returns the number of enrolled records.
    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Returns a snapshot copy of the roster in insertion order.
    ///
    /// Callers never observe later store mutations through the copy.
    pub fn list(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Finds one record by its exact id.
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students
            .iter()
            .find(|student| student.student_id == id)
    }

    /// Appends a validated record at the end of the insertion order.
    pub fn insert(&mut self, student: Student) -> StoreResult<()> {
        student.validate()?;
        if self.find_by_id(&student.student_id).is_some() {
            return Err(StoreError::DuplicateId(student.student_id));
        }

        self.students.push(student);
        self.persist("insert");
        Ok(())
    }

    /// Replaces the record with the same id, keeping its position.
    pub fn replace(&mut self, student: Student) -> StoreResult<()> {
        student.validate()?;
        let Some(position) = self
            .students
            .iter()
            .position(|existing| existing.student_id == student.student_id)
        else {
            return Err(StoreError::NotFound(student.student_id));
        };

        self.students[position] = student;
        self.persist("replace");
        Ok(())
    }

    /// Removes one record by id, returning it.
    pub fn remove_by_id(&mut self, id: &str) -> StoreResult<Student> {
        let Some(position) = self
            .students
            .iter()
            .position(|student| student.student_id == id)
        else {
            return Err(StoreError::NotFound(id.to_string()));
        };

        let removed = self.students.remove(position);
        self.persist("remove");
        Ok(removed)
    }

    // Best-effort write-through: the in-memory mutation already succeeded,
    // so a failed save is logged and the operation still reports success.
    fn persist(&self, op: &str) {
        if let Err(err) = self.snapshots.save(&self.students) {
            error!(
                "event=snapshot_save module=repo status=error op={op} count={} error={err}",
                self.students.len()
            );
        }
    }
}
