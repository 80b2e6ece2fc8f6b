//! Roster use-case service and form-state machine.
//!
//! # Responsibility
//! - Provide enroll/search/update/delete entry points for callers.
//! - Own every mode transition of the enroll/update form state.
//! - Translate store signals into the user-facing error taxonomy.
//!
//! # Invariants
//! - `Mode::Update` always carries the id the draft was loaded under; that
//!   id, never the draft's, keys the replacement.
//! - No path leaves an Update-mode draft pointing at a missing id: such
//!   paths clear the form and revert to `Mode::Enroll` first.
//! - Store-layer `DuplicateId`/`NotFound` never leak past this boundary
//!   untranslated.

use crate::model::student::{Field, Student, StudentValidationError};
use crate::repo::snapshot_repo::{SnapshotError, SnapshotRepository};
use crate::repo::student_store::{StoreError, StudentStore};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form submission mode.
///
/// `Update` records the id the draft was loaded under, which doubles as
/// the tamper-proof replacement key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Enroll,
    Update {
        original_id: String,
    },
}

impl Mode {
    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }
}

/// Transient view-state owned by the caller.
///
/// The engine receives it by mutable borrow and performs every transition
/// itself; callers only render it and forward intents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// The record currently bound to the input form; may be incomplete.
    pub draft: Student,
    /// Contents of the search-by-id box.
    pub search_id: String,
    pub mode: Mode,
}

impl FormState {
    /// Clears the draft and search box and drops back to enroll mode.
    fn reset(&mut self) {
        self.draft = Student::empty();
        self.search_id.clear();
        self.mode = Mode::Enroll;
    }
}

/// Success outcome of an engine operation, carrying the display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Enrolled,
    Loaded,
    Updated,
    Deleted,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::Enrolled => "Student enrolled successfully",
            Self::Loaded => "Student loaded for update",
            Self::Updated => "Student updated successfully",
            Self::Deleted => "Student deleted successfully",
        };
        f.write_str(message)
    }
}

pub type RosterResult = Result<Notice, RosterError>;

/// User-facing, recoverable error taxonomy.
///
/// `Display` yields the exact message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A required field was blank after trimming.
    MissingField(Field),
    /// Enroll attempted with an id already present.
    IdAlreadyExists,
    /// Search attempted with a blank id.
    EmptyQuery,
    /// Search/update targeted an id absent from the store.
    NotFound,
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
            Self::IdAlreadyExists => f.write_str("Student ID already exists"),
            Self::EmptyQuery => f.write_str("Please enter Student ID"),
            Self::NotFound => f.write_str("Student not found"),
        }
    }
}

impl Error for RosterError {}

impl From<StudentValidationError> for RosterError {
    fn from(value: StudentValidationError) -> Self {
        match value {
            StudentValidationError::MissingField(field) => Self::MissingField(field),
        }
    }
}

impl From<StoreError> for RosterError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Validation(err) => err.into(),
            StoreError::DuplicateId(_) => Self::IdAlreadyExists,
            StoreError::NotFound(_) => Self::NotFound,
        }
    }
}

/// Roster engine facade over the record store.
pub struct RosterService<S: SnapshotRepository> {
    store: StudentStore<S>,
}

impl<S: SnapshotRepository> RosterService<S> {
    /// Opens the engine, loading the persisted roster once.
    pub fn open(snapshots: S) -> Result<Self, SnapshotError> {
        let store = StudentStore::open(snapshots)?;
        Ok(Self { store })
    }

    /// Returns a snapshot copy of the roster for the view layer.
    pub fn roster(&self) -> Vec<Student> {
        self.store.list()
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &StudentStore<S> {
        &self.store
    }

    /// Enrolls the draft as a new record.
    ///
    /// On any failure the draft is kept as-is and mode stays Enroll. On
    /// success the draft resets to empty; the search box is untouched.
    pub fn enroll(&mut self, state: &mut FormState) -> RosterResult {
        state.draft.validate()?;

        let mut student = state.draft.clone();
        student.student_id = student.student_id.trim().to_string();
        self.store.insert(student)?;

        state.draft = Student::empty();
        state.mode = Mode::Enroll;
        Ok(Notice::Enrolled)
    }

    /// Looks up the search-box id and loads the hit into the draft.
    ///
    /// A blank id fails with `EmptyQuery`. A miss drops the form back to
    /// enroll mode (the draft is left as typed). A hit loads the record
    /// and switches to update mode keyed by the found id.
    pub fn search_by_id(&mut self, state: &mut FormState) -> RosterResult {
        let id = state.search_id.trim().to_string();
        if id.is_empty() {
            return Err(RosterError::EmptyQuery);
        }

        match self.store.find_by_id(&id) {
            None => {
                state.mode = Mode::Enroll;
                Err(RosterError::NotFound)
            }
            Some(student) => {
                state.draft = student.clone();
                state.mode = Mode::Update {
                    original_id: student.student_id.clone(),
                };
                Ok(Notice::Loaded)
            }
        }
    }

    /// Replaces the record the draft was loaded under with the draft.
    ///
    /// Validation failure keeps the form in update mode. The replacement
    /// is keyed by the mode's original id, so a tampered draft id can
    /// neither retarget nor rewrite the key. A missing target (defensive;
    /// unreachable through the documented flow) resets the form so update
    /// mode never points at a record that no longer exists.
    pub fn update(&mut self, state: &mut FormState) -> RosterResult {
        state.draft.validate()?;

        let target_id = match &state.mode {
            Mode::Update { original_id } => original_id.clone(),
            Mode::Enroll => state.draft.student_id.trim().to_string(),
        };
        let mut student = state.draft.clone();
        student.student_id = target_id;

        match self.store.replace(student) {
            Ok(()) => {
                state.reset();
                Ok(Notice::Updated)
            }
            Err(StoreError::NotFound(_)) => {
                state.reset();
                Err(RosterError::NotFound)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Loads a clicked row into the draft for editing.
    ///
    /// Row-click twin of a successful [`Self::search_by_id`]: same draft
    /// load, same transition to update mode, and the search box follows
    /// the selected id. Infallible, so any prior error is superseded.
    pub fn select_row(&mut self, state: &mut FormState, student: &Student) -> Notice {
        state.draft = student.clone();
        state.search_id = student.student_id.clone();
        state.mode = Mode::Update {
            original_id: student.student_id.clone(),
        };
        Notice::Loaded
    }

    /// Deletes one record by id.
    ///
    /// The confirmation gate is the caller's duty; the engine performs
    /// none. Deleting an id that is already gone still reports success
    /// (deliberate leniency) and writes no snapshot. When the deleted id
    /// is the one loaded in the form, the form resets to enroll mode.
    pub fn delete_by_id(&mut self, state: &mut FormState, id: &str) -> Notice {
        // Absent id: the store signals NotFound, the flow tolerates it.
        let _ = self.store.remove_by_id(id);

        let targets_form = state.draft.student_id == id
            || matches!(&state.mode, Mode::Update { original_id } if original_id == id);
        if targets_form {
            state.reset();
        }

        Notice::Deleted
    }
}
