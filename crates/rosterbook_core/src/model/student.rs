//! Student domain model.
//!
//! # Responsibility
//! - Define the canonical five-field student record.
//! - Provide required-field validation used by every write path.
//!
//! # Invariants
//! - `student_id` is the identifying key; it is never regenerated or
//!   rewritten once a record is admitted to the store.
//! - Validation inspects fields in the fixed order of [`Field::ORDER`];
//!   the first blank field (after trimming) wins.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Named record fields in their canonical validation order.
///
/// The external spelling (`studentId`, `name`, ...) is what `Display`
/// produces, so user-facing messages match the serialized schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StudentId,
    Name,
    Email,
    Phone,
    Course,
}

impl Field {
    /// Fixed validation order. Never reordered; message stability depends
    /// on it.
    pub const ORDER: [Self; 5] = [
        Self::StudentId,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Course,
    ];

    /// External key spelling for this field.
    pub fn key(self) -> &'static str {
        match self {
            Self::StudentId => "studentId",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Course => "course",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Validation error for candidate records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentValidationError {
    /// A required field was blank after trimming.
    MissingField(Field),
}

impl Display for StudentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "{field} is required"),
        }
    }
}

impl Error for StudentValidationError {}

/// Canonical student record.
///
/// The same shape serves as the stored record and as the mutable form
/// draft; validity is established at admission, not by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Identifying key. Serialized as `studentId` to match the external
    /// snapshot schema.
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
}

impl Student {
    /// Creates a record from the five field values.
    pub fn new(
        student_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            student_id: student_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            course: course.into(),
        }
    }

    /// Returns the all-blank draft value bound to an empty form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the raw value of one named field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::StudentId => &self.student_id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Course => &self.course,
        }
    }

    /// Checks that every field is non-blank after trimming.
    ///
    /// Fields are checked in [`Field::ORDER`]; the first blank one is
    /// reported. No shape validation is applied beyond non-emptiness.
    pub fn validate(&self) -> Result<(), StudentValidationError> {
        for field in Field::ORDER {
            if self.field(field).trim().is_empty() {
                return Err(StudentValidationError::MissingField(field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Field, Student, StudentValidationError};

    fn complete_student() -> Student {
        Student::new("S1", "Ann", "a@x.com", "1", "CS")
    }

    #[test]
    fn complete_record_passes_validation() {
        complete_student().validate().expect("record is complete");
    }

    #[test]
    fn first_blank_field_in_order_is_reported() {
        let mut student = complete_student();
        student.email = String::new();
        student.course = String::new();

        let err = student.validate().unwrap_err();
        assert_eq!(err, StudentValidationError::MissingField(Field::Email));
    }

    #[test]
    fn whitespace_only_field_counts_as_blank() {
        let mut student = complete_student();
        student.phone = "   ".to_string();

        let err = student.validate().unwrap_err();
        assert_eq!(err, StudentValidationError::MissingField(Field::Phone));
        assert_eq!(err.to_string(), "phone is required");
    }

    #[test]
    fn empty_draft_fails_on_student_id_first() {
        let err = Student::empty().validate().unwrap_err();
        assert_eq!(err, StudentValidationError::MissingField(Field::StudentId));
        assert_eq!(err.to_string(), "studentId is required");
    }

    #[test]
    fn student_id_serializes_with_external_spelling() {
        let json = serde_json::to_string(&complete_student()).unwrap();
        assert!(json.contains("\"studentId\":\"S1\""));
        assert!(!json.contains("student_id"));
    }
}
