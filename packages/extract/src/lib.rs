#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Record extraction from normalized transcript text.
//!
//! The text of a registrar dump is cut into one [`StudentBlock`] per
//! student ([`students`]), each block into semesters ([`semesters`]), and
//! each semester is scanned for course lines of a subject ([`courses`]).
//! Identity fields come from the top of the block ([`personal`]).
//!
//! Every grammar lives in [`patterns`]. Two conditions are hard failures
//! that abort the whole run ([`ExtractError::Structural`] and
//! [`ExtractError::MissingField`]); everything else that is absent (address,
//! grade, plan) degrades to a default.
//!
//! [`StudentBlock`]: transcripts_record_models::StudentBlock

pub mod courses;
pub mod patterns;
pub mod personal;
pub mod semesters;
pub mod students;

pub use courses::{extract_student_grades, extract_subject_grades};
pub use patterns::SubjectPatterns;
pub use personal::extract_personal_info;
pub use semesters::{SemesterBlock, SemesterSplit, abbreviate, segment_semesters};
pub use students::{segment_students, segment_students_with_names};

/// Errors raised while extracting records from transcript text.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Splitting a transcript on semester headers did not alternate
    /// between labels and bodies.
    #[error("semester split produced {segments} segments; expected an odd count")]
    Structural {
        /// Number of segments the split produced.
        segments: usize,
    },

    /// A mandatory identity field is missing from a student block.
    #[error("transcript is missing required field {field:?}")]
    MissingField {
        /// Label of the missing field (e.g. `"Student ID"`).
        field: &'static str,
    },

    /// A subject pattern failed to compile.
    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    /// A credit-hour token could not be read as a number.
    #[error("Invalid credit value: {0}")]
    InvalidCredit(#[from] std::num::ParseFloatError),
}
