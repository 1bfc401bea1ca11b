#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Transcript record types shared across the extraction pipeline.
//!
//! A run moves through these types in one direction: a [`StudentBlock`] is
//! cut from the normalized document text, each of its semesters yields
//! [`CourseGrades`] while filling a run-wide [`CreditTable`], and the
//! per-subject results are reduced to a [`SubjectSummary`]. One
//! [`StudentRecord`] per student is finally projected onto a
//! [`ResultTable`] for export.

pub mod table;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use table::{Cell, ResultTable};

/// Academic term named in a semester header (e.g. the `Fall` in
/// `"Fall 2018"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Season {
    /// Fall term, abbreviated `F`.
    Fall,
    /// Spring term, abbreviated `S`.
    Spring,
    /// Summer session, abbreviated `Sum`.
    Summer,
    /// Winter session, abbreviated `Win`.
    Winter,
}

impl Season {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Fall, Self::Spring, Self::Summer, Self::Winter]
    }

    /// Short prefix used in placeholder grades (`"F"` in `"F21"`).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Self::Fall => "F",
            Self::Spring => "S",
            Self::Summer => "Sum",
            Self::Winter => "Win",
        }
    }
}

/// One student's slice of the normalized document text.
///
/// Always begins with the student delimiter (`"Name : "` by default) and
/// runs up to the next delimiter or the end of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentBlock {
    text: String,
    delimiter_len: usize,
}

impl StudentBlock {
    /// Wraps a block of text that starts with `delimiter`.
    #[must_use]
    pub fn new(text: String, delimiter: &str) -> Self {
        let delimiter_len = if text.starts_with(delimiter) {
            delimiter.len()
        } else {
            0
        };
        Self {
            text,
            delimiter_len,
        }
    }

    /// The full block text, delimiter included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text between the delimiter and the next newline.
    ///
    /// A block whose name line never ends (no trailing newline) yields
    /// `None`.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let rest = &self.text[self.delimiter_len..];
        rest.find('\n').map(|end| &rest[..end])
    }
}

/// Grade value recorded for a single course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CourseGrade {
    /// A completed course with a letter grade token (`"A-"`, `"B"`, `"P"`).
    Letter(String),
    /// No grade on the line yet; holds the abbreviated semester the course
    /// was listed under (`"S21"`).
    Placeholder(String),
}

impl CourseGrade {
    /// The grade or placeholder as it appears in the exported table.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Letter(grade) | Self::Placeholder(grade) => grade,
        }
    }

    /// Returns the letter grade, if this course has one.
    #[must_use]
    pub fn letter(&self) -> Option<&str> {
        match self {
            Self::Letter(grade) => Some(grade),
            Self::Placeholder(_) => None,
        }
    }
}

impl std::fmt::Display for CourseGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Course key (`"MTH 9"`) to grade, last write wins.
pub type CourseGrades = BTreeMap<String, CourseGrade>;

/// Credit hours per course key, accumulated across every student in a run.
///
/// The first transcript to list a course fixes its credit value; later
/// observations are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditTable {
    credits: BTreeMap<String, f64>,
}

impl CreditTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `course` already has a credit value.
    #[must_use]
    pub fn contains(&self, course: &str) -> bool {
        self.credits.contains_key(course)
    }

    /// Records `credits` for `course` unless a value is already present.
    ///
    /// Returns `true` when the value was recorded.
    pub fn record_first(&mut self, course: &str, credits: f64) -> bool {
        if self.credits.contains_key(course) {
            return false;
        }
        self.credits.insert(course.to_owned(), credits);
        true
    }

    /// Credit hours for `course`.
    #[must_use]
    pub fn get(&self, course: &str) -> Option<f64> {
        self.credits.get(course).copied()
    }

    /// All course keys seen so far, in lexicographic order.
    pub fn courses(&self) -> impl Iterator<Item = &str> {
        self.credits.keys().map(String::as_str)
    }

    /// Number of distinct courses recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.credits.len()
    }

    /// Whether no course has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.credits.is_empty()
    }
}

/// Identity fields pulled from the top of a transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// Student name as printed after `Name : `.
    pub name: String,
    /// Value after `Student ID: `.
    pub student_id: String,
    /// Value after `Sex : `.
    pub sex: String,
    /// First address line, empty when the transcript has no address block.
    pub address1: String,
    /// Second address line.
    pub address2: String,
    /// Third address line.
    pub address3: String,
}

/// Aggregate performance of one student in one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectSummary {
    /// Subject prefix (`"MTH"`).
    pub subject: String,
    /// Completed, non-excluded courses with a recognized letter grade.
    pub course_count: u32,
    /// Credit hours over the counted courses.
    pub credit_total: f64,
    /// Credit-weighted GPA over the counted courses; `None` when no graded
    /// credits were earned.
    pub gpa: Option<f64>,
    /// Non-excluded courses whose placeholder equals the current semester.
    pub in_progress_count: u32,
}

/// Grades and summary for one configured subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectRecord {
    /// Subject prefix (`"MTH"`).
    pub subject: String,
    /// Every course of this subject found on the transcript.
    pub grades: CourseGrades,
    /// Aggregates over [`Self::grades`].
    pub summary: SubjectSummary,
}

/// Everything known about one student; one row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Identity fields.
    pub info: PersonalInfo,
    /// Declared plan (major), when the transcript states one.
    pub plan: Option<String>,
    /// One entry per configured subject, in configured order.
    pub subjects: Vec<SubjectRecord>,
}

impl StudentRecord {
    /// Looks up the grade recorded for `course` across all subjects.
    #[must_use]
    pub fn grade(&self, course: &str) -> Option<&CourseGrade> {
        self.subjects
            .iter()
            .find_map(|subject| subject.grades.get(course))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_round_trips_through_strum() {
        for season in Season::all() {
            let parsed: Season = season.as_ref().parse().unwrap();
            assert_eq!(parsed, *season);
        }
        assert_eq!(Season::Summer.to_string(), "Summer");
        assert_eq!(Season::Winter.abbreviation(), "Win");
    }

    #[test]
    fn student_block_name_stops_at_newline() {
        let block = StudentBlock::new("Name : Ada Lovelace\nStudent ID: 1\n".to_owned(), "Name : ");
        assert_eq!(block.name(), Some("Ada Lovelace"));
    }

    #[test]
    fn student_block_without_newline_has_no_name() {
        let block = StudentBlock::new("Name : Ada".to_owned(), "Name : ");
        assert_eq!(block.name(), None);
    }

    #[test]
    fn credit_table_keeps_first_value() {
        let mut credits = CreditTable::new();
        assert!(credits.record_first("MTH 9", 4.0));
        assert!(!credits.record_first("MTH 9", 3.0));
        assert_eq!(credits.get("MTH 9"), Some(4.0));
        assert_eq!(credits.len(), 1);
    }

    #[test]
    fn course_grade_renders_either_variant() {
        assert_eq!(CourseGrade::Letter("B+".to_owned()).as_str(), "B+");
        assert_eq!(CourseGrade::Placeholder("S21".to_owned()).to_string(), "S21");
        assert_eq!(CourseGrade::Placeholder("S21".to_owned()).letter(), None);
    }

    #[test]
    fn course_grade_serializes_tagged() {
        let json = serde_json::to_value(CourseGrade::Letter("A".to_owned())).unwrap();
        assert_eq!(json["kind"], "letter");
        assert_eq!(json["value"], "A");
    }

    #[test]
    fn student_record_finds_grade_in_any_subject() {
        let mut physics = CourseGrades::new();
        physics.insert("PHY 11".to_owned(), CourseGrade::Letter("A".to_owned()));
        let record = StudentRecord {
            info: PersonalInfo::default(),
            plan: None,
            subjects: vec![SubjectRecord {
                subject: "PHY".to_owned(),
                grades: physics,
                summary: SubjectSummary {
                    subject: "PHY".to_owned(),
                    course_count: 1,
                    credit_total: 4.0,
                    gpa: Some(4.0),
                    in_progress_count: 0,
                },
            }],
        };
        assert_eq!(record.grade("PHY 11").map(CourseGrade::as_str), Some("A"));
        assert!(record.grade("MTH 9").is_none());
    }
}
