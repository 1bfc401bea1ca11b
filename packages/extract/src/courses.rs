//! Course and grade extraction for one subject.
//!
//! Course lines look like
//!
//! ```text
//! MTH 9 Calculus I 4.00 4.00 A- 14.67
//! MTH 22 Linear Algebra 3.00 0.00 0.00
//! ```
//!
//! The first hour column is the course's credit value. A completed course
//! has a letter grade after the attempted/earned hour pair; a course still
//! in progress has none, and is recorded with the abbreviated semester it
//! was listed under instead.

use transcripts_record_models::{CourseGrade, CourseGrades, CreditTable};

use crate::ExtractError;
use crate::patterns::{SubjectPatterns, first_credit_hours, letter_grade};
use crate::semesters::{SemesterSplit, abbreviate};

/// Extracts every course of one subject from one semester body.
///
/// Courses first seen here have their credit hours recorded in `credits`.
/// If a course appears twice in the same body, the later line wins.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidCredit`] if a credit-hour token cannot be
/// parsed.
pub fn extract_subject_grades(
    body: &str,
    patterns: &SubjectPatterns,
    semester_label: &str,
    credits: &mut CreditTable,
) -> Result<CourseGrades, ExtractError> {
    let subject = patterns.subject();
    let mut grades = CourseGrades::new();

    for line in patterns.course_lines(body) {
        let Some(number) = patterns.course_number(line) else {
            log::warn!(
                "[{semester_label}] Skipping {subject} line without a course number: {:?}",
                line.trim_end()
            );
            continue;
        };
        let course = format!("{subject} {number}");

        if !credits.contains(&course)
            && let Some(hours) = first_credit_hours(line)
        {
            let hours: f64 = hours.parse()?;
            credits.record_first(&course, hours);
            log::debug!("Credit value for {course} set to {hours:.2}");
        }

        let grade = letter_grade(line).map_or_else(
            || CourseGrade::Placeholder(abbreviate(semester_label)),
            |g| CourseGrade::Letter(g.to_owned()),
        );

        grades.insert(course, grade);
    }

    Ok(grades)
}

/// Extracts one subject's courses from every semester of a transcript.
///
/// Semesters are folded in document order, so a course repeated in a later
/// term overwrites the earlier grade.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidCredit`] if a credit-hour token cannot be
/// parsed.
pub fn extract_student_grades(
    split: &SemesterSplit<'_>,
    patterns: &SubjectPatterns,
    credits: &mut CreditTable,
) -> Result<CourseGrades, ExtractError> {
    let mut grades = CourseGrades::new();

    for semester in &split.semesters {
        let term = extract_subject_grades(semester.body, patterns, semester.label, credits)?;
        grades.extend(term);
    }

    log::debug!(
        "Found {} {} course(s) across {} semester(s)",
        grades.len(),
        patterns.subject(),
        split.semesters.len()
    );

    Ok(grades)
}
