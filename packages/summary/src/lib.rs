#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Subject summaries and result table assembly.
//!
//! [`summarize_subject`] reduces one student's grades in one subject to
//! counts, credits, and a credit-weighted GPA. [`assemble::assemble`] lays
//! the per-student records out as a [`ResultTable`] whose course columns
//! are in natural order ([`natural`]).
//!
//! [`ResultTable`]: transcripts_record_models::ResultTable

pub mod assemble;
pub mod natural;

use transcripts_config::{SubjectConfig, TranscriptConfig};
use transcripts_record_models::{CourseGrade, CourseGrades, CreditTable, SubjectSummary};

pub use assemble::assemble;

/// Summarizes one student's grades in one subject.
///
/// Only courses that are not excluded and carry a letter grade from the
/// configured grade-point table are counted; pass/fail marks, withdrawals,
/// and placeholders are not. The GPA is `None` when the counted courses
/// carry no credit. Courses whose placeholder equals the configured
/// current semester count as in progress.
#[must_use]
pub fn summarize_subject(
    subject: &SubjectConfig,
    grades: &CourseGrades,
    credits: &CreditTable,
    config: &TranscriptConfig,
) -> SubjectSummary {
    let included = grades
        .iter()
        .filter(|(course, _)| !subject.exclude.contains(*course));

    let mut course_count = 0_u32;
    let mut credit_total = 0.0_f64;
    let mut weighted_points = 0.0_f64;
    let mut in_progress_count = 0_u32;

    for (course, grade) in included {
        match grade {
            CourseGrade::Letter(letter) => {
                let Some(points) = config.grade_point(letter) else {
                    continue;
                };
                let hours = credits.get(course).unwrap_or_else(|| {
                    log::warn!("No credit value recorded for {course}; counting 0 credits");
                    0.0
                });
                course_count += 1;
                credit_total += hours;
                weighted_points += points * hours;
            }
            CourseGrade::Placeholder(semester) => {
                if *semester == config.current_semester {
                    in_progress_count += 1;
                }
            }
        }
    }

    let gpa = (credit_total > 0.0).then(|| weighted_points / credit_total);

    SubjectSummary {
        subject: subject.prefix.clone(),
        course_count,
        credit_total,
        gpa,
        in_progress_count,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn subject(exclude: &[&str]) -> SubjectConfig {
        SubjectConfig {
            prefix: "MTH".to_owned(),
            exclude: exclude.iter().map(|s| (*s).to_owned()).collect::<BTreeSet<_>>(),
        }
    }

    fn letter(grade: &str) -> CourseGrade {
        CourseGrade::Letter(grade.to_owned())
    }

    fn placeholder(semester: &str) -> CourseGrade {
        CourseGrade::Placeholder(semester.to_owned())
    }

    fn credits(entries: &[(&str, f64)]) -> CreditTable {
        let mut table = CreditTable::new();
        for (course, hours) in entries {
            table.record_first(course, *hours);
        }
        table
    }

    #[test]
    fn credit_weighted_gpa() {
        let mut grades = CourseGrades::new();
        grades.insert("MTH 9".to_owned(), letter("A"));
        grades.insert("MTH 10".to_owned(), letter("B-"));
        let table = credits(&[("MTH 9", 3.0), ("MTH 10", 4.0)]);

        let summary =
            summarize_subject(&subject(&[]), &grades, &table, &TranscriptConfig::default());

        assert_eq!(summary.course_count, 2);
        assert!((summary.credit_total - 7.0).abs() < 1e-9);
        let expected = (4.0 * 3.0 + 2.667 * 4.0) / 7.0;
        assert!((summary.gpa.unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn excluded_courses_are_ignored() {
        let mut grades = CourseGrades::new();
        grades.insert("MTH 3".to_owned(), letter("A"));
        grades.insert("MTH 9".to_owned(), letter("C"));
        let table = credits(&[("MTH 3", 3.0), ("MTH 9", 4.0)]);

        let summary = summarize_subject(
            &subject(&["MTH 3"]),
            &grades,
            &table,
            &TranscriptConfig::default(),
        );

        assert_eq!(summary.course_count, 1);
        assert_eq!(summary.gpa, Some(2.0));
    }

    #[test]
    fn no_graded_credits_leaves_gpa_undefined() {
        let mut grades = CourseGrades::new();
        grades.insert("MTH 3".to_owned(), letter("A"));
        let table = credits(&[("MTH 3", 3.0)]);
        let config = TranscriptConfig::default();

        let all_excluded = summarize_subject(&subject(&["MTH 3"]), &grades, &table, &config);
        assert_eq!(all_excluded.course_count, 0);
        assert_eq!(all_excluded.gpa, None);

        let zero_credit =
            summarize_subject(&subject(&[]), &grades, &credits(&[("MTH 3", 0.0)]), &config);
        assert_eq!(zero_credit.course_count, 1);
        assert_eq!(zero_credit.gpa, None);
    }

    #[test]
    fn grades_outside_the_scale_are_not_counted() {
        let mut grades = CourseGrades::new();
        grades.insert("MTH 9".to_owned(), letter("P"));
        grades.insert("MTH 10".to_owned(), letter("W"));
        let table = credits(&[("MTH 9", 4.0), ("MTH 10", 4.0)]);

        let summary =
            summarize_subject(&subject(&[]), &grades, &table, &TranscriptConfig::default());

        assert_eq!(summary.course_count, 0);
        assert!(summary.credit_total.abs() < f64::EPSILON);
        assert_eq!(summary.gpa, None);
    }

    #[test]
    fn only_current_semester_placeholders_are_in_progress() {
        let config = TranscriptConfig::default();
        let mut grades = CourseGrades::new();
        grades.insert("MTH 22".to_owned(), placeholder(&config.current_semester));
        grades.insert("MTH 31".to_owned(), placeholder("F19"));
        grades.insert("MTH 90".to_owned(), placeholder(&config.current_semester));
        let table = credits(&[("MTH 22", 3.0), ("MTH 31", 3.0), ("MTH 90", 1.0)]);

        let summary = summarize_subject(&subject(&["MTH 90"]), &grades, &table, &config);

        assert_eq!(summary.in_progress_count, 1);
        assert_eq!(summary.course_count, 0);
        assert_eq!(summary.subject, "MTH");
    }
}
