//! Lays student records out as the exported result table.

use transcripts_config::TranscriptConfig;
use transcripts_record_models::{Cell, CourseGrade, CreditTable, ResultTable, StudentRecord};

use crate::natural::natural_sorted;

/// Identity columns, in export order.
pub const IDENTITY_COLUMNS: [&str; 7] = [
    "Name",
    "Student_ID",
    "Plan",
    "Sex",
    "Address1",
    "Address2",
    "Address3",
];

/// Header of the completed-course count column for `subject`.
#[must_use]
pub fn count_column(subject: &str) -> String {
    format!("Num {subject}^ courses")
}

/// Header of the credit total column for `subject`.
#[must_use]
pub fn credits_column(subject: &str) -> String {
    format!("Num {subject}^ creds")
}

/// Header of the GPA column for `subject`.
#[must_use]
pub fn gpa_column(subject: &str) -> String {
    format!("{subject}^ GPA")
}

/// Header of the in-progress count column for `subject`.
#[must_use]
pub fn now_column(subject: &str) -> String {
    format!("Num {subject}^ now")
}

/// Per-subject summary column headers, in export order.
#[must_use]
pub fn summary_columns(config: &TranscriptConfig) -> Vec<String> {
    config
        .subject_prefixes()
        .flat_map(|subject| {
            let mut columns = vec![count_column(subject)];
            if config.export_credit_totals {
                columns.push(credits_column(subject));
            }
            columns.push(gpa_column(subject));
            columns.push(now_column(subject));
            columns
        })
        .collect()
}

/// Builds the result table.
///
/// Columns are the identity fields, the per-subject summaries, and then
/// every course in `credits` in natural order. Values a student does not
/// have are [`Cell::Empty`].
#[must_use]
pub fn assemble(
    records: &[StudentRecord],
    credits: &CreditTable,
    config: &TranscriptConfig,
) -> ResultTable {
    let courses = natural_sorted(credits.courses());

    let mut columns: Vec<String> = IDENTITY_COLUMNS.iter().map(|c| (*c).to_owned()).collect();
    columns.extend(summary_columns(config));
    columns.extend(courses.iter().cloned());

    let rows = records
        .iter()
        .map(|record| row(record, &courses, config))
        .collect();

    log::debug!(
        "Assembled {} row(s) x {} column(s)",
        records.len(),
        columns.len()
    );

    ResultTable { columns, rows }
}

fn row(record: &StudentRecord, courses: &[String], config: &TranscriptConfig) -> Vec<Cell> {
    let info = &record.info;
    let mut cells = vec![
        Cell::Text(info.name.clone()),
        Cell::Text(info.student_id.clone()),
        Cell::text_or_empty(record.plan.as_deref()),
        Cell::Text(info.sex.clone()),
        Cell::Text(info.address1.clone()),
        Cell::Text(info.address2.clone()),
        Cell::Text(info.address3.clone()),
    ];

    for subject in config.subject_prefixes() {
        let summary = record
            .subjects
            .iter()
            .find(|s| s.subject == subject)
            .map(|s| &s.summary);

        cells.push(summary.map_or(Cell::Empty, |s| Cell::Count(s.course_count)));
        if config.export_credit_totals {
            cells.push(summary.map_or(Cell::Empty, |s| Cell::Number(s.credit_total)));
        }
        cells.push(Cell::number_or_empty(summary.and_then(|s| s.gpa)));
        cells.push(summary.map_or(Cell::Empty, |s| Cell::Count(s.in_progress_count)));
    }

    cells.extend(
        courses
            .iter()
            .map(|course| Cell::text_or_empty(record.grade(course).map(CourseGrade::as_str))),
    );

    cells
}
