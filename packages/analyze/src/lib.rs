#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Transcript analysis pipeline.
//!
//! [`analyze_transcripts`] runs the whole job for one registrar PDF:
//!
//! 1. Extract the PDF text and collapse space runs ([`transcripts_pdf`])
//! 2. Cut the text into student blocks, each block into semesters, and
//!    pull identity fields and per-subject course grades
//!    ([`transcripts_extract`])
//! 3. Summarize each subject and lay the students out as a table
//!    ([`transcripts_summary`])
//! 4. Write the table to the output directory ([`transcripts_export`])
//!
//! Students are processed one at a time in document order. A single
//! [`CreditTable`] is threaded through every extraction call so the first
//! transcript to list a course fixes its credit value for the whole run.
//! Any malformed student block aborts the run.

pub mod progress;

use std::path::PathBuf;
use std::sync::Arc;

use transcripts_config::{SubjectConfig, TranscriptConfig};
use transcripts_export::ExportError;
use transcripts_extract::{
    ExtractError, SubjectPatterns, extract_personal_info, extract_student_grades,
    segment_semesters, segment_students,
};
use transcripts_pdf::PdfError;
use transcripts_record_models::{
    CreditTable, ResultTable, StudentBlock, StudentRecord, SubjectRecord,
};
use transcripts_summary::{assemble, summarize_subject};

use crate::progress::ProgressCallback;

/// Errors that abort an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The input PDF could not be read.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// A student block did not match the transcript layout.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The result table could not be written.
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Everything produced by one run before export.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// One record per student, in document order.
    pub records: Vec<StudentRecord>,
    /// Credit hours of every course seen in the run.
    pub credits: CreditTable,
    /// The assembled result table.
    pub table: ResultTable,
}

/// A subject's configuration paired with its compiled course grammars.
struct Subject<'a> {
    config: &'a SubjectConfig,
    patterns: SubjectPatterns,
}

fn compile_subjects(config: &TranscriptConfig) -> Result<Vec<Subject<'_>>, ExtractError> {
    config
        .subjects
        .iter()
        .map(|subject| {
            Ok::<_, ExtractError>(Subject {
                config: subject,
                patterns: SubjectPatterns::new(&subject.prefix)?,
            })
        })
        .collect()
}

/// Analyzes a PDF of transcripts and writes the summary spreadsheet.
///
/// `input_file` is resolved against the configured input directory and
/// `output_file` (or the configured default name) against the output
/// directory. Returns the table that was written.
///
/// # Errors
///
/// Returns [`AnalyzeError`] if the PDF cannot be read, any student block is
/// malformed, or the spreadsheet cannot be written.
pub fn analyze_transcripts(
    config: &TranscriptConfig,
    input_file: &str,
    output_file: Option<&str>,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<ResultTable, AnalyzeError> {
    let input = config.input_path(input_file);
    log::info!("Reading transcripts from {}", input.display());
    let raw_text = transcripts_pdf::extract_text(&input)?;

    let analysis = analyze_text(config, &raw_text, progress)?;

    let output = output_path(config, output_file);
    transcripts_export::export(&analysis.table, &output)?;

    Ok(analysis.table)
}

/// Resolves the output file against the configured output directory.
#[must_use]
pub fn output_path(config: &TranscriptConfig, output_file: Option<&str>) -> PathBuf {
    config.output_path(output_file.unwrap_or(config.default_output.as_str()))
}

/// Runs the extraction and summary stages on already-extracted PDF text.
///
/// # Errors
///
/// Returns [`AnalyzeError::Extract`] if any student block is malformed.
pub fn analyze_text(
    config: &TranscriptConfig,
    raw_text: &str,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Analysis, AnalyzeError> {
    let text = transcripts_pdf::normalize_spaces(raw_text);
    let blocks = segment_students(&text, &config.student_delimiter);
    log::info!("Found {} transcript(s)", blocks.len());

    let mut credits = CreditTable::new();
    let records = transcript_records(config, &blocks, &mut credits, progress)?;
    let table = assemble(&records, &credits, config);

    log::info!(
        "Summarized {} student(s) across {} course(s)",
        records.len(),
        credits.len()
    );

    Ok(Analysis {
        records,
        credits,
        table,
    })
}

/// Builds one record per student block, in order.
///
/// `credits` is shared across the whole slice (and may already hold
/// values from an earlier call).
///
/// # Errors
///
/// Returns [`ExtractError`] from the first malformed block; no records are
/// returned in that case.
pub fn transcript_records(
    config: &TranscriptConfig,
    blocks: &[StudentBlock],
    credits: &mut CreditTable,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<StudentRecord>, ExtractError> {
    let subjects = compile_subjects(config)?;
    progress.set_total(blocks.len() as u64);

    let mut records = Vec::with_capacity(blocks.len());
    for block in blocks {
        let record = student_record(config, &subjects, block, credits)?;
        progress.set_message(record.info.name.clone());
        progress.inc(1);
        records.push(record);
    }

    progress.finish(format!("{} transcript(s) analyzed", records.len()));

    Ok(records)
}

fn student_record(
    config: &TranscriptConfig,
    subjects: &[Subject<'_>],
    block: &StudentBlock,
    credits: &mut CreditTable,
) -> Result<StudentRecord, ExtractError> {
    let info = extract_personal_info(block)?;
    log::debug!("Analyzing transcript of {} ({})", info.name, info.student_id);

    let split = segment_semesters(block.text())?;

    let subjects = subjects
        .iter()
        .map(|subject| {
            let grades = extract_student_grades(&split, &subject.patterns, credits)?;
            let summary = summarize_subject(subject.config, &grades, credits, config);
            Ok::<_, ExtractError>(SubjectRecord {
                subject: subject.config.prefix.clone(),
                grades,
                summary,
            })
        })
        .collect::<Result<Vec<_>, ExtractError>>()?;

    Ok(StudentRecord {
        info,
        plan: split.plan().map(str::to_owned),
        subjects,
    })
}
