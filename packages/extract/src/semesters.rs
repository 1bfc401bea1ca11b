//! Semester segmentation and abbreviation.
//!
//! A transcript lists its terms in document order, each introduced by a
//! header such as `"Fall 2018"`. Splitting on those headers yields
//! `[preamble, label₁, body₁, label₂, body₂, …]`, which is always
//! odd-length when the headers behave as expected. The last segment is
//! also where the student's declared plan is printed.

use transcripts_record_models::Season;

use crate::ExtractError;
use crate::patterns::{PLAN_RE, SEMESTER_HEADER_RE, YEAR_RE, capture_line};

/// One term of a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterBlock<'a> {
    /// Raw header text (`"Fall 2018"`).
    pub label: &'a str,
    /// Everything after the header up to the next header or the end of the
    /// student block.
    pub body: &'a str,
}

/// A student block cut at its semester headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemesterSplit<'a> {
    /// Text before the first semester header.
    pub preamble: &'a str,
    /// Semesters in document order.
    pub semesters: Vec<SemesterBlock<'a>>,
}

impl<'a> SemesterSplit<'a> {
    /// The final segment: the last semester's body, or the preamble when
    /// the block has no semester headers.
    #[must_use]
    pub fn tail(&self) -> &'a str {
        self.semesters.last().map_or(self.preamble, |s| s.body)
    }

    /// The declared plan (major), read from [`Self::tail`].
    #[must_use]
    pub fn plan(&self) -> Option<&'a str> {
        capture_line(&PLAN_RE, self.tail())
    }

    /// Number of segments in the alternating form (always odd).
    #[must_use]
    pub fn segment_count(&self) -> usize {
        1 + 2 * self.semesters.len()
    }
}

/// Splits `text` into alternating non-header and header segments.
///
/// The first and last entries are the text around the headers; odd
/// indices hold header labels.
#[must_use]
pub fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in SEMESTER_HEADER_RE.find_iter(text) {
        segments.push(&text[last..m.start()]);
        segments.push(m.as_str());
        last = m.end();
    }
    segments.push(&text[last..]);

    segments
}

/// Pairs up an alternating segment list.
///
/// # Errors
///
/// Returns [`ExtractError::Structural`] if `segments` has an even length.
pub fn pair_segments<'a>(segments: &[&'a str]) -> Result<SemesterSplit<'a>, ExtractError> {
    if segments.len() % 2 != 1 {
        return Err(ExtractError::Structural {
            segments: segments.len(),
        });
    }

    let semesters = segments[1..]
        .chunks_exact(2)
        .map(|pair| SemesterBlock {
            label: pair[0],
            body: pair[1],
        })
        .collect();

    Ok(SemesterSplit {
        preamble: segments[0],
        semesters,
    })
}

/// Cuts one student block into its semesters.
///
/// # Errors
///
/// Returns [`ExtractError::Structural`] if the header split does not
/// alternate between labels and bodies.
pub fn segment_semesters(text: &str) -> Result<SemesterSplit<'_>, ExtractError> {
    let segments = split_segments(text);
    let split = pair_segments(&segments)?;
    log::debug!("Split transcript into {} semesters", split.semesters.len());
    Ok(split)
}

/// Abbreviates a semester label: `"Fall 2021"` becomes `"F21"`.
///
/// The century is dropped from any `20xx` year and the season name is
/// replaced by its short form. A label with no recognized season is
/// returned with only the year shortened.
#[must_use]
pub fn abbreviate(label: &str) -> String {
    let mut abbr = YEAR_RE.replace_all(label, "${1}").into_owned();
    let mut recognized = false;

    for season in Season::all() {
        let long = format!("{season} ");
        if abbr.contains(&long) {
            abbr = abbr.replace(&long, season.abbreviation());
            recognized = true;
        }
    }

    if !recognized {
        log::debug!("Semester label {label:?} has no recognized season");
    }

    abbr
}
