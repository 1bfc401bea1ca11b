//! Named grammars for every transcript field.
//!
//! Fixed patterns are compiled once. Course patterns depend on the subject
//! prefix and are built per subject in [`SubjectPatterns`].

use std::sync::LazyLock;

use regex::Regex;

/// A semester header: season name followed by a 20xx year.
pub static SEMESTER_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Fall|Spring|Summer|Winter) 20[0-9]{2}").expect("valid regex")
});

/// The century prefix of a year, capturing the last two digits.
pub static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20([0-9]{2})").expect("valid regex"));

/// Declared plan (major) line.
pub static PLAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Plan : (.*)\n").expect("valid regex"));

/// Student name line.
pub static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Name : (.*)\n").expect("valid regex"));

/// Student ID line. The registrar prints this label without a space
/// before the colon.
pub static STUDENT_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Student ID: (.*)\n").expect("valid regex"));

/// Sex line.
pub static SEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Sex : (.*)\n").expect("valid regex"));

/// Address label followed by two continuation lines (each indented by one
/// space after normalization).
pub static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Address : (.*)\n (.*)\n (.*)\n").expect("valid regex"));

/// A credit-hour token (`4.00`).
pub static CREDIT_HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]\.[0-9]{2}").expect("valid regex"));

/// Attempted and earned hours followed by a letter grade
/// (`4.00 4.00 A-`).
pub static GRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]\.[0-9]{2} [0-9]\.[0-9]{2} ([A-Z][+-]?)").expect("valid regex")
});

/// Course-line grammars for one subject prefix.
#[derive(Debug, Clone)]
pub struct SubjectPatterns {
    subject: String,
    course_line: Regex,
    course_number: Regex,
}

impl SubjectPatterns {
    /// Builds the course-line and course-number grammars for `subject`.
    ///
    /// # Errors
    ///
    /// Returns [`regex::Error`] if the patterns fail to compile.
    pub fn new(subject: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(subject);
        Ok(Self {
            subject: subject.to_owned(),
            course_line: Regex::new(&format!(r"{escaped} .* [0-9]\.[0-9]{{2}}.*\n"))?,
            course_number: Regex::new(&format!(r"{escaped} ([0-9]+[A-Z]?|NE) "))?,
        })
    }

    /// The subject prefix these patterns match.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Every course line of this subject in `body`, from the subject prefix
    /// through the end of the line.
    pub fn course_lines<'a>(&self, body: &'a str) -> impl Iterator<Item = &'a str> {
        self.course_line.find_iter(body).map(|m| m.as_str())
    }

    /// The course number on a course line (`"9"`, `"22A"`, `"NE"`).
    #[must_use]
    pub fn course_number<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.course_number
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// First credit-hour token on a line.
#[must_use]
pub fn first_credit_hours(line: &str) -> Option<&str> {
    CREDIT_HOURS_RE.find(line).map(|m| m.as_str())
}

/// Letter grade following the hour columns on a course line.
#[must_use]
pub fn letter_grade(line: &str) -> Option<&str> {
    GRADE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// First capture of `re` in `text`.
#[must_use]
pub fn capture_line<'a>(re: &Regex, text: &'a str) -> Option<&'a str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
