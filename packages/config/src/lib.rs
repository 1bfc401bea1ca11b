#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Run configuration for transcript summaries.
//!
//! The default configuration lives in `config/default.toml` and is baked
//! into the binary at compile time via [`include_str!`]. A different file
//! can be loaded with [`TranscriptConfig::load`] to change the subjects,
//! exclusions, or the current semester without rebuilding.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Embedded default configuration.
const DEFAULT_TOML: &str = include_str!("../config/default.toml");

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML or does not match the schema.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config parsed but is not usable.
    #[error("Invalid configuration: {message}")]
    Invalid {
        /// Description of what went wrong.
        message: String,
    },
}

/// One subject (course prefix) to summarize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectConfig {
    /// Course prefix as printed on transcripts (e.g. `"MTH"`).
    pub prefix: String,
    /// Course keys left out of the subject summary (e.g. remedial courses).
    /// Defaults to empty.
    #[serde(default)]
    pub exclude: BTreeSet<String>,
}

/// Process-wide settings for one analysis run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranscriptConfig {
    /// Placeholder grade marking courses in progress this semester
    /// (e.g. `"S22"`).
    pub current_semester: String,
    /// Directory input PDFs are resolved against.
    pub input_dir: PathBuf,
    /// Directory exported spreadsheets are written to.
    pub output_dir: PathBuf,
    /// Output file name used when the caller does not give one.
    pub default_output: String,
    /// Literal marker that starts each student's transcript.
    #[serde(default = "default_student_delimiter")]
    pub student_delimiter: String,
    /// Whether `Num <S>^ creds` columns are exported.
    #[serde(default)]
    pub export_credit_totals: bool,
    /// Subjects to summarize, in column order.
    pub subjects: Vec<SubjectConfig>,
    /// Letter grade to grade points.
    pub grade_points: BTreeMap<String, f64>,
}

fn default_student_delimiter() -> String {
    "Name : ".to_owned()
}

impl TranscriptConfig {
    /// Reads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, is not valid
    /// TOML, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        parse_config_toml(&contents)
    }

    /// Looks up the grade points for a letter grade.
    #[must_use]
    pub fn grade_point(&self, grade: &str) -> Option<f64> {
        self.grade_points.get(grade).copied()
    }

    /// Subject prefixes in configured order.
    pub fn subject_prefixes(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.prefix.as_str())
    }

    /// Full path of an input file name.
    #[must_use]
    pub fn input_path(&self, file: &str) -> PathBuf {
        self.input_dir.join(file)
    }

    /// Full path of an output file name.
    #[must_use]
    pub fn output_path(&self, file: &str) -> PathBuf {
        self.output_dir.join(file)
    }
}

impl Default for TranscriptConfig {
    /// The embedded default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed (it is checked by the test
    /// suite, so this cannot happen in a released build).
    fn default() -> Self {
        parse_config_toml(DEFAULT_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded default.toml: {e}"))
    }
}

/// Parses and validates a TOML configuration string.
///
/// # Errors
///
/// Returns [`ConfigError::Toml`] for malformed input and
/// [`ConfigError::Invalid`] when the configuration cannot drive a run.
pub fn parse_config_toml(contents: &str) -> Result<TranscriptConfig, ConfigError> {
    let config: TranscriptConfig = toml::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &TranscriptConfig) -> Result<(), ConfigError> {
    if config.student_delimiter.is_empty() {
        return Err(ConfigError::Invalid {
            message: "student_delimiter must not be empty".to_owned(),
        });
    }

    let mut seen = BTreeSet::new();
    for subject in &config.subjects {
        let prefix = subject.prefix.as_str();
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid {
                message: format!("subject prefix {prefix:?} must be a single word"),
            });
        }
        if !seen.insert(prefix) {
            return Err(ConfigError::Invalid {
                message: format!("subject {prefix} is listed twice"),
            });
        }
        if let Some(course) = subject
            .exclude
            .iter()
            .find(|c| !c.starts_with(&format!("{prefix} ")))
        {
            log::warn!("Excluded course {course:?} does not belong to subject {prefix}");
        }
    }

    if config.grade_points.is_empty() {
        return Err(ConfigError::Invalid {
            message: "grade_points must not be empty".to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_embedded_default() {
        let config = TranscriptConfig::default();
        assert_eq!(config.current_semester, "S22");
        assert_eq!(config.subject_prefixes().collect::<Vec<_>>(), ["MTH", "PHY"]);
        assert_eq!(config.default_output, "TranscriptSummary.xlsx");
        assert_eq!(config.student_delimiter, "Name : ");
        assert!(!config.export_credit_totals);
        assert!(config.subjects[0].exclude.contains("MTH 90"));
        assert_eq!(config.subjects[1].exclude.len(), 2);
    }

    #[test]
    fn default_grade_points_match_the_scale() {
        let config = TranscriptConfig::default();
        assert_eq!(config.grade_points.len(), 10);
        assert_eq!(config.grade_point("A"), Some(4.0));
        assert_eq!(config.grade_point("B-"), Some(2.667));
        assert_eq!(config.grade_point("F"), Some(0.0));
        assert_eq!(config.grade_point("P"), None);
    }

    #[test]
    fn subject_exclusions_default_to_empty() {
        let config = parse_config_toml(
            r#"
            current_semester = "F21"
            input_dir = "in"
            output_dir = "out"
            default_output = "out.csv"

            [[subjects]]
            prefix = "CHM"

            [grade_points]
            "A" = 4.0
            "#,
        )
        .unwrap();
        assert!(config.subjects[0].exclude.is_empty());
        assert_eq!(config.student_delimiter, "Name : ");
        assert_eq!(config.input_path("t.pdf"), Path::new("in").join("t.pdf"));
        assert_eq!(config.output_path("o.csv"), Path::new("out").join("o.csv"));
    }

    #[test]
    fn rejects_duplicate_subjects() {
        let err = parse_config_toml(
            r#"
            current_semester = "F21"
            input_dir = "in"
            output_dir = "out"
            default_output = "out.csv"

            [[subjects]]
            prefix = "MTH"

            [[subjects]]
            prefix = "MTH"

            [grade_points]
            "A" = 4.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_config_toml(r#"current_semester = "F21""#).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
