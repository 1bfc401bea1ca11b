//! Splits a registrar dump into one block per student.

use transcripts_record_models::StudentBlock;

/// Cuts `text` at every occurrence of `delimiter`.
///
/// Each block starts with the delimiter and runs up to the next occurrence
/// or the end of the text. Anything before the first delimiter is a report
/// header, not a student, and is dropped. Text with no delimiter yields no
/// blocks.
#[must_use]
pub fn segment_students(text: &str, delimiter: &str) -> Vec<StudentBlock> {
    if delimiter.is_empty() {
        log::warn!("Empty student delimiter; no transcripts extracted");
        return Vec::new();
    }

    let starts: Vec<usize> = text.match_indices(delimiter).map(|(i, _)| i).collect();

    let blocks: Vec<StudentBlock> = starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(text.len());
            StudentBlock::new(text[start..end].to_owned(), delimiter)
        })
        .collect();

    log::debug!("Found {} student transcript(s)", blocks.len());

    blocks
}

/// Like [`segment_students`], also returning each block's name line.
///
/// The two vectors are parallel; a block whose name line never ends gets an
/// empty name.
#[must_use]
pub fn segment_students_with_names(
    text: &str,
    delimiter: &str,
) -> (Vec<StudentBlock>, Vec<String>) {
    let blocks = segment_students(text, delimiter);
    let names = blocks
        .iter()
        .map(|b| b.name().unwrap_or_default().to_owned())
        .collect();
    (blocks, names)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "\nUnofficial Transcripts\nName : Ada Lovelace\nStudent ID: 1\n\
                        Name : Alan Turing\nStudent ID: 2\n";

    #[test]
    fn one_block_per_delimiter() {
        let blocks = segment_students(DUMP, "Name : ");
        assert_eq!(blocks.len(), DUMP.matches("Name : ").count());
        assert_eq!(blocks[0].text(), "Name : Ada Lovelace\nStudent ID: 1\n");
        assert_eq!(blocks[1].text(), "Name : Alan Turing\nStudent ID: 2\n");
    }

    #[test]
    fn drops_preamble() {
        let blocks = segment_students(DUMP, "Name : ");
        assert!(blocks.iter().all(|b| b.text().starts_with("Name : ")));
        assert!(!blocks.iter().any(|b| b.text().contains("Unofficial")));
    }

    #[test]
    fn returns_parallel_names() {
        let (blocks, names) = segment_students_with_names(DUMP, "Name : ");
        assert_eq!(blocks.len(), names.len());
        assert_eq!(names, ["Ada Lovelace", "Alan Turing"]);
    }

    #[test]
    fn no_delimiter_yields_no_blocks() {
        assert!(segment_students("\nNothing to see here\n", "Name : ").is_empty());
        assert!(segment_students(DUMP, "").is_empty());
    }

    #[test]
    fn custom_delimiter() {
        let blocks = segment_students("x\nStudent: A\nStudent: B\n", "Student: ");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].name(), Some("B"));
    }
}
