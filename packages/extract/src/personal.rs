//! Identity fields at the top of a transcript.

use transcripts_record_models::{PersonalInfo, StudentBlock};

use crate::ExtractError;
use crate::patterns::{ADDRESS_RE, NAME_RE, SEX_RE, STUDENT_ID_RE, capture_line};

/// Extracts name, student ID, sex, and address from a student block.
///
/// The address is optional: when the three-line address block is absent,
/// all three address fields are empty strings.
///
/// # Errors
///
/// Returns [`ExtractError::MissingField`] if the name, student ID, or sex
/// line is absent.
pub fn extract_personal_info(block: &StudentBlock) -> Result<PersonalInfo, ExtractError> {
    let text = block.text();

    let name = required(&NAME_RE, text, "Name")?;
    let student_id = required(&STUDENT_ID_RE, text, "Student ID")?;
    let sex = required(&SEX_RE, text, "Sex")?;

    let (address1, address2, address3) = ADDRESS_RE.captures(text).map_or_else(
        || {
            log::debug!("No address block for {name}");
            (String::new(), String::new(), String::new())
        },
        |caps| (caps[1].to_owned(), caps[2].to_owned(), caps[3].to_owned()),
    );

    Ok(PersonalInfo {
        name,
        student_id,
        sex,
        address1,
        address2,
        address3,
    })
}

fn required(re: &regex::Regex, text: &str, field: &'static str) -> Result<String, ExtractError> {
    capture_line(re, text)
        .map(str::to_owned)
        .ok_or(ExtractError::MissingField { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> StudentBlock {
        StudentBlock::new(text.to_owned(), "Name : ")
    }

    #[test]
    fn extracts_identity_and_address() {
        let info = extract_personal_info(&block(
            "Name : Ada Lovelace\nStudent ID: 00123456\nSex : Female\n\
             Address : 12 St James Sq\n London\n SW1Y 4JH\nFall 2018\n",
        ))
        .unwrap();
        assert_eq!(info.name, "Ada Lovelace");
        assert_eq!(info.student_id, "00123456");
        assert_eq!(info.sex, "Female");
        assert_eq!(info.address1, "12 St James Sq");
        assert_eq!(info.address2, "London");
        assert_eq!(info.address3, "SW1Y 4JH");
    }

    #[test]
    fn missing_address_defaults_to_empty_strings() {
        let info =
            extract_personal_info(&block("Name : Ada\nStudent ID: 1\nSex : F\n")).unwrap();
        assert_eq!(info.address1, "");
        assert_eq!(info.address2, "");
        assert_eq!(info.address3, "");
    }

    #[test]
    fn truncated_address_defaults_to_empty_strings() {
        let info = extract_personal_info(&block(
            "Name : Ada\nStudent ID: 1\nSex : F\nAddress : 12 St James Sq\n",
        ))
        .unwrap();
        assert_eq!(info.address1, "");
    }

    #[test]
    fn missing_student_id_is_an_error() {
        let err = extract_personal_info(&block("Name : Ada\nSex : F\n")).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingField {
                field: "Student ID"
            }
        ));
    }

    #[test]
    fn missing_sex_is_an_error() {
        let err = extract_personal_info(&block("Name : Ada\nStudent ID: 1\n")).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField { field: "Sex" }));
    }

    #[test]
    fn unterminated_name_is_an_error() {
        let err = extract_personal_info(&block("Name : Ada")).unwrap_err();
        assert!(matches!(err, ExtractError::MissingField { field: "Name" }));
    }
}
