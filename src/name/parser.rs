use super::Name;
use crate::constants::{MAX_GIVEN_NAMES, MIN_GIVEN_NAMES, MIN_RAW_NAME_CHARS};
use crate::error::AppError;
use thiserror::Error;

/// Why a raw line was rejected as a person name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRejection {
    #[error("shorter than {min} characters", min = MIN_RAW_NAME_CHARS)]
    TooShort,

    #[error("no space separating given names from surname")]
    NoSplitPoint,

    #[error("given-name block is empty")]
    EmptyGivenNames,

    #[error("surname is empty")]
    EmptySurname,

    #[error("{count} given names, at most {max} allowed", max = MAX_GIVEN_NAMES)]
    TooManyGivenNames { count: usize },

    #[error("name part contains whitespace")]
    EmbeddedWhitespace,
}

/// Parses one raw line into a [`Name`].
///
/// The line is split at its **last** space: the trailing token is the surname,
/// everything before it is the given-name block. Splitting on the last space
/// keeps multi-token given-name blocks intact.
///
/// # Rules
/// - at least [`MIN_RAW_NAME_CHARS`] characters
/// - a space at some index greater than 0 (a leading space alone is no split point)
/// - the given-name block is not made of spaces only
/// - the surname is a single token: not empty and free of whitespace
/// - the given-name block holds 1 to 3 whitespace-separated tokens
///
/// # Examples
/// ```
/// use name_sorter::name::parse_name;
///
/// let name = parse_name("N S").unwrap();
/// assert_eq!(name.given_names(), ["N"]);
/// assert_eq!(name.surname(), "S");
///
/// assert!(parse_name("Nooshin").is_err());
/// assert!(parse_name("Nooshin Fallahpour Sichani Yazdi Parsons").is_err());
/// ```
pub fn parse_name(raw: &str) -> Result<Name, AppError> {
    let reject = |reason| AppError::invalid_name_format(raw, reason);

    if raw.chars().count() < MIN_RAW_NAME_CHARS {
        return Err(reject(NameRejection::TooShort));
    }

    let split_at = match raw.rfind(' ') {
        Some(index) if index > 0 => index,
        _ => return Err(reject(NameRejection::NoSplitPoint)),
    };
    let (given_block, surname) = (&raw[..split_at], &raw[split_at + 1..]);

    if given_block.chars().all(|c| c == ' ') {
        return Err(reject(NameRejection::EmptyGivenNames));
    }

    let given_names: Vec<String> = given_block.split_whitespace().map(str::to_string).collect();
    if given_names.len() < MIN_GIVEN_NAMES {
        return Err(reject(NameRejection::EmptyGivenNames));
    }
    if given_names.len() > MAX_GIVEN_NAMES {
        return Err(reject(NameRejection::TooManyGivenNames {
            count: given_names.len(),
        }));
    }

    if surname.trim().is_empty() {
        return Err(reject(NameRejection::EmptySurname));
    }
    if surname.contains(char::is_whitespace) {
        return Err(reject(NameRejection::EmbeddedWhitespace));
    }

    Ok(Name::from_validated(surname, given_names))
}
