//! Person names: parsing, ordering and display.
//!
//! A [`Name`] is one to three given names followed by a single surname token.
//! Values are only produced by validating constructors ([`Name::parse`],
//! [`Name::new`]), so every `Name` in the program upholds:
//! - between [`MIN_GIVEN_NAMES`] and [`MAX_GIVEN_NAMES`] given names
//! - no empty or whitespace-only part
//! - `full_name` equals the given names joined by single spaces, a space, and the surname

mod formatting;
mod ordering;
mod parser;

pub use formatting::{build_full_name, format_name};
pub use ordering::compare;
pub use parser::{NameRejection, parse_name};

use crate::constants::{MAX_GIVEN_NAMES, MIN_GIVEN_NAMES};
use crate::error::AppError;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    surname: String,
    given_names: Vec<String>,
    /// Cached canonical rendering, computed once in the constructor
    full_name: String,
}

impl Name {
    /// Parses a raw line such as `"Adonis Julius Archer"`.
    ///
    /// # Example
    /// ```
    /// use name_sorter::name::Name;
    ///
    /// let name = Name::parse("Adonis Julius Archer").unwrap();
    /// assert_eq!(name.surname(), "Archer");
    /// assert_eq!(name.given_names(), ["Adonis", "Julius"]);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        parse_name(raw)
    }

    /// Builds a name directly from its parts, enforcing the same invariants as
    /// [`Name::parse`]. Parts must not contain whitespace.
    pub fn new<I, S>(surname: impl Into<String>, given_names: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let surname = surname.into();
        let given_names: Vec<String> = given_names.into_iter().map(Into::into).collect();
        let reject =
            |reason| AppError::invalid_name_format(build_full_name(&given_names, &surname), reason);

        if surname.trim().is_empty() {
            return Err(reject(NameRejection::EmptySurname));
        }
        if given_names.len() < MIN_GIVEN_NAMES || given_names.iter().any(|g| g.trim().is_empty()) {
            return Err(reject(NameRejection::EmptyGivenNames));
        }
        if given_names.len() > MAX_GIVEN_NAMES {
            return Err(reject(NameRejection::TooManyGivenNames {
                count: given_names.len(),
            }));
        }
        if surname.contains(char::is_whitespace)
            || given_names.iter().any(|g| g.contains(char::is_whitespace))
        {
            return Err(reject(NameRejection::EmbeddedWhitespace));
        }

        Ok(Self::from_validated(surname, given_names))
    }

    /// Caller guarantees the invariants listed in the module docs.
    pub(crate) fn from_validated(surname: impl Into<String>, given_names: Vec<String>) -> Self {
        let surname = surname.into();
        let full_name = build_full_name(&given_names, &surname);
        Self {
            surname,
            given_names,
            full_name,
        }
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn given_names(&self) -> &[String] {
        &self.given_names
    }

    /// Given names joined by single spaces, borrowed from the cached full name
    pub fn given_names_joined(&self) -> &str {
        &self.full_name[..self.full_name.len() - self.surname.len() - 1]
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl FromStr for Name {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(s)
    }
}
