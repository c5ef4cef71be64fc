//! Content kinds the sorter knows how to handle.
//!
//! Each variant binds its own parser and formatter. Only person names exist
//! today; adding a kind means adding a variant and its match arms.

use crate::error::AppError;
use crate::name::{Name, format_name, parse_name};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// "Given [Given [Given]] Surname" lines, sorted by surname then given names
    #[default]
    #[serde(alias = "person-names", alias = "person_names")]
    Names,
}

/// A parsed line of some [`ContentKind`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Record {
    Name(Name),
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Names => "names",
        }
    }

    pub fn parse_record(&self, raw: &str) -> Result<Record, AppError> {
        match self {
            ContentKind::Names => parse_name(raw).map(Record::Name),
        }
    }
}

impl Record {
    pub fn format(&self) -> String {
        match self {
            Record::Name(name) => format_name(name),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "names" | "person-names" | "person_names" => Ok(ContentKind::Names),
            _ => Err(AppError::unsupported_content_kind(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_accepts_aliases() {
        for input in ["names", "Names", "person-names", "person_names", " names "] {
            assert_eq!(input.parse::<ContentKind>().unwrap(), ContentKind::Names);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown_kind() {
        let err = "addresses".parse::<ContentKind>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedContentKind { ref kind } if kind == "addresses"));
    }

    #[test]
    fn test_names_kind_round_trips_a_line() {
        let record = ContentKind::Names.parse_record("Vaughn Lewis").unwrap();
        assert_eq!(record.format(), "Vaughn Lewis");
    }

    #[test]
    fn test_names_kind_propagates_parse_failure() {
        let err = ContentKind::Names.parse_record("Vaughn").unwrap_err();
        assert!(matches!(err, AppError::InvalidNameFormat { .. }));
    }

    #[test]
    fn test_serde_representation() {
        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            kind: ContentKind,
        }
        let text = toml::to_string(&Wrapper {
            kind: ContentKind::Names,
        })
        .unwrap();
        assert_eq!(text.trim(), "kind = \"names\"");
        let parsed: Wrapper = toml::from_str("kind = \"person-names\"").unwrap();
        assert_eq!(parsed.kind, ContentKind::Names);
    }
}
