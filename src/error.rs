use crate::name::NameRejection;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Input data errors
    #[error("{} cannot be parsed as a name: {name} ({reason})", line_prefix(.line))]
    InvalidNameFormat {
        name: String,
        line: Option<usize>,
        reason: NameRejection,
    },

    #[error("{} lines cannot be parsed as names: {}", .failures.len(), join_failures(.failures))]
    InvalidNameBatch { failures: Vec<LineFailure> },

    #[error("Unsupported content kind: {kind}")]
    UnsupportedContentKind { kind: String },

    // Input supplier errors
    #[error("File does not exist: {path}. Current directory is: {cwd}")]
    InputNotFound { path: String, cwd: String },

    #[error("Missing input file name in the arguments")]
    MissingInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

/// One rejected line collected by a pipeline running with
/// [`FailurePolicy::CollectAll`](crate::pipeline::FailurePolicy::CollectAll).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based line number in the input
    pub line: usize,
    pub raw: String,
    pub reason: NameRejection,
}

impl fmt::Display for LineFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?} ({})", self.line, self.raw, self.reason)
    }
}

fn line_prefix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("Line {n}"),
        None => "Input".to_string(),
    }
}

fn join_failures(failures: &[LineFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    /// Create an invalid name error for a raw line with no known position
    pub fn invalid_name_format(name: impl Into<String>, reason: NameRejection) -> Self {
        Self::InvalidNameFormat {
            name: name.into(),
            line: None,
            reason,
        }
    }

    /// Create an unsupported content kind error
    pub fn unsupported_content_kind(kind: impl Into<String>) -> Self {
        Self::UnsupportedContentKind { kind: kind.into() }
    }

    /// Create an input-not-found error naming the resolved working directory
    pub fn input_not_found(path: impl Into<String>, cwd: impl Into<String>) -> Self {
        Self::InputNotFound {
            path: path.into(),
            cwd: cwd.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Attach a 1-based line number to an [`AppError::InvalidNameFormat`].
    /// Other variants are returned unchanged.
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            Self::InvalidNameFormat { name, reason, .. } => Self::InvalidNameFormat {
                name,
                line: Some(line_number),
                reason,
            },
            other => other,
        }
    }

    /// Check if the error was caused by the content of the input rather than
    /// by the environment (files, config, logging)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidNameFormat { .. }
                | AppError::InvalidNameBatch { .. }
                | AppError::UnsupportedContentKind { .. }
        )
    }

    /// Process exit status for this error: 2 for bad input content, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.is_input_error() { 2 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_format_helper() {
        let error = AppError::invalid_name_format("BadLineNoSpace", NameRejection::NoSplitPoint);
        assert!(matches!(error, AppError::InvalidNameFormat { line: None, .. }));
        assert_eq!(
            error.to_string(),
            "Input cannot be parsed as a name: BadLineNoSpace (no space separating given names from surname)"
        );
    }

    #[test]
    fn test_at_line_sets_line_number() {
        let error = AppError::invalid_name_format("Nooshin", NameRejection::NoSplitPoint).at_line(7);
        assert!(matches!(
            error,
            AppError::InvalidNameFormat { line: Some(7), .. }
        ));
        assert!(error.to_string().starts_with("Line 7 cannot be parsed as a name: Nooshin"));
    }

    #[test]
    fn test_at_line_leaves_other_variants_alone() {
        let error = AppError::config_error("bad").at_line(3);
        assert!(matches!(error, AppError::Config(_)));
    }

    #[test]
    fn test_invalid_name_batch_lists_every_line() {
        let error = AppError::InvalidNameBatch {
            failures: vec![
                LineFailure {
                    line: 2,
                    raw: "Nooshin".to_string(),
                    reason: NameRejection::NoSplitPoint,
                },
                LineFailure {
                    line: 4,
                    raw: "A B C D E".to_string(),
                    reason: NameRejection::TooManyGivenNames { count: 4 },
                },
            ],
        };
        let message = error.to_string();
        assert!(message.starts_with("2 lines cannot be parsed as names"));
        assert!(message.contains("line 2: \"Nooshin\""));
        assert!(message.contains("line 4: \"A B C D E\" (4 given names, at most 3 allowed)"));
    }

    #[test]
    fn test_input_not_found_mentions_directory() {
        let error = AppError::input_not_found("names.txt", "/home/user");
        assert_eq!(
            error.to_string(),
            "File does not exist: names.txt. Current directory is: /home/user"
        );
    }

    #[test]
    fn test_unsupported_content_kind_helper() {
        let error = AppError::unsupported_content_kind("addresses");
        assert!(matches!(error, AppError::UnsupportedContentKind { .. }));
        assert_eq!(error.to_string(), "Unsupported content kind: addresses");
    }

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_is_input_error() {
        assert!(AppError::invalid_name_format("x", NameRejection::TooShort).is_input_error());
        assert!(AppError::InvalidNameBatch { failures: vec![] }.is_input_error());
        assert!(AppError::unsupported_content_kind("csv").is_input_error());

        assert!(!AppError::MissingInput.is_input_error());
        assert!(!AppError::input_not_found("a", "b").is_input_error());
        assert!(!AppError::config_error("message").is_input_error());
        assert!(!AppError::log_setup_error("message").is_input_error());
    }

    #[test]
    fn test_exit_code() {
        let bad_line = AppError::invalid_name_format("Nooshin", NameRejection::NoSplitPoint);
        assert_eq!(bad_line.at_line(3).exit_code(), 2);
        assert_eq!(AppError::unsupported_content_kind("csv").exit_code(), 2);
        assert_eq!(AppError::input_not_found("a", "b").exit_code(), 1);
        assert_eq!(AppError::MissingInput.exit_code(), 1);
    }

    #[test]
    fn test_error_from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
    }

    #[test]
    fn test_error_from_toml_deserialize() {
        let invalid_toml = "invalid = [toml";
        let toml_error = toml::from_str::<toml::Table>(invalid_toml).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlDeserialize(_)));
    }

    #[test]
    fn test_error_from_toml_serialize() {
        #[derive(serde::Serialize)]
        struct BadStruct {
            #[serde(serialize_with = "bad_serialize")]
            field: String,
        }

        fn bad_serialize<S>(_: &String, _: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            Err(serde::ser::Error::custom("Serialization failed"))
        }

        let bad_struct = BadStruct {
            field: "test".to_string(),
        };
        let toml_error = toml::to_string(&bad_struct).unwrap_err();
        let app_error: AppError = toml_error.into();
        assert!(matches!(app_error, AppError::TomlSerialize(_)));
    }
}
