//! Parse, sort and format a batch of raw lines.
//!
//! The pipeline is pure: it takes the raw lines from the caller and hands back
//! the formatted, sorted lines. Reading and writing files is left to [`crate::io`].

use crate::content::{ContentKind, Record};
use crate::error::{AppError, LineFailure};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// What to do when a line cannot be parsed. No policy produces partial output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Abort on the first invalid line
    #[default]
    FailFast,
    /// Parse every line, then fail listing all invalid lines
    CollectAll,
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailurePolicy::FailFast => f.write_str("fail-fast"),
            FailurePolicy::CollectAll => f.write_str("collect-all"),
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail-fast" | "fail_fast" => Ok(FailurePolicy::FailFast),
            "collect-all" | "collect_all" => Ok(FailurePolicy::CollectAll),
            other => Err(AppError::config_error(format!(
                "Unknown failure policy '{other}', expected 'fail-fast' or 'collect-all'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortPipeline {
    kind: ContentKind,
    policy: FailurePolicy,
}

impl SortPipeline {
    pub fn new(kind: ContentKind, policy: FailurePolicy) -> Self {
        Self { kind, policy }
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Runs the whole batch: parse in input order, stable sort, format.
    ///
    /// # Example
    /// ```
    /// use name_sorter::pipeline::SortPipeline;
    ///
    /// let sorted = SortPipeline::default()
    ///     .run(["Janet Parsons", "Vaughn Lewis", "Adonis Julius Archer", "Shaun Chen"])
    ///     .unwrap();
    /// assert_eq!(
    ///     sorted,
    ///     ["Adonis Julius Archer", "Shaun Chen", "Vaughn Lewis", "Janet Parsons"]
    /// );
    /// ```
    pub fn run<I, S>(&self, raw_lines: I) -> Result<Vec<String>, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = self.parse_all(raw_lines)?;
        // slice::sort is stable, equal keys keep their input order
        records.sort();
        info!(
            "Sorted {} {} record(s) with {} policy",
            records.len(),
            self.kind,
            self.policy
        );
        Ok(records.iter().map(Record::format).collect())
    }

    /// Parses every line in input order according to the failure policy.
    pub fn parse_all<I, S>(&self, raw_lines: I) -> Result<Vec<Record>, AppError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut failures = Vec::new();

        for (index, raw) in raw_lines.into_iter().enumerate() {
            let raw = raw.as_ref();
            let line = index + 1;
            match self.kind.parse_record(raw) {
                Ok(record) => {
                    debug!("Parsed line {line}: {raw:?}");
                    records.push(record);
                }
                Err(AppError::InvalidNameFormat { name, reason, .. })
                    if self.policy == FailurePolicy::CollectAll =>
                {
                    warn!("Rejected line {line}: {name:?} ({reason})");
                    failures.push(LineFailure {
                        line,
                        raw: name,
                        reason,
                    });
                }
                Err(e) => {
                    warn!("Aborting on line {line}: {e}");
                    return Err(e.at_line(line));
                }
            }
        }

        if failures.is_empty() {
            Ok(records)
        } else {
            Err(AppError::InvalidNameBatch { failures })
        }
    }
}

/// Sorts raw name lines with the default fail-fast pipeline.
pub fn sort_names<I, S>(raw_lines: I) -> Result<Vec<String>, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    SortPipeline::default().run(raw_lines)
}
