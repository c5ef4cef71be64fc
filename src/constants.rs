//! Application-wide constants
//!
//! Name validation bounds, default file names and environment variable keys
//! live here so the parser, config layer and CLI agree on them.

/// Fewest given names a person name may carry
pub const MIN_GIVEN_NAMES: usize = 1;

/// Most given names a person name may carry
pub const MAX_GIVEN_NAMES: usize = 3;

/// Shortest raw line (in characters) that can hold a given name, a space and a surname
pub const MIN_RAW_NAME_CHARS: usize = 2;

/// Default file the sorted list is persisted to, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "sorted-names-list.txt";

/// Directory under the platform config dir holding config and logs
pub const APP_DIR_NAME: &str = "name_sorter";

/// Config file name inside [`APP_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "name_sorter.log";

/// Default tracing directive applied on top of `RUST_LOG`
pub const DEFAULT_LOG_DIRECTIVE: &str = "name_sorter=info";

/// Environment variable overrides for config values
pub mod env {
    /// Overrides `output_path`
    pub const OUTPUT: &str = "NAME_SORTER_OUTPUT";

    /// Overrides `log_file_path`
    pub const LOG_FILE: &str = "NAME_SORTER_LOG_FILE";

    /// Overrides `failure_policy` (`fail-fast` or `collect-all`)
    pub const FAILURE_POLICY: &str = "NAME_SORTER_FAILURE_POLICY";
}
