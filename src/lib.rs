//! Name Sorter Library
//!
//! Parses free-text personal names ("Given [Given [Given]] Surname"), sorts them
//! by surname and then by given names, and writes the sorted list out.
//!
//! # Examples
//!
//! ```rust
//! use name_sorter::name::Name;
//! use name_sorter::pipeline::sort_names;
//!
//! let sorted = sort_names(["Janet Parsons", "Vaughn Lewis", "Shaun Chen"]).unwrap();
//! assert_eq!(sorted, ["Shaun Chen", "Vaughn Lewis", "Janet Parsons"]);
//!
//! let name: Name = "Adonis Julius Archer".parse().unwrap();
//! assert_eq!(name.surname(), "Archer");
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod io;
pub mod logging;
pub mod name;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::Config;
pub use content::ContentKind;
pub use error::AppError;
pub use name::Name;
pub use pipeline::{FailurePolicy, SortPipeline, sort_names};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
