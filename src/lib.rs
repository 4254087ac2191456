//! prompthub - catalog builder and linter for Markdown prompt collections
//!
//! Prompt documents are Markdown files that follow a fixed template: a title,
//! a block of `**Field**: value` metadata, and a set of `##` sections. This
//! crate extracts that metadata, checks documents against the template, and
//! renders a single index of the whole collection.
//!
//! # Modules
//!
//! - `prompt`: loading documents and extracting their metadata
//! - `catalog`: the collected records and the generated index
//! - `validate`: template rules and validation reports
//! - `batch`: directory walking shared by both passes
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Regenerate INDEX.md from prompts/
//! prompthub index
//!
//! # Check a single prompt or a whole directory
//! prompthub validate prompts/by-category/coding/
//! ```

pub mod batch;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod prompt;
pub mod validate;

// Re-export main types at crate root for convenience
pub use catalog::{render_index, write_index, Catalog, IndexOptions};
pub use prompt::{LoadError, PromptRecord};
pub use validate::{validate_directory, validate_file, ValidationResult};
