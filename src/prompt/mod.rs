//! Prompt documents and the metadata pulled out of them.
//!
//! A prompt document is a Markdown file following the catalog template:
//!
//! ```text
//! # Code Review Assistant
//!
//! ## Metadata
//! - **Category**: Coding
//! - **Difficulty**: Intermediate
//! - **Model Compatibility**: GPT-4, Claude
//! - **Tags**: `#code-review` `#python`
//! - **Author**: @someone
//! - **Date Added**: 2024-01-15
//! - **Version**: 1.0
//!
//! ## Description
//! ...
//! ```
//!
//! Extraction is pattern based and never fails: anything missing falls back
//! to a default value.

pub mod extract;
pub mod loader;
pub mod record;

pub use extract::{Field, CATEGORIES, DIFFICULTIES};
pub use loader::{load_document, read_document, LoadError, PROMPT_EXTENSION};
pub use record::PromptRecord;
