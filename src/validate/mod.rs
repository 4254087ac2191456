//! Template conformance checks for prompt documents.
//!
//! Every rule runs independently and records either an error (the document
//! is invalid) or a warning (advisory only). The one exception is loading:
//! a missing file, a non-Markdown extension or an unreadable file produces a
//! single error and nothing else is checked.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::batch::{self, ExcludeSet};
use crate::prompt::load_document;

pub mod report;
pub mod rules;

pub use report::{all_passed, render_json, render_text};

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub filepath: String,
}

impl ValidationResult {
    /// Result for a document that could not be checked at all
    pub fn failed(path: &Path, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![error.into()],
            warnings: Vec::new(),
            filepath: path.display().to_string(),
        }
    }
}

/// Errors and warnings accumulated while checking a document
#[derive(Debug, Default)]
pub struct Findings {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Findings {
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn into_result(self, path: &Path) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            filepath: path.display().to_string(),
        }
    }
}

/// Run every content rule against a document already in memory.
///
/// `path` is only used for the filename rules and the result's `filepath`.
pub fn validate_document(path: &Path, content: &str) -> ValidationResult {
    let mut findings = Findings::default();

    rules::check_filename(path, &mut findings);
    rules::check_required_sections(content, &mut findings);
    rules::check_metadata(content, &mut findings);
    rules::check_content_quality(content, &mut findings);
    rules::check_examples(content, &mut findings);

    findings.into_result(path)
}

/// Load and validate a single file
pub fn validate_file(path: &Path) -> ValidationResult {
    match load_document(path) {
        Ok(content) => validate_document(path, &content),
        Err(e) => {
            debug!("Could not load {}: {}", path.display(), e);
            ValidationResult::failed(path, e.to_string())
        }
    }
}

/// Validate every prompt document under `root`, in path order
pub fn validate_directory(root: &Path, excludes: &ExcludeSet) -> Vec<ValidationResult> {
    batch::discover(root, batch::VALIDATE_RESERVED, excludes)
        .iter()
        .map(|path| validate_file(path))
        .collect()
}
