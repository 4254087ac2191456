//! Extracted prompt metadata.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::extract::{self, Field};
use super::loader::{read_document, LoadError};

/// Longest description kept on a record
pub const DESCRIPTION_LIMIT: usize = 150;

/// Metadata for one prompt document, derived entirely from its content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptRecord {
    /// First `#` heading, or the file stem when there is none
    pub title: String,

    /// Where the document lives (used to build links)
    pub filepath: PathBuf,

    pub category: String,

    pub difficulty: String,

    /// Model compatibility string
    pub models: String,

    /// Tags in first-seen order
    pub tags: Vec<String>,

    /// First sentence of the description, at most 150 characters
    pub description: String,

    pub author: String,

    /// Free-form date string, compared lexicographically
    pub date_added: String,
}

impl PromptRecord {
    /// Build a record from document content
    pub fn from_content(filepath: impl Into<PathBuf>, content: &str) -> Self {
        let filepath = filepath.into();

        let title = extract::title(content).unwrap_or_else(|| file_stem(&filepath));
        let description = extract::description_block(content)
            .map(|text| extract::summarize(text, DESCRIPTION_LIMIT))
            .unwrap_or_else(|| "No description available.".to_string());

        Self {
            title,
            category: field_or(content, Field::Category, "Unknown"),
            difficulty: field_or(content, Field::Difficulty, "Unknown"),
            models: field_or(content, Field::ModelCompatibility, "All Models"),
            tags: extract::tags(content),
            description,
            author: field_or(content, Field::Author, "@unknown"),
            date_added: field_or(content, Field::DateAdded, "Unknown"),
            filepath,
        }
    }

    /// Read a document from disk and extract its record
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = read_document(path)?;
        Ok(Self::from_content(path, &content))
    }

    /// Whether a date was recorded for this prompt
    pub fn has_date(&self) -> bool {
        self.date_added != "Unknown"
    }
}

fn field_or(content: &str, field: Field, default: &str) -> String {
    extract::field(content, field).unwrap_or_else(|| default.to_string())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# API Test Generator

## Metadata
- **Category**: [Coding]
- **Difficulty**: Intermediate
- **Model Compatibility**: GPT-4, Claude
- **Tags**: `#python` `#testing` `#api`
- **Author**: @tester
- **Date Added**: 2024-02-10
- **Version**: 1.0

## Description

Generates pytest suites for REST endpoints. Covers edge cases too.

## Use Case
";

    #[test]
    fn test_record_from_content() {
        let record = PromptRecord::from_content("prompts/coding/api-test-generator.md", SAMPLE);

        assert_eq!(record.title, "API Test Generator");
        assert_eq!(record.category, "Coding");
        assert_eq!(record.difficulty, "Intermediate");
        assert_eq!(record.models, "GPT-4, Claude");
        assert_eq!(record.tags, vec!["python", "testing", "api"]);
        assert_eq!(record.description, "Generates pytest suites for REST endpoints.");
        assert_eq!(record.author, "@tester");
        assert_eq!(record.date_added, "2024-02-10");
        assert!(record.has_date());
    }

    #[test]
    fn test_defaults_for_bare_document() {
        let record = PromptRecord::from_content("prompts/untitled-thing.md", "just some text");

        assert_eq!(record.title, "untitled-thing");
        assert_eq!(record.category, "Unknown");
        assert_eq!(record.difficulty, "Unknown");
        assert_eq!(record.models, "All Models");
        assert!(record.tags.is_empty());
        assert_eq!(record.description, "No description available.");
        assert_eq!(record.author, "@unknown");
        assert_eq!(record.date_added, "Unknown");
        assert!(!record.has_date());
    }
}
