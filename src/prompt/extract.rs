//! Pattern rules for pulling labeled fields and sections out of a document.
//!
//! Every rule is an independent search over the whole text and the first
//! match wins. The template is human-authored and fixed, so there is no
//! Markdown parser here, only anchored regular expressions.

use std::sync::OnceLock;

use regex::Regex;

/// Categories a prompt can be filed under, in index order
pub const CATEGORIES: [&str; 6] = [
    "Coding",
    "Writing",
    "Analysis",
    "Creative",
    "Education",
    "Research",
];

/// Recognised difficulty levels, easiest first
pub const DIFFICULTIES: [&str; 3] = ["Beginner", "Intermediate", "Advanced"];

/// Labeled metadata fields written as `**Name**: value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Category,
    Difficulty,
    ModelCompatibility,
    Tags,
    Author,
    DateAdded,
    Version,
}

impl Field {
    /// All fields, in the order the template lists them
    pub const ALL: [Field; 7] = [
        Field::Category,
        Field::Difficulty,
        Field::ModelCompatibility,
        Field::Tags,
        Field::Author,
        Field::DateAdded,
        Field::Version,
    ];

    /// Label as written between the `**` markers
    pub fn label(self) -> &'static str {
        match self {
            Field::Category => "Category",
            Field::Difficulty => "Difficulty",
            Field::ModelCompatibility => "Model Compatibility",
            Field::Tags => "Tags",
            Field::Author => "Author",
            Field::DateAdded => "Date Added",
            Field::Version => "Version",
        }
    }

    /// Literal marker that must appear in a conforming document, e.g. `**Tags**:`
    pub fn marker(self) -> String {
        format!("**{}**:", self.label())
    }

    fn pattern(self) -> &'static Regex {
        static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
        let patterns = PATTERNS.get_or_init(|| {
            Field::ALL
                .iter()
                .map(|field| {
                    let pattern = format!(r"\*\*{}\*\*:\s*(.+)", regex::escape(field.label()));
                    Regex::new(&pattern).expect("field pattern is valid")
                })
                .collect()
        });
        &patterns[self as usize]
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn title_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#\s+(.+)$").expect("title pattern is valid"))
}

fn tag_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"`#(\w+)`").expect("tag pattern is valid"))
}

fn description_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)## Description\s+(.+?)##").expect("description pattern is valid")
    })
}

fn prompt_block_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)## The Prompt\s+```(.+?)```").expect("prompt pattern is valid")
    })
}

fn example_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)## Example Input/Output(.+?)##").expect("example pattern is valid")
    })
}

/// Text of the first level-one heading, trimmed
pub fn title(content: &str) -> Option<String> {
    title_pattern()
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Raw value of a labeled field, trimmed but otherwise untouched
pub fn raw_field(content: &str, field: Field) -> Option<String> {
    field
        .pattern()
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
}

/// Value of a labeled field with `[` and `]` removed
pub fn field(content: &str, field: Field) -> Option<String> {
    raw_field(content, field).map(|value| strip_brackets(&value))
}

/// Tags listed in the `**Tags**:` field, in the order they appear
pub fn tags(content: &str) -> Vec<String> {
    let Some(value) = raw_field(content, Field::Tags) else {
        return Vec::new();
    };

    tag_pattern()
        .captures_iter(&value)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Body of the `## Description` section up to the next `##` heading, trimmed
pub fn description_block(content: &str) -> Option<&str> {
    description_pattern()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Contents of the first fenced block directly under `## The Prompt`, trimmed
pub fn prompt_block(content: &str) -> Option<&str> {
    prompt_block_pattern()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Body of the `## Example Input/Output` section up to the next `##` heading
pub fn example_block(content: &str) -> Option<&str> {
    example_pattern()
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Reduce a description to its first sentence, capped at `max` characters.
///
/// A period is always appended to the first sentence. When the result is
/// still too long it is cut to `max - 3` characters followed by `...`.
pub fn summarize(description: &str, max: usize) -> String {
    let first = description.split('.').next().unwrap_or_default();
    truncate(&format!("{}.", first), max)
}

/// Cut `text` to at most `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn strip_brackets(value: &str) -> String {
    value.chars().filter(|c| *c != '[' && *c != ']').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_uses_first_h1() {
        let content = "## Not this\n# Real Title  \n# Second\n";
        assert_eq!(title(content), Some("Real Title".to_string()));
    }

    #[test]
    fn test_title_ignores_h2_only() {
        assert_eq!(title("## Metadata\n## Description\n"), None);
    }

    #[test]
    fn test_field_strips_brackets() {
        let content = "- **Category**: [Coding]\n- **Author**: @dev\n";
        assert_eq!(field(content, Field::Category), Some("Coding".to_string()));
        assert_eq!(field(content, Field::Author), Some("@dev".to_string()));
        assert_eq!(field(content, Field::Version), None);
    }

    #[test]
    fn test_raw_field_keeps_brackets() {
        let content = "**Version**: [1.0]\n";
        assert_eq!(raw_field(content, Field::Version), Some("[1.0]".to_string()));
    }

    #[test]
    fn test_multi_word_label() {
        let content = "**Model Compatibility**: GPT-4, Claude 3\n**Date Added**: 2024-03-01\n";
        assert_eq!(
            field(content, Field::ModelCompatibility),
            Some("GPT-4, Claude 3".to_string())
        );
        assert_eq!(field(content, Field::DateAdded), Some("2024-03-01".to_string()));
    }

    #[test]
    fn test_tags_in_source_order() {
        let content = "**Tags**: `#python` `#testing` `#api`\n";
        assert_eq!(tags(content), vec!["python", "testing", "api"]);
    }

    #[test]
    fn test_tags_only_from_tags_line() {
        let content = "Some `#stray` tag\n**Tags**: `#one`, plain, `#two-part`\n";
        // `#two-part` is not a single word token
        assert_eq!(tags(content), vec!["one"]);
    }

    #[test]
    fn test_description_block_stops_at_next_heading() {
        let content = "## Description\n\nFirst line.\nSecond line.\n\n## Use Case\nOther";
        assert_eq!(description_block(content), Some("First line.\nSecond line."));
    }

    #[test]
    fn test_summarize_first_sentence() {
        assert_eq!(
            summarize("This is a test sentence. More text follows here.", 150),
            "This is a test sentence."
        );
    }

    #[test]
    fn test_summarize_hard_truncates() {
        let long = "a".repeat(200);
        let summary = summarize(&long, 150);
        assert_eq!(summary.chars().count(), 150);
        assert!(summary.starts_with(&"a".repeat(147)));
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_summarize_adds_period() {
        assert_eq!(summarize("No period here", 150), "No period here.");
    }

    #[test]
    fn test_truncate_counts_chars() {
        let text = "é".repeat(10);
        assert_eq!(truncate(&text, 10), text);
        assert_eq!(truncate(&text, 5), "éé...");
    }

    #[test]
    fn test_prompt_block() {
        let content = "## The Prompt\n\n```\nDo the thing.\n```\n";
        assert_eq!(prompt_block(content), Some("Do the thing."));
        assert_eq!(prompt_block("## The Prompt\n\nNo fence here\n"), None);
    }

    #[test]
    fn test_field_markers() {
        let markers: Vec<String> = Field::ALL.iter().map(|f| f.marker()).collect();
        assert_eq!(markers[0], "**Category**:");
        assert_eq!(markers[2], "**Model Compatibility**:");
        assert_eq!(markers.len(), 7);
    }
}
