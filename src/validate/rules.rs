//! Individual validation rules.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use super::Findings;
use crate::prompt::extract::{self, Field};
use crate::prompt::{CATEGORIES, DIFFICULTIES};

/// Section markers that must appear somewhere in the document
pub const REQUIRED_SECTIONS: [&str; 10] = [
    "# ",
    "## Metadata",
    "## Description",
    "## Use Case",
    "## The Prompt",
    "## Variables to Customize",
    "## Example Input/Output",
    "## Performance Notes",
    "## Related Prompts",
    "## Version History",
];

/// Template filler that must be replaced before a prompt is accepted
pub const PLACEHOLDERS: [&str; 5] = [
    "[Your text here]",
    "[TODO]",
    "[PLACEHOLDER]",
    "[Enter",
    "[Provide",
];

pub const MAX_FILENAME_LEN: usize = 50;
pub const MIN_DESCRIPTION_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 500;
pub const MIN_PROMPT_LEN: usize = 50;

const VARIABLES_SECTION: &str = "## Variables to Customize";

fn kebab_case() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("kebab pattern is valid"))
}

fn version_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\d+$").expect("version pattern is valid"))
}

fn date_format() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"))
}

/// Filename stem must be kebab-case; long names draw a warning
pub fn check_filename(path: &Path, findings: &mut Findings) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if !kebab_case().is_match(&stem) {
        findings.error(format!(
            "Filename must be in kebab-case (lowercase with hyphens): {}",
            stem
        ));
    }

    let len = stem.chars().count();
    if len > MAX_FILENAME_LEN {
        findings.warn(format!(
            "Filename is quite long ({} chars). Consider shortening.",
            len
        ));
    }
}

/// One error per missing section marker
pub fn check_required_sections(content: &str, findings: &mut Findings) {
    for section in REQUIRED_SECTIONS {
        if !content.contains(section) {
            findings.error(format!("Missing required section: {}", section));
        }
    }
}

/// Presence of every metadata field plus the format of the values that have one
pub fn check_metadata(content: &str, findings: &mut Findings) {
    for field in Field::ALL {
        let marker = field.marker();
        if !content.contains(&marker) {
            findings.error(format!("Missing required metadata field: {}", marker));
        }
    }

    if let Some(category) = extract::field(content, Field::Category) {
        if !CATEGORIES.iter().any(|c| category.contains(c)) {
            findings.error(format!(
                "Invalid category: {}. Must be one of: {}",
                category,
                CATEGORIES.join(", ")
            ));
        }
    }

    if let Some(difficulty) = extract::field(content, Field::Difficulty) {
        if !DIFFICULTIES.iter().any(|d| difficulty.contains(d)) {
            findings.error(format!(
                "Invalid difficulty: {}. Must be one of: {}",
                difficulty,
                DIFFICULTIES.join(", ")
            ));
        }
    }

    if let Some(version) = extract::raw_field(content, Field::Version) {
        if !version_format().is_match(&version) {
            findings.warn(format!(
                "Version format should be X.Y (e.g., 1.0): {}",
                version
            ));
        }
    }

    if let Some(date) = extract::raw_field(content, Field::DateAdded) {
        if !date_format().is_match(&date) {
            findings.error(format!("Date must be in YYYY-MM-DD format: {}", date));
        }
    }
}

/// Description length, leftover placeholders, the prompt block, and
/// undocumented template variables
pub fn check_content_quality(content: &str, findings: &mut Findings) {
    if let Some(description) = extract::description_block(content) {
        let len = description.chars().count();
        if len < MIN_DESCRIPTION_LEN {
            findings.warn("Description seems too short (less than 50 characters)");
        }
        if len > MAX_DESCRIPTION_LEN {
            findings.warn(
                "Description seems quite long (over 500 characters). Consider being more concise.",
            );
        }
    }

    for placeholder in PLACEHOLDERS {
        if content.contains(placeholder) {
            findings.error(format!(
                "Found placeholder text that needs to be filled: {}",
                placeholder
            ));
        }
    }

    match extract::prompt_block(content) {
        None => findings.error("The Prompt section must contain the prompt in a code block (```)"),
        Some(prompt) if prompt.chars().count() < MIN_PROMPT_LEN => {
            findings.warn("The prompt seems very short. Is it complete?")
        }
        Some(_) => {}
    }

    if content.contains('{') && content.contains('}') && !content.contains(VARIABLES_SECTION) {
        findings.warn(
            "Prompt contains variables but 'Variables to Customize' section might be empty",
        );
    }
}

/// The example section should show input, output, and use fenced blocks
pub fn check_examples(content: &str, findings: &mut Findings) {
    let Some(examples) = extract::example_block(content) else {
        findings.warn("Could not find Example Input/Output section content");
        return;
    };

    if !examples.contains("**Input:**") && !examples.contains("**Customized Prompt:**") {
        findings.warn("Examples should show input or customized prompt");
    }

    if !examples.contains("**Output:**") {
        findings.warn("Examples should show output");
    }

    if examples.matches("```").count() < 2 {
        findings.warn("Examples should use code blocks (```) for better formatting");
    }
}
