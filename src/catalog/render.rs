//! Markdown rendering for the generated index.
//!
//! Sections are built as lists of lines joined with `\n`. An empty section
//! renders as an empty string and still takes its slot in the document.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use tracing::debug;

use super::records::{difficulty_marker, Catalog};
use crate::prompt::{extract, PromptRecord, CATEGORIES};

/// Longest description shown in a category table row
pub const TABLE_DESCRIPTION_LIMIT: usize = 100;

/// Knobs for index generation
#[derive(Debug, Clone)]
pub struct IndexOptions {
    /// Entries in the "Recently Added" list
    pub recent_limit: usize,

    /// Tags shown in the tag cloud
    pub tag_limit: usize,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            recent_limit: 10,
            tag_limit: 30,
        }
    }
}

/// Render the complete index document
pub fn render_index<Tz>(catalog: &Catalog, options: &IndexOptions, generated_at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut lines: Vec<String> = vec![
        "# PromptHub Index".into(),
        "".into(),
        format!("*Last updated: {}*", generated_at.format("%Y-%m-%d %H:%M:%S")),
        "".into(),
        "Complete catalog of all prompts in the repository.".into(),
        "".into(),
        "## 🔍 Quick Navigation".into(),
        "".into(),
        "- [Browse by Category](#-browse-by-category)".into(),
        "- [Browse by Tag](#\u{fe0f}-browse-by-tag)".into(),
        "- [Recently Added](#-recently-added)".into(),
        "- [Statistics](#-repository-statistics)".into(),
        "".into(),
        "---".into(),
        "".into(),
    ];

    lines.push(render_statistics(catalog));
    lines.push(render_recent(catalog, options.recent_limit));

    lines.push("## 📁 Browse by Category\n".into());
    lines.extend(
        CATEGORIES
            .iter()
            .map(|category| render_category(catalog, category))
            .filter(|section| !section.is_empty()),
    );

    lines.push(render_tags(catalog, options.tag_limit));

    lines.extend(
        [
            "---",
            "",
            "## 🤝 Contributing",
            "",
            "Don't see what you're looking for? [Submit a new prompt](CONTRIBUTING.md)!",
            "",
            "**[Back to Main README](README.md)**",
        ]
        .map(String::from),
    );

    lines.join("\n")
}

/// Render the index and write it to `output`, replacing any existing content
pub fn write_index<Tz>(
    catalog: &Catalog,
    options: &IndexOptions,
    generated_at: DateTime<Tz>,
    output: &Path,
) -> Result<()>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let content = render_index(catalog, options, generated_at);
    std::fs::write(output, content)
        .with_context(|| format!("Failed to write index: {}", output.display()))?;
    debug!(prompts = catalog.len(), output = %output.display(), "Index written");
    Ok(())
}

/// The two lines printed after a successful index run
pub fn summary_lines(prompts: usize, output: &Path) -> [String; 2] {
    [
        format!("✓ Generated index with {} prompts", prompts),
        format!("✓ Written to: {}", output.display()),
    ]
}

/// Share of `count` in `total` as a percentage; zero when the total is zero
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

/// Totals plus per-category and per-difficulty breakdowns
pub fn render_statistics(catalog: &Catalog) -> String {
    let total = catalog.len();

    let mut lines = vec![
        "## 📊 Repository Statistics\n".to_string(),
        format!("**Total Prompts:** {}", total),
        String::new(),
        "**By Category:**".to_string(),
    ];

    for (category, count) in catalog.category_counts() {
        lines.push(format!(
            "- {}: {} ({:.1}%)",
            category,
            count,
            percentage(count, total)
        ));
    }

    lines.push(String::new());
    lines.push("**By Difficulty:**".to_string());

    for (difficulty, count) in catalog.difficulty_counts() {
        lines.push(format!(
            "- {} {}: {} ({:.1}%)",
            difficulty_marker(&difficulty),
            difficulty,
            count,
            percentage(count, total)
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Newest dated prompts as a bullet list
pub fn render_recent(catalog: &Catalog, limit: usize) -> String {
    let recent = catalog.recent(limit);
    if recent.is_empty() {
        return String::new();
    }

    let mut lines = vec!["## 🆕 Recently Added\n".to_string()];
    for record in recent {
        lines.push(format!("- {} - {}", link(record), record.date_added));
    }
    lines.push(String::new());
    lines.join("\n")
}

/// Table of prompts in one category, or an empty string if there are none
pub fn render_category(catalog: &Catalog, category: &str) -> String {
    let records = catalog.in_category(category);
    if records.is_empty() {
        return String::new();
    }

    let mut lines = vec![
        format!("### {}\n", category),
        "| Prompt | Difficulty | Models | Description |".to_string(),
        "|--------|-----------|---------|-------------|".to_string(),
    ];

    for record in records {
        lines.push(format!(
            "| {} | {} {} | {} | {} |",
            link(record),
            difficulty_marker(&record.difficulty),
            record.difficulty,
            record.models,
            extract::truncate(&record.description, TABLE_DESCRIPTION_LIMIT)
        ));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Inline tag cloud with usage counts
pub fn render_tags(catalog: &Catalog, limit: usize) -> String {
    let tags = catalog.tag_counts(limit);
    if tags.is_empty() {
        return String::new();
    }

    let cloud: Vec<String> = tags
        .iter()
        .map(|(tag, count)| format!("`#{}` ({})", tag, count))
        .collect();

    [
        "## 🏷\u{fe0f} Browse by Tag\n".to_string(),
        cloud.join(" · "),
        String::new(),
    ]
    .join("\n")
}

fn link(record: &PromptRecord) -> String {
    format!("[{}]({})", record.title, link_path(&record.filepath).display())
}

/// Path used in links: relative to the working directory when possible
fn link_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        if let Ok(cwd) = std::env::current_dir() {
            if let Ok(relative) = path.strip_prefix(&cwd) {
                return relative.to_path_buf();
            }
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn record(title: &str, category: &str, difficulty: &str) -> PromptRecord {
        PromptRecord {
            title: title.to_string(),
            filepath: PathBuf::from(format!("prompts/{}.md", title.to_lowercase())),
            category: category.to_string(),
            difficulty: difficulty.to_string(),
            models: "GPT-4".to_string(),
            tags: Vec::new(),
            description: "Short description.".to_string(),
            author: "@unknown".to_string(),
            date_added: "Unknown".to_string(),
        }
    }

    fn fixed_time() -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn test_percentage_handles_zero_total() {
        assert_eq!(percentage(0, 0), 0.0);
        assert_eq!(percentage(1, 4), 25.0);
    }

    #[test]
    fn test_statistics_for_empty_catalog() {
        let stats = render_statistics(&Catalog::new());
        assert!(stats.contains("**Total Prompts:** 0"));
        assert!(stats.contains("**By Category:**"));
        assert!(!stats.contains("NaN"));
    }

    #[test]
    fn test_statistics_percentages() {
        let catalog = Catalog::from_records(vec![
            record("A", "Coding", "Beginner"),
            record("B", "Coding", "Advanced"),
            record("C", "Writing", "Beginner"),
        ]);

        let stats = render_statistics(&catalog);
        assert!(stats.contains("**Total Prompts:** 3"));
        assert!(stats.contains("- Coding: 2 (66.7%)"));
        assert!(stats.contains("- Writing: 1 (33.3%)"));
        assert!(stats.contains("- 🟢 Beginner: 2 (66.7%)"));
        assert!(stats.contains("- 🔴 Advanced: 1 (33.3%)"));
    }

    #[test]
    fn test_category_table_rows() {
        let mut long = record("Long", "Coding", "Intermediate");
        long.description = "x".repeat(120);
        let catalog = Catalog::from_records(vec![long, record("Essay", "Writing", "Beginner")]);

        let table = render_category(&catalog, "Coding");
        let expected_row = format!(
            "| [Long](prompts/long.md) | 🟡 Intermediate | GPT-4 | {}... |",
            "x".repeat(97)
        );
        assert!(table.starts_with("### Coding\n\n| Prompt | Difficulty | Models | Description |"));
        assert!(table.contains(&expected_row));
        assert!(!table.contains("Essay"));
        assert_eq!(render_category(&catalog, "Research"), "");
    }

    #[test]
    fn test_recent_section() {
        let mut dated = record("Dated", "Coding", "Beginner");
        dated.date_added = "2024-04-01".to_string();
        let catalog = Catalog::from_records(vec![dated, record("Undated", "Coding", "Beginner")]);

        let recent = render_recent(&catalog, 10);
        assert_eq!(
            recent,
            "## 🆕 Recently Added\n\n- [Dated](prompts/dated.md) - 2024-04-01\n"
        );
        assert_eq!(render_recent(&Catalog::new(), 10), "");
    }

    #[test]
    fn test_tag_cloud() {
        let mut a = record("A", "Coding", "Beginner");
        a.tags = vec!["rust".into(), "cli".into()];
        let mut b = record("B", "Coding", "Beginner");
        b.tags = vec!["rust".into()];
        let catalog = Catalog::from_records(vec![a, b]);

        let cloud = render_tags(&catalog, 30);
        assert!(cloud.contains("`#rust` (2) · `#cli` (1)"));
        assert_eq!(render_tags(&Catalog::new(), 30), "");
    }

    #[test]
    fn test_full_index_layout() {
        let catalog = Catalog::from_records(vec![
            record("Refactor Helper", "Coding", "Advanced"),
            record("Poem Starter", "Creative", "Beginner"),
        ]);

        let index = render_index(&catalog, &IndexOptions::default(), fixed_time());

        assert!(index.starts_with("# PromptHub Index\n\n*Last updated: 2024-06-01 12:30:00*"));
        let coding = index.find("### Coding").unwrap();
        let creative = index.find("### Creative").unwrap();
        assert!(coding < creative);
        assert!(!index.contains("### Writing"));
        assert!(index.ends_with("**[Back to Main README](README.md)**"));
    }

    #[test]
    fn test_empty_index_renders() {
        let index = render_index(&Catalog::new(), &IndexOptions::default(), fixed_time());
        assert!(index.contains("**Total Prompts:** 0"));
        assert!(index.contains("## 📁 Browse by Category"));
        assert!(!index.contains("###"));
    }
}
