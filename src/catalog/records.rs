//! In-memory catalog of extracted prompt records.

use std::path::Path;

use tracing::{debug, warn};

use crate::batch::{self, ExcludeSet};
use crate::prompt::PromptRecord;

/// Sort rank for a difficulty label; unknown labels sort last
pub fn difficulty_rank(difficulty: &str) -> u32 {
    match difficulty {
        "Beginner" => 1,
        "Intermediate" => 2,
        "Advanced" => 3,
        _ => 999,
    }
}

/// Decorative marker shown next to a difficulty label
pub fn difficulty_marker(difficulty: &str) -> &'static str {
    match difficulty {
        "Beginner" => "🟢",
        "Intermediate" => "🟡",
        "Advanced" => "🔴",
        _ => "⚪",
    }
}

/// All prompt records collected in one run, kept sorted by title
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub items: Vec<PromptRecord>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a catalog from records, ordering them by title (case-insensitive)
    pub fn from_records(records: impl IntoIterator<Item = PromptRecord>) -> Self {
        let mut catalog = Self {
            items: records.into_iter().collect(),
        };
        catalog.sort();
        catalog
    }

    /// Walk `root` and extract a record from every prompt document.
    ///
    /// Files that fail to load are logged and left out of the catalog.
    pub fn collect(root: &Path, excludes: &ExcludeSet) -> Self {
        let mut catalog = Self::new();

        for path in batch::discover(root, batch::INDEX_RESERVED, excludes) {
            match PromptRecord::load(&path) {
                Ok(record) => catalog.items.push(record),
                Err(e) => warn!("Failed to process {}: {}", path.display(), e),
            }
        }

        catalog.sort();
        debug!("Collected {} prompts from {}", catalog.len(), root.display());
        catalog
    }

    fn sort(&mut self) {
        self.items.sort_by_key(|r| r.title.to_lowercase());
    }

    /// Search records by query (case-insensitive substring match on title,
    /// category and tags)
    pub fn search(&self, query: &str) -> Vec<&PromptRecord> {
        let query_lower = query.to_lowercase();

        self.items
            .iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&query_lower)
                    || r.category.to_lowercase().contains(&query_lower)
                    || r.tags.iter().any(|t| t.to_lowercase().contains(&query_lower))
            })
            .collect()
    }

    /// Records filed under `category`, easiest first, then by title.
    ///
    /// Matching is by substring so annotated values like `Coding (Python)`
    /// still land in the Coding table.
    pub fn in_category(&self, category: &str) -> Vec<&PromptRecord> {
        let mut records: Vec<_> = self
            .items
            .iter()
            .filter(|r| r.category.contains(category))
            .collect();

        records.sort_by(|a, b| {
            difficulty_rank(&a.difficulty)
                .cmp(&difficulty_rank(&b.difficulty))
                .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        });
        records
    }

    /// Dated records, most recent first (plain string comparison)
    pub fn recent(&self, limit: usize) -> Vec<&PromptRecord> {
        let mut records: Vec<_> = self.items.iter().filter(|r| r.has_date()).collect();
        records.sort_by(|a, b| b.date_added.cmp(&a.date_added));
        records.truncate(limit);
        records
    }

    /// Count of records per category value, largest first
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        count_desc(self.items.iter().map(|r| r.category.as_str()))
    }

    /// Count of records per difficulty value, largest first
    pub fn difficulty_counts(&self) -> Vec<(String, usize)> {
        count_desc(self.items.iter().map(|r| r.difficulty.as_str()))
    }

    /// Most used tags, by count and then name (case-insensitive)
    pub fn tag_counts(&self, limit: usize) -> Vec<(String, usize)> {
        let mut counts = tally(
            self.items
                .iter()
                .flat_map(|r| r.tags.iter().map(String::as_str)),
        );
        counts.sort_by(|a, b| {
            b.1.cmp(&a.1)
                .then_with(|| a.0.to_lowercase().cmp(&b.0.to_lowercase()))
        });
        counts.truncate(limit);
        counts
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Count values keeping first-seen order for equal counts
fn tally<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(v, _)| v.as_str() == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

fn count_desc<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts = tally(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
