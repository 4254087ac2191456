//! Directory walking shared by the index and validate batches.
//!
//! Files are picked up when they carry the prompt extension, are not one of
//! the reserved documentation files, and do not match a configured exclude
//! pattern. Paths come back sorted so reports are stable between runs.

use std::path::{Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::prompt::PROMPT_EXTENSION;

/// Documentation files skipped when building the index
pub const INDEX_RESERVED: &[&str] = &["README.MD", "INDEX.MD"];

/// Documentation files skipped when validating a directory
pub const VALIDATE_RESERVED: &[&str] = &["README.MD", "CONTRIBUTING.MD", "LICENSE.MD"];

/// Compiled exclude globs, matched against paths relative to the walk root
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    /// Compile patterns, skipping (and logging) any that are malformed
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match Pattern::new(p.as_ref()) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Ignoring invalid exclude pattern {:?}: {}", p.as_ref(), e);
                    None
                }
            })
            .collect();

        Self { patterns }
    }

    /// Check if a root-relative path matches any exclude pattern
    pub fn is_excluded(&self, relative: &Path) -> bool {
        self.patterns.iter().any(|p| p.matches_path(relative))
    }
}

/// Whether a file name is one of the reserved names (case-insensitive)
pub fn is_reserved(path: &Path, reserved: &[&str]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let upper = name.to_string_lossy().to_uppercase();
    reserved.iter().any(|r| *r == upper)
}

/// Recursively collect prompt documents under `root`.
///
/// Symlinked files and directories are followed. A missing root yields no
/// files. Entries that cannot be read during the walk are logged and skipped.
pub fn discover(root: &Path, reserved: &[&str], excludes: &ExcludeSet) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!("Prompt directory not found: {}", root.display());
        return Vec::new();
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(PROMPT_EXTENSION) {
            continue;
        }

        if is_reserved(path, reserved) {
            debug!("Skipping reserved file: {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if excludes.is_excluded(relative) {
            debug!("Skipping excluded file: {}", path.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    debug!("Discovered {} prompt files under {}", files.len(), root.display());
    files
}
