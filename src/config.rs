//! Configuration for prompthub.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of this)
//! 2. Environment variables (PROMPTHUB_PROMPTS_DIR, PROMPTHUB_INDEX)
//! 3. Config file (.prompthub/config.yaml)
//! 4. Defaults (`prompts/` in, `INDEX.md` out)
//!
//! Config file discovery:
//! - Searches current directory and parents for .prompthub/config.yaml
//! - Paths in config file are relative to the project root (the parent of .prompthub/)

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const ENV_PROMPTS_DIR: &str = "PROMPTHUB_PROMPTS_DIR";
pub const ENV_INDEX: &str = "PROMPTHUB_INDEX";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub index: Option<IndexConfig>,
    /// Glob patterns (relative to the prompt directory) to leave out
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the prompt documents
    pub prompts: Option<String>,
    /// Where the generated index is written
    pub index: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    pub recent_limit: Option<usize>,
    pub tag_limit: Option<usize>,
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Directory scanned for prompt documents
    pub prompts_dir: PathBuf,
    /// Output path of the generated index
    pub index_path: PathBuf,
    /// Entries in the "Recently Added" section
    pub recent_limit: usize,
    /// Tags in the tag cloud
    pub tag_limit: usize,
    /// Extra exclude globs
    pub exclude: Vec<String>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            prompts_dir: PathBuf::from("prompts"),
            index_path: PathBuf::from("INDEX.md"),
            recent_limit: 10,
            tag_limit: 30,
            exclude: Vec::new(),
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".prompthub").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge a parsed config file and environment lookups over the defaults
fn resolve(
    file: Option<(PathBuf, ConfigFile)>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    if let Some((config_path, config)) = file {
        // Base directory is the parent of .prompthub/ (i.e., grandparent of config.yaml)
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."))
            .to_path_buf();

        if let Some(ref prompts) = config.paths.prompts {
            resolved.prompts_dir = resolve_path(&base_dir, prompts);
        }
        if let Some(ref index) = config.paths.index {
            resolved.index_path = resolve_path(&base_dir, index);
        }
        if let Some(index) = config.index {
            resolved.recent_limit = index.recent_limit.unwrap_or(resolved.recent_limit);
            resolved.tag_limit = index.tag_limit.unwrap_or(resolved.tag_limit);
        }
        resolved.exclude = config.exclude;
        resolved.config_file = Some(config_path);
    }

    if let Some(dir) = env(ENV_PROMPTS_DIR) {
        resolved.prompts_dir = PathBuf::from(dir);
    }
    if let Some(index) = env(ENV_INDEX) {
        resolved.index_path = PathBuf::from(index);
    }

    resolved
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let file = match find_config_file() {
        Some(path) => {
            let config = load_config_file(&path)?;
            Some((path, config))
        }
        None => None,
    };

    Ok(resolve(file, |key| std::env::var(key).ok()))
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
