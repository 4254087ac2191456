//! Command-line interface for prompthub.
//!
//! Provides commands for generating the catalog index, validating prompt
//! documents, searching the collection, and showing the resolved config.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use crate::batch::ExcludeSet;
use crate::catalog::{summary_lines, write_index, Catalog, IndexOptions};
use crate::config;
use crate::prompt::extract::truncate;
use crate::validate::{self, report};

/// prompthub - catalog builder and linter for Markdown prompt collections
#[derive(Parser, Debug)]
#[command(name = "prompthub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the index document from every prompt
    Index {
        /// Directory containing prompt documents
        #[arg(short, long)]
        prompts_dir: Option<PathBuf>,

        /// Where to write the index
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of entries in the "Recently Added" section
        #[arg(long)]
        recent: Option<usize>,
    },

    /// Validate a prompt file or every prompt in a directory
    Validate {
        /// Prompt file or directory
        path: PathBuf,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// Search prompts by title, category or tag
    Search {
        /// Search query
        query: String,

        /// Directory containing prompt documents
        #[arg(short, long)]
        prompts_dir: Option<PathBuf>,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Output format for validation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human readable report
    Text,

    /// JSON document
    Json,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<ExitCode> {
        let success = match self.command {
            Commands::Index {
                prompts_dir,
                output,
                recent,
            } => generate_index(prompts_dir, output, recent),
            Commands::Validate { path, format } => validate_path(&path, format),
            Commands::Search { query, prompts_dir } => search_prompts(&query, prompts_dir),
            Commands::Config => show_config(),
        }?;

        Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

/// Build the index and write it to disk
fn generate_index(
    prompts_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    recent: Option<usize>,
) -> Result<bool> {
    let cfg = config::config()?;

    let prompts_dir = prompts_dir.unwrap_or_else(|| cfg.prompts_dir.clone());
    let output = output.unwrap_or_else(|| cfg.index_path.clone());
    let options = IndexOptions {
        recent_limit: recent.unwrap_or(cfg.recent_limit),
        tag_limit: cfg.tag_limit,
    };

    let catalog = Catalog::collect(&prompts_dir, &ExcludeSet::new(&cfg.exclude));
    write_index(&catalog, &options, Local::now(), &output)?;

    for line in summary_lines(catalog.len(), &output) {
        println!("{}", line);
    }

    Ok(true)
}

/// Validate a file or directory and print the report; true when every file passed
fn validate_path(path: &Path, format: ReportFormat) -> Result<bool> {
    if !path.exists() {
        println!("Error: Path does not exist: {}", path.display());
        return Ok(false);
    }

    let results = if path.is_file() {
        vec![validate::validate_file(path)]
    } else if path.is_dir() {
        let cfg = config::config()?;
        validate::validate_directory(path, &ExcludeSet::new(&cfg.exclude))
    } else {
        println!("Error: Path must be a file or directory: {}", path.display());
        return Ok(false);
    };

    match format {
        ReportFormat::Text => {
            print!("{}", report::render_text(&results, std::io::stdout().is_terminal()))
        }
        ReportFormat::Json => println!("{}", report::render_json(&results)?),
    }

    Ok(report::all_passed(&results))
}

/// Search the collection
fn search_prompts(query: &str, prompts_dir: Option<PathBuf>) -> Result<bool> {
    let cfg = config::config()?;
    let prompts_dir = prompts_dir.unwrap_or_else(|| cfg.prompts_dir.clone());

    let catalog = Catalog::collect(&prompts_dir, &ExcludeSet::new(&cfg.exclude));
    let results = catalog.search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(true);
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query);
    println!("{:<40} {:<12} {:<14} {}", "TITLE", "CATEGORY", "DIFFICULTY", "PATH");
    println!("{}", "-".repeat(90));

    for record in &results {
        println!(
            "{:<40} {:<12} {:<14} {}",
            truncate(&record.title, 40),
            truncate(&record.category, 12),
            record.difficulty,
            record.filepath.display()
        );
    }

    Ok(true)
}

/// Show the resolved configuration (for debugging)
fn show_config() -> Result<bool> {
    let cfg = config::config()?;

    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Prompts: {}", cfg.prompts_dir.display());
    println!("  Index:   {}", cfg.index_path.display());
    println!();
    println!("Index:");
    println!("  Recent limit: {}", cfg.recent_limit);
    println!("  Tag limit:    {}", cfg.tag_limit);
    println!();
    println!("Exclude patterns:");
    if cfg.exclude.is_empty() {
        println!("  (none)");
    } else {
        for pattern in &cfg.exclude {
            println!("  {}", pattern);
        }
    }

    Ok(true)
}
