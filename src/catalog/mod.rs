//! The prompt catalog and the generated index document.
//!
//! `Catalog` holds every extracted `PromptRecord` for one run and answers the
//! grouping and counting questions the index needs. `render` turns a catalog
//! into the Markdown index.

pub mod records;
pub mod render;

pub use records::{difficulty_marker, difficulty_rank, Catalog};
pub use render::{render_index, summary_lines, write_index, IndexOptions};
