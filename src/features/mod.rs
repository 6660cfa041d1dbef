//! Note workflows: summarize-and-save, list, delete.

pub mod dashboard;
pub mod summarize;

pub use dashboard::{delete_summary, list_summaries};
pub use summarize::{NoteSummary, Persistence, summarize_note};
