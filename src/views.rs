//! Plain-text rendering of summaries and saved records for the terminal.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::core::models::SummaryRecord;
use crate::features::Persistence;

pub const SAVED_MESSAGE: &str = "Summary generated and saved successfully!";
pub const GENERATED_MESSAGE: &str = "Summary generated successfully!";
pub const EMPTY_DASHBOARD_MESSAGE: &str =
    "No summaries yet. Start by creating your first note summary with `notes summarize`.";
pub const DELETE_WARNING: &str =
    "This action cannot be undone. This will permanently delete your summary.";

/// `Mar 1, 2024, 12:30 PM` in the machine's local time zone.
#[must_use]
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    format_created_at_in(created_at, &Local)
}

#[must_use]
pub fn format_created_at_in<Tz>(created_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    created_at
        .with_timezone(tz)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// Status line printed after a summary is produced.
#[must_use]
pub fn persistence_message(persistence: &Persistence) -> String {
    match persistence {
        Persistence::Saved(_) => SAVED_MESSAGE.to_string(),
        Persistence::Skipped => GENERATED_MESSAGE.to_string(),
        Persistence::Failed(e) => format!("{GENERATED_MESSAGE} (not saved: {e})"),
    }
}

#[must_use]
pub fn render_record(record: &SummaryRecord) -> String {
    format!(
        "[{id}] {date}\n\nSummary\n{summary}\n\nOriginal Text\n{original}\n",
        id = record.id,
        date = format_created_at(&record.created_at),
        summary = record.summary,
        original = record.original_text,
    )
}

#[must_use]
pub fn render_records(records: &[SummaryRecord]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_DASHBOARD_MESSAGE}\n");
    }
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join("\n---\n\n")
}
