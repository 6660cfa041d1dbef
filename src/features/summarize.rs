use tracing::{error, info};

use crate::ai::Summarizer;
use crate::core::models::{NewSummaryRecord, Session, SummaryRecord, SummaryRequest, SummaryResult};
use crate::errors::{AppError, StoreError};
use crate::store::RecordStore;

/// What happened to the summary after it was generated.
#[derive(Debug)]
pub enum Persistence {
    Saved(SummaryRecord),
    /// No signed-in user; nothing was written.
    Skipped,
    /// The summary is valid but could not be stored.
    Failed(StoreError),
}

#[derive(Debug)]
pub struct NoteSummary {
    pub summary: SummaryResult,
    pub persistence: Persistence,
}

/// Summarize `note_text` and, for an authenticated session, save the pair.
///
/// A failed save does not discard the summary; it is reported through
/// [`Persistence::Failed`].
///
/// # Errors
///
/// Returns [`AppError::EmptyNote`] for blank input (no request is made) and
/// [`AppError::Summarize`] when the summarizer fails.
pub async fn summarize_note(
    summarizer: &dyn Summarizer,
    store: &dyn RecordStore,
    session: &Session,
    note_text: &str,
) -> Result<NoteSummary, AppError> {
    let request = SummaryRequest::new(note_text)?;

    let summary = summarizer
        .summarize(request.note_text())
        .await
        .inspect_err(|e| error!("Failed to generate summary: {}", e))?;

    let persistence = match session {
        Session::Anonymous => {
            info!("No signed-in user, summary not saved");
            Persistence::Skipped
        }
        Session::Authenticated(user) => {
            let record = NewSummaryRecord {
                original_text: request.note_text().to_string(),
                summary: summary.text.clone(),
                user_id: user.id.clone(),
            };
            match store.insert(record).await {
                Ok(saved) => Persistence::Saved(saved),
                Err(e) => {
                    error!("Failed to save summary for user {}: {}", user.id, e);
                    Persistence::Failed(e)
                }
            }
        }
    };

    Ok(NoteSummary {
        summary,
        persistence,
    })
}
