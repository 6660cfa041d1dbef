use tracing::info;

use crate::core::models::{Session, SummaryRecord};
use crate::errors::StoreError;
use crate::store::RecordStore;

/// Saved summaries for the session, newest first. Anonymous sessions have
/// none and the store is not queried.
pub async fn list_summaries(
    store: &dyn RecordStore,
    session: &Session,
) -> Result<Vec<SummaryRecord>, StoreError> {
    let Some(user) = session.user() else {
        return Ok(Vec::new());
    };

    let records = store.list_by_user(&user.id).await?;
    info!("Loaded {} summaries for user {}", records.len(), user.id);
    Ok(records)
}

pub async fn delete_summary(store: &dyn RecordStore, id: &str) -> Result<(), StoreError> {
    store.delete_by_id(id).await
}
