use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::RecordStore;
use crate::core::models::{NewSummaryRecord, SummaryRecord, User};
use crate::errors::StoreError;

/// Process-local record store. Used when no remote store is configured and
/// as a test double.
#[derive(Debug, Default)]
pub struct MemoryStore {
    user: Option<User>,
    records: Mutex<Vec<SummaryRecord>>,
}

impl MemoryStore {
    /// A store with nobody signed in.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn signed_in(user: User) -> Self {
        Self {
            user: Some(user),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Number of stored records across all users.
    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned<T>(e: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend(format!("record lock poisoned: {e}"))
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn current_user(&self) -> Option<User> {
        self.user.clone()
    }

    async fn insert(&self, record: NewSummaryRecord) -> Result<SummaryRecord, StoreError> {
        let stored = SummaryRecord {
            id: Uuid::new_v4().to_string(),
            original_text: record.original_text,
            summary: record.summary,
            user_id: record.user_id,
            created_at: Utc::now(),
        };

        self.records
            .lock()
            .map_err(poisoned)?
            .push(stored.clone());

        Ok(stored)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SummaryRecord>, StoreError> {
        let records = self.records.lock().map_err(poisoned)?;

        // Reverse first so the stable sort puts later inserts ahead on ties.
        let mut owned: Vec<SummaryRecord> = records
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.records.lock().map_err(poisoned)?.retain(|r| r.id != id);
        Ok(())
    }
}
