//! Record store gateway: authenticated persistence of summary records.

pub mod memory;
pub mod rest;

use async_trait::async_trait;

use crate::core::models::{NewSummaryRecord, Session, SummaryRecord, User};
use crate::errors::StoreError;

pub use memory::MemoryStore;
pub use rest::RestStore;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The signed-in user, if any. Implementations log and swallow lookup
    /// failures, so an auth error looks the same as being signed out.
    async fn current_user(&self) -> Option<User>;

    async fn insert(&self, record: NewSummaryRecord) -> Result<SummaryRecord, StoreError>;

    /// Records owned by `user_id`, newest `created_at` first.
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<SummaryRecord>, StoreError>;

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}

/// Resolves the caller's session from the store's notion of the current user.
pub async fn resolve_session(store: &dyn RecordStore) -> Session {
    match store.current_user().await {
        Some(user) => Session::Authenticated(user),
        None => Session::Anonymous,
    }
}
