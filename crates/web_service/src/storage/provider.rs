use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted focus session, keyed by the authenticated caller.
///
/// A generated plan's markdown lands in `output_text` as a denormalized
/// copy; the plan itself has no continuing identity after persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusSession {
    pub id: Uuid,
    pub user_id: String,
    pub time: u32,
    pub subject: String,
    pub sub_topic: Option<String>,
    pub output_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn insert_session(&self, session: FocusSession) -> Result<FocusSession>;

    /// Sessions for one user, newest first.
    async fn list_sessions(&self, user_id: &str) -> Result<Vec<FocusSession>>;
}
