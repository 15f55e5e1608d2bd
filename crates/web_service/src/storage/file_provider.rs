use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;

use super::provider::{FocusSession, SessionStorage};
use crate::error::Result;

/// File-backed session store: one JSON document per user under the data
/// directory, newest session first.
pub struct FileSessionStorage {
    base_dir: PathBuf,
    // Serializes the load-modify-write cycle; the server runs many workers.
    write_lock: Mutex<()>,
}

impl FileSessionStorage {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    fn user_path(&self, user_id: &str) -> PathBuf {
        // User ids come from an external identity provider; keep only
        // filename-safe characters.
        let safe: String = user_id
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_dir.join(format!("{safe}.json"))
    }

    async fn load(&self, user_id: &str) -> Result<Vec<FocusSession>> {
        let path = self.user_path(user_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl SessionStorage for FileSessionStorage {
    async fn insert_session(&self, session: FocusSession) -> Result<FocusSession> {
        let _guard = self.write_lock.lock().await;

        let mut sessions = self.load(&session.user_id).await?;
        sessions.insert(0, session.clone());

        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).await?;
        }

        let path = self.user_path(&session.user_id);
        let content = serde_json::to_string_pretty(&sessions)?;
        fs::write(&path, content).await?;

        tracing::debug!(
            session_id = %session.id,
            path = %path.display(),
            total = sessions.len(),
            "focus session persisted"
        );

        Ok(session)
    }

    async fn list_sessions(&self, user_id: &str) -> Result<Vec<FocusSession>> {
        self.load(user_id).await
    }
}
