//! In-memory session store for tests and ephemeral runs.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::models::IntakeSession;
use crate::domain::ports::SessionStore;

/// Session store that never touches disk.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    record: RwLock<Option<IntakeSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Option<IntakeSession>> {
        Ok(self.record.read().await.clone())
    }

    async fn save(&self, session: &IntakeSession) -> Result<()> {
        *self.record.write().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        *self.record.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip() {
        let store = InMemorySessionStore::new();
        assert!(store.load().await.unwrap().is_none());

        let session = IntakeSession::new("primary_intent");
        store.save(&session).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(session));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
