//! JSON-file session store.
//!
//! One serialized session record under a fixed path. Loads are tolerant:
//! a malformed or unexpectedly-shaped record reads as "no session" so a
//! corrupted file recovers to a fresh intake instead of crashing the flow.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::warn;

use crate::domain::models::IntakeSession;
use crate::domain::ports::SessionStore;

/// File-backed implementation of the session store port.
#[derive(Debug, Clone)]
pub struct JsonFileSessionStore {
    path: PathBuf,
}

impl JsonFileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for JsonFileSessionStore {
    async fn load(&self) -> Result<Option<IntakeSession>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .context(format!("failed to read session file {}", self.path.display()))
            }
        };

        match serde_json::from_slice::<IntakeSession>(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    error = %err,
                    "stored session record did not deserialize; treating as absent"
                );
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &IntakeSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .context("failed to create session directory")?;
            }
        }

        let json = serde_json::to_vec_pretty(session).context("failed to serialize session")?;

        // Write to a sibling temp file and rename so a crash mid-write
        // never leaves a truncated record behind.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &json)
            .await
            .context(format!("failed to write session file {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .context("failed to replace session file")?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).context("failed to remove session file"),
        }
    }
}
