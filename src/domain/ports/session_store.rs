/// Session store port (trait) for dependency injection.
///
/// Defines the contract for session persistence that infrastructure
/// adapters must implement. The shell depends on this trait, not on a
/// concrete store, so sessions can live in a file, in memory, or nowhere.
use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::IntakeSession;

/// Repository trait for the single-record session persistence.
///
/// Implementations must treat a malformed stored record as absent rather
/// than erroring: corrupted persisted state recovers to a fresh session.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the persisted session, if any.
    ///
    /// Returns `Ok(None)` both when nothing is stored and when the stored
    /// record does not deserialize (shape mismatch is replace, not crash).
    async fn load(&self) -> Result<Option<IntakeSession>>;

    /// Persists the session snapshot, replacing any previous record.
    async fn save(&self, session: &IntakeSession) -> Result<()>;

    /// Removes the persisted record. Absence is not an error.
    async fn clear(&self) -> Result<()>;
}
