//! Application shell around the intake engine.
//!
//! `IntakeFlow` owns the engine plus a session store and wires best-effort
//! persistence around every mutation. Storage failures never interrupt the
//! interaction: the in-memory session keeps working and the failure is
//! logged at warn.

use std::sync::Arc;

use tracing::warn;

use crate::domain::error::IntakeError;
use crate::domain::models::{
    Classification, Config, IntakeSession, QuestionGraph, QuestionNode, INTENT_QUESTION_ID,
};
use crate::domain::ports::SessionStore;
use crate::services::classifier::classify;
use crate::services::handoff::{build_handoff, ContactIdentity, HandoffPayload};
use crate::services::sequencer::{IntakeEngine, SubmitOutcome};

/// Engine + persistence, driven serially by the shell.
pub struct IntakeFlow {
    engine: IntakeEngine,
    store: Arc<dyn SessionStore>,
}

impl IntakeFlow {
    /// Restore the persisted session if one exists, otherwise start fresh.
    /// A failing or corrupted store recovers to a fresh session.
    pub async fn restore_or_new(
        graph: QuestionGraph,
        config: &Config,
        store: Arc<dyn SessionStore>,
    ) -> Self {
        let engine = match store.load().await {
            Ok(Some(session)) => IntakeEngine::with_session(graph, config, session),
            Ok(None) => IntakeEngine::new(graph, config),
            Err(err) => {
                warn!(error = %err, "session store unavailable; starting fresh");
                IntakeEngine::new(graph, config)
            }
        };
        Self { engine, store }
    }

    /// Leave the landing screen.
    pub async fn begin(&mut self) -> Result<(), IntakeError> {
        self.engine.begin()?;
        self.persist().await;
        Ok(())
    }

    /// Submit an answer and persist the new snapshot.
    pub async fn submit_answer(&mut self, value: &str) -> Result<SubmitOutcome, IntakeError> {
        let outcome = self.engine.submit_answer(value)?;
        self.persist().await;
        Ok(outcome)
    }

    /// Rewind one question and persist.
    pub async fn go_back(&mut self) {
        self.engine.go_back();
        self.persist().await;
    }

    /// Reset to a fresh session and drop the persisted record.
    pub async fn reset(&mut self) {
        self.engine.reset();
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear persisted session");
        }
    }

    /// Classify the session as it currently stands.
    pub fn classification(&self) -> Classification {
        let session = self.engine.session();
        classify(
            &session.signals,
            session.confidence_score,
            session.answer_value(INTENT_QUESTION_ID),
        )
    }

    /// Build the CRM handoff and drop the persisted record; the session
    /// has been handed over and must not resume.
    pub async fn complete_handoff(&mut self, identity: ContactIdentity) -> HandoffPayload {
        let classification = self.classification();
        let payload = build_handoff(identity, self.engine.session(), &classification);
        if let Err(err) = self.store.clear().await {
            warn!(error = %err, "failed to clear persisted session after handoff");
        }
        payload
    }

    pub fn current_question(&self) -> &QuestionNode {
        self.engine.current_question()
    }

    pub fn session(&self) -> &IntakeSession {
        self.engine.session()
    }

    pub fn engine(&self) -> &IntakeEngine {
        &self.engine
    }

    async fn persist(&self) {
        if let Err(err) = self.store.save(self.engine.session()).await {
            warn!(error = %err, "session persistence failed; continuing in memory");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::builtin_question_graph;
    use crate::infrastructure::storage::InMemorySessionStore;

    async fn flow_with_store(store: Arc<dyn SessionStore>) -> IntakeFlow {
        IntakeFlow::restore_or_new(builtin_question_graph(), &Config::default(), store).await
    }

    #[tokio::test]
    async fn test_submit_persists_snapshot() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut flow = flow_with_store(store.clone()).await;

        flow.submit_answer("brand").await.unwrap();

        let stored = store.load().await.unwrap().unwrap();
        assert_eq!(stored.answered_count(), 1);
        assert_eq!(stored.signals.brand_clarity, 60.0);
    }

    #[tokio::test]
    async fn test_restore_resumes_session() {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        {
            let mut flow = flow_with_store(store.clone()).await;
            flow.submit_answer("automation").await.unwrap();
        }

        let flow = flow_with_store(store.clone()).await;
        assert_eq!(flow.session().answered_count(), 1);
        assert!(flow.session().has_active_session());
    }

    #[tokio::test]
    async fn test_reset_clears_store() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut flow = flow_with_store(store.clone()).await;
        flow.submit_answer("web").await.unwrap();
        assert!(store.load().await.unwrap().is_some());

        flow.reset().await;
        assert!(store.load().await.unwrap().is_none());
        assert_eq!(flow.session().answered_count(), 0);
    }

    #[tokio::test]
    async fn test_handoff_clears_store() {
        let store = Arc::new(InMemorySessionStore::new());
        let mut flow = flow_with_store(store.clone()).await;
        flow.submit_answer("brand").await.unwrap();

        let payload = flow.complete_handoff(ContactIdentity::default()).await;
        assert_eq!(payload.system_class, "BRAND_CHASSIS");
        assert!(store.load().await.unwrap().is_none());
    }
}
