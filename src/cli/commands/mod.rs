//! CLI command implementations.

pub mod init;
pub mod report;
pub mod run;
pub mod session;

use std::sync::Arc;

use anyhow::Result;

use crate::application::IntakeFlow;
use crate::domain::models::{builtin_question_graph, Config};
use crate::infrastructure::{ConfigLoader, JsonFileSessionStore};

/// Load configuration and assemble the intake flow over the file store.
pub async fn build_flow() -> Result<(IntakeFlow, Config)> {
    let config = ConfigLoader::load()?;
    let store = Arc::new(JsonFileSessionStore::new(&config.storage.session_path));
    let flow = IntakeFlow::restore_or_new(builtin_question_graph(), &config, store).await;
    Ok((flow, config))
}
