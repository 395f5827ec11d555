//! `compass init` — write the default project configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

const CONFIG_DIR: &str = ".compass";
const CONFIG_FILE: &str = ".compass/config.yaml";

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub path: String,
    pub created: bool,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        if self.created {
            format!("Wrote default configuration to {}", self.path)
        } else {
            format!("Configuration already present at {}", self.path)
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(force: bool, json: bool) -> Result<()> {
    let path = Path::new(CONFIG_FILE);
    if path.exists() && !force {
        bail!("{CONFIG_FILE} already exists; pass --force to overwrite");
    }

    tokio::fs::create_dir_all(CONFIG_DIR)
        .await
        .context("failed to create .compass directory")?;

    let yaml = serde_yaml::to_string(&Config::default())
        .context("failed to serialize default configuration")?;
    tokio::fs::write(path, yaml)
        .await
        .context("failed to write configuration file")?;

    output(
        &InitOutput {
            path: CONFIG_FILE.to_string(),
            created: true,
        },
        json,
    );
    Ok(())
}
