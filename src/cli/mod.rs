//! CLI layer: clap types, command implementations and output helpers.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

/// Print a top-level error in the selected mode and exit non-zero.
pub fn handle_error(err: anyhow::Error, json: bool) {
    if json {
        let value = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&value).unwrap_or_default()
        );
    } else {
        eprintln!("error: {err:#}");
    }
    std::process::exit(1);
}
