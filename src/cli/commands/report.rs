//! Report and export CLI commands.

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;

use crate::cli::commands::build_flow;
use crate::cli::output::{output, CommandOutput};
use crate::services::handoff::{ContactIdentity, HandoffPayload};

#[derive(Debug, Serialize)]
pub struct ReportOutput {
    pub is_complete: bool,
    pub confidence: f64,
    pub track: String,
    pub track_label: String,
    pub system_class: String,
    pub class_name: String,
    pub machine_name: String,
    pub bottleneck: String,
    pub priorities: Vec<String>,
    pub pricing_band: String,
    pub snapshot: String,
    pub why_this_path: Vec<String>,
    pub immediate_wins: Vec<String>,
}

impl CommandOutput for ReportOutput {
    fn to_human(&self) -> String {
        let mut lines = Vec::new();
        if !self.is_complete {
            lines.push("Note: session is still in progress; this is a provisional read.".to_string());
        }

        let mut table = Table::new();
        table.set_header(vec!["Field", "Value"]);
        table.add_row(vec!["Track".to_string(), self.track_label.clone()]);
        table.add_row(vec!["System class".to_string(), self.class_name.clone()]);
        table.add_row(vec!["Machine".to_string(), self.machine_name.clone()]);
        table.add_row(vec!["Bottleneck".to_string(), self.bottleneck.clone()]);
        table.add_row(vec!["Pricing band".to_string(), self.pricing_band.clone()]);
        table.add_row(vec![
            "Confidence".to_string(),
            format!("{:.2}", self.confidence),
        ]);
        lines.push(table.to_string());

        lines.push(format!("\n{}", self.snapshot));
        lines.push("\nPriority sequence:".to_string());
        for (i, p) in self.priorities.iter().enumerate() {
            lines.push(format!("  {}. {p}", i + 1));
        }
        lines.push("\nWhy this path:".to_string());
        for point in &self.why_this_path {
            lines.push(format!("  - {point}"));
        }
        lines.push("\nImmediate wins:".to_string());
        for win in &self.immediate_wins {
            lines.push(format!("  - {win}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn report(json: bool) -> Result<()> {
    let (flow, _config) = build_flow().await?;
    let session = flow.session();
    let classification = flow.classification();
    let definition = classification.system_class.definition();
    output(
        &ReportOutput {
            is_complete: session.is_complete,
            confidence: session.confidence_score,
            track: classification.track.as_str().to_string(),
            track_label: classification.track.label().to_string(),
            system_class: classification.system_class.as_str().to_string(),
            class_name: definition.name.to_string(),
            machine_name: definition.machine_name.to_string(),
            bottleneck: classification.bottleneck.clone(),
            priorities: classification.priorities.clone(),
            pricing_band: classification.pricing_band.label().to_string(),
            snapshot: classification.narrative.snapshot.clone(),
            why_this_path: classification.narrative.why_this_path.clone(),
            immediate_wins: classification.narrative.immediate_wins.clone(),
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub payload: HandoffPayload,
}

impl CommandOutput for ExportOutput {
    fn to_human(&self) -> String {
        // The payload is machine-facing; human mode prints it verbatim so
        // it can be piped onward.
        serde_json::to_string_pretty(&self.payload).unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.payload).unwrap_or_default()
    }
}

pub async fn export(name: &str, email: &str, company: &str, json: bool) -> Result<()> {
    let (mut flow, _config) = build_flow().await?;
    let identity = ContactIdentity {
        name: name.to_string(),
        email: email.to_string(),
        company: company.to_string(),
    };
    let payload = flow.complete_handoff(identity).await;
    output(&ExportOutput { payload }, json);
    Ok(())
}
