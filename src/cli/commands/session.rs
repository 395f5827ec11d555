//! Session CLI commands: status, answer, back, reset.

use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;

use crate::cli::commands::build_flow;
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{SignalVector, ALL_SIGNALS};

#[derive(Debug, Serialize)]
pub struct StatusOutput {
    pub phase: String,
    pub is_complete: bool,
    pub termination: Option<String>,
    pub answered: usize,
    pub confidence: f64,
    pub current_question: String,
    pub prompt: String,
    pub signals: SignalVector,
    pub history: Vec<String>,
}

impl CommandOutput for StatusOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![
            format!("Phase: {}", self.phase),
            format!("Answered: {}", self.answered),
            format!("Confidence: {:.2}", self.confidence),
        ];
        if let Some(reason) = &self.termination {
            lines.push(format!("Terminated: {reason}"));
        }
        if !self.is_complete {
            lines.push(format!(
                "Current question: {} — {}",
                self.current_question,
                truncate(&self.prompt, 60)
            ));
        }

        let mut table = Table::new();
        table.set_header(vec!["Signal", "Value"]);
        for signal in ALL_SIGNALS {
            table.add_row(vec![
                signal.as_str().to_string(),
                format!("{:.0}", self.signals.get(signal)),
            ]);
        }
        lines.push(table.to_string());
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn status(json: bool) -> Result<()> {
    let (flow, _config) = build_flow().await?;
    let session = flow.session();
    let question = flow.current_question();
    output(
        &StatusOutput {
            phase: session.phase.as_str().to_string(),
            is_complete: session.is_complete,
            termination: session.termination.map(|t| t.as_str().to_string()),
            answered: session.answered_count(),
            confidence: session.confidence_score,
            current_question: question.id.clone(),
            prompt: question.prompt.clone(),
            signals: session.signals,
            history: session.history.clone(),
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct AnswerOutput {
    pub question_id: String,
    pub value: String,
    pub confidence: f64,
    pub is_complete: bool,
    pub termination: Option<String>,
    pub next_question: Option<String>,
}

impl CommandOutput for AnswerOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Recorded '{}' for {} (confidence {:.2})",
            self.value, self.question_id, self.confidence
        )];
        if self.is_complete {
            let reason = self.termination.as_deref().unwrap_or("complete");
            lines.push(format!("Session complete ({reason}). Run `compass report`."));
        } else if let Some(next) = &self.next_question {
            lines.push(format!("Next question: {next}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn answer(value: &str, json: bool) -> Result<()> {
    let (mut flow, _config) = build_flow().await?;
    let question_id = flow.current_question().id.clone();
    let outcome = flow.submit_answer(value).await?;
    output(
        &AnswerOutput {
            question_id,
            value: value.to_string(),
            confidence: outcome.confidence,
            is_complete: outcome.is_complete,
            termination: outcome.termination.map(|t| t.as_str().to_string()),
            next_question: outcome.next_question_id,
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct BackOutput {
    pub current_question: String,
    pub prompt: String,
}

impl CommandOutput for BackOutput {
    fn to_human(&self) -> String {
        format!(
            "Rewound to {} — {}",
            self.current_question,
            truncate(&self.prompt, 60)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn back(json: bool) -> Result<()> {
    let (mut flow, _config) = build_flow().await?;
    flow.go_back().await;
    let question = flow.current_question();
    output(
        &BackOutput {
            current_question: question.id.clone(),
            prompt: question.prompt.clone(),
        },
        json,
    );
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct ResetOutput {
    pub message: String,
}

impl CommandOutput for ResetOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn reset(json: bool) -> Result<()> {
    let (mut flow, _config) = build_flow().await?;
    flow.reset().await;
    output(
        &ResetOutput {
            message: "Session discarded; next run starts fresh.".to_string(),
        },
        json,
    );
    Ok(())
}
