//! `compass run` — the interactive intake loop.

use anyhow::Result;
use console::{style, Term};

use crate::cli::commands::build_flow;
use crate::cli::output::output;
use crate::cli::commands::report;

pub async fn execute(json: bool) -> Result<()> {
    let (mut flow, _config) = build_flow().await?;
    let term = Term::stdout();

    if flow.session().is_complete {
        term.write_line("Saved session is already complete.")?;
        return report::report(json).await;
    }

    if flow.session().has_active_session() {
        term.write_line(&format!(
            "{}",
            style("Resuming saved session (run `compass reset` to start over).").dim()
        ))?;
    }
    flow.begin().await?;

    while !flow.session().is_complete {
        let question = flow.current_question().clone();

        term.write_line("")?;
        term.write_line(&format!("{}", style(&question.prompt).bold()))?;
        if let Some(sub) = &question.sub_prompt {
            term.write_line(&format!("{}", style(sub).dim()))?;
        }
        for (index, option) in question.options.iter().enumerate() {
            term.write_line(&format!("  {}. {}", index + 1, option.label))?;
        }
        term.write_line(&format!(
            "{}",
            style("(number to answer, 'b' to go back, 'q' to quit)").dim()
        ))?;

        let input = term.read_line()?;
        let input = input.trim();
        match input {
            "q" => {
                term.write_line("Session saved; resume with `compass run`.")?;
                return Ok(());
            }
            "b" => {
                flow.go_back().await;
                continue;
            }
            _ => {}
        }

        let choice = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i));
        let Some(option) = choice else {
            term.write_line(&format!("{}", style("Unrecognized choice.").red()))?;
            continue;
        };

        let outcome = flow.submit_answer(&option.value).await?;
        term.write_line(&format!(
            "{}",
            style(format!("confidence {:.2}", outcome.confidence)).dim()
        ))?;
    }

    let session = flow.session();
    if let Some(reason) = session.termination {
        term.write_line("")?;
        term.write_line(&format!(
            "Diagnostic finalized after {} answers ({}).",
            session.answered_count(),
            reason.as_str()
        ))?;
    }

    let classification = flow.classification();
    let definition = classification.system_class.definition();
    output(
        &report::ReportOutput {
            is_complete: true,
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
