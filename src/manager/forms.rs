// Add-team and add-player form handling

use crate::cli::{AddPlayerArgs, AddTeamArgs};
use crate::core::data::{Position, TeamCategory};
use crate::core::forms::{PlayerForm, TEAM_CHOICES, TeamForm};
use crate::core::operations::CatalogOperations;
use crate::core::traits::{FormSubmission, SubmissionReport};
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::interactive::{prompt_with_default, prompt_yes_no};
use crate::utils::output::{DisplayFormatter, OutputStyle};
use anyhow::Result;

pub async fn handle_team_add_command(
    ops: &CatalogOperations,
    args: &AddTeamArgs,
    interactive: bool,
) -> Result<()> {
    let mut form = args.to_form();

    if interactive {
        let categories: Vec<&str> = TeamCategory::ALL.iter().map(|c| c.label()).collect();
        fill_fields(&TeamForm::FIELDS, form.fields_mut(), |label| match label {
            "Categoria" => Some(categories.join(" | ")),
            _ => None,
        })?;
    }

    println!("{}", OutputStyle::title("Pré-visualização"));
    println!("{}", DisplayFormatter::render_team_preview(&form.preview()));
    println!();

    if interactive && !prompt_yes_no("Submeter equipa?")? {
        handle_flow(FlowResult::Cancelled("Team form discarded".to_string()));
        return Ok(());
    }

    let report = ops.submit_team(&form).await?;
    report_submission(report);
    Ok(())
}

pub async fn handle_player_add_command(
    ops: &CatalogOperations,
    args: &AddPlayerArgs,
    interactive: bool,
) -> Result<()> {
    let mut form = args.to_form();

    if interactive {
        let positions: Vec<&str> = Position::ALL.iter().map(|p| p.label()).collect();
        fill_fields(&PlayerForm::FIELDS, form.fields_mut(), |label| match label {
            "Posição" => Some(positions.join(" | ")),
            "Equipa" => Some(TEAM_CHOICES.join(" | ")),
            _ => None,
        })?;
    }

    println!("{}", OutputStyle::title("Pré-visualização"));
    println!("{}", DisplayFormatter::render_player_preview(&form.preview()));
    println!();

    if interactive && !prompt_yes_no("Submeter jogador?")? {
        handle_flow(FlowResult::Cancelled("Player form discarded".to_string()));
        return Ok(());
    }

    let report = ops.submit_player(&form).await?;
    report_submission(report);
    Ok(())
}

/// Prompt for every field in form order; required labels are starred
fn fill_fields<const N: usize>(
    labels: &[(&'static str, bool); N],
    fields: [&mut String; N],
    options: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    for ((label, required), field) in labels.iter().zip(fields) {
        if let Some(choices) = options(label) {
            println!("{}", OutputStyle::muted(&choices));
        }
        let prompt = if *required {
            format!("{} *", label)
        } else {
            label.to_string()
        };
        *field = prompt_with_default(&prompt, field)?;
    }
    Ok(())
}

fn report_submission(report: SubmissionReport) {
    let message = report.outcome.message().to_string();
    match report.receipt {
        Some(receipt) => {
            handle_flow(FlowResult::Success(message));
            println!("{}", DisplayFormatter::render_receipt(&receipt));
        }
        None => handle_flow(FlowResult::Rejected {
            message,
            missing: report
                .outcome
                .missing()
                .iter()
                .map(|field| field.to_string())
                .collect(),
        }),
    }
}
