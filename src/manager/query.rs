// Read-only views - dashboard, team list/detail, player list/detail

use crate::cli::{ListFormat, PlayerListArgs};
use crate::config::Config;
use crate::core::data::AttributeKey;
use crate::core::filter::PlayerFilter;
use crate::core::navigation::dashboard_items;
use crate::core::operations::CatalogOperations;
use crate::core::traits::ViewProjection;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use crate::utils::interactive::prompt_with_default;
use crate::utils::output::{DisplayFormatter, OutputStyle};
use crate::utils::pagination::emit;
use anyhow::Result;
use chrono::Utc;

pub fn handle_dashboard_command(config: &Config) -> AppResult<()> {
    let content = DisplayFormatter::render_dashboard(&config.app.name, &dashboard_items());
    emit(&content, config.general.pager)
}

pub fn handle_team_list_command(
    ops: &CatalogOperations,
    config: &Config,
    format: Option<ListFormat>,
) -> AppResult<()> {
    let sections = ops.team_sections();
    let format = format.unwrap_or(config.general.list_format);

    if sections.is_empty() && format != ListFormat::Json {
        handle_flow(FlowResult::EmptyList {
            item_type: "teams".to_string(),
        });
        return Ok(());
    }

    let content = DisplayFormatter::render_team_sections(&sections, format)?;
    emit(&content, config.general.pager && format != ListFormat::Json)
}

pub fn handle_team_show_command(
    ops: &CatalogOperations,
    config: &Config,
    id: Option<&str>,
) -> AppResult<()> {
    let Some(detail) = ops.team_detail(id) else {
        handle_flow(FlowResult::NotFound {
            item_type: "Team".to_string(),
            search_term: id.unwrap_or_default().to_string(),
        });
        return Ok(());
    };

    let content = DisplayFormatter::render_team_detail(&detail, &Utc::now());
    emit(&content, config.general.pager)
}

pub fn handle_player_list_command(
    ops: &CatalogOperations,
    config: &Config,
    args: &PlayerListArgs,
    interactive: bool,
) -> Result<()> {
    let filter = if interactive {
        prompt_player_filter(ops, args.to_filter())?
    } else {
        args.to_filter()
    };
    let format = args.format.unwrap_or(config.general.list_format);
    let players = ops.player_list(&filter);

    if players.is_empty() && format != ListFormat::Json {
        handle_flow(FlowResult::EmptyList {
            item_type: "players matching your criteria".to_string(),
        });
        return Ok(());
    }

    let content = DisplayFormatter::render_player_list(&players, &filter, format)?;
    emit(&content, config.general.pager && format != ListFormat::Json)?;
    Ok(())
}

/// Ask for each filter value, listing the options the catalog offers
fn prompt_player_filter(ops: &CatalogOperations, current: PlayerFilter) -> Result<PlayerFilter> {
    let catalog = ops.catalog();
    let attribute_options: Vec<String> = std::iter::once("all".to_string())
        .chain(AttributeKey::ALL.iter().map(|key| key.key().to_string()))
        .collect();

    let query = prompt_with_default("Pesquisar", &current.query)?;

    println!("{}", OutputStyle::muted(&catalog.team_options().join(" | ")));
    let team = prompt_with_default("Equipa", &current.team.to_string())?;

    println!("{}", OutputStyle::muted(&catalog.position_options().join(" | ")));
    let position = prompt_with_default("Posição", &current.position.to_string())?;

    println!("{}", OutputStyle::muted(&attribute_options.join(" | ")));
    let attribute = prompt_with_default("Atributo", &current.attribute.to_string())?;

    Ok(PlayerFilter::new()
        .with_query(query)
        .with_team(team.parse().map_err(anyhow::Error::msg)?)
        .with_position(position.parse().map_err(anyhow::Error::msg)?)
        .with_attribute(attribute.parse().map_err(anyhow::Error::msg)?))
}

pub fn handle_player_show_command(
    ops: &CatalogOperations,
    config: &Config,
    id: Option<&str>,
) -> AppResult<()> {
    let Some(detail) = ops.player_detail(id) else {
        handle_flow(FlowResult::NotFound {
            item_type: "Player".to_string(),
            search_term: id.unwrap_or_default().to_string(),
        });
        return Ok(());
    };

    let content = DisplayFormatter::render_player_detail(&detail);
    emit(&content, config.general.pager)
}
