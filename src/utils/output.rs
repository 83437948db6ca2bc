use crate::cli::ListFormat;
use crate::core::data::{AttributeKey, Player, Position, ScoreBand, Team, TeamCategory};
use crate::core::filter::PlayerFilter;
use crate::core::forms::{PlayerPreview, TeamPreview};
use crate::core::grouping::Bucket;
use crate::core::navigation::DashboardItem;
use crate::core::traits::{PlayerDetail, Receipt, TeamDetail};
use crate::utils::error::{AppError, AppResult};
use crate::utils::format::{format_datetime, hex_to_rgb, pad_right, truncate_string, years_since};
use chrono::{DateTime, Utc};
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn number(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Text in a record's hex color; unparseable colors leave it plain
    pub fn tinted(text: &str, hex: &str) -> ColoredString {
        match hex_to_rgb(hex) {
            Some((r, g, b)) => text.truecolor(r, g, b),
            None => text.normal(),
        }
    }

    pub fn swatch(hex: &str) -> ColoredString {
        Self::tinted("●", hex)
    }

    pub fn score(score: u8) -> ColoredString {
        Self::tinted(&score.to_string(), ScoreBand::from_score(score).color())
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn field(label: &str, value: impl std::fmt::Display) -> String {
        format!("{:>14}: {}", Self::label(label), value)
    }
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}

/// Renders views to strings so the caller can decide whether to page them
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn render_dashboard(app_name: &str, items: &[DashboardItem]) -> String {
        let mut lines = vec![
            OutputStyle::title(&format!("⚽ {}", app_name)).to_string(),
            OutputStyle::header_separator(),
        ];

        for item in items {
            lines.push(format!(
                "{} {} {}  {}",
                OutputStyle::swatch(item.color),
                item.icon,
                OutputStyle::header(item.title),
                OutputStyle::muted(item.description)
            ));
            lines.push(format!(
                "     {} {}",
                OutputStyle::muted("→"),
                OutputStyle::info(&item.target.command())
            ));
        }

        lines.join("\n")
    }

    pub fn render_team_sections(
        sections: &[Bucket<TeamCategory, &Team>],
        format: ListFormat,
    ) -> AppResult<String> {
        if format == ListFormat::Json {
            return Self::to_json(sections);
        }

        let total: usize = sections.iter().map(|s| s.members.len()).sum();
        let mut lines = vec![format!(
            "🏆 {} ({} found)",
            OutputStyle::header("Equipas"),
            OutputStyle::info(&total.to_string())
        )];

        if format == ListFormat::Table {
            lines.extend(Self::team_table(sections));
            return Ok(lines.join("\n"));
        }

        for section in sections {
            lines.push(String::new());
            lines.push(format!(
                "{} {}",
                OutputStyle::swatch(section.key.color()),
                OutputStyle::title(section.key.label())
            ));
            lines.push(OutputStyle::separator());

            for team in &section.members {
                lines.push(format!(
                    "  {} {}  {}",
                    OutputStyle::muted(&format!("[{}]", team.id)),
                    OutputStyle::name(&team.name),
                    OutputStyle::muted(&team.location)
                ));
                if format == ListFormat::Detailed {
                    lines.push(format!(
                        "      Fundado {}  ·  {} jogadores",
                        team.founded, team.player_count
                    ));
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn team_table(sections: &[Bucket<TeamCategory, &Team>]) -> Vec<String> {
        let name_width = sections
            .iter()
            .flat_map(|s| s.members.iter())
            .map(|t| t.name.chars().count())
            .max()
            .unwrap_or(4)
            .clamp(4, 30);

        let rule = |left: &str, mid: &str, right: &str| {
            format!(
                "{}─{}─{}─{}─{}─{}─{}─{}─{}",
                left,
                "─".repeat(3),
                mid,
                "─".repeat(name_width),
                mid,
                "─".repeat(14),
                mid,
                "─".repeat(7),
                right
            )
        };

        let mut lines = vec![rule("┌", "┬", "┐")];
        lines.push(format!(
            "│ {} │ {} │ {} │ {} │",
            OutputStyle::header(&pad_right("ID", 3)),
            OutputStyle::header(&pad_right("Nome", name_width)),
            OutputStyle::header(&pad_right("Categoria", 14)),
            OutputStyle::header(&pad_right("Fundado", 7))
        ));
        lines.push(rule("├", "┼", "┤"));

        for team in sections.iter().flat_map(|s| s.members.iter()) {
            lines.push(format!(
                "│ {} │ {} │ {} │ {} │",
                OutputStyle::muted(&pad_right(&team.id, 3)),
                OutputStyle::name(&pad_right(&truncate_string(&team.name, name_width), name_width)),
                OutputStyle::tinted(&pad_right(team.category.label(), 14), team.category.color()),
                pad_right(&team.founded.to_string(), 7)
            ));
        }

        lines.push(rule("└", "┴", "┘"));
        lines
    }

    pub fn render_team_detail(detail: &TeamDetail<'_>, now: &DateTime<Utc>) -> String {
        let team = detail.team;
        let mut lines = vec![
            format!(
                "{} {}",
                OutputStyle::swatch(&team.color),
                OutputStyle::title(&team.name)
            ),
            OutputStyle::header_separator(),
            OutputStyle::field(
                "Categoria",
                OutputStyle::tinted(team.category.label(), team.category.color()),
            ),
            OutputStyle::field("Localização", &team.location),
            OutputStyle::field(
                "Fundação",
                format!("{} ({} anos)", team.founded, years_since(team.founded, now)),
            ),
            OutputStyle::field("Jogadores", team.player_count),
        ];

        lines.push(String::new());
        lines.push(OutputStyle::header("Equipa Técnica").to_string());
        lines.push(OutputStyle::separator());
        if detail.staff.is_empty() {
            lines.push(format!("  {}", OutputStyle::muted("(sem equipa técnica)")));
        }
        for member in &detail.staff {
            lines.push(format!(
                "  {} {}  {}",
                OutputStyle::swatch(&member.color),
                member.name,
                OutputStyle::muted(&member.role)
            ));
        }

        lines.push(String::new());
        lines.push(OutputStyle::header("Plantel").to_string());
        lines.push(OutputStyle::separator());
        if detail.roster.is_empty() {
            lines.push(format!("  {}", OutputStyle::muted("(sem jogadores registados)")));
        }
        for bucket in &detail.roster {
            lines.push(format!(
                "  {} ({})",
                OutputStyle::tinted(bucket.key.label(), bucket.key.color()),
                bucket.members.len()
            ));
            for player in &bucket.members {
                lines.push(format!(
                    "    {} {}",
                    OutputStyle::number(&format!("#{:<2}", player.number)),
                    player.name
                ));
            }
        }

        lines.join("\n")
    }

    pub fn render_player_list(
        players: &[&Player],
        filter: &PlayerFilter,
        format: ListFormat,
    ) -> AppResult<String> {
        if format == ListFormat::Json {
            return Self::to_json(players);
        }

        let mut lines = vec![format!(
            "👥 {} ({} found)",
            OutputStyle::header("Jogadores"),
            OutputStyle::info(&players.len().to_string())
        )];
        if !filter.is_unconstrained() {
            lines.push(OutputStyle::muted(&Self::describe_filter(filter)).to_string());
        }

        match format {
            ListFormat::Simple => {
                lines.push(OutputStyle::separator());
                lines.extend(players.iter().map(|p| Self::player_line(p)));
            }
            ListFormat::Detailed => {
                for (i, player) in players.iter().enumerate() {
                    lines.push(OutputStyle::separator());
                    lines.push(format!("{}. {}", i + 1, Self::player_line(player)));
                    lines.push(format!(
                        "      {} anos  ·  {}  ·  {}",
                        player.age, player.height, player.weight
                    ));
                    let scores: Vec<String> = AttributeKey::ALL
                        .iter()
                        .map(|key| {
                            format!(
                                "{} {}",
                                OutputStyle::label(key.label()),
                                OutputStyle::score(player.attributes.get(*key))
                            )
                        })
                        .collect();
                    lines.push(format!("      {}", scores.join("  ")));
                }
            }
            ListFormat::Table => lines.extend(Self::player_table(players)),
            ListFormat::Json => {}
        }

        Ok(lines.join("\n"))
    }

    fn describe_filter(filter: &PlayerFilter) -> String {
        let mut parts = Vec::new();
        if !filter.query.is_empty() {
            parts.push(format!("pesquisa \"{}\"", filter.query));
        }
        parts.push(format!("equipa {}", filter.team));
        parts.push(format!("posição {}", filter.position));
        parts.push(format!("atributo {}", filter.attribute));
        format!("Filtros: {}", parts.join(", "))
    }

    fn player_line(player: &Player) -> String {
        format!(
            "{} {}  {}  {}",
            OutputStyle::number(&format!("#{:<2}", player.number)),
            OutputStyle::name(&player.name),
            OutputStyle::tinted(player.position.label(), player.position.color()),
            OutputStyle::muted(&player.team)
        )
    }

    fn player_table(players: &[&Player]) -> Vec<String> {
        let name_width = players
            .iter()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(4)
            .clamp(4, 24);
        let team_width = players
            .iter()
            .map(|p| p.team.chars().count())
            .max()
            .unwrap_or(6)
            .clamp(6, 20);
        let position_width = Position::ALL
            .iter()
            .map(|p| p.label().chars().count())
            .max()
            .unwrap_or(5);

        let widths = [3, name_width, position_width, team_width, 3, 3, 3, 3];
        let rule = |left: &str, mid: &str, right: &str| {
            let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, cells.join(mid), right)
        };

        let mut header = vec![
            pad_right("#", 3),
            pad_right("Nome", name_width),
            pad_right("Posição", position_width),
            pad_right("Equipa", team_width),
        ];
        header.extend(AttributeKey::ALL.iter().map(|k| pad_right(k.short_label(), 3)));
        let header: Vec<String> = header
            .iter()
            .map(|h| OutputStyle::header(h).to_string())
            .collect();

        let mut lines = vec![rule("┌", "┬", "┐")];
        lines.push(format!("│ {} │", header.join(" │ ")));
        lines.push(rule("├", "┼", "┤"));

        for player in players {
            let mut cells = vec![
                OutputStyle::number(&pad_right(&player.number.to_string(), 3)).to_string(),
                OutputStyle::name(&pad_right(&truncate_string(&player.name, name_width), name_width))
                    .to_string(),
                OutputStyle::tinted(
                    &pad_right(player.position.label(), position_width),
                    player.position.color(),
                )
                .to_string(),
                pad_right(&truncate_string(&player.team, team_width), team_width),
            ];
            cells.extend(AttributeKey::ALL.iter().map(|key| {
                let score = player.attributes.get(*key);
                OutputStyle::tinted(
                    &pad_right(&score.to_string(), 3),
                    ScoreBand::from_score(score).color(),
                )
                .to_string()
            }));
            lines.push(format!("│ {} │", cells.join(" │ ")));
        }

        lines.push(rule("└", "┴", "┘"));
        lines
    }

    pub fn render_player_detail(detail: &PlayerDetail<'_>) -> String {
        let profile = detail.profile;
        let mut lines = vec![
            format!(
                "{} {}",
                OutputStyle::number(&format!("#{}", profile.number)),
                OutputStyle::title(&profile.name)
            ),
            OutputStyle::header_separator(),
            OutputStyle::field(
                "Posição",
                OutputStyle::tinted(profile.position.label(), profile.position.color()),
            ),
            OutputStyle::field("Equipa", &profile.team),
            OutputStyle::field("Nascimento", &profile.birthday),
        ];

        for section in &detail.sections {
            lines.push(String::new());
            lines.push(OutputStyle::header(section.key).to_string());
            lines.push(OutputStyle::separator());

            for record in &section.members {
                let value = record.parsed_value();
                let shown = match value.band() {
                    Some(band) => OutputStyle::tinted(&value.to_string(), band.color()),
                    None => OutputStyle::tinted(&value.to_string(), &record.color),
                };
                lines.push(format!("  {} {}", pad_right(&record.name, 24), shown));
            }
        }

        lines.join("\n")
    }

    pub fn render_team_preview(preview: &TeamPreview) -> String {
        let or_dash = |s: &str| if s.trim().is_empty() { "—".to_string() } else { s.to_string() };
        [
            format!(
                "{} {}",
                OutputStyle::swatch(preview.color),
                OutputStyle::title(&or_dash(&preview.name))
            ),
            OutputStyle::separator(),
            OutputStyle::field("Localização", or_dash(&preview.location)),
            OutputStyle::field(
                "Categoria",
                OutputStyle::tinted(&or_dash(&preview.category), preview.color),
            ),
            OutputStyle::field("Fundação", or_dash(&preview.founded)),
            OutputStyle::field("Pavilhão", or_dash(&preview.venue)),
        ]
        .join("\n")
    }

    pub fn render_player_preview(preview: &PlayerPreview) -> String {
        let or_dash = |s: &str| if s.trim().is_empty() { "—".to_string() } else { s.to_string() };
        [
            format!(
                "{} {}",
                OutputStyle::number(&format!("#{}", or_dash(&preview.number))),
                OutputStyle::title(&or_dash(&preview.name))
            ),
            OutputStyle::separator(),
            OutputStyle::field(
                "Posição",
                OutputStyle::tinted(&or_dash(&preview.position), preview.color),
            ),
            OutputStyle::field("Equipa", or_dash(&preview.team)),
            OutputStyle::field("Idade", or_dash(&preview.age)),
            OutputStyle::field("Altura", or_dash(&preview.height)),
            OutputStyle::field("Peso", or_dash(&preview.weight)),
        ]
        .join("\n")
    }

    pub fn render_receipt(receipt: &Receipt) -> String {
        [
            OutputStyle::field("Nome", &receipt.name),
            OutputStyle::field("Referência", OutputStyle::muted(&receipt.reference.to_string())),
            OutputStyle::field("Submetido", format_datetime(&receipt.submitted_at)),
        ]
        .join("\n")
    }

    fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> AppResult<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| AppError::System(format!("Failed to serialize to JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::Selector;
    use crate::core::forms::{PlayerForm, TeamForm};
    use crate::core::operations::CatalogOperations;
    use crate::core::traits::ViewProjection;
    use chrono::TimeZone;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_team_sections_list_categories_in_order() {
        plain();
        let ops = CatalogOperations::default();
        let rendered =
            DisplayFormatter::render_team_sections(&ops.team_sections(), ListFormat::Simple).unwrap();

        let distrital = rendered.find("Distrital").unwrap();
        let primeira = rendered.find("Primeira Liga").unwrap();
        let segunda = rendered.find("Segunda Liga").unwrap();
        assert!(distrital < primeira && primeira < segunda);
        assert!(rendered.contains("(8 found)"));
    }

    #[test]
    fn test_team_sections_json_is_bucketed() {
        let ops = CatalogOperations::default();
        let json =
            DisplayFormatter::render_team_sections(&ops.team_sections(), ListFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["key"], "Distrital");
        assert_eq!(value[1]["members"][0]["name"], "Benfica");
        assert_eq!(value[1]["members"][0]["players"], 16);
    }

    #[test]
    fn test_team_table_has_a_row_per_team() {
        plain();
        let ops = CatalogOperations::default();
        let rendered =
            DisplayFormatter::render_team_sections(&ops.team_sections(), ListFormat::Table).unwrap();
        let rows = rendered.lines().filter(|l| l.starts_with("│ ")).count();
        assert_eq!(rows, 9);
        assert!(rendered.contains("Fundado │"));

        let widths: Vec<usize> = rendered
            .lines()
            .filter(|l| l.starts_with(['┌', '├', '└', '│']))
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn test_team_detail_shows_age_and_roster() {
        plain();
        let ops = CatalogOperations::default();
        let detail = ops.team_detail(None).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let rendered = DisplayFormatter::render_team_detail(&detail, &now);

        assert!(rendered.contains("1976 (50 anos)"));
        assert!(rendered.contains("Guarda-redes (2)"));
        assert!(rendered.contains("Equipa Técnica"));
    }

    #[test]
    fn test_player_list_mentions_active_filters() {
        plain();
        let ops = CatalogOperations::default();
        let filter = PlayerFilter::new()
            .with_query("silva")
            .with_position(Selector::Only(Position::Winger));
        let players = ops.player_list(&filter);
        let rendered =
            DisplayFormatter::render_player_list(&players, &filter, ListFormat::Simple).unwrap();

        assert!(rendered.contains("(1 found)"));
        assert!(rendered.contains("Gonçalo Silva"));
        assert!(rendered.contains("pesquisa \"silva\""));
        assert!(rendered.contains("posição Ala"));
        assert!(!rendered.contains("Telmo Silva"));
    }

    #[test]
    fn test_player_list_json_keeps_catalog_fields() {
        let ops = CatalogOperations::default();
        let filter = PlayerFilter::new().with_team(Selector::Only("Benfica".to_string()));
        let players = ops.player_list(&filter);
        let json = DisplayFormatter::render_player_list(&players, &filter, ListFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let list = value.as_array().unwrap();
        assert_eq!(list.len(), players.len());
        assert!(list.iter().all(|p| p["team"] == "Benfica"));
    }

    #[test]
    fn test_player_table_has_a_row_per_player() {
        plain();
        let ops = CatalogOperations::default();
        let filter = PlayerFilter::new();
        let players = ops.player_list(&filter);
        let rendered =
            DisplayFormatter::render_player_list(&players, &filter, ListFormat::Table).unwrap();
        let rows = rendered.lines().filter(|l| l.starts_with("│ ")).count();
        assert_eq!(rows, players.len() + 1);
    }

    #[test]
    fn test_player_detail_groups_attributes() {
        plain();
        let ops = CatalogOperations::default();
        let detail = ops.player_detail(Some("2")).unwrap();
        let rendered = DisplayFormatter::render_player_detail(&detail);

        assert!(rendered.contains("Telmo Silva"));
        let fisico = rendered.find("Físico").unwrap();
        let experiencia = rendered.rfind("Experiência").unwrap();
        assert!(fisico < experiencia);
    }

    #[test]
    fn test_previews_fill_blanks() {
        plain();
        let rendered = DisplayFormatter::render_team_preview(&TeamForm::default().preview());
        assert!(rendered.contains("—"));

        let rendered = DisplayFormatter::render_player_preview(&PlayerForm::sample().preview());
        assert!(rendered.contains("Novo Jogador"));
        assert!(rendered.contains("1.75m"));
    }

    #[test]
    fn test_dashboard_lists_commands() {
        plain();
        let items = crate::core::navigation::dashboard_items();
        let rendered = DisplayFormatter::render_dashboard("Futsal ISM", &items);
        assert!(rendered.contains("futsal teams list"));
        assert!(rendered.contains("Calendário"));
    }

    #[test]
    fn test_tinted_ignores_bad_colors() {
        plain();
        assert_eq!(OutputStyle::tinted("x", "not-a-color").to_string(), "x");
    }
}
