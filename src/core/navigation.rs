//! Views and the dashboard menu that links them

use serde::Serialize;

/// Every view the application can show
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Dashboard,
    TeamList,
    TeamDetail,
    PlayerList,
    PlayerDetail { player_id: Option<String> },
    AddTeam,
    AddPlayer,
}

impl Screen {
    /// The `futsal` invocation that renders this view
    pub fn command(&self) -> String {
        match self {
            Screen::Dashboard => "futsal dashboard".to_string(),
            Screen::TeamList => "futsal teams list".to_string(),
            Screen::TeamDetail => "futsal teams show".to_string(),
            Screen::PlayerList => "futsal players list".to_string(),
            Screen::PlayerDetail { player_id: Some(id) } => format!("futsal players show {}", id),
            Screen::PlayerDetail { player_id: None } => "futsal players show".to_string(),
            Screen::AddTeam => "futsal teams add".to_string(),
            Screen::AddPlayer => "futsal players add".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub target: Screen,
}

pub fn dashboard_items() -> Vec<DashboardItem> {
    vec![
        DashboardItem {
            id: "1",
            title: "Equipas",
            description: "Gerir equipas de futsal",
            color: "#1e3a8a",
            icon: "⚽",
            target: Screen::TeamList,
        },
        DashboardItem {
            id: "2",
            title: "Jogadores",
            description: "Ver lista de jogadores",
            color: "#dc2626",
            icon: "👥",
            target: Screen::PlayerList,
        },
        // Placeholders until statistics and calendar views exist
        DashboardItem {
            id: "3",
            title: "Estatísticas",
            description: "Análise de performance",
            color: "#6b7280",
            icon: "📊",
            target: Screen::Dashboard,
        },
        DashboardItem {
            id: "4",
            title: "Calendário",
            description: "Jogos e eventos",
            color: "#8b5cf6",
            icon: "📅",
            target: Screen::Dashboard,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_order_and_targets() {
        let items = dashboard_items();
        let titles: Vec<_> = items.iter().map(|i| i.title).collect();
        assert_eq!(titles, vec!["Equipas", "Jogadores", "Estatísticas", "Calendário"]);
        assert_eq!(items[0].target, Screen::TeamList);
        assert_eq!(items[1].target, Screen::PlayerList);
        assert_eq!(items[3].target, Screen::Dashboard);
    }

    #[test]
    fn test_player_detail_command_carries_identifier() {
        let screen = Screen::PlayerDetail {
            player_id: Some("12".to_string()),
        };
        assert_eq!(screen.command(), "futsal players show 12");
        assert_eq!(
            Screen::PlayerDetail { player_id: None }.command(),
            "futsal players show"
        );
    }
}
