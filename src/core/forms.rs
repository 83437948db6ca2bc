//! Add-team and add-player form state
//!
//! Submitting a form only checks that the required fields are filled in.
//! Nothing here touches the catalog; accepted forms are handed to a
//! [`DraftStore`](crate::core::traits::DraftStore) by the caller.

use crate::core::data::{Position, TeamCategory};
use serde::{Deserialize, Serialize};

pub const REJECTED_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";
pub const TEAM_ACCEPTED_MESSAGE: &str = "Equipa adicionada com sucesso!";
pub const PLAYER_ACCEPTED_MESSAGE: &str = "Jogador adicionado com sucesso!";

/// Teams offered by the add-player team selector
pub const TEAM_CHOICES: [&str; 3] = ["Quinta Sobrado", "Benfica", "Sporting CP"];

/// Result of pressing submit on a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted {
        message: &'static str,
    },
    Rejected {
        message: &'static str,
        missing: Vec<&'static str>,
    },
}

impl SubmissionOutcome {
    fn from_missing(missing: Vec<&'static str>, accepted: &'static str) -> Self {
        if missing.is_empty() {
            SubmissionOutcome::Accepted { message: accepted }
        } else {
            SubmissionOutcome::Rejected {
                message: REJECTED_MESSAGE,
                missing,
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            SubmissionOutcome::Accepted { message } | SubmissionOutcome::Rejected { message, .. } => {
                *message
            }
        }
    }

    /// Labels of the blank required fields; empty when accepted
    pub fn missing(&self) -> &[&'static str] {
        match self {
            SubmissionOutcome::Accepted { .. } => &[],
            SubmissionOutcome::Rejected { missing, .. } => missing,
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamForm {
    pub team_name: String,
    pub category: String,
    pub location: String,
    pub founded: String,
    pub venue: String,
    pub capacity: String,
    pub description: String,
}

/// Display-only projection of an in-progress team form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPreview {
    pub name: String,
    pub location: String,
    pub category: String,
    pub color: &'static str,
    pub founded: String,
    pub venue: String,
}

impl TeamForm {
    /// Field labels paired with their required flag, in form order
    pub const FIELDS: [(&'static str, bool); 7] = [
        ("Nome da Equipa", true),
        ("Categoria", false),
        ("Localização", true),
        ("Ano de Fundação", false),
        ("Nome do Pavilhão", false),
        ("Capacidade", false),
        ("Descrição", false),
    ];

    /// Realistic sample values for a quick demo submission
    pub fn sample() -> Self {
        Self {
            team_name: "Nova Equipa Futsal".to_string(),
            category: TeamCategory::Distrital.label().to_string(),
            location: "Lisboa".to_string(),
            founded: "2024".to_string(),
            venue: "Pavilhão Municipal".to_string(),
            capacity: "500".to_string(),
            description: "Equipa de futsal recém-criada para competições distritais.".to_string(),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut String; 7] {
        [
            &mut self.team_name,
            &mut self.category,
            &mut self.location,
            &mut self.founded,
            &mut self.venue,
            &mut self.capacity,
            &mut self.description,
        ]
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.team_name) {
            missing.push(Self::FIELDS[0].0);
        }
        if blank(&self.location) {
            missing.push(Self::FIELDS[2].0);
        }
        missing
    }

    pub fn validate(&self) -> SubmissionOutcome {
        SubmissionOutcome::from_missing(self.missing_fields(), TEAM_ACCEPTED_MESSAGE)
    }

    pub fn preview(&self) -> TeamPreview {
        TeamPreview {
            name: self.team_name.clone(),
            location: self.location.clone(),
            category: self.category.clone(),
            color: TeamCategory::color_for(&self.category),
            founded: self.founded.clone(),
            venue: self.venue.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerForm {
    pub player_name: String,
    pub position: String,
    pub team: String,
    pub number: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub physical: String,
    pub technical: String,
    pub mental: String,
    pub experience: String,
}

/// Display-only projection of an in-progress player form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPreview {
    pub name: String,
    pub number: String,
    pub position: String,
    pub color: &'static str,
    pub team: String,
    pub age: String,
    pub height: String,
    pub weight: String,
}

impl PlayerForm {
    pub const FIELDS: [(&'static str, bool); 11] = [
        ("Nome do Jogador", true),
        ("Posição", false),
        ("Equipa", true),
        ("Número", false),
        ("Idade", false),
        ("Altura", false),
        ("Peso", false),
        ("Físico", false),
        ("Técnico", false),
        ("Mental", false),
        ("Experiência", false),
    ];

    pub fn sample() -> Self {
        Self {
            player_name: "Novo Jogador".to_string(),
            position: Position::Winger.label().to_string(),
            team: TEAM_CHOICES[0].to_string(),
            number: "15".to_string(),
            age: "25".to_string(),
            height: "1.75m".to_string(),
            weight: "70kg".to_string(),
            physical: "7".to_string(),
            technical: "7".to_string(),
            mental: "7".to_string(),
            experience: "5".to_string(),
        }
    }

    pub fn fields_mut(&mut self) -> [&mut String; 11] {
        [
            &mut self.player_name,
            &mut self.position,
            &mut self.team,
            &mut self.number,
            &mut self.age,
            &mut self.height,
            &mut self.weight,
            &mut self.physical,
            &mut self.technical,
            &mut self.mental,
            &mut self.experience,
        ]
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.player_name) {
            missing.push(Self::FIELDS[0].0);
        }
        if blank(&self.team) {
            missing.push(Self::FIELDS[2].0);
        }
        missing
    }

    pub fn validate(&self) -> SubmissionOutcome {
        SubmissionOutcome::from_missing(self.missing_fields(), PLAYER_ACCEPTED_MESSAGE)
    }

    pub fn preview(&self) -> PlayerPreview {
        PlayerPreview {
            name: self.player_name.clone(),
            number: self.number.clone(),
            position: self.position.clone(),
            color: Position::color_for(&self.position),
            team: self.team.clone(),
            age: self.age.clone(),
            height: self.height.clone(),
            weight: self.weight.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::NEUTRAL_COLOR;

    #[test]
    fn test_empty_team_form_is_rejected() {
        let outcome = TeamForm::default().validate();
        assert_eq!(
            outcome,
            SubmissionOutcome::Rejected {
                message: REJECTED_MESSAGE,
                missing: vec!["Nome da Equipa", "Localização"],
            }
        );
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let form = TeamForm {
            team_name: "   ".to_string(),
            location: "Porto".to_string(),
            ..TeamForm::default()
        };
        let outcome = form.validate();
        assert!(!outcome.is_accepted());
        assert_eq!(outcome.missing(), ["Nome da Equipa"]);
        assert_eq!(form.missing_fields(), vec!["Nome da Equipa"]);
    }

    #[test]
    fn test_sample_forms_are_accepted() {
        assert_eq!(TeamForm::sample().validate().message(), TEAM_ACCEPTED_MESSAGE);
        assert_eq!(PlayerForm::sample().validate().message(), PLAYER_ACCEPTED_MESSAGE);
    }

    #[test]
    fn test_only_name_and_team_are_required_for_players() {
        let form = PlayerForm {
            player_name: "Zé".to_string(),
            team: "Benfica".to_string(),
            ..PlayerForm::default()
        };
        assert!(form.validate().is_accepted());

        let form = PlayerForm {
            player_name: String::new(),
            ..PlayerForm::sample()
        };
        assert_eq!(form.missing_fields(), vec!["Nome do Jogador"]);
    }

    #[test]
    fn test_team_preview_resolves_category_color() {
        let mut form = TeamForm::sample();
        assert_eq!(form.preview().color, "#7c3aed");

        form.category = "Liga dos Amigos".to_string();
        assert_eq!(form.preview().color, NEUTRAL_COLOR);
    }

    #[test]
    fn test_player_preview_resolves_position_color() {
        let mut form = PlayerForm::sample();
        assert_eq!(form.preview().color, "#45B7D1");

        form.position.clear();
        assert_eq!(form.preview().color, NEUTRAL_COLOR);
    }

    #[test]
    fn test_fields_mut_follow_label_order() {
        let mut form = PlayerForm::default();
        *form.fields_mut()[2] = "Benfica".to_string();
        assert_eq!(form.team, "Benfica");
        assert_eq!(PlayerForm::FIELDS[2].0, "Equipa");
    }
}
