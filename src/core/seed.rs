//! Built-in catalog records

use crate::core::data::{
    AttributeRecord, AttributeScores, Player, PlayerProfile, Position, StaffMember, Team,
    TeamCategory,
};

const PHYSICAL_COLOR: &str = "#FF6B6B";
const TECHNICAL_COLOR: &str = "#4ECDC4";
const MENTAL_COLOR: &str = "#45B7D1";
const EXPERIENCE_COLOR: &str = "#FFE66D";

fn team(
    id: &str,
    name: &str,
    category: TeamCategory,
    color: &str,
    location: &str,
    founded: i32,
    player_count: u32,
) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        category,
        color: color.to_string(),
        location: location.to_string(),
        founded,
        player_count,
    }
}

#[allow(clippy::too_many_arguments)]
fn player(
    id: &str,
    name: &str,
    position: Position,
    team: &str,
    number: u8,
    age: u8,
    height: &str,
    weight: &str,
    scores: [u8; 4],
) -> Player {
    let [physical, technical, mental, experience] = scores;
    Player {
        id: id.to_string(),
        name: name.to_string(),
        position,
        team: team.to_string(),
        number,
        age,
        height: height.to_string(),
        weight: weight.to_string(),
        attributes: AttributeScores::new(physical, technical, mental, experience),
        color: position.color().to_string(),
    }
}

fn staff_member(id: &str, name: &str, role: &str, color: &str, team: &str) -> StaffMember {
    StaffMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        color: color.to_string(),
        team: team.to_string(),
    }
}

/// Attribute panel rows, numbered in order across the four sections
fn attribute_panel(
    physical: [(&str, &str); 5],
    technical: [(&str, &str); 5],
    mental: [(&str, &str); 5],
    experience: [(&str, &str); 4],
) -> Vec<AttributeRecord> {
    let sections: [(&str, &str, &[(&str, &str)]); 4] = [
        ("Físico", PHYSICAL_COLOR, &physical),
        ("Técnico", TECHNICAL_COLOR, &technical),
        ("Mental", MENTAL_COLOR, &mental),
        ("Experiência", EXPERIENCE_COLOR, &experience),
    ];

    sections
        .iter()
        .flat_map(|(category, color, rows)| rows.iter().map(move |row| (*category, *color, *row)))
        .enumerate()
        .map(|(index, (category, color, (name, value)))| AttributeRecord {
            id: (index + 1).to_string(),
            name: name.to_string(),
            value: value.to_string(),
            category: category.to_string(),
            color: color.to_string(),
        })
        .collect()
}

const MENTAL_NAMES: [&str; 5] = ["Concentração", "Liderança", "Decisão", "Coragem", "Comunicação"];
const EXPERIENCE_NAMES: [&str; 4] = [
    "Jogos disputados",
    "Títulos conquistados",
    "Anos de experiência",
    "Clubes anteriores",
];
const GOALKEEPER_SKILLS: [&str; 5] = [
    "Reflexos",
    "Posicionamento",
    "Saída da baliza",
    "Jogo com os pés",
    "Defesa de penáltis",
];
const OUTFIELD_SKILLS: [&str; 5] = ["Finalização", "Controlo de bola", "Passe", "Drible", "Remate"];

fn physical_rows<'a>(height: &'a str, weight: &'a str, scores: [&'a str; 3]) -> [(&'a str, &'a str); 5] {
    [
        ("Altura", height),
        ("Peso", weight),
        ("Velocidade", scores[0]),
        ("Resistência", scores[1]),
        ("Agilidade", scores[2]),
    ]
}

fn zip_rows<'a, const N: usize>(names: [&'a str; N], values: [&'a str; N]) -> [(&'a str, &'a str); N] {
    let mut rows = [("", ""); N];
    for (slot, (name, value)) in rows.iter_mut().zip(names.into_iter().zip(values)) {
        *slot = (name, value);
    }
    rows
}

pub fn teams() -> Vec<Team> {
    use TeamCategory::*;
    vec![
        team("1", "Quinta Sobrado", Distrital, "#1e3a8a", "Batalha", 1976, 14),
        team("2", "Benfica", PrimeiraLiga, "#dc2626", "Lisboa", 1904, 16),
        team("3", "Sporting CP", PrimeiraLiga, "#059669", "Lisboa", 1906, 15),
        team("4", "FC Porto", PrimeiraLiga, "#1e40af", "Porto", 1893, 16),
        team("5", "SC Braga", PrimeiraLiga, "#dc2626", "Braga", 1921, 14),
        team("6", "Leões Porto Salvo", SegundaLiga, "#7c3aed", "Oeiras", 1980, 12),
        team("7", "Modicus", SegundaLiga, "#059669", "Porto", 1995, 13),
        team("8", "Burinhosa", SegundaLiga, "#1e40af", "Leiria", 1985, 11),
    ]
}

pub fn players() -> Vec<Player> {
    use Position::*;
    vec![
        player("1", "Rui Pedro", Goalkeeper, "Quinta Sobrado", 1, 29, "1.85m", "78kg", [8, 9, 8, 8]),
        player("2", "Telmo Silva", Goalkeeper, "Quinta Sobrado", 12, 25, "1.82m", "75kg", [7, 7, 6, 5]),
        player("3", "Tomás Videira", Fixed, "Quinta Sobrado", 2, 27, "1.78m", "80kg", [8, 8, 7, 6]),
        player("4", "Pedro Santos", Fixed, "Benfica", 3, 24, "1.80m", "82kg", [9, 8, 8, 5]),
        player("5", "Gonçalo Pinheiro", Fixed, "Quinta Sobrado", 4, 26, "1.79m", "79kg", [7, 7, 6, 4]),
        player("6", "Ricky Costa", Winger, "Quinta Sobrado", 5, 23, "1.75m", "70kg", [9, 8, 7, 4]),
        player("7", "Rodrigo Raposo", Winger, "Quinta Sobrado", 6, 28, "1.77m", "73kg", [8, 9, 8, 7]),
        player("8", "Tiago Magalhães", Winger, "Sporting CP", 7, 25, "1.76m", "71kg", [9, 8, 7, 5]),
        player("9", "Osvaldo Pereira", Winger, "Quinta Sobrado", 8, 24, "1.74m", "69kg", [8, 7, 6, 3]),
        player("10", "Pedro Costa", Winger, "Benfica", 9, 26, "1.78m", "72kg", [8, 9, 8, 6]),
        player("11", "Gonçalo Silva", Winger, "Quinta Sobrado", 10, 22, "1.73m", "68kg", [7, 6, 5, 2]),
        player("12", "Ihor Kovalenko", Pivot, "Quinta Sobrado", 11, 30, "1.85m", "85kg", [9, 9, 8, 9]),
        player("13", "Pirika Santos", Pivot, "Sporting CP", 13, 27, "1.83m", "83kg", [8, 8, 7, 6]),
        player("14", "Moita Silva", Pivot, "Quinta Sobrado", 14, 29, "1.87m", "88kg", [9, 7, 6, 7]),
    ]
}

pub fn staff() -> Vec<StaffMember> {
    vec![
        staff_member("1", "João Santos", "Treinador", "#FF6B35", "Quinta Sobrado"),
        staff_member("2", "Miguel Silva", "Treinador Guarda-redes", "#4ECDC4", "Quinta Sobrado"),
        staff_member("3", "Diogo", "Fitness Coach", "#45B7D1", "Quinta Sobrado"),
    ]
}

/// Detail profiles; the first entry is the default record
pub fn profiles() -> Vec<PlayerProfile> {
    vec![
        PlayerProfile {
            id: "1".to_string(),
            name: "Rui Pedro".to_string(),
            position: Position::Goalkeeper,
            birthday: "15 de Março de 1995".to_string(),
            number: 1,
            team: "Quinta Sobrado".to_string(),
            attributes: attribute_panel(
                physical_rows("1.85m", "78kg", ["7/10", "8/10", "9/10"]),
                zip_rows(GOALKEEPER_SKILLS, ["9/10", "8/10", "7/10", "6/10", "8/10"]),
                zip_rows(MENTAL_NAMES, ["9/10", "8/10", "8/10", "9/10", "7/10"]),
                zip_rows(EXPERIENCE_NAMES, ["156", "3", "8", "2"]),
            ),
        },
        PlayerProfile {
            id: "2".to_string(),
            name: "Telmo Silva".to_string(),
            position: Position::Goalkeeper,
            birthday: "22 de Agosto de 1998".to_string(),
            number: 12,
            team: "Quinta Sobrado".to_string(),
            attributes: attribute_panel(
                physical_rows("1.82m", "75kg", ["6/10", "7/10", "7/10"]),
                zip_rows(GOALKEEPER_SKILLS, ["7/10", "7/10", "6/10", "5/10", "7/10"]),
                zip_rows(MENTAL_NAMES, ["6/10", "5/10", "6/10", "7/10", "6/10"]),
                zip_rows(EXPERIENCE_NAMES, ["45", "0", "3", "1"]),
            ),
        },
        PlayerProfile {
            id: "12".to_string(),
            name: "Ihor Kovalenko".to_string(),
            position: Position::Pivot,
            birthday: "10 de Janeiro de 1993".to_string(),
            number: 11,
            team: "Quinta Sobrado".to_string(),
            attributes: attribute_panel(
                physical_rows("1.85m", "85kg", ["8/10", "9/10", "8/10"]),
                zip_rows(OUTFIELD_SKILLS, ["9/10", "8/10", "7/10", "8/10", "9/10"]),
                zip_rows(MENTAL_NAMES, ["8/10", "9/10", "8/10", "9/10", "8/10"]),
                zip_rows(EXPERIENCE_NAMES, ["234", "5", "12", "4"]),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_panel_numbering_and_sections() {
        let profile = &profiles()[0];
        assert_eq!(profile.attributes.len(), 19);
        assert_eq!(profile.attributes[0].id, "1");
        assert_eq!(profile.attributes[0].name, "Altura");
        assert_eq!(profile.attributes[5].name, "Reflexos");
        assert_eq!(profile.attributes[5].category, "Técnico");
        assert_eq!(profile.attributes[18].id, "19");
        assert_eq!(profile.attributes[18].name, "Clubes anteriores");
        assert_eq!(profile.attributes[18].color, EXPERIENCE_COLOR);
    }

    #[test]
    fn test_player_color_follows_position() {
        for p in players() {
            assert_eq!(p.color, p.position.color());
        }
    }
}
