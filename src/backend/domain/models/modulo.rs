//! Domain model for a course module (modulo).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aluno::Curso;

/// Level of a course module. The level is what ties students to a module:
/// there is no stored foreign key, eligibility is recomputed from
/// [`Nivel::matches_curso`] on every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Nivel {
    Basico,
    Avancado,
    Particular,
    /// Any other value found in the store; kept verbatim.
    Outro(String),
}

impl From<String> for Nivel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "basico" => Nivel::Basico,
            "avancado" => Nivel::Avancado,
            "particular" => Nivel::Particular,
            _ => Nivel::Outro(value),
        }
    }
}

impl From<Nivel> for String {
    fn from(value: Nivel) -> Self {
        match value {
            Nivel::Basico => "basico".to_string(),
            Nivel::Avancado => "avancado".to_string(),
            Nivel::Particular => "particular".to_string(),
            Nivel::Outro(other) => other,
        }
    }
}

impl Nivel {
    /// Fixed mapping from module level to student track. Unknown levels
    /// match every track: the original fails open rather than hiding
    /// students from the attendance sheet.
    pub fn matches_curso(&self, curso: &Curso) -> bool {
        match self {
            Nivel::Particular => *curso == Curso::Particular,
            Nivel::Basico => *curso == Curso::InglesBasico,
            Nivel::Avancado => *curso == Curso::InglesAvancado,
            Nivel::Outro(_) => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modulo {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub nivel: Nivel,
    pub data_inicio: NaiveDate,
    pub ativo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nivel_wire_values() {
        let modulo = Modulo {
            id: 7,
            nome: "Turma A".to_string(),
            descricao: String::new(),
            nivel: Nivel::Avancado,
            data_inicio: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            ativo: true,
        };
        let json = serde_json::to_value(&modulo).unwrap();
        assert_eq!(json["nivel"], "avancado");
        assert_eq!(json["dataInicio"], "2024-03-01");
    }

    #[test]
    fn unknown_nivel_matches_every_curso() {
        let nivel = Nivel::Outro("intensivo".to_string());
        assert!(nivel.matches_curso(&Curso::InglesBasico));
        assert!(nivel.matches_curso(&Curso::Particular));
        assert!(nivel.matches_curso(&Curso::SemCurso));
    }

    #[test]
    fn known_niveis_match_only_their_track() {
        assert!(Nivel::Basico.matches_curso(&Curso::InglesBasico));
        assert!(!Nivel::Basico.matches_curso(&Curso::InglesAvancado));
        assert!(Nivel::Particular.matches_curso(&Curso::Particular));
        assert!(!Nivel::Particular.matches_curso(&Curso::SemCurso));
    }
}
