//! Domain model for an attendance record (presenca).
//!
//! At most one record exists per (aula, aluno) pair; recording again replaces
//! the previous one. The repository enforces that invariant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a lesson for one student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresencaStatus {
    Presente,
    Falta,
    /// Attended a makeup lesson for an earlier absence.
    Reposta,
}

/// Justification attached to an absence. Only "nenhuma" carries a rule:
/// an unjustified absence with the makeup flag set generates a debit.
/// Every other value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Justificativa {
    #[default]
    Nenhuma,
    Outra(String),
}

impl Justificativa {
    pub fn is_unjustified(&self) -> bool {
        matches!(self, Justificativa::Nenhuma)
    }
}

impl From<String> for Justificativa {
    fn from(value: String) -> Self {
        match value.as_str() {
            "nenhuma" => Justificativa::Nenhuma,
            _ => Justificativa::Outra(value),
        }
    }
}

impl From<Justificativa> for String {
    fn from(value: Justificativa) -> Self {
        match value {
            Justificativa::Nenhuma => "nenhuma".to_string(),
            Justificativa::Outra(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presenca {
    pub id: i64,
    pub aula_id: i64,
    pub aluno_id: i64,
    pub status: PresencaStatus,
    #[serde(default)]
    pub justificativa: Justificativa,
    #[serde(default)]
    pub nota: Option<f64>,
    #[serde(default)]
    pub observacao: String,
    /// Whether the student asked for a makeup lesson. Only meaningful for an
    /// unjustified falta.
    #[serde(default)]
    pub quer_repor: bool,
    pub data_registro: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn wire_names_and_defaults() {
        let presenca = Presenca {
            id: 10,
            aula_id: 3,
            aluno_id: 1,
            status: PresencaStatus::Falta,
            justificativa: Justificativa::Nenhuma,
            nota: None,
            observacao: String::new(),
            quer_repor: true,
            data_registro: Utc.with_ymd_and_hms(2024, 4, 2, 19, 30, 0).unwrap(),
        };
        let json = serde_json::to_value(&presenca).unwrap();
        assert_eq!(json["status"], "falta");
        assert_eq!(json["justificativa"], "nenhuma");
        assert_eq!(json["querRepor"], true);
        assert_eq!(json["aulaId"], 3);
    }

    #[test]
    fn justificativa_default_is_nenhuma() {
        let justificativa = Justificativa::default();
        assert!(justificativa.is_unjustified());
        assert!(!Justificativa::Outra("atestado médico".to_string()).is_unjustified());
    }
}
