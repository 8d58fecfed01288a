//! Domain model for a student (aluno).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Course track a student is enrolled in. Stored as the display string the
/// original enrollment form used, so unknown values survive a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Curso {
    InglesBasico,
    InglesAvancado,
    Particular,
    /// No track selected yet ("Sem curso" in the original UI).
    SemCurso,
    /// Any other value found in the store; kept verbatim.
    Outro(String),
}

impl From<String> for Curso {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Inglês Básico" => Curso::InglesBasico,
            "Inglês Avançado" => Curso::InglesAvancado,
            "Particular" => Curso::Particular,
            "" => Curso::SemCurso,
            _ => Curso::Outro(value),
        }
    }
}

impl From<Curso> for String {
    fn from(value: Curso) -> Self {
        match value {
            Curso::InglesBasico => "Inglês Básico".to_string(),
            Curso::InglesAvancado => "Inglês Avançado".to_string(),
            Curso::Particular => "Particular".to_string(),
            Curso::SemCurso => String::new(),
            Curso::Outro(other) => other,
        }
    }
}

/// Lifecycle status of a student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlunoStatus {
    Ativo,
    Pausado,
    Inativo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aluno {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
    pub curso: Curso,
    /// Monthly tuition fee in BRL.
    pub valor: f64,
    /// Billing day of month, 1–31. Days past the end of the resolved month
    /// clamp to its last day when a charge is generated.
    pub dia_vencimento: u32,
    pub data_inicio: NaiveDate,
    pub status: AlunoStatus,
}

/// Validation errors for student input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AlunoValidationError {
    #[error("Nome cannot be empty")]
    EmptyNome,
    #[error("Valor must be non-negative")]
    NegativeValor,
    #[error("Dia de vencimento must be between 1 and 31")]
    InvalidDiaVencimento,
}

impl Aluno {
    /// Check the invariants the enrollment form is expected to enforce.
    pub fn validate(&self) -> Result<(), AlunoValidationError> {
        if self.nome.trim().is_empty() {
            return Err(AlunoValidationError::EmptyNome);
        }
        if self.valor < 0.0 {
            return Err(AlunoValidationError::NegativeValor);
        }
        if self.dia_vencimento == 0 || self.dia_vencimento > 31 {
            return Err(AlunoValidationError::InvalidDiaVencimento);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Aluno {
        Aluno {
            id: 1,
            nome: "Maria Silva".to_string(),
            email: Some("maria@example.com".to_string()),
            telefone: None,
            curso: Curso::InglesBasico,
            valor: 250.0,
            dia_vencimento: 15,
            data_inicio: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            status: AlunoStatus::Ativo,
        }
    }

    #[test]
    fn serializes_with_portuguese_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["nome"], "Maria Silva");
        assert_eq!(json["curso"], "Inglês Básico");
        assert_eq!(json["diaVencimento"], 15);
        assert_eq!(json["dataInicio"], "2024-01-10");
        assert_eq!(json["status"], "ativo");
    }

    #[test]
    fn unknown_curso_round_trips() {
        let mut aluno = sample();
        aluno.curso = Curso::Outro("Espanhol".to_string());
        let json = serde_json::to_string(&aluno).unwrap();
        let back: Aluno = serde_json::from_str(&json).unwrap();
        assert_eq!(back.curso, Curso::Outro("Espanhol".to_string()));
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut aluno = sample();
        aluno.nome = "  ".to_string();
        assert_eq!(aluno.validate(), Err(AlunoValidationError::EmptyNome));

        let mut aluno = sample();
        aluno.valor = -1.0;
        assert_eq!(aluno.validate(), Err(AlunoValidationError::NegativeValor));

        let mut aluno = sample();
        aluno.dia_vencimento = 32;
        assert_eq!(
            aluno.validate(),
            Err(AlunoValidationError::InvalidDiaVencimento)
        );
    }
}
