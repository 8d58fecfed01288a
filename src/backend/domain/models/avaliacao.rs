//! Domain model for a written evaluation (avaliacao).
//!
//! The `avaliacoes` collection is part of the persisted contract even though
//! the original screens never wrote to it; the model stays minimal.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avaliacao {
    pub id: i64,
    pub aluno_id: i64,
    pub descricao: String,
    pub nota: f64,
    pub data: NaiveDate,
}
