//! Domain model for a lesson (aula). A lesson belongs to exactly one module.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default lesson length when the form leaves duration blank.
pub const DURACAO_PADRAO_MINUTOS: u32 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aula {
    pub id: i64,
    pub modulo_id: i64,
    pub titulo: String,
    pub descricao: String,
    pub data_aula: NaiveDate,
    /// Duration in minutes.
    pub duracao: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names() {
        let aula = Aula {
            id: 3,
            modulo_id: 7,
            titulo: "Present Perfect".to_string(),
            descricao: "Unit 4".to_string(),
            data_aula: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
            duracao: DURACAO_PADRAO_MINUTOS,
        };
        let json = serde_json::to_value(&aula).unwrap();
        assert_eq!(json["moduloId"], 7);
        assert_eq!(json["dataAula"], "2024-04-02");
        assert_eq!(json["duracao"], 60);
    }
}
