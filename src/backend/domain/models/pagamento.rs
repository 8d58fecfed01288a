//! Domain model for a tuition payment (pagamento).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagamentoStatus {
    Pendente,
    Pago,
    Atrasado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagamentoTipo {
    /// Recurring monthly tuition charge.
    Mensalidade,
    /// Makeup-lesson debit charged for an unjustified absence.
    Reposta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagamento {
    pub id: i64,
    pub aluno_id: i64,
    pub descricao: String,
    pub valor: f64,
    pub data_vencimento: NaiveDate,
    #[serde(default)]
    pub data_pagamento: Option<NaiveDate>,
    pub status: PagamentoStatus,
    pub tipo: PagamentoTipo,
}

impl Pagamento {
    /// Whether the payment still counts as open debt (pendente or atrasado).
    pub fn is_open(&self) -> bool {
        matches!(
            self.status,
            PagamentoStatus::Pendente | PagamentoStatus::Atrasado
        )
    }

    /// Days past due relative to `today`, as the calendar-day ceiling of the
    /// elapsed time: due today is 0 days past due, any partial day rounds up
    /// to the next whole day.
    pub fn days_past_due(&self, today: NaiveDate) -> i64 {
        (today - self.data_vencimento).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagamento(due: NaiveDate) -> Pagamento {
        Pagamento {
            id: 1,
            aluno_id: 2,
            descricao: "Mensalidade - 1/2024".to_string(),
            valor: 250.0,
            data_vencimento: due,
            data_pagamento: None,
            status: PagamentoStatus::Pendente,
            tipo: PagamentoTipo::Mensalidade,
        }
    }

    #[test]
    fn wire_names() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let json = serde_json::to_value(pagamento(due)).unwrap();
        assert_eq!(json["alunoId"], 2);
        assert_eq!(json["dataVencimento"], "2024-01-15");
        assert_eq!(json["dataPagamento"], serde_json::Value::Null);
        assert_eq!(json["status"], "pendente");
        assert_eq!(json["tipo"], "mensalidade");
    }

    #[test]
    fn days_past_due_is_zero_on_the_due_date() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let pagamento = pagamento(due);
        assert_eq!(pagamento.days_past_due(due), 0);
        assert_eq!(
            pagamento.days_past_due(NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()),
            5
        );
        assert_eq!(
            pagamento.days_past_due(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            -5
        );
    }

    #[test]
    fn open_statuses() {
        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut pagamento = pagamento(due);
        assert!(pagamento.is_open());
        pagamento.status = PagamentoStatus::Atrasado;
        assert!(pagamento.is_open());
        pagamento.status = PagamentoStatus::Pago;
        assert!(!pagamento.is_open());
    }
}
