//! JSON-backed repository for the `pagamentos` collection.

use anyhow::Result;
use log::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::pagamento::Pagamento;
use crate::backend::storage::traits::PagamentoStorage;

const COLLECTION: &str = "pagamentos";

#[derive(Clone)]
pub struct PagamentoRepository {
    connection: JsonConnection,
}

impl PagamentoRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Pagamento>> {
        self.connection.read_collection(COLLECTION)
    }
}

impl PagamentoStorage for PagamentoRepository {
    fn store_pagamento(&self, pagamento: &Pagamento) -> Result<()> {
        let mut pagamentos = self.read_all()?;
        pagamentos.push(pagamento.clone());
        self.connection.write_collection(COLLECTION, &pagamentos)?;
        debug!(
            "Stored pagamento {} for aluno {}: {} (R$ {:.2})",
            pagamento.id, pagamento.aluno_id, pagamento.descricao, pagamento.valor
        );
        Ok(())
    }

    fn get_pagamento(&self, pagamento_id: i64) -> Result<Option<Pagamento>> {
        let pagamentos = self.read_all()?;
        Ok(pagamentos.into_iter().find(|p| p.id == pagamento_id))
    }

    fn list_pagamentos(&self) -> Result<Vec<Pagamento>> {
        self.read_all()
    }

    fn update_pagamento(&self, pagamento: &Pagamento) -> Result<()> {
        let mut pagamentos = self.read_all()?;
        let position = pagamentos
            .iter()
            .position(|p| p.id == pagamento.id)
            .ok_or_else(|| anyhow::anyhow!("Pagamento not found: {}", pagamento.id))?;
        pagamentos[position] = pagamento.clone();
        self.connection.write_collection(COLLECTION, &pagamentos)
    }

    fn save_pagamentos(&self, pagamentos: &[Pagamento]) -> Result<()> {
        self.connection.write_collection(COLLECTION, pagamentos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::pagamento::PagamentoStatus;
    use crate::backend::storage::json::test_utils::{sample_pagamento, TestEnvironment};
    use chrono::NaiveDate;

    #[test]
    fn store_get_and_update() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = PagamentoRepository::new(env.connection.clone());

        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        repo.store_pagamento(&sample_pagamento(1, 2, due))?;

        let mut pago = repo.get_pagamento(1)?.unwrap();
        pago.status = PagamentoStatus::Pago;
        pago.data_pagamento = Some(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap());
        repo.update_pagamento(&pago)?;

        let back = repo.get_pagamento(1)?.unwrap();
        assert_eq!(back.status, PagamentoStatus::Pago);
        assert!(back.data_pagamento.is_some());

        let mut missing = sample_pagamento(99, 2, due);
        missing.valor = 1.0;
        assert!(repo.update_pagamento(&missing).is_err());
        Ok(())
    }

    #[test]
    fn save_pagamentos_replaces_the_collection() -> Result<()> {
        let env = TestEnvironment::new()?;
        let repo = PagamentoRepository::new(env.connection.clone());

        let due = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        repo.store_pagamento(&sample_pagamento(1, 2, due))?;
        repo.store_pagamento(&sample_pagamento(2, 3, due))?;

        let kept = vec![repo.get_pagamento(2)?.unwrap()];
        repo.save_pagamentos(&kept)?;

        let ids: Vec<i64> = repo.list_pagamentos()?.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
        Ok(())
    }
}
