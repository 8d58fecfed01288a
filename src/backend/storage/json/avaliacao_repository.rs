//! JSON-backed repository for the `avaliacoes` collection.

use anyhow::Result;
use log::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::avaliacao::Avaliacao;
use crate::backend::storage::traits::AvaliacaoStorage;

const COLLECTION: &str = "avaliacoes";

#[derive(Clone)]
pub struct AvaliacaoRepository {
    connection: JsonConnection,
}

impl AvaliacaoRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Avaliacao>> {
        self.connection.read_collection(COLLECTION)
    }
}

impl AvaliacaoStorage for AvaliacaoRepository {
    fn store_avaliacao(&self, avaliacao: &Avaliacao) -> Result<()> {
        let mut avaliacoes = self.read_all()?;
        avaliacoes.push(avaliacao.clone());
        self.connection.write_collection(COLLECTION, &avaliacoes)?;
        debug!("Stored avaliacao {} for aluno {}", avaliacao.id, avaliacao.aluno_id);
        Ok(())
    }

    fn list_avaliacoes(&self) -> Result<Vec<Avaliacao>> {
        self.read_all()
    }

    fn list_avaliacoes_for_aluno(&self, aluno_id: i64) -> Result<Vec<Avaliacao>> {
        let avaliacoes = self.read_all()?;
        Ok(avaliacoes
            .into_iter()
            .filter(|a| a.aluno_id == aluno_id)
            .collect())
    }
}
