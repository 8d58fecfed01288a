//! JSON-backed repository for the `presencas` collection.
//!
//! Enforces the at-most-one-record-per-(aula, aluno) invariant: upserting
//! drops any previous record for the pair before appending the new one.

use anyhow::Result;
use log::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::presenca::Presenca;
use crate::backend::storage::traits::PresencaStorage;

const COLLECTION: &str = "presencas";

#[derive(Clone)]
pub struct PresencaRepository {
    connection: JsonConnection,
}

impl PresencaRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Presenca>> {
        self.connection.read_collection(COLLECTION)
    }
}

impl PresencaStorage for PresencaRepository {
    fn upsert_presenca(&self, presenca: &Presenca) -> Result<()> {
        let mut presencas = self.read_all()?;
        presencas.retain(|p| !(p.aula_id == presenca.aula_id && p.aluno_id == presenca.aluno_id));
        presencas.push(presenca.clone());
        self.connection.write_collection(COLLECTION, &presencas)?;
        debug!(
            "Recorded presenca for aluno {} in aula {}",
            presenca.aluno_id, presenca.aula_id
        );
        Ok(())
    }

    fn get_presenca(&self, aula_id: i64, aluno_id: i64) -> Result<Option<Presenca>> {
        let presencas = self.read_all()?;
        Ok(presencas
            .into_iter()
            .find(|p| p.aula_id == aula_id && p.aluno_id == aluno_id))
    }

    fn list_presencas(&self) -> Result<Vec<Presenca>> {
        self.read_all()
    }

    fn list_presencas_for_aula(&self, aula_id: i64) -> Result<Vec<Presenca>> {
        let presencas = self.read_all()?;
        Ok(presencas.into_iter().filter(|p| p.aula_id == aula_id).collect())
    }

    fn list_presencas_for_aluno(&self, aluno_id: i64) -> Result<Vec<Presenca>> {
        let presencas = self.read_all()?;
        Ok(presencas.into_iter().filter(|p| p.aluno_id == aluno_id).collect())
    }
}
