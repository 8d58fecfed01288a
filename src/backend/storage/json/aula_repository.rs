//! JSON-backed repository for the `aulas` collection.

use anyhow::Result;
use log::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::aula::Aula;
use crate::backend::storage::traits::AulaStorage;

const COLLECTION: &str = "aulas";

#[derive(Clone)]
pub struct AulaRepository {
    connection: JsonConnection,
}

impl AulaRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Aula>> {
        self.connection.read_collection(COLLECTION)
    }
}

impl AulaStorage for AulaRepository {
    fn store_aula(&self, aula: &Aula) -> Result<()> {
        let mut aulas = self.read_all()?;
        aulas.push(aula.clone());
        self.connection.write_collection(COLLECTION, &aulas)?;
        debug!("Stored aula {} ({})", aula.titulo, aula.id);
        Ok(())
    }

    fn get_aula(&self, aula_id: i64) -> Result<Option<Aula>> {
        let aulas = self.read_all()?;
        Ok(aulas.into_iter().find(|a| a.id == aula_id))
    }

    fn list_aulas(&self) -> Result<Vec<Aula>> {
        self.read_all()
    }

    fn list_aulas_for_modulo(&self, modulo_id: i64) -> Result<Vec<Aula>> {
        let aulas = self.read_all()?;
        Ok(aulas.into_iter().filter(|a| a.modulo_id == modulo_id).collect())
    }
}
