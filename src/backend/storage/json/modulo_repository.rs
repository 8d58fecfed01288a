//! JSON-backed repository for the `modulos` collection.

use anyhow::Result;
use log::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::modulo::Modulo;
use crate::backend::storage::traits::ModuloStorage;

const COLLECTION: &str = "modulos";

#[derive(Clone)]
pub struct ModuloRepository {
    connection: JsonConnection,
}

impl ModuloRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Modulo>> {
        self.connection.read_collection(COLLECTION)
    }
}

impl ModuloStorage for ModuloRepository {
    fn store_modulo(&self, modulo: &Modulo) -> Result<()> {
        let mut modulos = self.read_all()?;
        modulos.push(modulo.clone());
        self.connection.write_collection(COLLECTION, &modulos)?;
        debug!("Stored modulo {} ({})", modulo.nome, modulo.id);
        Ok(())
    }

    fn get_modulo(&self, modulo_id: i64) -> Result<Option<Modulo>> {
        let modulos = self.read_all()?;
        Ok(modulos.into_iter().find(|m| m.id == modulo_id))
    }

    fn list_modulos(&self) -> Result<Vec<Modulo>> {
        self.read_all()
    }
}
