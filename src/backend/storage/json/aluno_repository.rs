//! JSON-backed repository for the `alunos` collection.

use anyhow::Result;
use log::debug;

use super::connection::JsonConnection;
use crate::backend::domain::models::aluno::Aluno;
use crate::backend::storage::traits::AlunoStorage;

const COLLECTION: &str = "alunos";

#[derive(Clone)]
pub struct AlunoRepository {
    connection: JsonConnection,
}

impl AlunoRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn read_all(&self) -> Result<Vec<Aluno>> {
        self.connection.read_collection(COLLECTION)
    }

    fn write_all(&self, alunos: &[Aluno]) -> Result<()> {
        self.connection.write_collection(COLLECTION, alunos)
    }
}

impl AlunoStorage for AlunoRepository {
    fn store_aluno(&self, aluno: &Aluno) -> Result<()> {
        let mut alunos = self.read_all()?;
        alunos.push(aluno.clone());
        self.write_all(&alunos)?;
        debug!("Stored aluno {} ({})", aluno.nome, aluno.id);
        Ok(())
    }

    fn get_aluno(&self, aluno_id: i64) -> Result<Option<Aluno>> {
        let alunos = self.read_all()?;
        Ok(alunos.into_iter().find(|a| a.id == aluno_id))
    }

    fn list_alunos(&self) -> Result<Vec<Aluno>> {
        self.read_all()
    }

    fn update_aluno(&self, aluno: &Aluno) -> Result<()> {
        let mut alunos = self.read_all()?;
        let position = alunos
            .iter()
            .position(|a| a.id == aluno.id)
            .ok_or_else(|| anyhow::anyhow!("Aluno not found: {}", aluno.id))?;
        alunos[position] = aluno.clone();
        self.write_all(&alunos)
    }

    fn delete_aluno(&self, aluno_id: i64) -> Result<bool> {
        let mut alunos = self.read_all()?;
        let before = alunos.len();
        alunos.retain(|a| a.id != aluno_id);
        if alunos.len() == before {
            return Ok(false);
        }
        self.write_all(&alunos)?;
        debug!("Deleted aluno {}", aluno_id);
        Ok(true)
    }
}
