//! Course modules, their lessons, and the level-based eligibility filter
//! used by the attendance sheet.

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::backend::domain::commands::modulos::{CreateAulaCommand, CreateModuloCommand};
use crate::backend::domain::models::aluno::Aluno;
use crate::backend::domain::models::aula::Aula;
use crate::backend::domain::models::modulo::{Modulo, Nivel};
use crate::backend::domain::models::next_id;
use crate::backend::storage::json::{
    AlunoRepository, AulaRepository, JsonConnection, ModuloRepository,
};
use crate::backend::storage::traits::{AlunoStorage, AulaStorage, ModuloStorage};

/// Students eligible for a module of the given level, in the order they were
/// passed in. Pure; recomputed on every view. There is no stored link between
/// students and modules, only this mapping.
pub fn eligible_alunos(nivel: &Nivel, alunos: &[Aluno]) -> Vec<Aluno> {
    alunos
        .iter()
        .filter(|a| nivel.matches_curso(&a.curso))
        .cloned()
        .collect()
}

#[derive(Clone)]
pub struct ModuloService {
    modulo_repository: ModuloRepository,
    aula_repository: AulaRepository,
    aluno_repository: AlunoRepository,
}

impl ModuloService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            modulo_repository: ModuloRepository::new((*connection).clone()),
            aula_repository: AulaRepository::new((*connection).clone()),
            aluno_repository: AlunoRepository::new((*connection).clone()),
        }
    }

    /// Create a course module. Modules start active and have no deletion
    /// path.
    pub fn create_modulo(&self, command: CreateModuloCommand) -> Result<Modulo> {
        let modulo = Modulo {
            id: next_id(),
            nome: command.nome,
            descricao: command.descricao,
            nivel: command.nivel,
            data_inicio: command.data_inicio,
            ativo: true,
        };
        self.modulo_repository.store_modulo(&modulo)?;
        info!("Created modulo {} ({})", modulo.nome, modulo.id);
        Ok(modulo)
    }

    pub fn get_modulo(&self, modulo_id: i64) -> Result<Option<Modulo>> {
        self.modulo_repository.get_modulo(modulo_id)
    }

    pub fn list_modulos(&self) -> Result<Vec<Modulo>> {
        self.modulo_repository.list_modulos()
    }

    /// Create a lesson under an existing module.
    pub fn create_aula(&self, command: CreateAulaCommand) -> Result<Aula> {
        self.modulo_repository
            .get_modulo(command.modulo_id)?
            .ok_or_else(|| anyhow::anyhow!("Modulo not found: {}", command.modulo_id))?;

        let aula = Aula {
            id: next_id(),
            modulo_id: command.modulo_id,
            titulo: command.titulo,
            descricao: command.descricao,
            data_aula: command.data_aula,
            duracao: command.duracao,
        };
        self.aula_repository.store_aula(&aula)?;
        info!("Created aula {} in modulo {}", aula.id, aula.modulo_id);
        Ok(aula)
    }

    pub fn list_aulas(&self, modulo_id: i64) -> Result<Vec<Aula>> {
        self.aula_repository.list_aulas_for_modulo(modulo_id)
    }

    /// Students belonging to a module's level, for the attendance sheet.
    pub fn eligible_alunos_for_modulo(&self, modulo_id: i64) -> Result<Vec<Aluno>> {
        let modulo = self
            .modulo_repository
            .get_modulo(modulo_id)?
            .ok_or_else(|| anyhow::anyhow!("Modulo not found: {}", modulo_id))?;
        let alunos = self.aluno_repository.list_alunos()?;
        Ok(eligible_alunos(&modulo.nivel, &alunos))
    }
}
