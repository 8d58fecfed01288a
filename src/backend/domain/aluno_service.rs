//! Student enrollment and maintenance.
//!
//! Enrollment is the only place a mensalidade is generated; editing or
//! deleting a student never touches the `pagamentos` collection.

use anyhow::Result;
use chrono::NaiveDate;
use log::{info, warn};
use std::sync::Arc;

use crate::backend::domain::commands::alunos::{
    AlunoListFilter, CreateAlunoCommand, CreateAlunoResult, UpdateAlunoCommand, UpdateAlunoResult,
};
use crate::backend::domain::commands::avaliacoes::CreateAvaliacaoCommand;
use crate::backend::domain::models::aluno::Aluno;
use crate::backend::domain::models::avaliacao::Avaliacao;
use crate::backend::domain::models::next_id;
use crate::backend::domain::pagamento_service::PagamentoService;
use crate::backend::storage::json::{AlunoRepository, AvaliacaoRepository, JsonConnection};
use crate::backend::storage::traits::{AlunoStorage, AvaliacaoStorage};

#[derive(Clone)]
pub struct AlunoService {
    aluno_repository: AlunoRepository,
    avaliacao_repository: AvaliacaoRepository,
    pagamento_service: PagamentoService,
}

impl AlunoService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            aluno_repository: AlunoRepository::new((*connection).clone()),
            avaliacao_repository: AvaliacaoRepository::new((*connection).clone()),
            pagamento_service: PagamentoService::new(connection),
        }
    }

    /// Enroll a new student and generate their first monthly charge, due on
    /// the billing day relative to `today`.
    pub fn create_aluno(
        &self,
        command: CreateAlunoCommand,
        today: NaiveDate,
    ) -> Result<CreateAlunoResult> {
        info!("Enrolling aluno: {}", command.nome);

        let aluno = Aluno {
            id: next_id(),
            nome: command.nome.trim().to_string(),
            email: command.email,
            telefone: command.telefone,
            curso: command.curso,
            valor: command.valor,
            dia_vencimento: command.dia_vencimento,
            data_inicio: command.data_inicio,
            status: command.status,
        };
        aluno.validate()?;

        self.aluno_repository.store_aluno(&aluno)?;
        let mensalidade = self.pagamento_service.generate_monthly_charge(&aluno, today)?;

        info!("Enrolled aluno {} ({})", aluno.nome, aluno.id);
        Ok(CreateAlunoResult { aluno, mensalidade })
    }

    /// Replace an existing student's fields. Never generates a charge.
    pub fn update_aluno(&self, command: UpdateAlunoCommand) -> Result<UpdateAlunoResult> {
        let existing = self
            .aluno_repository
            .get_aluno(command.aluno_id)?
            .ok_or_else(|| anyhow::anyhow!("Aluno not found: {}", command.aluno_id))?;

        let aluno = Aluno {
            id: existing.id,
            nome: command.nome.trim().to_string(),
            email: command.email,
            telefone: command.telefone,
            curso: command.curso,
            valor: command.valor,
            dia_vencimento: command.dia_vencimento,
            data_inicio: command.data_inicio,
            status: command.status,
        };
        aluno.validate()?;

        self.aluno_repository.update_aluno(&aluno)?;
        info!("Updated aluno {} ({})", aluno.nome, aluno.id);
        Ok(UpdateAlunoResult { aluno })
    }

    /// Delete a student. Their payments stay behind until the explicit
    /// orphan purge runs.
    pub fn delete_aluno(&self, aluno_id: i64) -> Result<()> {
        if !self.aluno_repository.delete_aluno(aluno_id)? {
            warn!("Delete requested for missing aluno {}", aluno_id);
            return Err(anyhow::anyhow!("Aluno not found: {}", aluno_id));
        }
        info!("Deleted aluno {}", aluno_id);
        Ok(())
    }

    pub fn get_aluno(&self, aluno_id: i64) -> Result<Option<Aluno>> {
        self.aluno_repository.get_aluno(aluno_id)
    }

    pub fn list_alunos(&self) -> Result<Vec<Aluno>> {
        self.aluno_repository.list_alunos()
    }

    /// Students matching the list-view filters, in stored order.
    pub fn filter_alunos(&self, filter: &AlunoListFilter) -> Result<Vec<Aluno>> {
        let mut alunos = self.aluno_repository.list_alunos()?;

        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            alunos.retain(|a| a.nome.to_lowercase().contains(&needle));
        }
        if let Some(status) = filter.status {
            alunos.retain(|a| a.status == status);
        }
        if let Some(curso) = &filter.curso {
            alunos.retain(|a| a.curso == *curso);
        }

        Ok(alunos)
    }

    /// Store a written evaluation for an existing student.
    pub fn create_avaliacao(&self, command: CreateAvaliacaoCommand) -> Result<Avaliacao> {
        self.aluno_repository
            .get_aluno(command.aluno_id)?
            .ok_or_else(|| anyhow::anyhow!("Aluno not found: {}", command.aluno_id))?;

        let avaliacao = Avaliacao {
            id: next_id(),
            aluno_id: command.aluno_id,
            descricao: command.descricao,
            nota: command.nota,
            data: command.data,
        };
        self.avaliacao_repository.store_avaliacao(&avaliacao)?;
        info!("Stored avaliacao {} for aluno {}", avaliacao.id, avaliacao.aluno_id);
        Ok(avaliacao)
    }

    pub fn list_avaliacoes(&self, aluno_id: i64) -> Result<Vec<Avaliacao>> {
        self.avaliacao_repository.list_avaliacoes_for_aluno(aluno_id)
    }
}
