//! Read-only reporting aggregations: dashboard counters, revenue by status,
//! per-student performance and the per-level headcount.
//!
//! Everything here is a pure computation over the current collections; the
//! presentation layer formats the numbers.

use anyhow::Result;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use crate::backend::domain::models::aluno::{Aluno, AlunoStatus, Curso};
use crate::backend::domain::models::pagamento::PagamentoStatus;
use crate::backend::domain::models::presenca::{Presenca, PresencaStatus};
use crate::backend::storage::json::{
    AlunoRepository, JsonConnection, ModuloRepository, PagamentoRepository, PresencaRepository,
};
use crate::backend::storage::traits::{
    AlunoStorage, ModuloStorage, PagamentoStorage, PresencaStorage,
};

/// Counters shown on the dashboard. Only active students count toward the
/// headline number; debtors are counted by distinct student id, including
/// students that were since deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub alunos_ativos: usize,
    pub total_modulos: usize,
    pub pagamentos_atrasados: usize,
    pub alunos_devedores: usize,
}

/// Revenue split by payment status, in BRL.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceitaPorStatus {
    pub pago: f64,
    pub pendente: f64,
    pub atrasado: f64,
}

impl ReceitaPorStatus {
    /// Open revenue: pendente plus atrasado.
    pub fn em_aberto(&self) -> f64 {
        self.pendente + self.atrasado
    }
}

/// Active-student headcount per module level. Tracks outside the three known
/// ones are not counted anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AtivosPorNivel {
    pub basico: usize,
    pub avancado: usize,
    pub particular: usize,
}

/// One active student's row in the performance report.
#[derive(Debug, Clone, PartialEq)]
pub struct DesempenhoAluno {
    pub aluno: Aluno,
    /// Attendance frequency in whole percent (presente over recorded).
    pub frequencia: u32,
    /// Average of the recorded grades, when any exist.
    pub media_notas: Option<f64>,
    pub com_debito: bool,
}

/// One active student's row in the financial-situation report.
#[derive(Debug, Clone, PartialEq)]
pub struct SituacaoFinanceira {
    pub aluno: Aluno,
    pub mensalidade: f64,
    /// Open (pendente + atrasado) total for the student.
    pub pendencias: f64,
}

#[derive(Clone)]
pub struct RelatorioService {
    aluno_repository: AlunoRepository,
    modulo_repository: ModuloRepository,
    presenca_repository: PresencaRepository,
    pagamento_repository: PagamentoRepository,
}

impl RelatorioService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            aluno_repository: AlunoRepository::new((*connection).clone()),
            modulo_repository: ModuloRepository::new((*connection).clone()),
            presenca_repository: PresencaRepository::new((*connection).clone()),
            pagamento_repository: PagamentoRepository::new((*connection).clone()),
        }
    }

    pub fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let alunos = self.aluno_repository.list_alunos()?;
        let modulos = self.modulo_repository.list_modulos()?;
        let pagamentos = self.pagamento_repository.list_pagamentos()?;

        let devedores: HashSet<i64> = pagamentos
            .iter()
            .filter(|p| p.is_open())
            .map(|p| p.aluno_id)
            .collect();

        let summary = DashboardSummary {
            alunos_ativos: alunos
                .iter()
                .filter(|a| a.status == AlunoStatus::Ativo)
                .count(),
            total_modulos: modulos.len(),
            pagamentos_atrasados: pagamentos
                .iter()
                .filter(|p| p.status == PagamentoStatus::Atrasado)
                .count(),
            alunos_devedores: devedores.len(),
        };
        debug!("Dashboard summary: {:?}", summary);
        Ok(summary)
    }

    pub fn receita_por_status(&self) -> Result<ReceitaPorStatus> {
        let pagamentos = self.pagamento_repository.list_pagamentos()?;
        let soma = |status: PagamentoStatus| -> f64 {
            pagamentos
                .iter()
                .filter(|p| p.status == status)
                .map(|p| p.valor)
                .sum()
        };
        Ok(ReceitaPorStatus {
            pago: soma(PagamentoStatus::Pago),
            pendente: soma(PagamentoStatus::Pendente),
            atrasado: soma(PagamentoStatus::Atrasado),
        })
    }

    pub fn ativos_por_nivel(&self) -> Result<AtivosPorNivel> {
        let alunos = self.aluno_repository.list_alunos()?;
        let mut stats = AtivosPorNivel::default();
        for aluno in alunos.iter().filter(|a| a.status == AlunoStatus::Ativo) {
            match aluno.curso {
                Curso::InglesBasico => stats.basico += 1,
                Curso::InglesAvancado => stats.avancado += 1,
                Curso::Particular => stats.particular += 1,
                Curso::SemCurso | Curso::Outro(_) => {}
            }
        }
        Ok(stats)
    }

    /// Average attendance frequency across active students' records, in
    /// whole percent. Zero when nothing was recorded yet.
    pub fn frequencia_media(&self) -> Result<u32> {
        let ativos: HashSet<i64> = self
            .aluno_repository
            .list_alunos()?
            .into_iter()
            .filter(|a| a.status == AlunoStatus::Ativo)
            .map(|a| a.id)
            .collect();
        let presencas: Vec<Presenca> = self
            .presenca_repository
            .list_presencas()?
            .into_iter()
            .filter(|p| ativos.contains(&p.aluno_id))
            .collect();
        Ok(frequencia(&presencas))
    }

    /// Performance rows for every active student, in stored order.
    pub fn desempenho_alunos(&self) -> Result<Vec<DesempenhoAluno>> {
        let alunos = self.aluno_repository.list_alunos()?;
        let presencas = self.presenca_repository.list_presencas()?;
        let pagamentos = self.pagamento_repository.list_pagamentos()?;

        let mut rows = Vec::new();
        for aluno in alunos
            .into_iter()
            .filter(|a| a.status == AlunoStatus::Ativo)
        {
            let do_aluno: Vec<Presenca> = presencas
                .iter()
                .filter(|p| p.aluno_id == aluno.id)
                .cloned()
                .collect();
            let notas: Vec<f64> = do_aluno.iter().filter_map(|p| p.nota).collect();
            let media_notas = if notas.is_empty() {
                None
            } else {
                Some(notas.iter().sum::<f64>() / notas.len() as f64)
            };
            let com_debito = pagamentos
                .iter()
                .any(|p| p.aluno_id == aluno.id && p.is_open());

            rows.push(DesempenhoAluno {
                frequencia: frequencia(&do_aluno),
                media_notas,
                com_debito,
                aluno,
            });
        }
        Ok(rows)
    }

    /// Financial-situation rows for every active student, in stored order.
    pub fn situacao_financeira(&self) -> Result<Vec<SituacaoFinanceira>> {
        let alunos = self.aluno_repository.list_alunos()?;
        let pagamentos = self.pagamento_repository.list_pagamentos()?;

        Ok(alunos
            .into_iter()
            .filter(|a| a.status == AlunoStatus::Ativo)
            .map(|aluno| {
                let pendencias = pagamentos
                    .iter()
                    .filter(|p| p.aluno_id == aluno.id && p.is_open())
                    .map(|p| p.valor)
                    .sum();
                SituacaoFinanceira {
                    mensalidade: aluno.valor,
                    pendencias,
                    aluno,
                }
            })
            .collect())
    }
}

/// Share of presente outcomes over all recorded outcomes, rounded to whole
/// percent. Zero when nothing was recorded.
fn frequencia(presencas: &[Presenca]) -> u32 {
    if presencas.is_empty() {
        return 0;
    }
    let presentes = presencas
        .iter()
        .filter(|p| p.status == PresencaStatus::Presente)
        .count();
    ((presentes as f64 / presencas.len() as f64) * 100.0).round() as u32
}
