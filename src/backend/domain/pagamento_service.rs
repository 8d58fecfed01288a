//! Payment lifecycle rules: the five-day overdue window, the monthly tuition
//! charge generated at enrollment, the makeup-lesson debit and the orphan
//! purge.

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use log::{info, warn};
use std::collections::HashSet;
use std::sync::Arc;

use crate::backend::domain::commands::pagamentos::{PagamentoListFilter, UpdatePagamentoCommand};
use crate::backend::domain::models::aluno::Aluno;
use crate::backend::domain::models::next_id;
use crate::backend::domain::models::pagamento::{Pagamento, PagamentoStatus, PagamentoTipo};
use crate::backend::storage::json::{AlunoRepository, JsonConnection, PagamentoRepository};
use crate::backend::storage::traits::{AlunoStorage, PagamentoStorage};

/// Days a pendente payment may sit past its due date before it ages to
/// atrasado.
pub const PRAZO_TOLERANCIA_DIAS: i64 = 5;

/// Fixed charge for a makeup lesson after an unjustified absence, in BRL.
pub const VALOR_AULA_REPOSTA: f64 = 35.0;

const DESCRICAO_AULA_REPOSTA: &str = "Aula Reposta - Falta sem Justificativa";

/// Service owning every mutation of the `pagamentos` collection.
#[derive(Clone)]
pub struct PagamentoService {
    pagamento_repository: PagamentoRepository,
    aluno_repository: AlunoRepository,
}

impl PagamentoService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            pagamento_repository: PagamentoRepository::new((*connection).clone()),
            aluno_repository: AlunoRepository::new((*connection).clone()),
        }
    }

    /// Age pendente payments past the five-day window to atrasado. Returns
    /// the number of payments that changed status.
    ///
    /// Safe to call on every view transition: when nothing changes the
    /// collection is not rewritten. pago and atrasado are never touched, and
    /// atrasado is never reverted by a call with an earlier `today`.
    pub fn refresh_overdue_status(&self, today: NaiveDate) -> Result<usize> {
        let mut pagamentos = self.pagamento_repository.list_pagamentos()?;
        let mut changed = 0;

        for pagamento in pagamentos.iter_mut() {
            if pagamento.status == PagamentoStatus::Pendente
                && pagamento.days_past_due(today) > PRAZO_TOLERANCIA_DIAS
            {
                pagamento.status = PagamentoStatus::Atrasado;
                changed += 1;
            }
        }

        if changed > 0 {
            self.pagamento_repository.save_pagamentos(&pagamentos)?;
            info!("Marked {} pagamento(s) as atrasado", changed);
        }

        Ok(changed)
    }

    /// Generate and store the first monthly charge for a newly enrolled
    /// student. Called exactly once, at enrollment; editing a student never
    /// generates another charge.
    ///
    /// The due date is the student's billing day in the reference month,
    /// rolled to the next month when that day has already passed. A billing
    /// day past the end of the resolved month clamps to its last day.
    pub fn generate_monthly_charge(&self, aluno: &Aluno, reference: NaiveDate) -> Result<Pagamento> {
        let data_vencimento = resolve_due_date(aluno.dia_vencimento, reference);

        let pagamento = Pagamento {
            id: next_id(),
            aluno_id: aluno.id,
            descricao: format!(
                "Mensalidade - {}/{}",
                data_vencimento.month(),
                data_vencimento.year()
            ),
            valor: aluno.valor,
            data_vencimento,
            data_pagamento: None,
            status: PagamentoStatus::Pendente,
            tipo: PagamentoTipo::Mensalidade,
        };

        self.pagamento_repository.store_pagamento(&pagamento)?;
        info!(
            "Generated mensalidade for aluno {} due {}",
            aluno.id, pagamento.data_vencimento
        );
        Ok(pagamento)
    }

    /// Create the fixed R$ 35,00 debit for an unjustified absence with a
    /// requested makeup, due today.
    ///
    /// There is deliberately no deduplication against earlier debits for the
    /// same lesson: every triggering recording charges again.
    pub fn create_makeup_debit(&self, aluno_id: i64, today: NaiveDate) -> Result<Pagamento> {
        let aluno = self
            .aluno_repository
            .get_aluno(aluno_id)?
            .ok_or_else(|| anyhow::anyhow!("Aluno not found: {}", aluno_id))?;

        let pagamento = Pagamento {
            id: next_id(),
            aluno_id: aluno.id,
            descricao: DESCRICAO_AULA_REPOSTA.to_string(),
            valor: VALOR_AULA_REPOSTA,
            data_vencimento: today,
            data_pagamento: None,
            status: PagamentoStatus::Pendente,
            tipo: PagamentoTipo::Reposta,
        };

        self.pagamento_repository.store_pagamento(&pagamento)?;
        info!(
            "Charged aula reposta (R$ {:.2}) to aluno {}",
            VALOR_AULA_REPOSTA, aluno.id
        );
        Ok(pagamento)
    }

    /// Update a payment from the financial modal: only status and paid date
    /// change.
    pub fn update_pagamento(&self, command: UpdatePagamentoCommand) -> Result<Pagamento> {
        let mut pagamento = self
            .pagamento_repository
            .get_pagamento(command.pagamento_id)?
            .ok_or_else(|| anyhow::anyhow!("Pagamento not found: {}", command.pagamento_id))?;

        pagamento.status = command.status;
        pagamento.data_pagamento = command.data_pagamento;
        self.pagamento_repository.update_pagamento(&pagamento)?;

        info!("Updated pagamento {}: status {:?}", pagamento.id, pagamento.status);
        Ok(pagamento)
    }

    /// Drop payments whose student no longer exists. Destructive and
    /// separately invoked; deleting a student never triggers this. Returns
    /// the number of payments removed.
    pub fn purge_orphaned_pagamentos(&self) -> Result<usize> {
        let aluno_ids: HashSet<i64> = self
            .aluno_repository
            .list_alunos()?
            .into_iter()
            .map(|a| a.id)
            .collect();

        let pagamentos = self.pagamento_repository.list_pagamentos()?;
        let before = pagamentos.len();
        let kept: Vec<Pagamento> = pagamentos
            .into_iter()
            .filter(|p| aluno_ids.contains(&p.aluno_id))
            .collect();
        let removed = before - kept.len();

        if removed > 0 {
            self.pagamento_repository.save_pagamentos(&kept)?;
            warn!("Purged {} orphaned pagamento(s)", removed);
        }

        Ok(removed)
    }

    pub fn get_pagamento(&self, pagamento_id: i64) -> Result<Option<Pagamento>> {
        self.pagamento_repository.get_pagamento(pagamento_id)
    }

    /// Payments matching the financial-view filters, in stored order.
    pub fn list_pagamentos(&self, filter: &PagamentoListFilter) -> Result<Vec<Pagamento>> {
        let mut pagamentos = self.pagamento_repository.list_pagamentos()?;

        if let Some(status) = filter.status {
            pagamentos.retain(|p| p.status == status);
        }
        if let Some(mes) = &filter.mes {
            pagamentos.retain(|p| p.data_vencimento.to_string().starts_with(mes.as_str()));
        }
        if let Some(nivel) = &filter.nivel {
            let alunos = self.aluno_repository.list_alunos()?;
            pagamentos.retain(|p| {
                alunos
                    .iter()
                    .find(|a| a.id == p.aluno_id)
                    .map(|a| nivel.matches_curso(&a.curso))
                    .unwrap_or(false)
            });
        }

        Ok(pagamentos)
    }

    /// Distinct due months (`YYYY-MM`), most recent first. Feeds the month
    /// filter dropdowns.
    pub fn due_months(&self) -> Result<Vec<String>> {
        let pagamentos = self.pagamento_repository.list_pagamentos()?;
        let mut meses: Vec<String> = pagamentos
            .iter()
            .map(|p| p.data_vencimento.format("%Y-%m").to_string())
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        meses.sort();
        meses.reverse();
        Ok(meses)
    }
}

/// Due date for a billing day relative to a reference date: same month when
/// the day has not passed yet, otherwise the next month. Days past the end
/// of the target month clamp to its last day.
pub fn resolve_due_date(dia_vencimento: u32, reference: NaiveDate) -> NaiveDate {
    let candidate = clamped_date(reference.year(), reference.month(), dia_vencimento);
    if candidate >= reference {
        return candidate;
    }
    let (year, month) = if reference.month() == 12 {
        (reference.year() + 1, 1)
    } else {
        (reference.year(), reference.month() + 1)
    };
    clamped_date(year, month, dia_vencimento)
}

fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.min(last_day_of_month(year, month)).max(1);
    // month comes from a NaiveDate and the day is clamped, so this is valid
    NaiveDate::from_ymd_opt(year, month, clamped).unwrap()
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
