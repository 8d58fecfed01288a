//! Attendance recording and the falta-sem-justificativa billing rule.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::info;
use std::sync::Arc;

use crate::backend::domain::commands::presencas::{RecordPresencaCommand, RecordPresencaResult};
use crate::backend::domain::models::next_id;
use crate::backend::domain::models::presenca::{Presenca, PresencaStatus};
use crate::backend::domain::pagamento_service::PagamentoService;
use crate::backend::storage::json::{
    AlunoRepository, AulaRepository, JsonConnection, PresencaRepository,
};
use crate::backend::storage::traits::{AlunoStorage, AulaStorage, PresencaStorage};

#[derive(Clone)]
pub struct PresencaService {
    presenca_repository: PresencaRepository,
    aluno_repository: AlunoRepository,
    aula_repository: AulaRepository,
    pagamento_service: PagamentoService,
}

impl PresencaService {
    pub fn new(connection: Arc<JsonConnection>) -> Self {
        Self {
            presenca_repository: PresencaRepository::new((*connection).clone()),
            aluno_repository: AlunoRepository::new((*connection).clone()),
            aula_repository: AulaRepository::new((*connection).clone()),
            pagamento_service: PagamentoService::new(connection),
        }
    }

    /// Record one attendance outcome, replacing any previous record for the
    /// same (aula, aluno) pair.
    ///
    /// When the outcome is an unjustified falta and the student asked to
    /// make the lesson up, a fixed R$ 35,00 debit due today is charged.
    /// Re-recording with the same triggering conditions charges again: there
    /// is no deduplication against earlier debits for the pair, mirroring
    /// the behavior the school already bills by.
    ///
    /// The attendance record is flushed before the debit, so an interrupted
    /// process can never leave a debit without its record.
    pub fn record_presenca(
        &self,
        command: RecordPresencaCommand,
        now: DateTime<Utc>,
    ) -> Result<RecordPresencaResult> {
        self.aula_repository
            .get_aula(command.aula_id)?
            .ok_or_else(|| anyhow::anyhow!("Aula not found: {}", command.aula_id))?;
        self.aluno_repository
            .get_aluno(command.aluno_id)?
            .ok_or_else(|| anyhow::anyhow!("Aluno not found: {}", command.aluno_id))?;

        let presenca = Presenca {
            id: next_id(),
            aula_id: command.aula_id,
            aluno_id: command.aluno_id,
            status: command.status,
            justificativa: command.justificativa,
            nota: command.nota,
            observacao: command.observacao,
            quer_repor: command.quer_repor,
            data_registro: now,
        };
        self.presenca_repository.upsert_presenca(&presenca)?;
        info!(
            "Recorded {:?} for aluno {} in aula {}",
            presenca.status, presenca.aluno_id, presenca.aula_id
        );

        let debito = if presenca.status == PresencaStatus::Falta
            && presenca.justificativa.is_unjustified()
            && presenca.quer_repor
        {
            Some(
                self.pagamento_service
                    .create_makeup_debit(presenca.aluno_id, now.date_naive())?,
            )
        } else {
            None
        };

        Ok(RecordPresencaResult { presenca, debito })
    }

    pub fn get_presenca(&self, aula_id: i64, aluno_id: i64) -> Result<Option<Presenca>> {
        self.presenca_repository.get_presenca(aula_id, aluno_id)
    }

    pub fn list_presencas_for_aula(&self, aula_id: i64) -> Result<Vec<Presenca>> {
        self.presenca_repository.list_presencas_for_aula(aula_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::pagamento::{PagamentoStatus, PagamentoTipo};
    use crate::backend::domain::models::presenca::Justificativa;
    use crate::backend::storage::json::test_utils::{
        sample_aluno, sample_aula, TestEnvironment,
    };
    use crate::backend::storage::json::PagamentoRepository;
    use crate::backend::storage::traits::PagamentoStorage;
    use chrono::TimeZone;

    fn setup() -> Result<(PresencaService, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        AlunoRepository::new(env.connection.clone()).store_aluno(&sample_aluno(1, "Maria Silva"))?;
        AulaRepository::new(env.connection.clone()).store_aula(&sample_aula(3, 7))?;
        let service = PresencaService::new(Arc::new(env.connection.clone()));
        Ok((service, env))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 2, 19, 30, 0).unwrap()
    }

    fn falta_command(quer_repor: bool, justificativa: Justificativa) -> RecordPresencaCommand {
        RecordPresencaCommand {
            aula_id: 3,
            aluno_id: 1,
            status: PresencaStatus::Falta,
            justificativa,
            nota: None,
            observacao: String::new(),
            quer_repor,
        }
    }

    fn pagamentos(env: &TestEnvironment) -> Vec<crate::backend::domain::models::pagamento::Pagamento> {
        PagamentoRepository::new(env.connection.clone())
            .list_pagamentos()
            .unwrap()
    }

    #[test]
    fn unjustified_falta_with_makeup_charges_once() -> Result<()> {
        let (service, env) = setup()?;

        let result = service.record_presenca(falta_command(true, Justificativa::Nenhuma), now())?;
        let debito = result.debito.expect("debit should be charged");
        assert_eq!(debito.valor, 35.0);
        assert_eq!(debito.tipo, PagamentoTipo::Reposta);
        assert_eq!(debito.status, PagamentoStatus::Pendente);
        assert_eq!(debito.data_vencimento, now().date_naive());
        assert_eq!(debito.descricao, "Aula Reposta - Falta sem Justificativa");
        assert_eq!(pagamentos(&env).len(), 1);
        Ok(())
    }

    #[test]
    fn no_debit_without_the_makeup_flag() -> Result<()> {
        let (service, env) = setup()?;
        let result = service.record_presenca(falta_command(false, Justificativa::Nenhuma), now())?;
        assert!(result.debito.is_none());
        assert!(pagamentos(&env).is_empty());
        Ok(())
    }

    #[test]
    fn no_debit_for_a_justified_falta_regardless_of_flag() -> Result<()> {
        let (service, env) = setup()?;
        let justificada = Justificativa::Outra("atestado médico".to_string());
        let result = service.record_presenca(falta_command(true, justificada), now())?;
        assert!(result.debito.is_none());
        assert!(pagamentos(&env).is_empty());
        Ok(())
    }

    #[test]
    fn no_debit_for_presente() -> Result<()> {
        let (service, env) = setup()?;
        let mut command = falta_command(true, Justificativa::Nenhuma);
        command.status = PresencaStatus::Presente;
        let result = service.record_presenca(command, now())?;
        assert!(result.debito.is_none());
        assert!(pagamentos(&env).is_empty());
        Ok(())
    }

    /// Known duplicate-charge behavior: re-recording the same falta charges a
    /// second, independent R$ 35,00 debit. The original system bills this
    /// way, so it is preserved rather than deduplicated.
    #[test]
    fn rerecording_the_same_falta_charges_again() -> Result<()> {
        let (service, env) = setup()?;

        service.record_presenca(falta_command(true, Justificativa::Nenhuma), now())?;
        service.record_presenca(falta_command(true, Justificativa::Nenhuma), now())?;

        let cobrados = pagamentos(&env);
        assert_eq!(cobrados.len(), 2);
        assert_ne!(cobrados[0].id, cobrados[1].id);
        // but the attendance record itself was replaced, not duplicated
        assert_eq!(service.list_presencas_for_aula(3)?.len(), 1);
        Ok(())
    }

    #[test]
    fn rerecording_replaces_with_the_second_calls_values() -> Result<()> {
        let (service, _env) = setup()?;

        service.record_presenca(falta_command(false, Justificativa::Nenhuma), now())?;
        let mut second = falta_command(false, Justificativa::Nenhuma);
        second.status = PresencaStatus::Presente;
        second.nota = Some(9.0);
        second.observacao = "Recuperou bem".to_string();
        let later = Utc.with_ymd_and_hms(2024, 4, 3, 10, 0, 0).unwrap();
        service.record_presenca(second, later)?;

        let presenca = service.get_presenca(3, 1)?.unwrap();
        assert_eq!(presenca.status, PresencaStatus::Presente);
        assert_eq!(presenca.nota, Some(9.0));
        assert_eq!(presenca.observacao, "Recuperou bem");
        assert_eq!(presenca.data_registro, later);
        Ok(())
    }

    #[test]
    fn unknown_references_fail_fast() -> Result<()> {
        let (service, _env) = setup()?;

        let mut command = falta_command(true, Justificativa::Nenhuma);
        command.aula_id = 99;
        assert!(service.record_presenca(command, now()).is_err());

        let mut command = falta_command(true, Justificativa::Nenhuma);
        command.aluno_id = 99;
        assert!(service.record_presenca(command, now()).is_err());
        Ok(())
    }
}
