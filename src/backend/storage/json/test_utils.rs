//! Test utilities for the JSON storage layer.
//!
//! `TestEnvironment` owns a temp directory whose lifetime is tied to the
//! test, so data is cleaned up even when a test panics.

use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::backend::domain::models::aluno::{Aluno, AlunoStatus, Curso};
use crate::backend::domain::models::aula::Aula;
use crate::backend::domain::models::modulo::{Modulo, Nivel};
use crate::backend::domain::models::pagamento::{Pagamento, PagamentoStatus, PagamentoTipo};
use crate::backend::domain::models::presenca::{Justificativa, Presenca, PresencaStatus};

pub struct TestEnvironment {
    pub connection: JsonConnection,
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

pub fn sample_aluno(id: i64, nome: &str) -> Aluno {
    Aluno {
        id,
        nome: nome.to_string(),
        email: None,
        telefone: None,
        curso: Curso::InglesBasico,
        valor: 250.0,
        dia_vencimento: 15,
        data_inicio: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        status: AlunoStatus::Ativo,
    }
}

pub fn sample_modulo(id: i64, nivel: Nivel) -> Modulo {
    Modulo {
        id,
        nome: format!("Turma {}", id),
        descricao: String::new(),
        nivel,
        data_inicio: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        ativo: true,
    }
}

pub fn sample_aula(id: i64, modulo_id: i64) -> Aula {
    Aula {
        id,
        modulo_id,
        titulo: format!("Aula {}", id),
        descricao: String::new(),
        data_aula: NaiveDate::from_ymd_opt(2024, 4, 2).unwrap(),
        duracao: 60,
    }
}

pub fn sample_presenca(id: i64, aula_id: i64, aluno_id: i64, status: PresencaStatus) -> Presenca {
    Presenca {
        id,
        aula_id,
        aluno_id,
        status,
        justificativa: Justificativa::Nenhuma,
        nota: None,
        observacao: String::new(),
        quer_repor: false,
        data_registro: Utc.with_ymd_and_hms(2024, 4, 2, 19, 0, 0).unwrap(),
    }
}

pub fn sample_pagamento(id: i64, aluno_id: i64, data_vencimento: NaiveDate) -> Pagamento {
    Pagamento {
        id,
        aluno_id,
        descricao: "Mensalidade - 1/2024".to_string(),
        valor: 250.0,
        data_vencimento,
        data_pagamento: None,
        status: PagamentoStatus::Pendente,
        tipo: PagamentoTipo::Mensalidade,
    }
}
