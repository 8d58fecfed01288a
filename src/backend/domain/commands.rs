//! Domain-level command and query types.
//!
//! These structs are the inputs and outputs of the services in this layer.
//! The presentation layer is responsible for turning raw form input into
//! these typed values before calling in.

pub mod alunos {
    use crate::backend::domain::models::aluno::{Aluno, AlunoStatus, Curso};
    use crate::backend::domain::models::pagamento::Pagamento;
    use chrono::NaiveDate;

    /// Input for enrolling a new student.
    #[derive(Debug, Clone)]
    pub struct CreateAlunoCommand {
        pub nome: String,
        pub email: Option<String>,
        pub telefone: Option<String>,
        pub curso: Curso,
        pub valor: f64,
        pub dia_vencimento: u32,
        pub data_inicio: NaiveDate,
        pub status: AlunoStatus,
    }

    /// Input for editing an existing student. The edit form always submits
    /// every field, so this is a full replacement keyed by id.
    #[derive(Debug, Clone)]
    pub struct UpdateAlunoCommand {
        pub aluno_id: i64,
        pub nome: String,
        pub email: Option<String>,
        pub telefone: Option<String>,
        pub curso: Curso,
        pub valor: f64,
        pub dia_vencimento: u32,
        pub data_inicio: NaiveDate,
        pub status: AlunoStatus,
    }

    /// Filters for the student list view. All criteria are conjunctive.
    #[derive(Debug, Clone, Default)]
    pub struct AlunoListFilter {
        /// Case-insensitive substring match on the name.
        pub search: Option<String>,
        pub status: Option<AlunoStatus>,
        pub curso: Option<Curso>,
    }

    /// Result of enrolling a student: the stored record plus the monthly
    /// charge that enrollment generated.
    #[derive(Debug, Clone)]
    pub struct CreateAlunoResult {
        pub aluno: Aluno,
        pub mensalidade: Pagamento,
    }

    #[derive(Debug, Clone)]
    pub struct UpdateAlunoResult {
        pub aluno: Aluno,
    }
}

pub mod modulos {
    use crate::backend::domain::models::modulo::Nivel;
    use chrono::NaiveDate;

    /// Input for creating a course module. Modules start active.
    #[derive(Debug, Clone)]
    pub struct CreateModuloCommand {
        pub nome: String,
        pub descricao: String,
        pub nivel: Nivel,
        pub data_inicio: NaiveDate,
    }

    /// Input for creating a lesson under a module.
    #[derive(Debug, Clone)]
    pub struct CreateAulaCommand {
        pub modulo_id: i64,
        pub titulo: String,
        pub descricao: String,
        pub data_aula: NaiveDate,
        pub duracao: u32,
    }
}

pub mod presencas {
    use crate::backend::domain::models::pagamento::Pagamento;
    use crate::backend::domain::models::presenca::{Justificativa, Presenca, PresencaStatus};

    /// Input for recording one attendance outcome. Replaces any previous
    /// record for the same (aula, aluno) pair.
    #[derive(Debug, Clone)]
    pub struct RecordPresencaCommand {
        pub aula_id: i64,
        pub aluno_id: i64,
        pub status: PresencaStatus,
        pub justificativa: Justificativa,
        pub nota: Option<f64>,
        pub observacao: String,
        pub quer_repor: bool,
    }

    /// Result of recording attendance. `debito` is the makeup charge, present
    /// only when the falta-sem-justificativa rule fired.
    #[derive(Debug, Clone)]
    pub struct RecordPresencaResult {
        pub presenca: Presenca,
        pub debito: Option<Pagamento>,
    }
}

pub mod pagamentos {
    use crate::backend::domain::models::modulo::Nivel;
    use crate::backend::domain::models::pagamento::PagamentoStatus;
    use chrono::NaiveDate;

    /// Input for the payment-update modal: only status and paid date change.
    #[derive(Debug, Clone)]
    pub struct UpdatePagamentoCommand {
        pub pagamento_id: i64,
        pub status: PagamentoStatus,
        pub data_pagamento: Option<NaiveDate>,
    }

    /// Filters for the financial view. All criteria are conjunctive.
    #[derive(Debug, Clone, Default)]
    pub struct PagamentoListFilter {
        pub status: Option<PagamentoStatus>,
        /// Due month as a `YYYY-MM` prefix of the due date.
        pub mes: Option<String>,
        /// Module level, matched against the owning student's track. Payments
        /// of deleted students never match a level filter.
        pub nivel: Option<Nivel>,
    }
}

pub mod avaliacoes {
    use chrono::NaiveDate;

    /// Input for storing a written evaluation.
    #[derive(Debug, Clone)]
    pub struct CreateAvaliacaoCommand {
        pub aluno_id: i64,
        pub descricao: String,
        pub nota: f64,
        pub data: NaiveDate,
    }
}
