//! # Storage Traits
//!
//! Abstractions over the persisted collections so the domain layer does not
//! depend on the concrete file format. Every date travels as a typed value;
//! the wire representation is the repository's concern.
//!
//! All operations are synchronous: the store is local and single-user.

use anyhow::Result;

use crate::backend::domain::models::aluno::Aluno;
use crate::backend::domain::models::aula::Aula;
use crate::backend::domain::models::avaliacao::Avaliacao;
use crate::backend::domain::models::modulo::Modulo;
use crate::backend::domain::models::pagamento::Pagamento;
use crate::backend::domain::models::presenca::Presenca;

/// Storage for the `alunos` collection.
pub trait AlunoStorage: Send + Sync {
    /// Append a new student.
    fn store_aluno(&self, aluno: &Aluno) -> Result<()>;

    /// Retrieve a student by id.
    fn get_aluno(&self, aluno_id: i64) -> Result<Option<Aluno>>;

    /// List all students in insertion order.
    fn list_alunos(&self) -> Result<Vec<Aluno>>;

    /// Replace an existing student record, matched by id.
    fn update_aluno(&self, aluno: &Aluno) -> Result<()>;

    /// Delete a student by id. Returns whether a record was removed.
    /// Never touches the student's payments.
    fn delete_aluno(&self, aluno_id: i64) -> Result<bool>;
}

/// Storage for the `modulos` collection. Modules have no deletion path.
pub trait ModuloStorage: Send + Sync {
    fn store_modulo(&self, modulo: &Modulo) -> Result<()>;
    fn get_modulo(&self, modulo_id: i64) -> Result<Option<Modulo>>;
    fn list_modulos(&self) -> Result<Vec<Modulo>>;
}

/// Storage for the `aulas` collection.
pub trait AulaStorage: Send + Sync {
    fn store_aula(&self, aula: &Aula) -> Result<()>;
    fn get_aula(&self, aula_id: i64) -> Result<Option<Aula>>;
    fn list_aulas(&self) -> Result<Vec<Aula>>;
    /// Lessons of one module, in insertion order.
    fn list_aulas_for_modulo(&self, modulo_id: i64) -> Result<Vec<Aula>>;
}

/// Storage for the `presencas` collection.
pub trait PresencaStorage: Send + Sync {
    /// Insert a record, replacing any existing record for the same
    /// (aula, aluno) pair. This is where the at-most-one-per-pair invariant
    /// lives.
    fn upsert_presenca(&self, presenca: &Presenca) -> Result<()>;

    fn get_presenca(&self, aula_id: i64, aluno_id: i64) -> Result<Option<Presenca>>;
    fn list_presencas(&self) -> Result<Vec<Presenca>>;
    fn list_presencas_for_aula(&self, aula_id: i64) -> Result<Vec<Presenca>>;
    fn list_presencas_for_aluno(&self, aluno_id: i64) -> Result<Vec<Presenca>>;
}

/// Storage for the `pagamentos` collection.
pub trait PagamentoStorage: Send + Sync {
    /// Append a new payment.
    fn store_pagamento(&self, pagamento: &Pagamento) -> Result<()>;

    fn get_pagamento(&self, pagamento_id: i64) -> Result<Option<Pagamento>>;
    fn list_pagamentos(&self) -> Result<Vec<Pagamento>>;

    /// Replace an existing payment record, matched by id.
    fn update_pagamento(&self, pagamento: &Pagamento) -> Result<()>;

    /// Replace the whole collection in one flush. Used by the bulk
    /// operations (overdue aging, orphan purge) so an unchanged collection
    /// never touches disk.
    fn save_pagamentos(&self, pagamentos: &[Pagamento]) -> Result<()>;
}

/// Storage for the `avaliacoes` collection.
pub trait AvaliacaoStorage: Send + Sync {
    fn store_avaliacao(&self, avaliacao: &Avaliacao) -> Result<()>;
    fn list_avaliacoes(&self) -> Result<Vec<Avaliacao>>;
    fn list_avaliacoes_for_aluno(&self, aluno_id: i64) -> Result<Vec<Avaliacao>>;
}
