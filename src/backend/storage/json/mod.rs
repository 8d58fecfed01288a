//! # JSON Storage Module
//!
//! File-based storage: one JSON file per collection under a single data
//! directory, named after the original store keys (`alunos.json`,
//! `modulos.json`, `aulas.json`, `presencas.json`, `pagamentos.json`,
//! `avaliacoes.json`).
//!
//! Each file holds a JSON array of records. A missing file reads as an empty
//! collection; every write replaces the whole file atomically via a temp
//! file and rename, so a crash can never leave a half-written collection.

pub mod aluno_repository;
pub mod aula_repository;
pub mod avaliacao_repository;
pub mod connection;
pub mod modulo_repository;
pub mod pagamento_repository;
pub mod presenca_repository;

#[cfg(test)]
pub mod test_utils;

pub use aluno_repository::AlunoRepository;
pub use aula_repository::AulaRepository;
pub use avaliacao_repository::AvaliacaoRepository;
pub use connection::JsonConnection;
pub use modulo_repository::ModuloRepository;
pub use pagamento_repository::PagamentoRepository;
pub use presenca_repository::PresencaRepository;
