//! # Domain Module
//!
//! Business rules for the escola tracker: enrollment and the monthly charge
//! it generates, the five-day overdue window, the attendance-to-billing
//! debit rule, module eligibility and the reporting aggregations.
//!
//! Services are storage-agnostic apart from the JSON connection they are
//! constructed with, and everything is synchronous: a single user drives a
//! single process against a single local store.

pub mod aluno_service;
pub mod commands;
pub mod models;
pub mod modulo_service;
pub mod pagamento_service;
pub mod presenca_service;
pub mod relatorio_service;

pub use aluno_service::AlunoService;
pub use modulo_service::ModuloService;
pub use pagamento_service::PagamentoService;
pub use presenca_service::PresencaService;
pub use relatorio_service::RelatorioService;
