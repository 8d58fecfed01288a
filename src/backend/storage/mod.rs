//! # Storage Module
//!
//! Storage traits plus the JSON file-per-collection implementation used by
//! the domain services.

pub mod json;
pub mod traits;

pub use traits::{
    AlunoStorage, AulaStorage, AvaliacaoStorage, ModuloStorage, PagamentoStorage, PresencaStorage,
};
