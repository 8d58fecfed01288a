//! # Escola Tracker
//!
//! Backend library for a small language-course school: students (alunos),
//! course modules and lessons, attendance records and tuition payments,
//! persisted as JSON collections in a local data directory.
//!
//! The crate exposes domain services to a presentation layer (desktop shell,
//! CLI, whatever) which is responsible for input validation and for calling
//! `PagamentoService::refresh_overdue_status` on every view transition.

pub mod backend;
