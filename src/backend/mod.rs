//! # Backend Module
//!
//! Core business logic and storage for the escola tracker.
//!
//! - `domain`: entities, commands and the services that enforce the billing
//!   and attendance rules.
//! - `storage`: storage traits plus the JSON file-per-collection
//!   implementation.

pub mod domain;
pub mod storage;
