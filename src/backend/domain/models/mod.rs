//! Domain entities for the escola tracker.
//!
//! Field names mirror the persisted JSON contract (camelCase Portuguese), so
//! every struct serializes with `rename_all = "camelCase"` and no per-field
//! renames.

pub mod aluno;
pub mod aula;
pub mod avaliacao;
pub mod modulo;
pub mod pagamento;
pub mod presenca;

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a process-unique entity id derived from the current time in
/// milliseconds. Ids issued in the same millisecond are bumped so they stay
/// strictly increasing within the process; cross-process collisions are an
/// accepted risk for a single-user local store.
pub fn next_id() -> i64 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    LAST_ID
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(millis.max(last + 1))
        })
        .map(|last| millis.max(last + 1))
        .unwrap_or(millis)
}
