//! Sequence generator
//!
//! Issues monotonically increasing, zero-padded, prefixed identifiers
//! (shipment numbers). The counter lives in the `sequence_counters` table and
//! is advanced with a single atomic increment-and-read statement, never
//! read-then-write, so concurrent callers can never draw the same number.
//! Running inside the caller's transaction keeps the sequence gap-free: a
//! rolled-back shipment rolls the counter back with it.

use shared::calc::format_sequence;

use crate::error::AppResult;
use crate::services::ledger::PgTx;

/// Draw the next identifier for `prefix`, e.g. "SEV" -> "SEV-00001"
pub async fn next(tx: &mut PgTx<'_>, prefix: &str) -> AppResult<String> {
    let value = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO sequence_counters (prefix, value)
        VALUES ($1, 1)
        ON CONFLICT (prefix) DO UPDATE SET value = sequence_counters.value + 1
        RETURNING value
        "#,
    )
    .bind(prefix)
    .fetch_one(&mut **tx)
    .await?;

    Ok(format_sequence(prefix, value))
}
