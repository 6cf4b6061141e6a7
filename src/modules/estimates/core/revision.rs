use crate::modules::estimates::core::decision::DecideError;
use crate::modules::estimates::core::line_items::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the items and amount an estimate carried before a revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    pub version: u32,
    pub amount: Decimal,
    pub items: Vec<LineItem>,
    pub notes: Option<String>,
    pub created_at: i64,
}

/// Builds the next entry of a revision ledger. Versions are 1-based and
/// contiguous: the new version is always `ledger.len() + 1`.
pub fn next_revision(
    ledger: &[Revision],
    replaced_amount: Decimal,
    replaced_items: Vec<LineItem>,
    replaced_notes: Option<String>,
    created_at: i64,
) -> Result<Revision, DecideError> {
    Ok(Revision {
        version: next_version(ledger.len()).ok_or(DecideError::RevisionLimitReached)?,
        amount: replaced_amount,
        items: replaced_items,
        notes: replaced_notes,
        created_at,
    })
}

fn next_version(ledger_len: usize) -> Option<u32> {
    u32::try_from(ledger_len).ok()?.checked_add(1)
}
