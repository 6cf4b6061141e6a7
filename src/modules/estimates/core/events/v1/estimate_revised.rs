use crate::modules::estimates::core::line_items::LineItem;
use crate::modules::estimates::core::revision::Revision;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `revision` holds the state being replaced; `items`, `amount` and `notes`
/// are the new current values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstimateRevisedV1 {
    pub estimate_id: String,
    pub revision: Revision,
    pub items: Vec<LineItem>,
    pub amount: Decimal,
    pub notes: Option<String>,
    pub revised_at: i64,
    pub revised_by: String,
}
