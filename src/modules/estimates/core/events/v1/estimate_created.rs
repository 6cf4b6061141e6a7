use crate::modules::estimates::core::line_items::LineItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EstimateCreatedV1 {
    pub estimate_id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub items: Vec<LineItem>,
    pub amount: Decimal,
    pub valid_until: i64,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub created_at: i64,
    pub created_by: String,
}
