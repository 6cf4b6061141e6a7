use crate::modules::estimates::core::line_items::LineItemInput;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEstimate {
    pub estimate_id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub amount: Decimal,
    pub items: Option<Vec<LineItemInput>>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub valid_until: Option<i64>,
    pub created_at: i64,
    pub created_by: String,
}
