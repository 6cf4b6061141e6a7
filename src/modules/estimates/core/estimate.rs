use crate::modules::estimates::core::line_items::LineItem;
use crate::modules::estimates::core::revision::Revision;
use crate::modules::estimates::core::status::EstimateStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

/// The estimate aggregate as folded from its events. This is also the JSON
/// shape returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub estimate_id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub amount: Decimal,
    pub items: Vec<LineItem>,
    pub status: EstimateStatus,
    pub valid_until: i64,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub revisions: Vec<Revision>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl Estimate {
    pub fn belongs_to(&self, project_id: &str) -> bool {
        self.project_id == project_id
    }
}

pub fn stream_id_for(estimate_id: &str) -> String {
    format!("Estimate-{estimate_id}")
}

/// `valid_until` default: `days` after `created_at`, both in epoch milliseconds.
/// `None` when the result does not fit the timestamp range.
pub fn default_valid_until(created_at: i64, days: i64) -> Option<i64> {
    chrono::TimeDelta::try_days(days)
        .and_then(|window| created_at.checked_add(window.num_milliseconds()))
}
