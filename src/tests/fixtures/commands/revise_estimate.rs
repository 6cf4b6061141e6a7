// Shared test fixture for the ReviseEstimate command.

use crate::modules::estimates::use_cases::revise_estimate::command::ReviseEstimate;
use crate::tests::fixtures::commands::create_estimate::line_items;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub struct ReviseEstimateBuilder {
    inner: ReviseEstimate,
}

impl Default for ReviseEstimateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ReviseEstimateBuilder {
    pub fn new() -> Self {
        Self {
            inner: ReviseEstimate {
                estimate_id: "est-fixed-0001".to_string(),
                project_id: "project-fixed-0001".to_string(),
                items: line_items(vec![("Labor", 3, dec!(100))]),
                notes: None,
                revised_at: 1_700_000_200_000,
                revised_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn estimate_id(mut self, v: impl Into<String>) -> Self {
        self.inner.estimate_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn items(mut self, v: Vec<(&str, i64, Decimal)>) -> Self {
        self.inner.items = line_items(v);
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn revised_at(mut self, v: i64) -> Self {
        self.inner.revised_at = v;
        self
    }

    pub fn revised_by(mut self, v: impl Into<String>) -> Self {
        self.inner.revised_by = v.into();
        self
    }

    pub fn build(self) -> ReviseEstimate {
        self.inner
    }
}
