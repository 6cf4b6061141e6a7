// Shared test fixture for the CreateEstimate command. Defaults come from
// json/create_estimate.json.

use crate::modules::estimates::core::line_items::LineItemInput;
use crate::modules::estimates::use_cases::create_estimate::command::CreateEstimate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct LineItemDto {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEstimateDto {
    pub estimate_id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub amount: Decimal,
    pub items: Vec<LineItemDto>,
}

pub fn line_items(items: Vec<(&str, i64, Decimal)>) -> Vec<LineItemInput> {
    items
        .into_iter()
        .map(|(description, quantity, unit_price)| LineItemInput {
            description: description.to_string(),
            quantity,
            unit_price,
        })
        .collect()
}

pub struct CreateEstimateBuilder {
    inner: CreateEstimate,
}

impl Default for CreateEstimateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreateEstimateBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/create_estimate.json").unwrap();
        let dto: CreateEstimateDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: CreateEstimate {
                estimate_id: dto.estimate_id,
                project_id: dto.project_id,
                title: dto.title,
                description: dto.description,
                amount: dto.amount,
                items: Some(
                    dto.items
                        .into_iter()
                        .map(|item| LineItemInput {
                            description: item.description,
                            quantity: item.quantity,
                            unit_price: item.unit_price,
                        })
                        .collect(),
                ),
                notes: None,
                terms: None,
                valid_until: None,
                created_at: 1_700_000_000_000,
                created_by: "user-fixed-0001".to_string(),
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

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn amount(mut self, v: Decimal) -> Self {
        self.inner.amount = v;
        self
    }

    pub fn items(mut self, v: Vec<(&str, i64, Decimal)>) -> Self {
        self.inner.items = Some(line_items(v));
        self
    }

    pub fn without_items(mut self) -> Self {
        self.inner.items = None;
        self
    }

    pub fn notes(mut self, v: impl Into<String>) -> Self {
        self.inner.notes = Some(v.into());
        self
    }

    pub fn terms(mut self, v: impl Into<String>) -> Self {
        self.inner.terms = Some(v.into());
        self
    }

    pub fn valid_until(mut self, v: i64) -> Self {
        self.inner.valid_until = Some(v);
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn created_by(mut self, v: impl Into<String>) -> Self {
        self.inner.created_by = v.into();
        self
    }

    pub fn build(self) -> CreateEstimate {
        self.inner
    }
}

#[cfg(test)]
mod create_estimate_builder_tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreateEstimateBuilder::default().build();
        assert_eq!(built.estimate_id, "est-fixed-0001");
        assert_eq!(built.project_id, "project-fixed-0001");
        assert_eq!(built.amount, dec!(200));
        assert_eq!(built.items, Some(line_items(vec![("Labor", 2, dec!(100))])));
        assert_eq!(built.created_at, 1_700_000_000_000);
    }

    #[rstest]
    fn setters_override_the_fields() {
        let custom = CreateEstimateBuilder::new()
            .estimate_id("e-9")
            .project_id("p-9")
            .title("t")
            .description("d")
            .amount(dec!(5))
            .without_items()
            .notes("n")
            .terms("Net 30")
            .valid_until(9)
            .created_at(1)
            .created_by("tester")
            .build();

        assert_eq!(custom.estimate_id, "e-9");
        assert_eq!(custom.project_id, "p-9");
        assert_eq!(custom.title, "t");
        assert_eq!(custom.description, "d");
        assert_eq!(custom.amount, dec!(5));
        assert_eq!(custom.items, None);
        assert_eq!(custom.notes.as_deref(), Some("n"));
        assert_eq!(custom.terms.as_deref(), Some("Net 30"));
        assert_eq!(custom.valid_until, Some(9));
        assert_eq!(custom.created_at, 1);
        assert_eq!(custom.created_by, "tester");
    }
}
