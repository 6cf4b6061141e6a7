use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const FALLBACK_LINE_DESCRIPTION: &str = "Project Total";

/// A line as submitted by a client. Any `total` the client computed is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemInput {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub items: Vec<LineItem>,
    pub amount: Decimal,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LineItemError {
    #[error("at least one line item is required")]
    NoItems,

    #[error("line item {index}: description must not be empty")]
    EmptyDescription { index: usize },

    #[error("line item {index}: quantity must be at least 1, got {quantity}")]
    QuantityBelowOne { index: usize, quantity: i64 },

    #[error("line item {index}: unit price must not be negative, got {unit_price}")]
    NegativeUnitPrice { index: usize, unit_price: Decimal },

    #[error("line item {index}: total is out of range")]
    Overflow { index: usize },
}

/// Prices every line and sums the totals. Order is preserved.
pub fn calculate(inputs: Vec<LineItemInput>) -> Result<Calculation, LineItemError> {
    if inputs.is_empty() {
        return Err(LineItemError::NoItems);
    }

    let mut amount = Decimal::ZERO;
    let mut items = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.into_iter().enumerate() {
        if input.description.trim().is_empty() {
            return Err(LineItemError::EmptyDescription { index });
        }
        if input.quantity < 1 {
            return Err(LineItemError::QuantityBelowOne {
                index,
                quantity: input.quantity,
            });
        }
        if input.unit_price < Decimal::ZERO {
            return Err(LineItemError::NegativeUnitPrice {
                index,
                unit_price: input.unit_price,
            });
        }
        let total = Decimal::from(input.quantity)
            .checked_mul(input.unit_price)
            .ok_or(LineItemError::Overflow { index })?;
        amount = amount
            .checked_add(total)
            .ok_or(LineItemError::Overflow { index })?;
        items.push(LineItem {
            description: input.description,
            quantity: input.quantity,
            unit_price: input.unit_price,
            total,
        });
    }

    Ok(Calculation { items, amount })
}

/// The single synthetic line used when an estimate is created without items.
pub fn fallback_items(amount: Decimal) -> Vec<LineItemInput> {
    vec![LineItemInput {
        description: FALLBACK_LINE_DESCRIPTION.to_string(),
        quantity: 1,
        unit_price: amount,
    }]
}
