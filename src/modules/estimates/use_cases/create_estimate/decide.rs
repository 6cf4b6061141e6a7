use crate::modules::estimates::core::decision::{DecideError, Decision, require_text};
use crate::modules::estimates::core::estimate::default_valid_until;
use crate::modules::estimates::core::events::{
    EstimateEvent, v1::estimate_created::EstimateCreatedV1,
};
use crate::modules::estimates::core::line_items::{
    Calculation, LineItemInput, calculate, fallback_items,
};
use crate::modules::estimates::core::state::EstimateState;
use crate::modules::estimates::use_cases::create_estimate::command::CreateEstimate;
use rust_decimal::Decimal;

pub fn decide_create(
    state: &EstimateState,
    command: CreateEstimate,
    validity_days: i64,
) -> Decision {
    if let EstimateState::Recorded(_) = state {
        return Decision::reject(DecideError::AlreadyExists);
    }
    if let Err(reason) = validate(&command) {
        return Decision::reject(reason);
    }
    let calculation = match price(command.items, command.amount) {
        Ok(calculation) => calculation,
        Err(reason) => return Decision::reject(reason),
    };

    let valid_until = match command.valid_until {
        Some(valid_until) => valid_until,
        None => match default_valid_until(command.created_at, validity_days) {
            Some(valid_until) => valid_until,
            None => {
                return Decision::reject(DecideError::ValidityOutOfRange {
                    days: validity_days,
                });
            }
        },
    };

    Decision::accept(EstimateEvent::EstimateCreatedV1(EstimateCreatedV1 {
        estimate_id: command.estimate_id,
        project_id: command.project_id,
        title: command.title,
        description: command.description,
        items: calculation.items,
        amount: calculation.amount,
        valid_until,
        notes: non_blank(command.notes),
        terms: non_blank(command.terms),
        created_at: command.created_at,
        created_by: command.created_by,
    }))
}

fn validate(command: &CreateEstimate) -> Result<(), DecideError> {
    require_text(&command.project_id, "projectId")?;
    require_text(&command.title, "title")?;
    require_text(&command.description, "description")?;
    Ok(())
}

/// Supplied items always win and the amount is recomputed from them. Without
/// items the caller amount becomes a single synthetic line.
fn price(items: Option<Vec<LineItemInput>>, amount: Decimal) -> Result<Calculation, DecideError> {
    match items {
        Some(items) if !items.is_empty() => Ok(calculate(items)?),
        _ => {
            if amount < Decimal::ZERO {
                return Err(DecideError::NegativeAmount);
            }
            Ok(calculate(fallback_items(amount))?)
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
