// Shared test fixture for EstimateCreatedV1.

use crate::modules::estimates::core::estimate::{DEFAULT_VALIDITY_DAYS, default_valid_until};
use crate::modules::estimates::core::events::v1::estimate_created::EstimateCreatedV1;
use crate::modules::estimates::core::line_items::calculate;
use crate::tests::fixtures::commands::create_estimate::CreateEstimateBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_estimate_created_v1_event() -> EstimateCreatedV1 {
    let command = CreateEstimateBuilder::new().build();
    let calculation = calculate(command.items.unwrap_or_default()).unwrap();
    EstimateCreatedV1 {
        estimate_id: command.estimate_id,
        project_id: command.project_id,
        title: command.title,
        description: command.description,
        items: calculation.items,
        amount: calculation.amount,
        valid_until: default_valid_until(command.created_at, DEFAULT_VALIDITY_DAYS).unwrap(),
        notes: command.notes,
        terms: command.terms,
        created_at: command.created_at,
        created_by: command.created_by,
    }
}
