use async_graphql::{Context, Enum, InputObject, Object, Result as GqlResult, SimpleObject};
use rust_decimal::Decimal;

use crate::modules::estimates::core::estimate::Estimate;
use crate::modules::estimates::core::line_items::{LineItem, LineItemInput};
use crate::modules::estimates::core::revision::Revision;
use crate::modules::estimates::core::status::EstimateStatus;
use crate::modules::estimates::use_cases::list_estimates_by_project::queries_port::EstimateQueries;
use crate::shared::application::errors::ApplicationError;
use crate::shell::error::into_graphql_error;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "EstimateStatus", rename_items = "lowercase")]
pub enum GqlEstimateStatus {
    Draft,
    Sent,
    Approved,
    Rejected,
}

impl From<EstimateStatus> for GqlEstimateStatus {
    fn from(status: EstimateStatus) -> Self {
        match status {
            EstimateStatus::Draft => GqlEstimateStatus::Draft,
            EstimateStatus::Sent => GqlEstimateStatus::Sent,
            EstimateStatus::Approved => GqlEstimateStatus::Approved,
            EstimateStatus::Rejected => GqlEstimateStatus::Rejected,
        }
    }
}

impl From<GqlEstimateStatus> for EstimateStatus {
    fn from(status: GqlEstimateStatus) -> Self {
        match status {
            GqlEstimateStatus::Draft => EstimateStatus::Draft,
            GqlEstimateStatus::Sent => EstimateStatus::Sent,
            GqlEstimateStatus::Approved => EstimateStatus::Approved,
            GqlEstimateStatus::Rejected => EstimateStatus::Rejected,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "LineItemInput")]
pub struct GqlLineItemInput {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
}

impl From<GqlLineItemInput> for LineItemInput {
    fn from(input: GqlLineItemInput) -> Self {
        Self {
            description: input.description,
            quantity: input.quantity,
            unit_price: input.unit_price,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "LineItem")]
pub struct GqlLineItem {
    pub description: String,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
}

impl From<LineItem> for GqlLineItem {
    fn from(item: LineItem) -> Self {
        Self {
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            total: item.total,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Revision")]
pub struct GqlRevision {
    pub version: u32,
    pub amount: Decimal,
    pub items: Vec<GqlLineItem>,
    pub notes: Option<String>,
    pub created_at: i64,
}

impl From<Revision> for GqlRevision {
    fn from(revision: Revision) -> Self {
        Self {
            version: revision.version,
            amount: revision.amount,
            items: revision.items.into_iter().map(Into::into).collect(),
            notes: revision.notes,
            created_at: revision.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Estimate")]
pub struct GqlEstimate {
    pub estimate_id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub amount: Decimal,
    pub items: Vec<GqlLineItem>,
    pub status: GqlEstimateStatus,
    pub valid_until: i64,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub approved_by: Option<String>,
    pub approved_at: Option<i64>,
    pub rejection_reason: Option<String>,
    pub revisions: Vec<GqlRevision>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl From<Estimate> for GqlEstimate {
    fn from(e: Estimate) -> Self {
        Self {
            estimate_id: e.estimate_id,
            project_id: e.project_id,
            title: e.title,
            description: e.description,
            amount: e.amount,
            items: e.items.into_iter().map(Into::into).collect(),
            status: e.status.into(),
            valid_until: e.valid_until,
            notes: e.notes,
            terms: e.terms,
            approved_by: e.approved_by,
            approved_at: e.approved_at,
            rejection_reason: e.rejection_reason,
            revisions: e.revisions.into_iter().map(Into::into).collect(),
            created_at: e.created_at,
            created_by: e.created_by,
            updated_at: e.updated_at,
            updated_by: e.updated_by,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn estimates_by_project(
        &self,
        context: &Context<'_>,
        project_id: String,
    ) -> GqlResult<Vec<GqlEstimate>> {
        let state = context.data_unchecked::<AppState>();
        let list = state
            .queries
            .list_by_project_id(&project_id)
            .await
            .map_err(|e| into_graphql_error(ApplicationError::Projection(e.to_string())))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
