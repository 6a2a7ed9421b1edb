use crate::shared::http;
use contracts::domain::a012_plan_pago::{PlanPago, PlanPagoDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<PlanPago, ApiError> {
    http::fetch_by_id(PlanPago::resource(), id).await
}

pub async fn save(dto: &PlanPagoDto) -> Result<PlanPago, ApiError> {
    match dto.id {
        Some(id) => http::update(PlanPago::resource(), id, dto).await,
        None => http::create(PlanPago::resource(), dto).await,
    }
}
