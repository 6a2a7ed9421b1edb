use crate::shared::http;
use contracts::domain::a003_punto_venta::{PuntoVenta, PuntoVentaDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<PuntoVenta, ApiError> {
    http::fetch_by_id(PuntoVenta::resource(), id).await
}

pub async fn save(dto: &PuntoVentaDto) -> Result<PuntoVenta, ApiError> {
    match dto.id {
        Some(id) => http::update(PuntoVenta::resource(), id, dto).await,
        None => http::create(PuntoVenta::resource(), dto).await,
    }
}
