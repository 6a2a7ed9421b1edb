use crate::shared::http;
use contracts::domain::a004_caja::{Caja, CajaDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::ListQuery;

pub async fn fetch_by_id(id: EntityId) -> Result<Caja, ApiError> {
    http::fetch_by_id(Caja::resource(), id).await
}

pub async fn save(dto: &CajaDto) -> Result<Caja, ApiError> {
    match dto.id {
        Some(id) => http::update(Caja::resource(), id, dto).await,
        None => http::create(Caja::resource(), dto).await,
    }
}

/// Every caja of a punto de venta, for the single open central check
pub async fn fetch_by_punto_venta(punto_venta_id: EntityId) -> Result<Vec<Caja>, ApiError> {
    http::fetch_all_pages(
        Caja::resource(),
        ListQuery::default().with_filter("punto_venta_id", punto_venta_id),
    )
    .await
}
