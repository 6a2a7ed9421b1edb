use crate::shared::http;
use contracts::domain::a006_caja_chica_autorizada::{CajaChicaAutorizada, CajaChicaAutorizadaDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<CajaChicaAutorizada, ApiError> {
    http::fetch_by_id(CajaChicaAutorizada::resource(), id).await
}

pub async fn save(dto: &CajaChicaAutorizadaDto) -> Result<CajaChicaAutorizada, ApiError> {
    match dto.id {
        Some(id) => http::update(CajaChicaAutorizada::resource(), id, dto).await,
        None => http::create(CajaChicaAutorizada::resource(), dto).await,
    }
}
