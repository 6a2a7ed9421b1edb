use crate::shared::http;
use contracts::domain::a001_empresa::{Empresa, EmpresaDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<Empresa, ApiError> {
    http::fetch_by_id(Empresa::resource(), id).await
}

/// POST for new records, PATCH for existing ones
pub async fn save(dto: &EmpresaDto) -> Result<Empresa, ApiError> {
    match dto.id {
        Some(id) => http::update(Empresa::resource(), id, dto).await,
        None => http::create(Empresa::resource(), dto).await,
    }
}
