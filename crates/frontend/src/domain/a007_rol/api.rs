use crate::shared::http;
use contracts::domain::a007_rol::{Rol, RolDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<Rol, ApiError> {
    http::fetch_by_id(Rol::resource(), id).await
}

pub async fn save(dto: &RolDto) -> Result<Rol, ApiError> {
    match dto.id {
        Some(id) => http::update(Rol::resource(), id, dto).await,
        None => http::create(Rol::resource(), dto).await,
    }
}
