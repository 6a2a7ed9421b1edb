use crate::shared::http;
use contracts::domain::a002_persona::{Persona, PersonaDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<Persona, ApiError> {
    http::fetch_by_id(Persona::resource(), id).await
}

pub async fn save(dto: &PersonaDto) -> Result<Persona, ApiError> {
    match dto.id {
        Some(id) => http::update(Persona::resource(), id, dto).await,
        None => http::create(Persona::resource(), dto).await,
    }
}
