use crate::shared::http;
use contracts::domain::a011_cliente_inmobiliario::{ClienteInmobiliario, ClienteInmobiliarioDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;

pub async fn fetch_by_id(id: EntityId) -> Result<ClienteInmobiliario, ApiError> {
    http::fetch_by_id(ClienteInmobiliario::resource(), id).await
}

pub async fn save(dto: &ClienteInmobiliarioDto) -> Result<ClienteInmobiliario, ApiError> {
    match dto.id {
        Some(id) => http::update(ClienteInmobiliario::resource(), id, dto).await,
        None => http::create(ClienteInmobiliario::resource(), dto).await,
    }
}
