use crate::shared::http;
use contracts::domain::a009_config_interes_mora::{ConfigInteresMora, ConfigInteresMoraDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::ListQuery;

pub async fn fetch_by_id(id: EntityId) -> Result<ConfigInteresMora, ApiError> {
    http::fetch_by_id(ConfigInteresMora::resource(), id).await
}

pub async fn save(dto: &ConfigInteresMoraDto) -> Result<ConfigInteresMora, ApiError> {
    match dto.id {
        Some(id) => http::update(ConfigInteresMora::resource(), id, dto).await,
        None => http::create(ConfigInteresMora::resource(), dto).await,
    }
}

/// Every configuration of an empresa, for the overlap check
pub async fn fetch_by_empresa(empresa_id: EntityId) -> Result<Vec<ConfigInteresMora>, ApiError> {
    http::fetch_all_pages(
        ConfigInteresMora::resource(),
        ListQuery::default().with_empresa(Some(empresa_id)),
    )
    .await
}
