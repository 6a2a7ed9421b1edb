use crate::shared::http;
use contracts::domain::a010_feriado_global::{FeriadoGlobal, FeriadoGlobalDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::ListQuery;

/// The holiday catalog is small; it is fetched in full and paged client-side.
pub async fn fetch_all() -> Result<Vec<FeriadoGlobal>, ApiError> {
    http::fetch_all_pages(FeriadoGlobal::resource(), ListQuery::default()).await
}

pub async fn save(dto: &FeriadoGlobalDto) -> Result<FeriadoGlobal, ApiError> {
    match dto.id {
        Some(id) => http::update(FeriadoGlobal::resource(), id, dto).await,
        None => http::create(FeriadoGlobal::resource(), dto).await,
    }
}
