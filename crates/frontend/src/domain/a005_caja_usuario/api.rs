use crate::shared::http;
use contracts::domain::a005_caja_usuario::{CajaUsuario, CajaUsuarioDto};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::ListQuery;

pub async fn fetch_by_id(id: EntityId) -> Result<CajaUsuario, ApiError> {
    http::fetch_by_id(CajaUsuario::resource(), id).await
}

pub async fn save(dto: &CajaUsuarioDto) -> Result<CajaUsuario, ApiError> {
    match dto.id {
        Some(id) => http::update(CajaUsuario::resource(), id, dto).await,
        None => http::create(CajaUsuario::resource(), dto).await,
    }
}

/// Assignments of a user on a caja, for the overlap check
pub async fn fetch_assignments(
    caja_id: EntityId,
    usuario_id: EntityId,
) -> Result<Vec<CajaUsuario>, ApiError> {
    http::fetch_all_pages(
        CajaUsuario::resource(),
        ListQuery::default()
            .with_filter("caja_id", caja_id)
            .with_filter("usuario_id", usuario_id),
    )
    .await
}
