use crate::shared::http;
use contracts::domain::a008_permiso::{Opcion, PermissionChange, UsuarioOpcion};
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::ListQuery;

pub async fn fetch_opciones() -> Result<Vec<Opcion>, ApiError> {
    http::fetch_all_pages(Opcion::resource(), ListQuery::default()).await
}

/// Existing grants of one user, every page
pub async fn fetch_grants(usuario_id: EntityId) -> Result<Vec<UsuarioOpcion>, ApiError> {
    http::fetch_all_pages(
        UsuarioOpcion::resource(),
        ListQuery::default().with_filter("usuario_id", usuario_id),
    )
    .await
}

/// POST for rows without a grant, PATCH for the rest
pub async fn persist(change: &PermissionChange) -> Result<UsuarioOpcion, ApiError> {
    match change {
        PermissionChange::Create(dto) => http::create(UsuarioOpcion::resource(), dto).await,
        PermissionChange::Update { id, dto } => {
            http::update(UsuarioOpcion::resource(), *id, dto).await
        }
    }
}
