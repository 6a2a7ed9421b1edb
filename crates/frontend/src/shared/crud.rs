//! Flows shared by every entity list: reference catalogs and deletion.

use crate::shared::alerts::AlertService;
use crate::shared::components::confirm_dialog::{confirm, confirm_delete};
use crate::shared::http;
use crate::shared::list_state::ListState;
use crate::shared::modal_stack::ModalStackService;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::catalog::Catalog;
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

/// Fetches every page of `T` into `target`, used to resolve foreign keys.
pub fn load_catalog<T>(target: RwSignal<Catalog<T>>, query: ListQuery)
where
    T: AggregateRoot + DeserializeOwned + Send + Sync + 'static,
{
    spawn_local(async move {
        match http::fetch_all_pages::<T>(T::resource(), query).await {
            Ok(items) => {
                log::debug!("{}: {} records loaded", T::list_name(), items.len());
                target.set(Catalog::new(items));
            }
            Err(err) => log::error!("{} could not be loaded: {}", T::list_name(), err),
        }
    });
}

/// Asks for confirmation, deletes `item` and runs `on_deleted`.
///
/// While the request runs the list shows as loading; on failure the flag is
/// reset and the API message is shown (409 means dependent records).
pub fn confirm_and_delete<T, F>(
    modal_stack: ModalStackService,
    alerts: AlertService,
    state: RwSignal<ListState<T>>,
    item: &T,
    on_deleted: F,
) where
    T: AggregateRoot + Send + Sync + 'static,
    F: Fn() + Send + Sync + Copy + 'static,
{
    let id = item.id();
    let name = item.display_name();
    confirm_delete(
        modal_stack,
        T::element_name(),
        &name,
        Callback::new(move |_| {
            state.update(|s| s.loading = true);
            spawn_local(async move {
                match http::delete(T::resource(), id).await {
                    Ok(()) => {
                        log::info!("{} {} deleted", T::element_name(), id);
                        alerts.success(format!("{} eliminado correctamente", T::element_name()));
                        on_deleted();
                    }
                    Err(err) => {
                        state.update(|s| s.loading = false);
                        alerts.api_error(&err);
                    }
                }
            });
        }),
    );
}

/// Row actions that change state (close a caja, finalize an assignment):
/// confirm, PATCH `dto` onto record `id`, then run `on_done`.
#[allow(clippy::too_many_arguments)]
pub fn confirm_and_update<T, D, F>(
    modal_stack: ModalStackService,
    alerts: AlertService,
    state: RwSignal<ListState<T>>,
    title: &str,
    message: String,
    success: &'static str,
    id: EntityId,
    dto: D,
    on_done: F,
) where
    T: AggregateRoot + DeserializeOwned + Send + Sync + 'static,
    D: Serialize + Clone + Send + Sync + 'static,
    F: Fn() + Send + Sync + Copy + 'static,
{
    confirm(
        modal_stack,
        title,
        message,
        title,
        Callback::new(move |_| {
            let dto = dto.clone();
            state.update(|s| s.loading = true);
            spawn_local(async move {
                match http::update::<D, T>(T::resource(), id, &dto).await {
                    Ok(_) => {
                        log::info!("{} {} updated", T::element_name(), id);
                        alerts.success(success);
                        on_done();
                    }
                    Err(err) => {
                        state.update(|s| s.loading = false);
                        alerts.api_error(&err);
                    }
                }
            });
        }),
    );
}
