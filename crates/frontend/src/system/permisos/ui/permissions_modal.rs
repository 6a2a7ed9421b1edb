use crate::shared::alerts::use_alerts;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::list_utils::contains_ci;
use crate::system::permisos::api;
use contracts::domain::a008_permiso::{PermissionFlag, PermissionMatrix, PermissionRow, Usuario};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{paginate_slice, Paginated, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Rows whose option name or module contains `search`
pub fn filter_rows(rows: &[PermissionRow], search: &str) -> Vec<PermissionRow> {
    if search.trim().is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|r| contains_ci(&r.opcion.nombre, search) || contains_ci(r.opcion.modulo_label(), search))
        .cloned()
        .collect()
}

/// Highlights rows with unsaved changes
pub fn row_class(dirty: bool) -> &'static str {
    if dirty { "permissions__row--dirty" } else { "" }
}

/// `None` when every change was persisted
pub fn failure_message(failed: usize, total: usize) -> Option<String> {
    (failed > 0).then(|| format!("No se pudieron guardar {} de {} permisos", failed, total))
}

/// Ver/crear/editar/eliminar matrix of one user over every menu option.
///
/// Changes are persisted one grant at a time; rows that fail stay dirty so a
/// second save retries only those.
#[component]
pub fn PermissionsModal(
    usuario: Usuario,
    /// Shared with the modal guard so the dialog cannot be dismissed mid-save
    saving: RwSignal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let alerts = use_alerts();
    let usuario_id = usuario.id;
    let matrix = RwSignal::new(PermissionMatrix::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let limit = RwSignal::new(DEFAULT_PAGE_SIZE);

    spawn_local(async move {
        let loaded = async {
            let opciones = api::fetch_opciones().await?;
            let grants = api::fetch_grants(usuario_id).await?;
            Ok::<_, ApiError>(PermissionMatrix::build(
                usuario_id, &opciones, &grants,
            ))
        }
        .await;
        match loaded {
            Ok(m) => {
                log::debug!("permission matrix of usuario {}: {} opciones", usuario_id, m.rows().len());
                matrix.set(m);
            }
            Err(err) => error.set(Some(err.user_message())),
        }
        loading.set(false);
    });

    let visible = Memo::new(move |_| {
        let rows = matrix.with(|m| filter_rows(m.rows(), &search.get()));
        paginate_slice(&rows, page.get(), limit.get())
    });

    let save = move || {
        let changes = matrix.with_untracked(|m| m.changes());
        if changes.is_empty() {
            alerts.info("No hay cambios para guardar");
            return;
        }
        saving.set(true);
        spawn_local(async move {
            let total = changes.len();
            let mut failed = 0;
            for change in &changes {
                match api::persist(change).await {
                    Ok(grant) => matrix.update(|m| m.mark_saved(change.opcion_id(), grant.id)),
                    Err(err) => {
                        log::error!("permiso for opcion {} not saved: {}", change.opcion_id(), err);
                        failed += 1;
                    }
                }
            }
            saving.set(false);
            match failure_message(failed, total) {
                Some(message) => alerts.error(message),
                None => {
                    alerts.success("Permisos actualizados");
                    on_close.run(());
                }
            }
        });
    };

    let locked = move || loading.get() || saving.get();
    let titulo = format!("Permisos de {}", usuario.username);

    view! {
        <div class="details-container permissions-details">
            <div class="details-header">
                <h3>{titulo}</h3>
                <Show when=move || matrix.with(|m| m.is_dirty())>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>
                        {move || format!("{} cambios sin guardar", matrix.with(|m| m.dirty_count()))}
                    </Badge>
                </Show>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=Callback::new(move |value: String| {
                            search.set(value);
                            page.set(1);
                        })
                        placeholder="Opción o módulo..."
                    />
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        meta=Signal::derive(move || visible.with(|p| p.meta))
                        on_page_change=Callback::new(move |p| page.set(p))
                        on_page_size_change=Callback::new(move |size: usize| {
                            limit.set(size.max(1));
                            page.set(1);
                        })
                    />
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="table__empty">"Cargando permisos..."</div> }
            >
                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Opción"</TableHeaderCell>
                                <TableHeaderCell>"Módulo"</TableHeaderCell>
                                {PermissionFlag::ALL
                                    .into_iter()
                                    .map(|flag| view! {
                                        <TableHeaderCell>
                                            <label class="permissions__column">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || matrix.with(|m| m.column_checked(flag))
                                                    disabled=locked
                                                    on:change=move |ev| {
                                                        let value = event_target_checked(&ev);
                                                        matrix.update(|m| m.set_all(flag, value));
                                                    }
                                                />
                                                {flag.label()}
                                            </label>
                                        </TableHeaderCell>
                                    })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                visible
                                    .with(|p: &Paginated<PermissionRow>| p.data.clone())
                                    .into_iter()
                                    .map(|row| {
                                        let opcion_id = row.opcion.id;
                                        let class = row_class(row.is_dirty());
                                        let nombre = row.opcion.nombre.clone();
                                        let modulo = row.opcion.modulo_label().to_string();
                                        view! {
                                            <TableRow class=class>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{nombre}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>{modulo}</TableCell>
                                                {PermissionFlag::ALL
                                                    .into_iter()
                                                    .map(|flag| view! {
                                                        <TableCell>
                                                            <input
                                                                type="checkbox"
                                                                title=flag.label()
                                                                prop:checked=move || matrix.with(|m| m.get(opcion_id, flag))
                                                                disabled=locked
                                                                on:change=move |ev| {
                                                                    let value = event_target_checked(&ev);
                                                                    matrix.update(|m| {
                                                                        m.toggle(opcion_id, flag, value);
                                                                    });
                                                                }
                                                            />
                                                        </TableCell>
                                                    })
                                                    .collect_view()}
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || visible.with(|p| p.data.is_empty())>
                        <div class="table__empty">"No hay opciones"</div>
                    </Show>
                </div>
            </Show>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || locked() || !matrix.with(|m| m.is_dirty())
                    on:click=move |_| save()
                >
                    {icon("save")}
                    {move || if saving.get() { "Guardando..." } else { "Guardar" }}
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || saving.get()
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                    "Cerrar"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_permiso::{Opcion, UsuarioOpcion};

    fn opcion(id: i64, nombre: &str, modulo: &str) -> Opcion {
        Opcion {
            id,
            nombre: nombre.into(),
            ruta: None,
            modulo: Some(modulo.into()),
            orden: id as i32,
        }
    }

    #[test]
    fn search_matches_name_or_module() {
        let opciones = vec![
            opcion(1, "Cajas", "Caja"),
            opcion(2, "Roles", "Administración"),
            opcion(3, "Planes de pago", "Planes"),
        ];
        let matrix = PermissionMatrix::build(7, &opciones, &Vec::<UsuarioOpcion>::new());
        assert_eq!(filter_rows(matrix.rows(), "").len(), 3);
        assert_eq!(filter_rows(matrix.rows(), "ADMIN").len(), 1);
        assert_eq!(filter_rows(matrix.rows(), "caja")[0].opcion.id, 1);
    }

    #[test]
    fn only_dirty_rows_are_highlighted() {
        let opciones = vec![opcion(1, "Cajas", "Caja"), opcion(2, "Roles", "Administración")];
        let mut matrix = PermissionMatrix::build(7, &opciones, &Vec::<UsuarioOpcion>::new());
        matrix.toggle(2, PermissionFlag::Ver, true);
        let class_of = |id| matrix.row(id).map(|r| row_class(r.is_dirty()));
        assert_eq!(class_of(1), Some(""));
        assert_eq!(class_of(2), Some("permissions__row--dirty"));
    }

    #[test]
    fn partial_failure_is_reported() {
        assert_eq!(failure_message(0, 4), None);
        assert_eq!(
            failure_message(2, 5).as_deref(),
            Some("No se pudieron guardar 2 de 5 permisos")
        );
    }
}
