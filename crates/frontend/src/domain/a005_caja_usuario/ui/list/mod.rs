pub mod columns;

use self::columns::{CajaUsuarioRow, COLUMNS};
use super::details::CajaUsuarioDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::crud::{confirm_and_delete, confirm_and_update, load_catalog};
use crate::shared::list_state::{create_list_state, reload};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_caja::Caja;
use contracts::domain::a005_caja_usuario::CajaUsuario;
use contracts::domain::a008_permiso::Usuario;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::catalog::Catalog;
use contracts::shared::dates::today;
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CajaUsuarioList() -> impl IntoView {
    let ctx = use_global_context();
    let modal_stack = use_modal_stack();
    let alerts = use_alerts();
    let state = create_list_state::<CajaUsuario>();
    let cajas = RwSignal::new(Catalog::<Caja>::default());
    let usuarios = RwSignal::new(Catalog::<Usuario>::default());
    let caja_filter = RwSignal::new(None::<EntityId>);

    load_catalog(usuarios, ListQuery::default());

    let load = move || {
        reload(state, |q| {
            q.with_empresa(ctx.empresa_id.get_untracked())
                .with_filter_opt("caja_id", caja_filter.get_untracked())
        })
    };

    Effect::new(move |_| {
        let empresa_id = ctx.empresa_id.get();
        caja_filter.set(None);
        load_catalog(cajas, ListQuery::default().with_empresa(empresa_id));
        state.update(|s| s.set_page(1));
        load();
    });

    let open_details = move |id: Option<EntityId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("caja-usuario-details-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        load();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <CajaUsuarioDetails id=id on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let finalize = move |item: &CajaUsuario| match item.finalizar(today()) {
        Ok(dto) => confirm_and_update(
            modal_stack,
            alerts,
            state,
            "Finalizar asignación",
            format!(
                "¿Finalizar la asignación de {} en {}?",
                usuarios.with_untracked(|c| c.name_of(item.usuario_id)),
                cajas.with_untracked(|c| c.name_of(item.caja_id)),
            ),
            "Asignación finalizada correctamente",
            item.id,
            dto,
            load,
        ),
        Err(msg) => alerts.error(msg),
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a005_caja_usuario--list" category=PAGE_CAT_LIST>
            <ListHeader
                title=CajaUsuario::list_name()
                total=Signal::derive(move || state.with(|s| s.meta.total))
                loading=busy
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| open_details(None))
                create_label="Asignar usuario"
            />

            <div class="page__content">
                <ListFilters
                    search=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_search=Callback::new(move |value: String| {
                        state.update(|s| s.set_search(value));
                        load();
                    })
                    meta=Signal::derive(move || state.with(|s| s.meta))
                    on_page_change=Callback::new(move |page| {
                        state.update(|s| s.set_page(page));
                        load();
                    })
                    on_page_size_change=Callback::new(move |size| {
                        state.update(|s| s.set_limit(size));
                        load();
                    })
                    search_placeholder="Usuario..."
                >
                    <EntitySelect
                        options=Signal::derive(move || cajas.with(|c| c.options()))
                        value=caja_filter
                        placeholder="Todas las cajas"
                        on_change=Callback::new(move |v| {
                            caja_filter.set(v);
                            state.update(|s| s.set_page(1));
                            load();
                        })
                    />
                </ListFilters>

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {COLUMNS
                                    .iter()
                                    .map(|c| view! { <TableHeaderCell>{*c}</TableHeaderCell> })
                                    .collect_view()}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                state
                                    .with(|s| s.items.clone())
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        let caja = cajas.with(|c| c.name_of(item.caja_id));
                                        let usuario = usuarios.with(|c| c.name_of(item.usuario_id));
                                        let for_delete = item.clone();
                                        let for_finalize = item.clone();
                                        view! {
                                            <CajaUsuarioRow
                                                item=item
                                                caja=caja
                                                usuario=usuario
                                                busy=busy
                                                on_edit=Callback::new(move |_| open_details(Some(id)))
                                                on_delete=Callback::new(move |_| {
                                                    confirm_and_delete(modal_stack, alerts, state, &for_delete, load)
                                                })
                                                on_finalize=Callback::new(move |_| finalize(&for_finalize))
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.items.is_empty() && !s.loading)>
                        <div class="table__empty">"No hay usuarios asignados a cajas"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
