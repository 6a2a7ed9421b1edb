pub mod columns;

use self::columns::{CajaRow, COLUMNS};
use super::details::CajaDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::alerts::{use_alerts, AlertService};
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::crud::{confirm_and_delete, confirm_and_update, load_catalog};
use crate::shared::list_state::{create_list_state, reload, ListState};
use crate::shared::modal_stack::{use_modal_stack, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Utc;
use contracts::domain::a003_punto_venta::PuntoVenta;
use contracts::domain::a004_caja::Caja;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::catalog::Catalog;
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;
use thaw::*;

/// "Finalizar" row action: closes the caja now, balances untouched.
fn close_caja<F>(
    modal_stack: ModalStackService,
    alerts: AlertService,
    state: RwSignal<ListState<Caja>>,
    caja: &Caja,
    on_done: F,
) where
    F: Fn() + Send + Sync + Copy + 'static,
{
    match caja.cerrar(Utc::now()) {
        Ok(dto) => confirm_and_update(
            modal_stack,
            alerts,
            state,
            "Cerrar caja",
            format!("¿Desea cerrar la caja \"{}\"?", caja.nombre),
            "Caja cerrada correctamente",
            caja.id,
            dto,
            on_done,
        ),
        Err(msg) => alerts.error(msg),
    }
}

#[component]
pub fn CajaList() -> impl IntoView {
    let ctx = use_global_context();
    let modal_stack = use_modal_stack();
    let alerts = use_alerts();
    let state = create_list_state::<Caja>();
    let puntos = RwSignal::new(Catalog::<PuntoVenta>::default());
    let punto_filter = RwSignal::new(None::<EntityId>);

    let load = move || {
        reload(state, |q| {
            q.with_empresa(ctx.empresa_id.get_untracked())
                .with_filter_opt("punto_venta_id", punto_filter.get_untracked())
        })
    };

    Effect::new(move |_| {
        let empresa_id = ctx.empresa_id.get();
        punto_filter.set(None);
        load_catalog(puntos, ListQuery::default().with_empresa(empresa_id));
        state.update(|s| s.set_page(1));
        load();
    });

    let open_details = move |id: Option<EntityId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(720px, 95vw); width: min(720px, 95vw);".to_string()),
            Some("caja-details-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        load();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <CajaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a004_caja--list" category=PAGE_CAT_LIST>
            <ListHeader
                title=Caja::list_name()
                total=Signal::derive(move || state.with(|s| s.meta.total))
                loading=busy
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| open_details(None))
                create_label="Nueva caja"
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
                    search_placeholder="Nombre de caja..."
                >
                    <EntitySelect
                        options=Signal::derive(move || puntos.with(|c| c.options()))
                        value=punto_filter
                        placeholder="Todos los puntos de venta"
                        on_change=Callback::new(move |v| {
                            punto_filter.set(v);
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
                                        let punto_venta = puntos.with(|c| c.name_of(item.punto_venta_id));
                                        let for_delete = item.clone();
                                        let for_close = item.clone();
                                        view! {
                                            <CajaRow
                                                item=item
                                                punto_venta=punto_venta
                                                busy=busy
                                                on_edit=Callback::new(move |_| open_details(Some(id)))
                                                on_delete=Callback::new(move |_| {
                                                    confirm_and_delete(modal_stack, alerts, state, &for_delete, load)
                                                })
                                                on_close=Callback::new(move |_| {
                                                    close_caja(modal_stack, alerts, state, &for_close, load)
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.items.is_empty() && !s.loading)>
                        <div class="table__empty">"No hay cajas registradas"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
