pub mod columns;

use self::columns::{ClienteInmobiliarioRow, COLUMNS};
use super::details::ClienteInmobiliarioDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::crud::confirm_and_delete;
use crate::shared::list_state::{create_list_state, reload};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a011_cliente_inmobiliario::{ClienteInmobiliario, EstadoCliente};
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ClienteInmobiliarioList() -> impl IntoView {
    let ctx = use_global_context();
    let modal_stack = use_modal_stack();
    let alerts = use_alerts();
    let state = create_list_state::<ClienteInmobiliario>();
    let estado_filter = RwSignal::new(None::<EstadoCliente>);

    let load = move || {
        reload(state, |q| {
            q.with_empresa(ctx.empresa_id.get_untracked())
                .with_filter_opt("estado", estado_filter.get_untracked().map(|e| e.code()))
        })
    };

    Effect::new(move |_| {
        ctx.empresa_id.track();
        state.update(|s| s.set_page(1));
        load();
    });

    let open_details = move |id: Option<EntityId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(680px, 95vw); width: min(680px, 95vw);".to_string()),
            Some("cliente-details-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        load();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <ClienteInmobiliarioDetails id=id on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a011_cliente_inmobiliario--list" category=PAGE_CAT_LIST>
            <ListHeader
                title=ClienteInmobiliario::list_name()
                total=Signal::derive(move || state.with(|s| s.meta.total))
                loading=busy
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| open_details(None))
                create_label="Nuevo cliente"
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
                    search_placeholder="Nombre o documento..."
                >
                    <select
                        class="form-select"
                        on:change=move |ev| {
                            estado_filter.set(EstadoCliente::from_code(&event_target_value(&ev)));
                            state.update(|s| s.set_page(1));
                            load();
                        }
                    >
                        <option value="">"Todos los estados"</option>
                        {EstadoCliente::ALL
                            .into_iter()
                            .map(|estado| view! { <option value=estado.code()>{estado.label()}</option> })
                            .collect_view()}
                    </select>
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
                                        let for_delete = item.clone();
                                        view! {
                                            <ClienteInmobiliarioRow
                                                item=item
                                                busy=busy
                                                on_edit=Callback::new(move |_| open_details(Some(id)))
                                                on_delete=Callback::new(move |_| {
                                                    confirm_and_delete(modal_stack, alerts, state, &for_delete, load)
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.items.is_empty() && !s.loading)>
                        <div class="table__empty">"No hay clientes para la empresa seleccionada"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
