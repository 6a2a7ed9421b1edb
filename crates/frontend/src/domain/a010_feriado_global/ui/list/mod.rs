pub mod columns;

use self::columns::{visible_page, FeriadoGlobalRow};
use super::details::FeriadoGlobalDetails;
use crate::domain::a010_feriado_global::api;
use crate::shared::alerts::use_alerts;
use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::crud::confirm_and_delete;
use crate::shared::list_state::create_list_state;
use crate::shared::list_utils::{create_sort_toggle, get_sort_indicator};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a010_feriado_global::FeriadoGlobal;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Holidays are global and few: the list keeps every record in `items` and
/// searches, sorts and pages in memory.
#[component]
pub fn FeriadoGlobalList() -> impl IntoView {
    let modal_stack = use_modal_stack();
    let alerts = use_alerts();
    let state = create_list_state::<FeriadoGlobal>();
    let sort_field = RwSignal::new("fecha".to_string());
    let sort_ascending = RwSignal::new(true);

    let load = move || {
        state.update(|s| {
            s.loading = true;
            s.error = None;
        });
        spawn_local(async move {
            let result = api::fetch_all().await;
            state.update(|s| {
                s.loading = false;
                match result {
                    Ok(items) => s.items = items,
                    Err(err) => s.error = Some(err.user_message()),
                }
            });
        });
    };
    load();

    let page = Signal::derive(move || {
        state.with(|s| {
            visible_page(
                &s.items,
                &s.search,
                &sort_field.get(),
                sort_ascending.get(),
                s.page,
                s.limit,
            )
        })
    });

    let open_details = move |record: Option<FeriadoGlobal>| {
        modal_stack.push_with_frame(
            Some("max-width: min(520px, 95vw); width: min(520px, 95vw);".to_string()),
            Some("feriado-details-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        load();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! {
                    <FeriadoGlobalDetails
                        record=record.clone()
                        existentes=Signal::derive(move || state.with(|s| s.items.clone()))
                        on_saved=on_saved
                        on_cancel=on_cancel
                    />
                }
                .into_any()
            },
        );
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a010_feriado_global--list" category=PAGE_CAT_LIST>
            <ListHeader
                title=FeriadoGlobal::list_name()
                total=Signal::derive(move || state.with(|s| s.items.len()))
                loading=busy
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| open_details(None))
                create_label="Nuevo feriado"
            />

            <div class="page__content">
                <ListFilters
                    search=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_search=Callback::new(move |value: String| state.update(|s| s.set_search(value)))
                    meta=Signal::derive(move || page.with(|p| p.meta))
                    on_page_change=Callback::new(move |p| state.update(|s| s.set_page(p)))
                    on_page_size_change=Callback::new(move |size| state.update(|s| s.set_limit(size)))
                    search_placeholder="Descripción o fecha..."
                />

                {move || state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        on:click=create_sort_toggle("fecha", sort_field, sort_ascending)
                                    >
                                        "Fecha"
                                        {move || get_sort_indicator(&sort_field.get(), "fecha", sort_ascending.get())}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Día"</TableHeaderCell>
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        on:click=create_sort_toggle("descripcion", sort_field, sort_ascending)
                                    >
                                        "Descripción"
                                        {move || get_sort_indicator(&sort_field.get(), "descripcion", sort_ascending.get())}
                                    </div>
                                </TableHeaderCell>
                                <TableHeaderCell>"Recurrente"</TableHeaderCell>
                                <TableHeaderCell>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                page.get()
                                    .data
                                    .into_iter()
                                    .map(|item| {
                                        let for_edit = item.clone();
                                        let for_delete = item.clone();
                                        view! {
                                            <FeriadoGlobalRow
                                                item=item
                                                busy=busy
                                                on_edit=Callback::new(move |_| open_details(Some(for_edit.clone())))
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
                    <Show when=move || page.with(|p| p.data.is_empty()) && !busy.get()>
                        <div class="table__empty">"No hay feriados registrados"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
