pub mod columns;

use self::columns::{ConfigInteresMoraRow, COLUMNS};
use super::details::ConfigInteresMoraDetails;
use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::crud::confirm_and_delete;
use crate::shared::list_state::{create_list_state, reload};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a009_config_interes_mora::{config_vigente, ConfigInteresMora};
use contracts::shared::dates::today;
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ConfigInteresMoraList() -> impl IntoView {
    let ctx = use_global_context();
    let modal_stack = use_modal_stack();
    let alerts = use_alerts();
    let state = create_list_state::<ConfigInteresMora>();

    let load = move || reload(state, |q| q.with_empresa(ctx.empresa_id.get_untracked()));

    Effect::new(move |_| {
        ctx.empresa_id.track();
        state.update(|s| s.set_page(1));
        load();
    });

    let open_details = move |id: Option<EntityId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(640px, 95vw); width: min(640px, 95vw);".to_string()),
            Some("config-mora-details-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        load();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <ConfigInteresMoraDetails id=id on_saved=on_saved on_cancel=on_cancel /> }
                    .into_any()
            },
        );
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a009_config_interes_mora--list" category=PAGE_CAT_LIST>
            <ListHeader
                title=ConfigInteresMora::list_name()
                total=Signal::derive(move || state.with(|s| s.meta.total))
                loading=busy
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| open_details(None))
                create_label="Nueva configuración"
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
                                    />

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
                                let items = state.with(|s| s.items.clone());
                                let hoy = today();
                                items
                                    .iter()
                                    .cloned()
                                    .map(|item| {
                                        let id = item.id;
                                        let empresa = ctx.empresa_name(item.empresa_id);
                                        let aplicada = config_vigente(&items, item.empresa_id, hoy)
                                            .is_some_and(|c| c.id == id);
                                        let for_delete = item.clone();
                                        view! {
                                            <ConfigInteresMoraRow
                                                item=item
                                                aplicada=aplicada
                                                hoy=hoy
                                                empresa=empresa
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
                        <div class="table__empty">"No hay configuraciones de interés moratorio"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
