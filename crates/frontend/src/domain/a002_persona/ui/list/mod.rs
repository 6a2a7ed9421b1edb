pub mod columns;

use self::columns::{PersonaRow, COLUMNS};
use super::details::PersonaDetails;
use crate::shared::alerts::use_alerts;
use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::crud::confirm_and_delete;
use crate::shared::list_state::{create_list_state, reload};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_persona::Persona;
use contracts::domain::common::{AggregateRoot, EntityId};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PersonaList() -> impl IntoView {
    let modal_stack = use_modal_stack();
    let alerts = use_alerts();
    let state = create_list_state::<Persona>();

    let load = move || reload(state, |q| q);
    Effect::new(move |_| load());

    let open_details = move |id: Option<EntityId>| {
        modal_stack.push_with_frame(
            Some("max-width: min(760px, 95vw); width: min(760px, 95vw);".to_string()),
            Some("persona-details-modal".to_string()),
            move |handle| {
                let on_saved = Callback::new({
                    let handle = handle.clone();
                    move |_| {
                        handle.close();
                        load();
                    }
                });
                let on_cancel = Callback::new(move |_| handle.close());
                view! { <PersonaDetails id=id on_saved=on_saved on_cancel=on_cancel /> }.into_any()
            },
        );
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a002_persona--list" category=PAGE_CAT_LIST>
            <ListHeader
                title=Persona::list_name()
                total=Signal::derive(move || state.with(|s| s.meta.total))
                loading=busy
                on_refresh=Callback::new(move |_| load())
                on_create=Callback::new(move |_| open_details(None))
                create_label="Nueva persona"
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
                    search_placeholder="Nombre o número de documento..."
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
                                state
                                    .with(|s| s.items.clone())
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.id;
                                        let for_delete = item.clone();
                                        view! {
                                            <PersonaRow
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
                        <div class="table__empty">"No se encontraron personas"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
