mod permissions_modal;

pub use permissions_modal::PermissionsModal;

use crate::shared::components::list_toolbar::{ListFilters, ListHeader};
use crate::shared::components::row_actions::RowActionButton;
use crate::shared::components::status_badge::{activo_badge, StatusBadge};
use crate::shared::forms::or_dash;
use crate::shared::list_state::{create_list_state, reload};
use crate::shared::modal_stack::use_modal_stack;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::domain::a008_permiso::Usuario;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::*;

const COLUMNS: [&str; 4] = ["Usuario", "Email", "Estado", ""];

/// User list of the permisos tab; each row opens its permission matrix.
#[component]
pub fn PermisosPage() -> impl IntoView {
    let modal_stack = use_modal_stack();
    let state = create_list_state::<Usuario>();

    let load = move || reload(state, |q| q);
    Effect::new(move |_| load());

    let open_permissions = move |usuario: Usuario| {
        let saving = RwSignal::new(false);
        modal_stack.push_guarded(
            Some("max-width: min(960px, 95vw); width: min(960px, 95vw);".to_string()),
            Some("permissions-modal".to_string()),
            move || !saving.get_untracked(),
            move |handle| {
                let on_close = Callback::new(move |_| handle.close());
                view! { <PermissionsModal usuario=usuario.clone() saving=saving on_close=on_close /> }
                    .into_any()
            },
        );
    };

    let busy = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <PageFrame page_id="a008_permiso--list" category=PAGE_CAT_SYSTEM>
            <ListHeader
                title=Usuario::list_name()
                total=Signal::derive(move || state.with(|s| s.meta.total))
                loading=busy
                on_refresh=Callback::new(move |_| load())
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
                    search_placeholder="Usuario o email..."
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
                                    .map(|usuario| {
                                        let (estado, tone) = activo_badge(usuario.activo);
                                        let username = usuario.username.clone();
                                        let email = or_dash(&usuario.email);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{username}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <StatusBadge label=estado tone=tone />
                                                </TableCell>
                                                <TableCell>
                                                    <div class="row-actions">
                                                        <RowActionButton
                                                            title="Permisos"
                                                            icon_name="lock"
                                                            disabled=busy
                                                            on_click=Callback::new(move |_| open_permissions(usuario.clone()))
                                                        />
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                    <Show when=move || state.with(|s| s.items.is_empty() && !s.loading)>
                        <div class="table__empty">"No hay usuarios"</div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}
