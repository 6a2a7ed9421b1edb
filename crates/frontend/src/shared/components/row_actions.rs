use crate::shared::icons::icon;
use leptos::prelude::*;

/// Edit / delete buttons at the end of a table row. Extra actions (close,
/// finalize) go in `children` before them.
#[component]
pub fn RowActions(
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="row-actions">
            {children.map(|c| c())}
            <button
                class="row-actions__btn"
                title="Editar"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_edit.run(());
                }
            >
                {icon("edit")}
            </button>
            <button
                class="row-actions__btn row-actions__btn--danger"
                title="Eliminar"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_delete.run(());
                }
            >
                {icon("delete")}
            </button>
        </div>
    }
}

/// Secondary row action with an icon and a tooltip
#[component]
pub fn RowActionButton(
    #[prop(into)] title: String,
    #[prop(into)] icon_name: String,
    on_click: Callback<()>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            class="row-actions__btn"
            title=title
            disabled=move || disabled.get()
            on:click=move |ev| {
                ev.stop_propagation();
                on_click.run(());
            }
        >
            {icon(&icon_name)}
        </button>
    }
}
