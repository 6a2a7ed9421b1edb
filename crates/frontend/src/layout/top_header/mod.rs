//! Top bar: sidebar toggle, title and the empresa selector.

mod empresa_select;

pub use empresa_select::EmpresaSelect;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Inmobiliaria - Back office"</span>
            </div>

            <div class="top-header__actions">
                <EmpresaSelect />
                <button
                    class="top-header__icon-btn"
                    title="Recargar empresas"
                    on:click=move |_| ctx.load_empresas()
                >
                    {icon("refresh")}
                </button>
            </div>
        </div>
    }
}
