use crate::layout::global_context::use_global_context;
use crate::shared::components::entity_select::EntitySelect;
use leptos::prelude::*;

/// Empresa every list and form is scoped to
#[component]
pub fn EmpresaSelect() -> impl IntoView {
    let ctx = use_global_context();
    let options = ctx.empresa_options();

    view! {
        <div class="top-header__empresa">
            <label for="empresa-select">"Empresa"</label>
            <EntitySelect
                id="empresa-select"
                options=options
                value=ctx.empresa_id
                on_change=Callback::new(move |id| ctx.select_empresa(id))
                placeholder="Todas"
                disabled=ctx.empresas_loading
            />
        </div>
    }
}
