mod view_model;

pub use view_model::RolDetailsViewModel;

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::forms::{opt_string, opt_text};
use crate::shared::icons::icon;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn RolDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();
    let vm = RolDetailsViewModel::new(ctx.empresa_id.get_untracked());
    vm.load_if_needed(id);

    view! {
        <div class="details-container rol-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar rol" } else { "Nuevo rol" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="nombre">"Nombre *"</label>
                    <input
                        type="text"
                        id="nombre"
                        prop:value=move || vm.form.get().nombre
                        on:input=move |ev| vm.form.update(|f| f.nombre = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="descripcion">"Descripción"</label>
                    <textarea
                        id="descripcion"
                        rows="3"
                        prop:value=move || opt_text(&vm.form.get().descripcion)
                        on:input=move |ev| vm.form.update(|f| f.descripcion = opt_string(event_target_value(&ev)))
                    ></textarea>
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="es_global"
                        prop:checked=move || vm.form.get().es_global
                        on:change=move |ev| vm.form.update(|f| f.es_global = event_target_checked(&ev))
                    />
                    <label for="es_global">"Rol global (aplica a todas las empresas)"</label>
                </div>

                <div class="form-group">
                    <label for="empresa_id">"Empresa"</label>
                    <EntitySelect
                        id="empresa_id"
                        options=ctx.empresa_options()
                        value=Signal::derive(move || vm.form.get().empresa_id)
                        disabled=Signal::derive(move || vm.form.get().es_global)
                        on_change=Callback::new(move |v| vm.form.update(|f| f.empresa_id = v))
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || vm.saving.get() || vm.loading.get()
                    on:click=move |_| vm.save_command(alerts, on_saved)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Guardando..." } else if vm.is_edit_mode() { "Guardar" } else { "Crear" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
