mod view_model;

pub use view_model::EmpresaDetailsViewModel;

use crate::shared::alerts::use_alerts;
use crate::shared::forms::{opt_string, opt_text};
use crate::shared::icons::icon;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn EmpresaDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let alerts = use_alerts();
    let vm = EmpresaDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container empresa-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar empresa" } else { "Nueva empresa" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="razon_social">"Razón social *"</label>
                    <input
                        type="text"
                        id="razon_social"
                        prop:value=move || vm.form.get().razon_social
                        on:input=move |ev| vm.form.update(|f| f.razon_social = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="nombre_comercial">"Nombre comercial"</label>
                    <input
                        type="text"
                        id="nombre_comercial"
                        prop:value=move || opt_text(&vm.form.get().nombre_comercial)
                        on:input=move |ev| vm.form.update(|f| f.nombre_comercial = opt_string(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="ruc">"RUC *"</label>
                    <input
                        type="text"
                        id="ruc"
                        maxlength="11"
                        placeholder="11 dígitos"
                        prop:value=move || vm.form.get().ruc
                        on:input=move |ev| vm.form.update(|f| f.ruc = event_target_value(&ev).trim().to_string())
                    />
                </div>

                <div class="form-group">
                    <label for="direccion">"Dirección"</label>
                    <input
                        type="text"
                        id="direccion"
                        prop:value=move || opt_text(&vm.form.get().direccion)
                        on:input=move |ev| vm.form.update(|f| f.direccion = opt_string(event_target_value(&ev)))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="telefono">"Teléfono"</label>
                        <input
                            type="tel"
                            id="telefono"
                            prop:value=move || opt_text(&vm.form.get().telefono)
                            on:input=move |ev| vm.form.update(|f| f.telefono = opt_string(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || opt_text(&vm.form.get().email)
                            on:input=move |ev| vm.form.update(|f| f.email = opt_string(event_target_value(&ev)))
                        />
                    </div>
                </div>

                <div class="form-group">
                    <label for="logo_url">"URL del logo"</label>
                    <input
                        type="url"
                        id="logo_url"
                        prop:value=move || opt_text(&vm.form.get().logo_url)
                        on:input=move |ev| vm.form.update(|f| f.logo_url = opt_string(event_target_value(&ev)))
                    />
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="activo"
                        prop:checked=move || vm.form.get().activo
                        on:change=move |ev| vm.form.update(|f| f.activo = event_target_checked(&ev))
                    />
                    <label for="activo">"Activa"</label>
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
