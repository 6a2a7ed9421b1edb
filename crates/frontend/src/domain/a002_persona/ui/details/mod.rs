mod view_model;

pub use view_model::PersonaDetailsViewModel;

use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::{from_input, to_input};
use crate::shared::forms::{opt_string, opt_text};
use crate::shared::icons::icon;
use contracts::domain::a002_persona::TipoDocumento;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn PersonaDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let alerts = use_alerts();
    let vm = PersonaDetailsViewModel::new();
    vm.load_if_needed(id);

    view! {
        <div class="details-container persona-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar persona" } else { "Nueva persona" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="nombres">"Nombres *"</label>
                    <input
                        type="text"
                        id="nombres"
                        prop:value=move || vm.form.get().nombres
                        on:input=move |ev| vm.form.update(|f| f.nombres = event_target_value(&ev))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="apellido_paterno">"Apellido paterno *"</label>
                        <input
                            type="text"
                            id="apellido_paterno"
                            prop:value=move || vm.form.get().apellido_paterno
                            on:input=move |ev| vm.form.update(|f| f.apellido_paterno = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="apellido_materno">"Apellido materno"</label>
                        <input
                            type="text"
                            id="apellido_materno"
                            prop:value=move || opt_text(&vm.form.get().apellido_materno)
                            on:input=move |ev| vm.form.update(|f| f.apellido_materno = opt_string(event_target_value(&ev)))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tipo_documento">"Tipo de documento *"</label>
                        <select
                            id="tipo_documento"
                            prop:value=move || vm.form.get().tipo_documento.code()
                            on:change=move |ev| {
                                if let Some(tipo) = TipoDocumento::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.tipo_documento = tipo);
                                }
                            }
                        >
                            {TipoDocumento::ALL
                                .into_iter()
                                .map(|t| view! {
                                    <option
                                        value=t.code()
                                        selected=move || vm.form.get().tipo_documento == t
                                    >
                                        {t.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="numero_documento">"Número de documento *"</label>
                        <input
                            type="text"
                            id="numero_documento"
                            maxlength="12"
                            prop:value=move || vm.form.get().numero_documento
                            on:input=move |ev| vm.form.update(|f| f.numero_documento = event_target_value(&ev).trim().to_string())
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="email">"Correo electrónico"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || opt_text(&vm.form.get().email)
                            on:input=move |ev| vm.form.update(|f| f.email = opt_string(event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="telefono">"Teléfono"</label>
                        <input
                            type="tel"
                            id="telefono"
                            prop:value=move || opt_text(&vm.form.get().telefono)
                            on:input=move |ev| vm.form.update(|f| f.telefono = opt_string(event_target_value(&ev)))
                        />
                    </div>
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

                <div class="form-group">
                    <label for="fecha_nacimiento">"Fecha de nacimiento"</label>
                    <input
                        type="date"
                        id="fecha_nacimiento"
                        prop:value=move || to_input(vm.form.get().fecha_nacimiento)
                        on:change=move |ev| vm.form.update(|f| f.fecha_nacimiento = from_input(&event_target_value(&ev)))
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
