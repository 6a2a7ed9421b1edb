mod view_model;

pub use view_model::ConfigInteresMoraDetailsViewModel;

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::date_utils::{from_input, to_input};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

#[component]
pub fn ConfigInteresMoraDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();
    let vm = ConfigInteresMoraDetailsViewModel::new(ctx.empresa_id.get_untracked());
    vm.load_if_needed(id);

    view! {
        <div class="details-container config-mora-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar interés moratorio" } else { "Nueva configuración de interés moratorio" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="empresa_id">"Empresa *"</label>
                    <EntitySelect
                        id="empresa_id"
                        options=ctx.empresa_options()
                        value=Signal::derive(move || vm.form.get().empresa_id)
                        on_change=Callback::new(move |v| vm.form.update(|f| f.empresa_id = v))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tasa_mensual">"Tasa mensual (%) *"</label>
                        <input
                            type="text"
                            id="tasa_mensual"
                            inputmode="decimal"
                            placeholder="0.00"
                            prop:value=move || vm.tasa_text.get()
                            on:input=move |ev| vm.tasa_text.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="dias_gracia">"Días de gracia"</label>
                        <input
                            type="number"
                            id="dias_gracia"
                            min="0"
                            prop:value=move || vm.form.get().dias_gracia.to_string()
                            on:input=move |ev| {
                                let dias = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                                vm.form.update(|f| f.dias_gracia = dias);
                            }
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="fecha_inicio">"Vigente desde *"</label>
                        <input
                            type="date"
                            id="fecha_inicio"
                            prop:value=move || to_input(vm.form.get().fecha_inicio)
                            on:change=move |ev| vm.form.update(|f| f.fecha_inicio = from_input(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="fecha_fin">"Vigente hasta"</label>
                        <input
                            type="date"
                            id="fecha_fin"
                            prop:value=move || to_input(vm.form.get().fecha_fin)
                            on:change=move |ev| vm.form.update(|f| f.fecha_fin = from_input(&event_target_value(&ev)))
                        />
                    </div>
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

                <fieldset class="details-section">
                    <legend>"Simulación"</legend>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="monto_simulado">"Monto vencido"</label>
                            <input
                                type="text"
                                id="monto_simulado"
                                inputmode="decimal"
                                prop:value=move || vm.monto_simulado.get()
                                on:input=move |ev| vm.monto_simulado.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="dias_simulados">"Días de atraso"</label>
                            <input
                                type="number"
                                id="dias_simulados"
                                min="0"
                                prop:value=move || vm.dias_simulados.get().to_string()
                                on:input=move |ev| {
                                    vm.dias_simulados.set(event_target_value(&ev).parse::<u32>().unwrap_or(0))
                                }
                            />
                        </div>
                        <div class="form-group">
                            <label>"Interés moratorio"</label>
                            <div class="form-static">
                                {move || vm.mora_simulada().map(format_money).unwrap_or_else(|| "-".to_string())}
                            </div>
                        </div>
                    </div>
                </fieldset>
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
