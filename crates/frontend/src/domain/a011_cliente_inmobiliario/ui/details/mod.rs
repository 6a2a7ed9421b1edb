mod view_model;

pub use view_model::ClienteInmobiliarioDetailsViewModel;

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::crud::load_catalog;
use crate::shared::forms::{opt_string, opt_text};
use crate::shared::icons::icon;
use contracts::domain::a002_persona::Persona;
use contracts::domain::a011_cliente_inmobiliario::{EstadoCliente, TipoCliente};
use contracts::domain::common::EntityId;
use contracts::shared::catalog::Catalog;
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;

const MAX_OBSERVACIONES: usize = 500;

/// Characters, not bytes
fn char_count(text: Option<&str>) -> usize {
    text.map_or(0, |t| t.chars().count())
}

#[component]
pub fn ClienteInmobiliarioDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();
    let vm = ClienteInmobiliarioDetailsViewModel::new(ctx.empresa_id.get_untracked());
    let personas = RwSignal::new(Catalog::<Persona>::default());
    load_catalog(personas, ListQuery::default());
    vm.load_if_needed(id);

    let observaciones_len = move || {
        vm.form
            .with(|f| char_count(f.observaciones.as_deref()))
    };

    view! {
        <div class="details-container cliente-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar cliente" } else { "Nuevo cliente inmobiliario" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
                    <div class="form-group">
                        <label for="empresa_id">"Empresa *"</label>
                        <EntitySelect
                            id="empresa_id"
                            options=ctx.empresa_options()
                            value=Signal::derive(move || vm.form.get().empresa_id)
                            on_change=Callback::new(move |v| vm.form.update(|f| f.empresa_id = v))
                        />
                    </div>
                    <div class="form-group">
                        <label for="persona_id">"Persona *"</label>
                        <EntitySelect
                            id="persona_id"
                            options=Signal::derive(move || personas.with(|c| c.options()))
                            value=Signal::derive(move || vm.form.get().persona_id)
                            disabled=Signal::derive(move || vm.is_edit_mode())
                            on_change=Callback::new(move |v| vm.form.update(|f| f.persona_id = v))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tipo">"Tipo de cliente"</label>
                        <select
                            id="tipo"
                            class="form-select"
                            on:change=move |ev| {
                                if let Some(tipo) = TipoCliente::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.tipo = tipo);
                                }
                            }
                        >
                            {TipoCliente::ALL
                                .into_iter()
                                .map(|tipo| view! {
                                    <option value=tipo.code() selected=move || vm.form.get().tipo == tipo>
                                        {tipo.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="estado">"Estado"</label>
                        <select
                            id="estado"
                            class="form-select"
                            on:change=move |ev| {
                                if let Some(estado) = EstadoCliente::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.estado = estado);
                                }
                            }
                        >
                            {EstadoCliente::ALL
                                .into_iter()
                                .map(|estado| view! {
                                    <option value=estado.code() selected=move || vm.form.get().estado == estado>
                                        {estado.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-group">
                    <label for="observaciones">"Observaciones"</label>
                    <textarea
                        id="observaciones"
                        rows="4"
                        prop:value=move || opt_text(&vm.form.get().observaciones)
                        on:input=move |ev| vm.form.update(|f| f.observaciones = opt_string(event_target_value(&ev)))
                    ></textarea>
                    <small
                        class="form-hint"
                        class:form-hint--error={move || observaciones_len() > MAX_OBSERVACIONES}
                    >
                        {move || format!("{} / {}", observaciones_len(), MAX_OBSERVACIONES)}
                    </small>
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observaciones_counter_counts_characters() {
        assert_eq!(char_count(None), 0);
        assert_eq!(char_count(Some("Año próximo")), 11);
        assert!(char_count(Some(&"ñ".repeat(MAX_OBSERVACIONES))) <= MAX_OBSERVACIONES);
        assert!(char_count(Some(&"a".repeat(MAX_OBSERVACIONES + 1))) > MAX_OBSERVACIONES);
    }
}
