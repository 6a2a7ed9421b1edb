mod view_model;

pub use view_model::CajaDetailsViewModel;

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::crud::load_catalog;
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::a003_punto_venta::PuntoVenta;
use contracts::domain::a004_caja::{EstadoCaja, TipoCaja};
use contracts::domain::common::EntityId;
use contracts::shared::catalog::Catalog;
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;

#[component]
pub fn CajaDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();
    let vm = CajaDetailsViewModel::new();
    let puntos = RwSignal::new(Catalog::<PuntoVenta>::default());
    load_catalog(puntos, ListQuery::default().with_empresa(ctx.empresa_id.get_untracked()));
    vm.load_if_needed(id);

    view! {
        <div class="details-container caja-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar caja" } else { "Nueva caja" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-row">
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
                        <label for="punto_venta_id">"Punto de venta *"</label>
                        <EntitySelect
                            id="punto_venta_id"
                            options=Signal::derive(move || puntos.with(|c| c.options()))
                            value=Signal::derive(move || vm.form.get().punto_venta_id)
                            on_change=Callback::new(move |v| vm.form.update(|f| f.punto_venta_id = v))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="tipo">"Tipo"</label>
                        <select
                            id="tipo"
                            class="form-select"
                            on:change=move |ev| {
                                if let Some(tipo) = TipoCaja::from_code(&event_target_value(&ev)) {
                                    vm.form.update(|f| f.tipo = tipo);
                                }
                            }
                        >
                            {TipoCaja::ALL
                                .into_iter()
                                .map(|tipo| view! {
                                    <option
                                        value=tipo.code()
                                        selected=move || vm.form.get().tipo == tipo
                                    >
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
                                if let Some(estado) = EstadoCaja::from_code(&event_target_value(&ev)) {
                                    vm.set_estado(estado);
                                }
                            }
                        >
                            {EstadoCaja::ALL
                                .into_iter()
                                .map(|estado| view! {
                                    <option
                                        value=estado.code()
                                        selected=move || vm.form.get().estado == estado
                                    >
                                        {estado.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="saldo_inicial">"Saldo inicial"</label>
                        <input
                            type="text"
                            id="saldo_inicial"
                            inputmode="decimal"
                            placeholder="0.00"
                            disabled=move || vm.is_edit_mode()
                            prop:value=move || vm.saldo_inicial_text.get()
                            on:input=move |ev| vm.saldo_inicial_text.set(event_target_value(&ev))
                        />
                    </div>
                    <Show when=move || vm.is_edit_mode()>
                        <div class="form-group">
                            <label>"Saldo actual"</label>
                            <div class="form-static">{move || format_money(vm.form.get().saldo_actual)}</div>
                        </div>
                    </Show>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label>"Apertura"</label>
                        <div class="form-static">{move || format_datetime_opt(vm.form.get().fecha_apertura)}</div>
                    </div>
                    <div class="form-group">
                        <label>"Cierre"</label>
                        <div class="form-static">{move || format_datetime_opt(vm.form.get().fecha_cierre)}</div>
                    </div>
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
