mod view_model;

pub use view_model::{schedule_totals, PlanPagoDetailsViewModel};

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::date_utils::{format_date, from_input, to_input};
use crate::shared::icons::icon;
use crate::shared::number_format::format_money;
use contracts::domain::a012_plan_pago::MAX_CUOTAS;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PlanPagoDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();
    let vm = PlanPagoDetailsViewModel::new(ctx.empresa_id.get_untracked());
    vm.load_if_needed(id);
    vm.load_feriados();

    let cronograma = Memo::new(move |_| vm.cronograma());

    view! {
        <div class="details-container plan-pago-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Editar plan de pago" } else { "Nuevo plan de pago" }}</h3>
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
                        <label for="empresa_id">"Empresa *"</label>
                        <EntitySelect
                            id="empresa_id"
                            options=ctx.empresa_options()
                            value=Signal::derive(move || vm.form.get().empresa_id)
                            on_change=Callback::new(move |v| vm.form.update(|f| f.empresa_id = v))
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="numero_cuotas">"Número de cuotas *"</label>
                        <input
                            type="number"
                            id="numero_cuotas"
                            min="1"
                            max=MAX_CUOTAS.to_string()
                            prop:value=move || vm.form.get().numero_cuotas.to_string()
                            on:input=move |ev| {
                                let cuotas = event_target_value(&ev).parse::<u32>().unwrap_or(0);
                                vm.form.update(|f| f.numero_cuotas = cuotas);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="tasa">"Tasa de interés anual (%)"</label>
                        <input
                            type="text"
                            id="tasa"
                            inputmode="decimal"
                            prop:value=move || vm.tasa_text.get()
                            on:input=move |ev| vm.tasa_text.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="inicial">"Cuota inicial (%)"</label>
                        <input
                            type="text"
                            id="inicial"
                            inputmode="decimal"
                            prop:value=move || vm.inicial_text.get()
                            on:input=move |ev| vm.inicial_text.set(event_target_value(&ev))
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
                    <label for="activo">"Activo"</label>
                </div>

                <fieldset class="details-section">
                    <legend>"Simulación de cronograma"</legend>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="precio">"Precio del inmueble"</label>
                            <input
                                type="text"
                                id="precio"
                                inputmode="decimal"
                                prop:value=move || vm.precio_text.get()
                                on:input=move |ev| vm.precio_text.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="fecha_inicio">"Fecha de inicio"</label>
                            <input
                                type="date"
                                id="fecha_inicio"
                                prop:value=move || to_input(vm.fecha_inicio.get())
                                on:change=move |ev| vm.fecha_inicio.set(from_input(&event_target_value(&ev)))
                            />
                        </div>
                        <div class="form-group form-group--inline">
                            <input
                                type="checkbox"
                                id="dias_habiles"
                                prop:checked=move || vm.dias_habiles.get()
                                on:change=move |ev| vm.dias_habiles.set(event_target_checked(&ev))
                            />
                            <label for="dias_habiles">"Vencimientos en días hábiles"</label>
                        </div>
                    </div>

                    {move || match cronograma.get() {
                        Err(msg) => view! { <div class="form-hint">{msg}</div> }.into_any(),
                        Ok(cuotas) => {
                            let (capital, interes, total) = schedule_totals(&cuotas);
                            view! {
                                <div class="table-wrapper table-wrapper--scroll">
                                    <Table attr:style="width: 100%;">
                                        <TableHeader>
                                            <TableRow>
                                                <TableHeaderCell>"N°"</TableHeaderCell>
                                                <TableHeaderCell>"Vencimiento"</TableHeaderCell>
                                                <TableHeaderCell>"Capital"</TableHeaderCell>
                                                <TableHeaderCell>"Interés"</TableHeaderCell>
                                                <TableHeaderCell>"Cuota"</TableHeaderCell>
                                                <TableHeaderCell>"Saldo"</TableHeaderCell>
                                            </TableRow>
                                        </TableHeader>
                                        <TableBody>
                                            {cuotas
                                                .into_iter()
                                                .map(|c| view! {
                                                    <TableRow>
                                                        <TableCell>{c.numero}</TableCell>
                                                        <TableCell>{format_date(c.fecha_vencimiento)}</TableCell>
                                                        <TableCell class="table__cell--right">{format_money(c.capital)}</TableCell>
                                                        <TableCell class="table__cell--right">{format_money(c.interes)}</TableCell>
                                                        <TableCell class="table__cell--right">{format_money(c.monto)}</TableCell>
                                                        <TableCell class="table__cell--right">{format_money(c.saldo)}</TableCell>
                                                    </TableRow>
                                                })
                                                .collect_view()}
                                            <TableRow class="table__totals-row">
                                                <TableCell>""</TableCell>
                                                <TableCell>"Total"</TableCell>
                                                <TableCell class="table__cell--right">{format_money(capital)}</TableCell>
                                                <TableCell class="table__cell--right">{format_money(interes)}</TableCell>
                                                <TableCell class="table__cell--right">{format_money(total)}</TableCell>
                                                <TableCell>""</TableCell>
                                            </TableRow>
                                        </TableBody>
                                    </Table>
                                </div>
                            }
                            .into_any()
                        }
                    }}
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
