mod view_model;

pub use view_model::CajaUsuarioDetailsViewModel;

use crate::layout::global_context::use_global_context;
use crate::shared::alerts::use_alerts;
use crate::shared::components::entity_select::EntitySelect;
use crate::shared::crud::load_catalog;
use crate::shared::date_utils::{from_input, to_input};
use crate::shared::icons::icon;
use contracts::domain::a004_caja::Caja;
use contracts::domain::a008_permiso::Usuario;
use contracts::domain::common::EntityId;
use contracts::shared::catalog::Catalog;
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;

#[component]
pub fn CajaUsuarioDetails(
    id: Option<EntityId>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let alerts = use_alerts();
    let vm = CajaUsuarioDetailsViewModel::new();
    let cajas = RwSignal::new(Catalog::<Caja>::default());
    let usuarios = RwSignal::new(Catalog::<Usuario>::default());
    load_catalog(cajas, ListQuery::default().with_empresa(ctx.empresa_id.get_untracked()));
    load_catalog(usuarios, ListQuery::default());
    vm.load_if_needed(id);

    view! {
        <div class="details-container caja-usuario-details">
            <div class="details-header">
                <h3>
                    {move || if vm.is_edit_mode() { "Editar asignación" } else { "Asignar usuario a caja" }}
                </h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="caja_id">"Caja *"</label>
                    <EntitySelect
                        id="caja_id"
                        options=Signal::derive(move || cajas.with(|c| c.options()))
                        value=Signal::derive(move || vm.form.get().caja_id)
                        on_change=Callback::new(move |v| vm.form.update(|f| f.caja_id = v))
                    />
                </div>

                <div class="form-group">
                    <label for="usuario_id">"Usuario *"</label>
                    <EntitySelect
                        id="usuario_id"
                        options=Signal::derive(move || usuarios.with(|c| c.options()))
                        value=Signal::derive(move || vm.form.get().usuario_id)
                        on_change=Callback::new(move |v| vm.form.update(|f| f.usuario_id = v))
                    />
                </div>

                <div class="form-row">
                    <div class="form-group">
                        <label for="fecha_inicio">"Fecha inicio *"</label>
                        <input
                            type="date"
                            id="fecha_inicio"
                            prop:value=move || to_input(vm.form.get().fecha_inicio)
                            on:change=move |ev| vm.form.update(|f| f.fecha_inicio = from_input(&event_target_value(&ev)))
                        />
                    </div>
                    <div class="form-group">
                        <label for="fecha_fin">"Fecha fin"</label>
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
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || vm.saving.get() || vm.loading.get()
                    on:click=move |_| vm.save_command(alerts, on_saved)
                >
                    {icon("save")}
                    {move || if vm.saving.get() { "Guardando..." } else if vm.is_edit_mode() { "Guardar" } else { "Asignar" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
