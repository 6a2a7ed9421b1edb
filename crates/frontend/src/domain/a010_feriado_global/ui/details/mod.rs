use crate::domain::a010_feriado_global::api;
use crate::shared::alerts::use_alerts;
use crate::shared::date_utils::{from_input, to_input};
use crate::shared::icons::icon;
use contracts::domain::a010_feriado_global::{FeriadoGlobal, FeriadoGlobalDto};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Holiday form. The record comes from the in-memory catalog of the list,
/// which is also used for the duplicate-date check.
#[component]
pub fn FeriadoGlobalDetails(
    record: Option<FeriadoGlobal>,
    #[prop(into)] existentes: Signal<Vec<FeriadoGlobal>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let alerts = use_alerts();
    let form = RwSignal::new(record.as_ref().map(FeriadoGlobalDto::from).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let is_edit = move || form.with(|f| f.is_edit());

    let save = move || {
        let current = form.get_untracked();
        if let Err(msg) = existentes.with_untracked(|items| current.validate(items)) {
            error.set(Some(msg));
            return;
        }
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("feriado {} saved", saved.id);
                    alerts.success("Feriado guardado correctamente");
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    view! {
        <div class="details-container feriado-details">
            <div class="details-header">
                <h3>{move || if is_edit() { "Editar feriado" } else { "Nuevo feriado" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="fecha">"Fecha *"</label>
                    <input
                        type="date"
                        id="fecha"
                        prop:value=move || to_input(form.get().fecha)
                        on:change=move |ev| form.update(|f| f.fecha = from_input(&event_target_value(&ev)))
                    />
                </div>

                <div class="form-group">
                    <label for="descripcion">"Descripción *"</label>
                    <input
                        type="text"
                        id="descripcion"
                        prop:value=move || form.get().descripcion
                        on:input=move |ev| form.update(|f| f.descripcion = event_target_value(&ev))
                    />
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="recurrente"
                        prop:checked=move || form.get().recurrente
                        on:change=move |ev| form.update(|f| f.recurrente = event_target_checked(&ev))
                    />
                    <label for="recurrente">"Se repite cada año"</label>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    disabled=move || saving.get()
                    on:click=move |_| save()
                >
                    {icon("save")}
                    {move || if saving.get() { "Guardando..." } else if is_edit() { "Guardar" } else { "Crear" }}
                </button>
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancelar"
                </button>
            </div>
        </div>
    }
}
