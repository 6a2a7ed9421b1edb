use crate::domain::a004_caja::api;
use crate::shared::alerts::AlertService;
use crate::shared::number_format::parse_amount;
use chrono::Utc;
use contracts::domain::a004_caja::{CajaDto, EstadoCaja};
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct CajaDetailsViewModel {
    pub form: RwSignal<CajaDto>,
    /// Raw text of the saldo inicial input, parsed on save
    pub saldo_inicial_text: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CajaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CajaDto::default()),
            saldo_inicial_text: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit())
    }

    pub fn load_if_needed(&self, id: Option<EntityId>) {
        let Some(id) = id else { return };
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(caja) => {
                    vm.saldo_inicial_text.set(format!("{:.2}", caja.saldo_inicial));
                    vm.form.set(CajaDto::from(&caja));
                }
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
            vm.loading.set(false);
        });
    }

    /// Closing stamps the current time; reopening clears it.
    pub fn set_estado(&self, estado: EstadoCaja) {
        self.form.update(|f| {
            f.estado = estado;
            match estado {
                EstadoCaja::Cerrada if f.fecha_cierre.is_none() => f.fecha_cierre = Some(Utc::now()),
                EstadoCaja::Abierta => f.fecha_cierre = None,
                _ => {}
            }
        });
    }

    pub fn save_command(&self, alerts: AlertService, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        match parse_amount(&self.saldo_inicial_text.get_untracked()) {
            Ok(amount) => current.saldo_inicial = amount,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        }
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }
        current.prepare_for_save(Utc::now());

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            if let Some(punto_venta_id) = current.punto_venta_id {
                let existentes = match api::fetch_by_punto_venta(punto_venta_id).await {
                    Ok(items) => items,
                    Err(e) => {
                        vm.error.set(Some(e.user_message()));
                        vm.saving.set(false);
                        return;
                    }
                };
                if let Err(msg) = current.validate_central_unica(&existentes) {
                    vm.error.set(Some(msg));
                    vm.saving.set(false);
                    return;
                }
            }

            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("caja {} saved", saved.id);
                    alerts.success("Caja guardada correctamente");
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
