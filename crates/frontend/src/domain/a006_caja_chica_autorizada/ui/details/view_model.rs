use crate::domain::a006_caja_chica_autorizada::api;
use crate::shared::alerts::AlertService;
use crate::shared::number_format::parse_amount;
use contracts::domain::a004_caja::Caja;
use contracts::domain::a006_caja_chica_autorizada::CajaChicaAutorizadaDto;
use contracts::domain::common::EntityId;
use contracts::shared::catalog::Catalog;
use contracts::shared::dates::today;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct CajaChicaAutorizadaDetailsViewModel {
    pub form: RwSignal<CajaChicaAutorizadaDto>,
    pub monto_text: RwSignal<String>,
    /// Cajas of the selected empresa; the rule on caja type is checked against it
    pub cajas: RwSignal<Catalog<Caja>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CajaChicaAutorizadaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CajaChicaAutorizadaDto {
                fecha_inicio: Some(today()),
                ..Default::default()
            }),
            monto_text: RwSignal::new(String::new()),
            cajas: RwSignal::new(Catalog::default()),
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
                Ok(autorizacion) => {
                    vm.monto_text.set(format!("{:.2}", autorizacion.monto_autorizado));
                    vm.form.set(CajaChicaAutorizadaDto::from(&autorizacion));
                }
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
            vm.loading.set(false);
        });
    }

    pub fn save_command(&self, alerts: AlertService, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        match parse_amount(&self.monto_text.get_untracked()) {
            Ok(monto) => current.monto_autorizado = monto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        }
        let valid = self.cajas.with_untracked(|c| current.validate(c.items()));
        if let Err(msg) = valid {
            self.error.set(Some(msg));
            return;
        }
        current.prepare_for_save();

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("caja chica autorizada {} saved", saved.id);
                    alerts.success("Autorización guardada correctamente");
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
