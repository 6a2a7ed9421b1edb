use crate::domain::a009_config_interes_mora::api;
use crate::shared::alerts::AlertService;
use crate::shared::number_format::parse_amount;
use contracts::domain::a009_config_interes_mora::ConfigInteresMoraDto;
use contracts::domain::common::EntityId;
use contracts::shared::dates::today;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ConfigInteresMoraDetailsViewModel {
    pub form: RwSignal<ConfigInteresMoraDto>,
    pub tasa_text: RwSignal<String>,
    /// Simulator inputs, not persisted
    pub monto_simulado: RwSignal<String>,
    pub dias_simulados: RwSignal<u32>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ConfigInteresMoraDetailsViewModel {
    pub fn new(empresa_id: Option<EntityId>) -> Self {
        Self {
            form: RwSignal::new(ConfigInteresMoraDto {
                empresa_id,
                fecha_inicio: Some(today()),
                ..Default::default()
            }),
            tasa_text: RwSignal::new(String::new()),
            monto_simulado: RwSignal::new("1000".to_string()),
            dias_simulados: RwSignal::new(30),
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
                Ok(config) => {
                    vm.tasa_text.set(format!("{:.2}", config.tasa_mensual));
                    vm.form.set(ConfigInteresMoraDto::from(&config));
                }
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
            vm.loading.set(false);
        });
    }

    /// Interest for the simulator inputs with the rate currently typed
    pub fn mora_simulada(&self) -> Option<f64> {
        let tasa = parse_amount(&self.tasa_text.get()).ok()?;
        let monto = parse_amount(&self.monto_simulado.get()).ok()?;
        let dias = self.dias_simulados.get();
        Some(self.form.with(|f| {
            let mut config = f.clone();
            config.tasa_mensual = tasa;
            config.simular_mora(monto, dias)
        }))
    }

    pub fn save_command(&self, alerts: AlertService, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        match parse_amount(&self.tasa_text.get_untracked()) {
            Ok(tasa) => current.tasa_mensual = tasa,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        }
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }
        let Some(empresa_id) = current.empresa_id else { return };

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let check = api::fetch_by_empresa(empresa_id)
                .await
                .map_err(|e| e.user_message())
                .and_then(|existentes| current.validate_sin_solapamiento(&existentes));
            if let Err(msg) = check {
                vm.error.set(Some(msg));
                vm.saving.set(false);
                return;
            }

            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("config interes mora {} saved", saved.id);
                    alerts.success("Configuración guardada correctamente");
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
