use crate::domain::a011_cliente_inmobiliario::api;
use crate::shared::alerts::AlertService;
use contracts::domain::a011_cliente_inmobiliario::ClienteInmobiliarioDto;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct ClienteInmobiliarioDetailsViewModel {
    pub form: RwSignal<ClienteInmobiliarioDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ClienteInmobiliarioDetailsViewModel {
    pub fn new(empresa_id: Option<EntityId>) -> Self {
        Self {
            form: RwSignal::new(ClienteInmobiliarioDto {
                empresa_id,
                ..Default::default()
            }),
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
                Ok(cliente) => vm.form.set(ClienteInmobiliarioDto::from(&cliente)),
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
            vm.loading.set(false);
        });
    }

    pub fn save_command(&self, alerts: AlertService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("cliente inmobiliario {} saved", saved.id);
                    alerts.success("Cliente guardado correctamente");
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
