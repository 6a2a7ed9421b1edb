use crate::domain::a005_caja_usuario::api;
use crate::shared::alerts::AlertService;
use contracts::domain::a005_caja_usuario::CajaUsuarioDto;
use contracts::domain::common::EntityId;
use contracts::shared::dates::today;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct CajaUsuarioDetailsViewModel {
    pub form: RwSignal<CajaUsuarioDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CajaUsuarioDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(CajaUsuarioDto {
                fecha_inicio: Some(today()),
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
                Ok(asignacion) => vm.form.set(CajaUsuarioDto::from(&asignacion)),
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
        let (Some(caja_id), Some(usuario_id)) = (current.caja_id, current.usuario_id) else {
            return;
        };

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            let check = api::fetch_assignments(caja_id, usuario_id)
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
                    log::info!("caja usuario {} saved", saved.id);
                    alerts.success("Asignación guardada correctamente");
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
