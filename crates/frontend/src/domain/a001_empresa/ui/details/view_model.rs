use crate::domain::a001_empresa::api;
use crate::shared::alerts::AlertService;
use contracts::domain::a001_empresa::EmpresaDto;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct EmpresaDetailsViewModel {
    pub form: RwSignal<EmpresaDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl EmpresaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EmpresaDto::default()),
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
                Ok(empresa) => vm.form.set(EmpresaDto::from(&empresa)),
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
                    log::info!("empresa {} saved", saved.id);
                    alerts.success(if current.is_edit() {
                        "Empresa actualizada correctamente"
                    } else {
                        "Empresa creada correctamente"
                    });
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
