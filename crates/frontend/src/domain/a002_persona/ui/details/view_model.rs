use crate::domain::a002_persona::api;
use crate::shared::alerts::AlertService;
use contracts::domain::a002_persona::PersonaDto;
use contracts::domain::common::EntityId;
use contracts::shared::dates::today;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct PersonaDetailsViewModel {
    pub form: RwSignal<PersonaDto>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl PersonaDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(PersonaDto::default()),
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
                Ok(persona) => vm.form.set(PersonaDto::from(&persona)),
                Err(e) => vm.error.set(Some(format!("Error al cargar: {}", e.user_message()))),
            }
            vm.loading.set(false);
        });
    }

    pub fn save_command(&self, alerts: AlertService, on_saved: Callback<()>) {
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate(today()) {
            self.error.set(Some(msg));
            return;
        }

        let vm = *self;
        vm.error.set(None);
        vm.saving.set(true);
        spawn_local(async move {
            match api::save(&current).await {
                Ok(saved) => {
                    log::info!("persona {} saved", saved.id);
                    alerts.success(format!("Persona \"{}\" guardada", saved.nombre_completo()));
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(e.user_message())),
            }
            vm.saving.set(false);
        });
    }
}
