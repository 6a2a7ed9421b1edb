use crate::shared::http;
use contracts::domain::a001_empresa::Empresa;
use contracts::domain::common::{AggregateRoot, EntityId};
use contracts::shared::pagination::ListQuery;
use leptos::prelude::*;
use std::collections::HashMap;
use wasm_bindgen_futures::spawn_local;
use web_sys::window;

/// Application-wide state: open tabs, sidebar visibility and the empresa
/// every list is scoped to.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub empresa_id: RwSignal<Option<EntityId>>,
    pub empresas: RwSignal<Vec<Empresa>>,
    pub empresas_loading: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            empresa_id: RwSignal::new(None),
            empresas: RwSignal::new(vec![]),
            empresas_loading: RwSignal::new(false),
        }
    }

    /// Restores `?active=..&empresa=..` on start and keeps the URL in sync.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();

        if let Some(empresa) = params.get("empresa").and_then(|v| v.parse::<EntityId>().ok()) {
            self.empresa_id.set(Some(empresa));
        }
        if let Some(active_key) = params.get("active").cloned() {
            let title = crate::layout::tabs::tab_label_for_key(&active_key);
            self.open_tab(&active_key, title);
        }

        let this = *self;
        Effect::new(move |_| {
            let mut params = HashMap::new();
            if let Some(active_key) = this.active.get() {
                params.insert("active".to_string(), active_key);
            }
            if let Some(empresa) = this.empresa_id.get() {
                params.insert("empresa".to_string(), empresa.to_string());
            }
            if params.is_empty() {
                return;
            }

            let new_url = format!("?{}", serde_qs::to_string(&params).unwrap_or_default());
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Loads every empresa once and selects a default when none is chosen.
    pub fn load_empresas(&self) {
        let this = *self;
        this.empresas_loading.set(true);
        spawn_local(async move {
            match http::fetch_all_pages::<Empresa>(Empresa::resource(), ListQuery::default()).await {
                Ok(items) => {
                    log::debug!("loaded {} empresas", items.len());
                    let current = this.empresa_id.get_untracked();
                    let selected = default_empresa(&items, current);
                    this.empresas.set(items);
                    if selected != current {
                        this.empresa_id.set(selected);
                    }
                }
                Err(err) => log::error!("empresas could not be loaded: {}", err),
            }
            this.empresas_loading.set(false);
        });
    }

    pub fn select_empresa(&self, id: Option<EntityId>) {
        log::info!("empresa selected: {:?}", id);
        self.empresa_id.set(id);
    }

    pub fn selected_empresa(&self) -> Option<Empresa> {
        let id = self.empresa_id.get()?;
        self.empresas
            .with(|items| items.iter().find(|e| e.id == id).cloned())
    }

    /// `(id, name)` pairs for empresa selects in forms
    pub fn empresa_options(&self) -> Signal<Vec<(EntityId, String)>> {
        let empresas = self.empresas;
        Signal::derive(move || {
            empresas.with(|items| items.iter().map(|e| (e.id, e.display_name())).collect())
        })
    }

    pub fn empresa_name(&self, id: EntityId) -> String {
        self.empresas.with(|items| {
            items
                .iter()
                .find(|e| e.id == id)
                .map(|e| e.display_name())
                .unwrap_or_else(|| format!("#{}", id))
        })
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context")
}

/// Keeps the current selection if it still exists, otherwise the first
/// active empresa, otherwise the first one.
pub fn default_empresa(empresas: &[Empresa], current: Option<EntityId>) -> Option<EntityId> {
    if let Some(id) = current {
        if empresas.iter().any(|e| e.id == id) {
            return Some(id);
        }
    }
    empresas
        .iter()
        .find(|e| e.activo)
        .or_else(|| empresas.first())
        .map(|e| e.id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empresa(id: EntityId, activo: bool) -> Empresa {
        Empresa {
            id,
            razon_social: format!("Empresa {id}"),
            nombre_comercial: None,
            ruc: "20123456789".into(),
            direccion: None,
            telefono: None,
            email: None,
            logo_url: None,
            activo,
        }
    }

    #[test]
    fn default_empresa_prefers_current_then_active() {
        let items = vec![empresa(1, false), empresa(2, true), empresa(3, true)];
        assert_eq!(default_empresa(&items, Some(3)), Some(3));
        assert_eq!(default_empresa(&items, Some(99)), Some(2));
        assert_eq!(default_empresa(&items, None), Some(2));
        assert_eq!(default_empresa(&[empresa(7, false)], None), Some(7));
        assert_eq!(default_empresa(&[], Some(1)), None);
    }
}
