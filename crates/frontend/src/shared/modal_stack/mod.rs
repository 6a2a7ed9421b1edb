use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_style: Option<String>,
    modal_class: Option<String>,
    can_close: Option<CloseGuard>,
}

impl ModalEntry {
    fn closable(&self) -> bool {
        self.can_close.as_ref().map_or(true, |guard| guard())
    }
}

/// Lets a modal close itself from its own buttons.
#[derive(Clone)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of open modals (form over list, confirmation over form).
///
/// Escape and overlay clicks close only the topmost one.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    fn insert(
        &self,
        modal_style: Option<String>,
        modal_class: Option<String>,
        can_close: Option<CloseGuard>,
        builder: ModalBuilder,
    ) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_style,
                modal_class,
                can_close,
            })
        });
        ModalHandle { id, svc: *self }
    }

    /// Push with style/class overrides for the modal surface.
    pub fn push_with_frame<F>(
        &self,
        modal_style: Option<String>,
        modal_class: Option<String>,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.insert(modal_style, modal_class, None, Arc::new(builder))
    }

    /// While `can_close` returns false, Escape and overlay clicks are ignored.
    pub fn push_guarded<F, G>(
        &self,
        modal_style: Option<String>,
        modal_class: Option<String>,
        can_close: G,
        builder: F,
    ) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.insert(modal_style, modal_class, Some(Arc::new(can_close)), Arc::new(builder))
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Removes the modal on the next tick, after the DOM event that
    /// triggered the close has finished dispatching.
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn close_top_if_allowed(&self) {
        let top = self.stack.with_untracked(|s| s.last().cloned());
        if let Some(entry) = top {
            if entry.closable() {
                self.close_deferred(entry.id);
            }
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_modal_stack() -> ModalStackService {
    use_context::<ModalStackService>().expect("ModalStackService not provided in context")
}

/// Modals stack above the page and above each other in push order
pub fn layer_z_index(depth: usize) -> i32 {
    1000 + depth as i32
}

/// Renders the modal stack at the application root. Must be mounted once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal_stack();

    Effect::new(move |_| {
        let on_keydown = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let is_escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|k| k.key() == "Escape");
            if is_escape {
                svc.close_top_if_allowed();
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
            // The host lives as long as the app.
            on_keydown.forget();
        }
    });

    let layers = move || {
        svc.stack
            .get()
            .into_iter()
            .enumerate()
            .collect::<Vec<(usize, ModalEntry)>>()
    };

    view! {
        <Show when=move || svc.is_open()>
            <For
                each=layers
                key=|(_, entry)| entry.id
                children=move |(idx, entry)| {
                    let on_close = {
                        let entry = entry.clone();
                        Callback::new(move |_| {
                            if entry.closable() {
                                svc.close_deferred(entry.id);
                            }
                        })
                    };
                    let content = (entry.builder)(ModalHandle { id: entry.id, svc });

                    view! {
                        <ModalFrame
                            z_index=layer_z_index(idx)
                            on_close=on_close
                            modal_style=entry.modal_style.clone().unwrap_or_default()
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_modals_sit_on_top() {
        assert_eq!(layer_z_index(0), 1000);
        assert!(layer_z_index(2) > layer_z_index(1));
    }
}
