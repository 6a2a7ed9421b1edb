use crate::shared::icons::icon;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Delay between the last keystroke and the query
pub const SEARCH_DEBOUNCE_MS: i32 = 300;

fn cancel_timeout(handle: Option<i32>) {
    if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
        window.clear_timeout_with_handle(handle);
    }
}

/// Text input that reports its value after the user stops typing.
#[component]
pub fn SearchInput(
    /// Value currently applied to the list
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] debounce_ms: Option<i32>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Buscar...".to_string());
    let delay = debounce_ms.unwrap_or(SEARCH_DEBOUNCE_MS);
    let text = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new(None::<i32>);

    let schedule = move |new_value: String| {
        text.set(new_value.clone());
        cancel_timeout(pending.get_value());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let fire = Closure::once_into_js(move || {
            pending.set_value(None);
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.unchecked_ref::<js_sys::Function>(),
            delay,
        ) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => log::warn!("setTimeout failed: {:?}", err),
        }
    };

    let clear = move |_| {
        cancel_timeout(pending.get_value());
        pending.set_value(None);
        text.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| schedule(event_target_value(&ev))
            />
            <Show when=move || !text.get().is_empty()>
                <button class="search-input__clear" title="Limpiar" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
