use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn targets_overlay(ev: &MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Overlay plus modal surface. Forms and dialogs render their own header
/// and action bar inside.
#[component]
pub fn ModalFrame(
    /// Called when the overlay is clicked
    on_close: Callback<()>,
    /// Close on overlay click (default: true)
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// Stacking order of the overlay (default: 1000)
    #[prop(optional)]
    z_index: Option<i32>,
    /// Extra class for `div.modal`
    #[prop(optional)]
    modal_class: Option<String>,
    /// Extra inline style for `div.modal`
    #[prop(optional)]
    modal_style: Option<String>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    // A drag that starts inside the modal and ends on the overlay must not close it.
    let pressed_on_overlay = StoredValue::new(false);

    let on_mouse_down = move |ev: MouseEvent| {
        pressed_on_overlay.set_value(targets_overlay(&ev));
    };

    let on_overlay_click = move |ev: MouseEvent| {
        let close = close_on_overlay && pressed_on_overlay.get_value() && targets_overlay(&ev);
        pressed_on_overlay.set_value(false);
        if close {
            // Next tick: the overlay is removed by the close itself.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let surface_class = match modal_class {
        Some(extra) if !extra.is_empty() => format!("modal {extra}"),
        _ => "modal".to_string(),
    };
    let surface_style = match modal_style {
        Some(extra) if !extra.is_empty() => format!("position: relative; {extra}"),
        _ => "position: relative;".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=on_mouse_down
            on:click=on_overlay_click
        >
            <div class=surface_class style=surface_style on:click=|ev: MouseEvent| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
