use crate::layout::global_context::{use_global_context, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

/// Header of one tab in the strip
#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let ctx = use_global_context();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| ctx.active.get().as_deref() == Some(key_for_active.as_str()));

    let key_for_click = tab.key.clone();
    let on_click = move |_| ctx.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        ctx.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" title="Cerrar" on:click=on_close>"×"</button>
        </div>
    }
}
