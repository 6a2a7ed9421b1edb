use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::{use_global_context, AppGlobalContext};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::alerts::{AlertHost, AlertService};
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_router_integration();
    ctx.load_empresas();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());
    provide_context(ModalStackService::new());
    provide_context(AlertService::new());

    view! {
        <MainLayout />
        <ModalHost />
        <AlertHost />
    }
}
