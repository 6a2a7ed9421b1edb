use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use contracts::shared::pagination::PageMeta;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance};

/// Title with record count, refresh and create buttons.
#[component]
pub fn ListHeader(
    #[prop(into)] title: String,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
    #[prop(optional)] on_create: Option<Callback<()>>,
    #[prop(optional, into)] create_label: Option<String>,
) -> impl IntoView {
    let create_label = create_label.unwrap_or_else(|| "Nuevo".to_string());

    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {move || total.get().to_string()}
                </Badge>
            </div>
            <div class="page__header-right">
                {on_create.map(|on_create| view! {
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| on_create.run(())
                    >
                        {icon("plus")}
                        {create_label.clone()}
                    </Button>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_refresh.run(())
                    disabled=loading
                >
                    {icon("refresh")}
                    {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                </Button>
            </div>
        </div>
    }
}

/// Search box, module filters (`children`) and the pager.
#[component]
pub fn ListFilters(
    #[prop(into)] search: Signal<String>,
    on_search: Callback<String>,
    #[prop(into)] meta: Signal<PageMeta>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    <SearchInput
                        value=search
                        on_change=on_search
                        placeholder=search_placeholder.unwrap_or_else(|| "Buscar...".to_string())
                    />
                    {children.map(|c| c())}
                </div>
                <div class="filter-panel-header__center">
                    <PaginationControls
                        meta=meta
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                    />
                </div>
            </div>
        </div>
    }
}
