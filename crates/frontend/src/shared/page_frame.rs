use super::page_standard::*;
use leptos::prelude::*;

/// Root wrapper of every tab page.
///
/// Sets `id`, `data-page-category` and the `page` class with a modifier
/// for detail and dashboard pages.
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a004_caja--list"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
