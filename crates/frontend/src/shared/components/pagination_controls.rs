use crate::shared::icons::icon;
use contracts::shared::pagination::PageMeta;
use leptos::prelude::*;

/// Page sizes offered by every list unless overridden
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Text shown between the arrows: "page / pages (total)"
pub fn pagination_label(meta: &PageMeta) -> String {
    format!("{} / {} ({})", meta.page, meta.pages.max(1), meta.total)
}

/// Pager driven by the `meta` of the paginated envelope (1-based pages).
#[component]
pub fn PaginationControls(
    #[prop(into)] meta: Signal<PageMeta>,
    /// Receives the 1-based page to load
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let options = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    let first_disabled = move || !meta.get().has_prev();
    let last_disabled = move || !meta.get().has_next();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                title="Primera página"
                disabled=first_disabled
                on:click=move |_| on_page_change.run(1)
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Página anterior"
                disabled=first_disabled
                on:click=move |_| {
                    let m = meta.get_untracked();
                    if m.has_prev() {
                        on_page_change.run(m.page - 1);
                    }
                }
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">{move || pagination_label(&meta.get())}</span>
            <button
                class="pagination-btn"
                title="Página siguiente"
                disabled=last_disabled
                on:click=move |_| {
                    let m = meta.get_untracked();
                    if m.has_next() {
                        on_page_change.run(m.page + 1);
                    }
                }
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Última página"
                disabled=last_disabled
                on:click=move |_| on_page_change.run(meta.get_untracked().pages.max(1))
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || meta.get().limit.to_string()
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
            >
                {options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || meta.get().limit == size>
                                {size.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based() {
        assert_eq!(pagination_label(&PageMeta::new(42, 2, 10)), "2 / 5 (42)");
        assert_eq!(pagination_label(&PageMeta::new(0, 1, 10)), "1 / 1 (0)");
    }
}
