use contracts::domain::common::EntityId;
use leptos::prelude::*;

/// `<select>` over `(id, label)` options. The empty option maps to `None`.
#[component]
pub fn EntitySelect(
    #[prop(into)] options: Signal<Vec<(EntityId, String)>>,
    #[prop(into)] value: Signal<Option<EntityId>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Seleccione...".to_string());

    view! {
        <select
            id=id.unwrap_or_default()
            class="form-select"
            disabled=move || disabled.get()
            prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
            on:change=move |ev| on_change.run(parse_option(&event_target_value(&ev)))
        >
            <option value="">{placeholder}</option>
            {move || {
                options
                    .get()
                    .into_iter()
                    .map(|(opt_id, label)| {
                        view! {
                            <option
                                value=opt_id.to_string()
                                selected=move || value.get() == Some(opt_id)
                            >
                                {label}
                            </option>
                        }
                    })
                    .collect_view()
            }}
        </select>
    }
}

pub fn parse_option(raw: &str) -> Option<EntityId> {
    raw.trim().parse::<EntityId>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_option_is_none() {
        assert_eq!(parse_option(""), None);
        assert_eq!(parse_option("42"), Some(42));
    }
}
