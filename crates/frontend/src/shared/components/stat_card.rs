use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dashboard tile: icon, label, formatted value and an optional change
/// percentage against the previous period.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    /// Icon name from `icon()`
    #[prop(into)]
    icon_name: String,
    /// Already formatted value; `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(into, optional)] change_percent: Signal<Option<f64>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = change_style(pct);
            view! { <span class=cls>{format!("{}{:.1}%", arrow, pct.abs())}</span> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "...".to_string())}
                    {change_view}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

fn change_style(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_changes_are_flat() {
        assert_eq!(change_style(0.3).1, "stat-card__change stat-card__change--flat");
        assert_eq!(change_style(12.0).0, "\u{2191}");
        assert_eq!(change_style(-4.0).0, "\u{2193}");
    }
}
