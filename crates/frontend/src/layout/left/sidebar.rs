//! Sidebar menu grouped by business area

use crate::layout::global_context::use_global_context;
use crate::layout::tabs::{tab_label_for_key, D400_DASHBOARD_VENTAS};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (tab key, label, icon)
}

fn item(key: &'static str, icon_name: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon_name)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "administracion",
            label: "Administración",
            icon: "shield",
            items: vec![
                item("a001_empresa", "building"),
                item("a002_persona", "user"),
                item("a007_rol", "users"),
                item("a008_permiso", "lock"),
            ],
        },
        MenuGroup {
            id: "caja",
            label: "Caja",
            icon: "cash",
            items: vec![
                item("a003_punto_venta", "store"),
                item("a004_caja", "cash"),
                item("a005_caja_usuario", "users"),
                item("a006_caja_chica_autorizada", "wallet"),
            ],
        },
        MenuGroup {
            id: "planes",
            label: "Planes",
            icon: "file-text",
            items: vec![
                item("a012_plan_pago", "file-text"),
                item("a009_config_interes_mora", "percent"),
                item("a010_feriado_global", "calendar"),
            ],
        },
        MenuGroup {
            id: "inmobiliaria",
            label: "Inmobiliaria",
            icon: "home",
            items: vec![
                item("a011_cliente_inmobiliario", "users"),
                item(D400_DASHBOARD_VENTAS, "bar-chart"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let expanded_groups = RwSignal::new(vec!["administracion".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id.to_string();
                    let gid_click = group_id.clone();
                    let gid_chevron = group_id.clone();
                    let gid_show = group_id;
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = gid_click.clone();
                                    expanded_groups.update(move |groups| {
                                        if let Some(pos) = groups.iter().position(|g| g == &gid) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || {
                                        expanded_groups.get().contains(&gid_chevron)
                                    }
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=move || expanded_groups.get().contains(&gid_show)>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(key, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(key)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(key, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, label, _) in group.items {
                assert_ne!(key, label, "missing label for {key}");
            }
        }
    }
}
