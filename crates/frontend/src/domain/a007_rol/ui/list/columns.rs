use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{StatusBadge, Tone};
use crate::shared::forms::or_dash;
use contracts::domain::a007_rol::Rol;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 4] = ["Nombre", "Descripción", "Alcance", ""];

#[component]
pub fn RolRow(
    item: Rol,
    /// Empresa name, empty for global roles
    #[prop(into)]
    empresa: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (alcance, tone) = if item.es_global {
        ("Global".to_string(), Tone::Success)
    } else {
        (empresa, Tone::Neutral)
    };

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <a
                        href="#"
                        class="table__link"
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_edit.run(());
                        }
                    >
                        {item.nombre.clone()}
                    </a>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{or_dash(&item.descripcion)}</TableCellLayout>
            </TableCell>
            <TableCell>
                <StatusBadge label=alcance tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}
