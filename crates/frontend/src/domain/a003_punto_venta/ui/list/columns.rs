use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{activo_badge, StatusBadge};
use crate::shared::forms::or_dash;
use contracts::domain::a003_punto_venta::PuntoVenta;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 6] = ["Nombre", "Empresa", "Dirección", "Teléfono", "Estado", ""];

#[component]
pub fn PuntoVentaRow(
    item: PuntoVenta,
    #[prop(into)] empresa: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = activo_badge(item.activo);

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
                <TableCellLayout truncate=true>{empresa}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{or_dash(&item.direccion)}</TableCellLayout>
            </TableCell>
            <TableCell>{or_dash(&item.telefono)}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}
