use crate::shared::components::row_actions::{RowActionButton, RowActions};
use crate::shared::components::status_badge::{estado_caja_badge, StatusBadge};
use crate::shared::date_utils::format_datetime_opt;
use crate::shared::number_format::format_money;
use contracts::domain::a004_caja::{Caja, EstadoCaja};
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 9] = [
    "Nombre",
    "Punto de venta",
    "Tipo",
    "Estado",
    "Saldo inicial",
    "Saldo actual",
    "Apertura",
    "Cierre",
    "",
];

#[component]
pub fn CajaRow(
    item: Caja,
    #[prop(into)] punto_venta: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    on_close: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = estado_caja_badge(item.estado);
    let abierta = item.estado == EstadoCaja::Abierta;

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
                <TableCellLayout truncate=true>{punto_venta}</TableCellLayout>
            </TableCell>
            <TableCell>{item.tipo.label()}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell class="table__cell--right">{format_money(item.saldo_inicial)}</TableCell>
            <TableCell class="table__cell--right">{format_money(item.saldo_actual)}</TableCell>
            <TableCell>{format_datetime_opt(item.fecha_apertura)}</TableCell>
            <TableCell>{format_datetime_opt(item.fecha_cierre)}</TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy>
                    <Show when=move || abierta>
                        <RowActionButton
                            title="Cerrar caja"
                            icon_name="power"
                            on_click=on_close
                            disabled=busy
                        />
                    </Show>
                </RowActions>
            </TableCell>
        </TableRow>
    }
}
