use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{activo_badge, StatusBadge};
use crate::shared::number_format::format_percent;
use contracts::domain::a012_plan_pago::PlanPago;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 6] = ["Nombre", "Cuotas", "Tasa anual", "Cuota inicial", "Estado", ""];

#[component]
pub fn PlanPagoRow(
    item: PlanPago,
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
            <TableCell class="table__cell--right">{item.numero_cuotas}</TableCell>
            <TableCell class="table__cell--right">{format_percent(item.tasa_interes_anual)}</TableCell>
            <TableCell class="table__cell--right">{format_percent(item.cuota_inicial_porcentaje)}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}
