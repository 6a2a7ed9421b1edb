use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{estado_cliente_badge, StatusBadge};
use crate::shared::forms::or_dash;
use contracts::domain::a011_cliente_inmobiliario::ClienteInmobiliario;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 6] = ["Cliente", "Documento", "Tipo", "Estado", "Observaciones", ""];

#[component]
pub fn ClienteInmobiliarioRow(
    item: ClienteInmobiliario,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = estado_cliente_badge(item.estado);
    let nombre = item.nombre();
    let documento = item.documento();
    let observaciones = or_dash(&item.observaciones);

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
                        {nombre}
                    </a>
                </TableCellLayout>
            </TableCell>
            <TableCell>{documento}</TableCell>
            <TableCell>{item.tipo.label()}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{observaciones}</TableCellLayout>
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}
