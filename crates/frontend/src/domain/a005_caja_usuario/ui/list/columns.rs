use crate::shared::components::row_actions::{RowActionButton, RowActions};
use crate::shared::components::status_badge::{activo_badge, StatusBadge};
use crate::shared::date_utils::format_period;
use contracts::domain::a005_caja_usuario::CajaUsuario;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 5] = ["Caja", "Usuario", "Período", "Estado", ""];

#[component]
pub fn CajaUsuarioRow(
    item: CajaUsuario,
    #[prop(into)] caja: String,
    #[prop(into)] usuario: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    on_finalize: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = activo_badge(item.activo);
    let activo = item.activo;

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{caja}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{usuario}</TableCellLayout>
            </TableCell>
            <TableCell>{format_period(item.fecha_inicio, item.fecha_fin)}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy>
                    <Show when=move || activo>
                        <RowActionButton
                            title="Finalizar asignación"
                            icon_name="check"
                            on_click=on_finalize
                            disabled=busy
                        />
                    </Show>
                </RowActions>
            </TableCell>
        </TableRow>
    }
}
