use crate::shared::components::row_actions::{RowActionButton, RowActions};
use crate::shared::components::status_badge::{StatusBadge, Tone};
use crate::shared::date_utils::format_period;
use crate::shared::number_format::format_money;
use chrono::NaiveDate;
use contracts::domain::a006_caja_chica_autorizada::CajaChicaAutorizada;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 6] = ["Caja", "Usuario", "Monto autorizado", "Vigencia", "Estado", ""];

/// Finalized, current or not yet started / expired
pub fn vigencia_badge(item: &CajaChicaAutorizada, hoy: NaiveDate) -> (&'static str, Tone) {
    if !item.activo {
        ("Finalizada", Tone::Neutral)
    } else if item.vigente(hoy) {
        ("Vigente", Tone::Success)
    } else {
        ("Fuera de vigencia", Tone::Warning)
    }
}

#[component]
pub fn CajaChicaAutorizadaRow(
    item: CajaChicaAutorizada,
    hoy: NaiveDate,
    #[prop(into)] caja: String,
    #[prop(into)] usuario: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    on_finalize: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = vigencia_badge(&item, hoy);
    let activo = item.activo;

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{caja}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{usuario}</TableCellLayout>
            </TableCell>
            <TableCell class="table__cell--right">{format_money(item.monto_autorizado)}</TableCell>
            <TableCell>{format_period(item.fecha_inicio, item.fecha_fin)}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy>
                    <Show when=move || activo>
                        <RowActionButton
                            title="Finalizar autorización"
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

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn vigencia_labels() {
        let mut item = CajaChicaAutorizada {
            id: 1,
            caja_id: 2,
            usuario_id: 3,
            monto_autorizado: 500.0,
            fecha_inicio: d(2024, 1, 1),
            fecha_fin: Some(d(2024, 6, 30)),
            activo: true,
        };
        assert_eq!(vigencia_badge(&item, d(2024, 3, 1)).0, "Vigente");
        assert_eq!(vigencia_badge(&item, d(2024, 7, 1)).1, Tone::Warning);
        item.activo = false;
        assert_eq!(vigencia_badge(&item, d(2024, 3, 1)).0, "Finalizada");
    }
}
