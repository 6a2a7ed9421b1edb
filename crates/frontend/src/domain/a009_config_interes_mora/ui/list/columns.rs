use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{StatusBadge, Tone};
use crate::shared::date_utils::format_period;
use crate::shared::number_format::{format_money, format_percent};
use chrono::NaiveDate;
use contracts::domain::a009_config_interes_mora::ConfigInteresMora;
use leptos::prelude::*;
use thaw::*;

pub const COLUMNS: [&str; 7] = [
    "Empresa",
    "Tasa mensual",
    "Días de gracia",
    "Vigencia",
    "Mora de S/ 1,000 a 30 días",
    "Estado",
    "",
];

/// `aplicada` marks the configuration the empresa charges today
pub fn estado_config(item: &ConfigInteresMora, aplicada: bool, hoy: NaiveDate) -> (&'static str, Tone) {
    if !item.activo {
        ("Inactiva", Tone::Neutral)
    } else if aplicada {
        ("Vigente", Tone::Success)
    } else if item.fecha_inicio > hoy {
        ("Programada", Tone::Warning)
    } else {
        ("Vencida", Tone::Neutral)
    }
}

#[component]
pub fn ConfigInteresMoraRow(
    item: ConfigInteresMora,
    aplicada: bool,
    hoy: NaiveDate,
    #[prop(into)] empresa: String,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (estado, tone) = estado_config(&item, aplicada, hoy);
    let ejemplo = format_money(item.calcular_mora(1000.0, 30));

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{empresa}</TableCellLayout>
            </TableCell>
            <TableCell class="table__cell--right">
                <a
                    href="#"
                    class="table__link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_edit.run(());
                    }
                >
                    {format_percent(item.tasa_mensual)}
                </a>
            </TableCell>
            <TableCell class="table__cell--right">{item.dias_gracia}</TableCell>
            <TableCell>{format_period(item.fecha_inicio, item.fecha_fin)}</TableCell>
            <TableCell class="table__cell--right">{ejemplo}</TableCell>
            <TableCell>
                <StatusBadge label=estado tone=tone />
            </TableCell>
            <TableCell>
                <RowActions on_edit=on_edit on_delete=on_delete disabled=busy />
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_labels() {
        let hoy = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let mut item = ConfigInteresMora {
            id: 1,
            empresa_id: 1,
            tasa_mensual: 2.0,
            dias_gracia: 0,
            fecha_inicio: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            fecha_fin: None,
            activo: true,
        };
        assert_eq!(estado_config(&item, false, hoy).0, "Programada");
        assert_eq!(estado_config(&item, true, hoy).0, "Vigente");
        item.activo = false;
        assert_eq!(estado_config(&item, true, hoy).0, "Inactiva");
    }
}
