//! Sales dashboard: KPI tiles plus monthly and per punto de venta tables.

use crate::dashboards::d400_ventas::api;
use crate::layout::global_context::use_global_context;
use crate::shared::components::stat_card::StatCard;
use crate::shared::date_utils::{from_input, to_input};
use crate::shared::icons::icon;
use crate::shared::number_format::{format_money, format_number, format_percent};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_dashboard_ventas::{VentasDashboard, VentasDashboardRequest};
use contracts::domain::common::AggregateRoot;
use contracts::shared::dates::today;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

const MESES: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Set", "Oct", "Nov", "Dic",
];

/// From January 1st of the current year to today
pub fn default_range(hoy: NaiveDate) -> (NaiveDate, NaiveDate) {
    let desde = NaiveDate::from_ymd_opt(hoy.year(), 1, 1).unwrap_or(hoy);
    (desde, hoy)
}

/// `"2024-05"` -> `"May 2024"`; anything else is shown as received
pub fn mes_label(mes: &str) -> String {
    let parsed = mes
        .split_once('-')
        .and_then(|(y, m)| Some((y.parse::<i32>().ok()?, m.parse::<usize>().ok()?)));
    match parsed {
        Some((year, month)) if (1..=12).contains(&month) => format!("{} {}", MESES[month - 1], year),
        _ => mes.to_string(),
    }
}

#[component]
pub fn VentasDashboardPage() -> impl IntoView {
    let ctx = use_global_context();
    let (desde_default, hasta_default) = default_range(today());
    let fecha_desde = RwSignal::new(Some(desde_default));
    let fecha_hasta = RwSignal::new(Some(hasta_default));

    let data = RwSignal::new(None::<VentasDashboard>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let request_seq = StoredValue::new(0u64);

    let load = move || {
        let request = VentasDashboardRequest {
            empresa_id: ctx.empresa_id.get_untracked(),
            fecha_desde: fecha_desde.get_untracked(),
            fecha_hasta: fecha_hasta.get_untracked(),
        };
        if let Err(msg) = request.validate() {
            error.set(Some(msg));
            return;
        }
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::fetch_dashboard(&request).await;
            if request_seq.get_value() != seq {
                return;
            }
            match result {
                Ok(dashboard) => {
                    log::debug!(
                        "ventas dashboard: {} ventas, {} meses",
                        dashboard.total_ventas,
                        dashboard.ventas_por_mes.len()
                    );
                    data.set(Some(dashboard));
                }
                Err(err) => {
                    data.set(None);
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    };

    Effect::new(move |_| {
        ctx.empresa_id.track();
        load();
    });

    let kpi = move |f: fn(&VentasDashboard) -> String| {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };

    let meses = move || {
        data.with(|d| {
            let mut meses = d.as_ref().map(|d| d.ventas_por_mes.clone()).unwrap_or_default();
            meses.sort_by(|a, b| a.mes.cmp(&b.mes));
            meses
        })
    };

    let puntos = move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| {
                    let mut rows: Vec<_> = d
                        .ventas_por_punto
                        .iter()
                        .map(|p| (p.clone(), d.participacion(p)))
                        .collect();
                    rows.sort_by(|a, b| b.0.monto.total_cmp(&a.0.monto));
                    rows
                })
                .unwrap_or_default()
        })
    };

    view! {
        <PageFrame page_id="d400_dashboard_ventas--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard de ventas"</h1>
                    {move || ctx.selected_empresa().map(|e| view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            {e.display_name()}
                        </Badge>
                    })}
                </div>
                <div class="page__header-right">
                    <div class="form-group form-group--inline">
                        <label for="ventas_desde">"Desde"</label>
                        <input
                            type="date"
                            id="ventas_desde"
                            prop:value=move || to_input(fecha_desde.get())
                            on:change=move |ev| {
                                fecha_desde.set(from_input(&event_target_value(&ev)));
                                load();
                            }
                        />
                    </div>
                    <div class="form-group form-group--inline">
                        <label for="ventas_hasta">"Hasta"</label>
                        <input
                            type="date"
                            id="ventas_hasta"
                            prop:value=move || to_input(fecha_hasta.get())
                            on:change=move |ev| {
                                fecha_hasta.set(from_input(&event_target_value(&ev)));
                                load();
                            }
                        />
                    </div>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { "Cargando..." } else { "Actualizar" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

                <div class="stat-cards">
                    <StatCard
                        label="Ventas"
                        icon_name="file-text"
                        value=kpi(|d| d.total_ventas.to_string())
                    />
                    <StatCard
                        label="Monto total"
                        icon_name="cash"
                        value=kpi(|d| format_money(d.monto_total))
                        change_percent=Signal::derive(move || {
                            data.with(|d| d.as_ref().and_then(|d| d.variacion_mensual()))
                        })
                        subtitle=Signal::derive(move || {
                            data.with(|d| d.as_ref().map(|_| "Variación: último mes".to_string()))
                        })
                    />
                    <StatCard
                        label="Ticket promedio"
                        icon_name="wallet"
                        value=kpi(|d| format_money(d.ticket_promedio()))
                    />
                    <StatCard
                        label="Mejor punto de venta"
                        icon_name="store"
                        value=kpi(|d| {
                            d.mejor_punto()
                                .map(|p| p.punto_venta.clone())
                                .unwrap_or_else(|| "-".to_string())
                        })
                        subtitle=Signal::derive(move || {
                            data.with(|d| {
                                d.as_ref()
                                    .and_then(|d| d.mejor_punto().map(|p| format_money(p.monto)))
                            })
                        })
                    />
                </div>

                <div class="dashboard__tables">
                    <div class="dashboard__section">
                        <h3>"Ventas por mes"</h3>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Mes"</TableHeaderCell>
                                    <TableHeaderCell>"Ventas"</TableHeaderCell>
                                    <TableHeaderCell>"Monto"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    meses()
                                        .into_iter()
                                        .map(|m| view! {
                                            <TableRow>
                                                <TableCell>{mes_label(&m.mes)}</TableCell>
                                                <TableCell class="table__cell--right">{m.cantidad.to_string()}</TableCell>
                                                <TableCell class="table__cell--right">{format_number(m.monto)}</TableCell>
                                            </TableRow>
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                        <Show when=move || meses().is_empty() && !loading.get()>
                            <div class="table__empty">"Sin ventas en el período"</div>
                        </Show>
                    </div>

                    <div class="dashboard__section">
                        <h3>"Ventas por punto de venta"</h3>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Punto de venta"</TableHeaderCell>
                                    <TableHeaderCell>"Ventas"</TableHeaderCell>
                                    <TableHeaderCell>"Monto"</TableHeaderCell>
                                    <TableHeaderCell>"Participación"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || {
                                    puntos()
                                        .into_iter()
                                        .map(|(p, share)| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{p.punto_venta.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell class="table__cell--right">{p.cantidad.to_string()}</TableCell>
                                                <TableCell class="table__cell--right">{format_number(p.monto)}</TableCell>
                                                <TableCell class="table__cell--right">{format_percent(share)}</TableCell>
                                            </TableRow>
                                        })
                                        .collect_view()
                                }}
                            </TableBody>
                        </Table>
                        <Show when=move || puntos().is_empty() && !loading.get()>
                            <div class="table__empty">"Sin ventas en el período"</div>
                        </Show>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_starts_at_new_year() {
        let hoy = NaiveDate::from_ymd_opt(2024, 8, 15).unwrap();
        let (desde, hasta) = default_range(hoy);
        assert_eq!(desde, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(hasta, hoy);
    }

    #[test]
    fn month_labels() {
        assert_eq!(mes_label("2024-05"), "May 2024");
        assert_eq!(mes_label("2023-12"), "Dic 2023");
        assert_eq!(mes_label("2024-13"), "2024-13");
        assert_eq!(mes_label("total"), "total");
    }
}
