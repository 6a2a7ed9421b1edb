use crate::shared::components::row_actions::RowActions;
use crate::shared::components::status_badge::{StatusBadge, Tone};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, filter_list, sort_list, Searchable, Sortable};
use chrono::Datelike;
use contracts::domain::a010_feriado_global::FeriadoGlobal;
use contracts::shared::pagination::{paginate_slice, Paginated};
use leptos::prelude::*;
use std::cmp::Ordering;
use thaw::*;

const DIAS: [&str; 7] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado", "Domingo"];

impl Searchable for FeriadoGlobal {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.descripcion, filter) || contains_ci(&format_date(self.fecha), filter)
    }
}

impl Sortable for FeriadoGlobal {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "descripcion" => self
                .descripcion
                .to_lowercase()
                .cmp(&other.descripcion.to_lowercase()),
            // recurring holidays sort by month and day
            _ => (self.fecha.month(), self.fecha.day(), self.fecha.year())
                .cmp(&(other.fecha.month(), other.fecha.day(), other.fecha.year())),
        }
    }
}

/// Search, sort and slice of the full catalog
pub fn visible_page(
    items: &[FeriadoGlobal],
    search: &str,
    sort_field: &str,
    ascending: bool,
    page: usize,
    limit: usize,
) -> Paginated<FeriadoGlobal> {
    let mut filtered = filter_list(items.to_vec(), search);
    sort_list(&mut filtered, sort_field, ascending);
    paginate_slice(&filtered, page, limit)
}

#[component]
pub fn FeriadoGlobalRow(
    item: FeriadoGlobal,
    on_edit: Callback<()>,
    on_delete: Callback<()>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let dia = DIAS[item.fecha.weekday().num_days_from_monday() as usize];
    let fecha = if item.recurrente {
        item.fecha.format("%d/%m").to_string()
    } else {
        format_date(item.fecha)
    };

    view! {
        <TableRow>
            <TableCell>{fecha}</TableCell>
            <TableCell>{if item.recurrente { "-" } else { dia }}</TableCell>
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
                        {item.descripcion.clone()}
                    </a>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                {item.recurrente.then(|| view! { <StatusBadge label="Cada año" tone=Tone::Neutral /> })}
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
    use chrono::NaiveDate;

    fn feriado(id: i64, y: i32, m: u32, d: u32, descripcion: &str, recurrente: bool) -> FeriadoGlobal {
        FeriadoGlobal {
            id,
            fecha: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            descripcion: descripcion.to_string(),
            recurrente,
        }
    }

    fn catalog() -> Vec<FeriadoGlobal> {
        vec![
            feriado(1, 2024, 12, 25, "Navidad", true),
            feriado(2, 2024, 1, 1, "Año Nuevo", true),
            feriado(3, 2024, 7, 28, "Fiestas Patrias", true),
            feriado(4, 2024, 3, 28, "Jueves Santo", false),
        ]
    }

    #[test]
    fn sorts_by_month_and_day() {
        let page = visible_page(&catalog(), "", "fecha", true, 1, 10);
        let ids: Vec<i64> = page.data.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![2, 4, 3, 1]);
    }

    #[test]
    fn searches_and_slices() {
        let page = visible_page(&catalog(), "santo", "fecha", true, 1, 10);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.meta.total, 1);

        let second = visible_page(&catalog(), "", "descripcion", false, 2, 3);
        assert_eq!(second.meta.pages, 2);
        assert_eq!(second.data[0].descripcion, "Año Nuevo");

        let by_date = visible_page(&catalog(), "25/12", "fecha", true, 1, 10);
        assert_eq!(by_date.data[0].id, 1);
    }
}
