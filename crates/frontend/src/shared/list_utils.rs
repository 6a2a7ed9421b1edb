//! Client-side sorting and filtering for lists that hold their full data set.
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;

/// Types that can be matched against a free-text search
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive containment, ignoring surrounding whitespace in `filter`
pub fn contains_ci(haystack: &str, filter: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&filter.trim().to_lowercase())
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Empty filter keeps everything
pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Header click handler: same column flips direction, another column sorts ascending.
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        nombre: &'static str,
        orden: i32,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            contains_ci(self.nombre, filter)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "orden" => self.orden.cmp(&other.orden),
                _ => self.nombre.cmp(other.nombre),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { nombre: "Caja Central", orden: 2 },
            Row { nombre: "Caja chica", orden: 3 },
            Row { nombre: "Boveda", orden: 1 },
        ]
    }

    #[test]
    fn sorts_both_directions() {
        let mut items = rows();
        sort_list(&mut items, "orden", true);
        assert_eq!(items[0].nombre, "Boveda");
        sort_list(&mut items, "orden", false);
        assert_eq!(items[0].nombre, "Caja chica");
    }

    #[test]
    fn filter_is_case_insensitive() {
        let found = filter_list(rows(), " CAJA ");
        assert_eq!(found.len(), 2);
        assert_eq!(filter_list(rows(), "").len(), 3);
    }

    #[test]
    fn indicator() {
        assert_eq!(get_sort_indicator("orden", "orden", true), " ▲");
        assert_eq!(get_sort_indicator("orden", "orden", false), " ▼");
        assert_eq!(get_sort_indicator("nombre", "orden", true), " ⇅");
    }
}
