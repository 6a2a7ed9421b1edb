use crate::domain::common::{AggregateRoot, EntityId};
use std::collections::HashMap;

/// In-memory lookup of a fully loaded reference list, used to resolve
/// foreign keys in table columns and selects.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    by_id: HashMap<EntityId, usize>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            by_id: HashMap::new(),
        }
    }
}

impl<T: AggregateRoot> Catalog<T> {
    pub fn new(items: Vec<T>) -> Self {
        let by_id = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id(), idx))
            .collect();
        Self { items, by_id }
    }

    pub fn get(&self, id: EntityId) -> Option<&T> {
        self.by_id.get(&id).and_then(|idx| self.items.get(*idx))
    }

    /// Display name of the referenced record, or `#id` when it is not loaded.
    pub fn name_of(&self, id: EntityId) -> String {
        self.get(id)
            .map(|item| item.display_name())
            .unwrap_or_else(|| format!("#{}", id))
    }

    pub fn name_of_opt(&self, id: Option<EntityId>) -> String {
        id.map(|id| self.name_of(id))
            .unwrap_or_else(|| "-".to_string())
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `(id, label)` pairs for `<select>` options
    pub fn options(&self) -> Vec<(EntityId, String)> {
        self.items
            .iter()
            .map(|item| (item.id(), item.display_name()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_punto_venta::PuntoVenta;

    fn punto(id: i64, nombre: &str) -> PuntoVenta {
        PuntoVenta {
            id,
            empresa_id: 1,
            nombre: nombre.to_string(),
            direccion: None,
            telefono: None,
            activo: true,
        }
    }

    #[test]
    fn resolves_names_by_id() {
        let catalog = Catalog::new(vec![punto(4, "Sede Norte"), punto(9, "Sede Sur")]);
        assert_eq!(catalog.name_of(9), "Sede Sur");
        assert_eq!(catalog.name_of(1), "#1");
        assert_eq!(catalog.name_of_opt(None), "-");
        assert_eq!(catalog.options().len(), 2);
    }
}
