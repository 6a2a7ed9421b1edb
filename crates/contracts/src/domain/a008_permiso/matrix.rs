//! Per-user permission matrix: one row per option, four flags per row.
//!
//! Built from three catalogs (options, the user's existing grants) and diffed
//! against the loaded state so only changed rows are persisted.

use super::{Opcion, UsuarioOpcion, UsuarioOpcionDto};
use crate::domain::common::EntityId;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionFlag {
    Ver,
    Crear,
    Editar,
    Eliminar,
}

impl PermissionFlag {
    pub const ALL: [PermissionFlag; 4] = [
        PermissionFlag::Ver,
        PermissionFlag::Crear,
        PermissionFlag::Editar,
        PermissionFlag::Eliminar,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PermissionFlag::Ver => "Ver",
            PermissionFlag::Crear => "Crear",
            PermissionFlag::Editar => "Editar",
            PermissionFlag::Eliminar => "Eliminar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionFlags {
    pub ver: bool,
    pub crear: bool,
    pub editar: bool,
    pub eliminar: bool,
}

impl PermissionFlags {
    pub fn get(&self, flag: PermissionFlag) -> bool {
        match flag {
            PermissionFlag::Ver => self.ver,
            PermissionFlag::Crear => self.crear,
            PermissionFlag::Editar => self.editar,
            PermissionFlag::Eliminar => self.eliminar,
        }
    }

    /// Sets a flag keeping the implications: any write flag needs `ver`,
    /// and without `ver` nothing else is allowed.
    pub fn set(&mut self, flag: PermissionFlag, value: bool) {
        match flag {
            PermissionFlag::Ver => {
                self.ver = value;
                if !value {
                    self.crear = false;
                    self.editar = false;
                    self.eliminar = false;
                }
            }
            PermissionFlag::Crear => self.crear = value,
            PermissionFlag::Editar => self.editar = value,
            PermissionFlag::Eliminar => self.eliminar = value,
        }
        if value && flag != PermissionFlag::Ver {
            self.ver = true;
        }
    }

    pub fn any(&self) -> bool {
        self.ver || self.crear || self.editar || self.eliminar
    }
}

impl From<&UsuarioOpcion> for PermissionFlags {
    fn from(g: &UsuarioOpcion) -> Self {
        Self {
            ver: g.ver,
            crear: g.crear,
            editar: g.editar,
            eliminar: g.eliminar,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PermissionRow {
    pub opcion: Opcion,
    /// Id of the existing grant, `None` when the user has none for this option
    pub grant_id: Option<EntityId>,
    pub original: PermissionFlags,
    pub current: PermissionFlags,
}

impl PermissionRow {
    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }
}

/// One pending persist call
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionChange {
    Create(UsuarioOpcionDto),
    Update { id: EntityId, dto: UsuarioOpcionDto },
}

impl PermissionChange {
    pub fn opcion_id(&self) -> EntityId {
        match self {
            PermissionChange::Create(dto) => dto.opcion_id,
            PermissionChange::Update { dto, .. } => dto.opcion_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PermissionMatrix {
    pub usuario_id: EntityId,
    rows: Vec<PermissionRow>,
}

impl PermissionMatrix {
    /// `existentes` may contain grants of any user; only `usuario_id`'s are used.
    pub fn build(usuario_id: EntityId, opciones: &[Opcion], existentes: &[UsuarioOpcion]) -> Self {
        let grants: HashMap<EntityId, &UsuarioOpcion> = existentes
            .iter()
            .filter(|g| g.usuario_id == usuario_id)
            .map(|g| (g.opcion_id, g))
            .collect();

        let mut opciones: Vec<&Opcion> = opciones.iter().collect();
        opciones.sort_by(|a, b| {
            a.modulo_label()
                .cmp(b.modulo_label())
                .then(a.orden.cmp(&b.orden))
                .then_with(|| a.nombre.cmp(&b.nombre))
        });

        let rows = opciones
            .into_iter()
            .map(|opcion| {
                let grant = grants.get(&opcion.id);
                let flags = grant.map(|g| PermissionFlags::from(*g)).unwrap_or_default();
                PermissionRow {
                    opcion: opcion.clone(),
                    grant_id: grant.map(|g| g.id),
                    original: flags,
                    current: flags,
                }
            })
            .collect();

        Self { usuario_id, rows }
    }

    pub fn rows(&self) -> &[PermissionRow] {
        &self.rows
    }

    pub fn row(&self, opcion_id: EntityId) -> Option<&PermissionRow> {
        self.rows.iter().find(|r| r.opcion.id == opcion_id)
    }

    pub fn get(&self, opcion_id: EntityId, flag: PermissionFlag) -> bool {
        self.row(opcion_id).map_or(false, |r| r.current.get(flag))
    }

    /// Returns false when the option is not in the matrix.
    pub fn toggle(&mut self, opcion_id: EntityId, flag: PermissionFlag, value: bool) -> bool {
        match self.rows.iter_mut().find(|r| r.opcion.id == opcion_id) {
            Some(row) => {
                row.current.set(flag, value);
                true
            }
            None => false,
        }
    }

    /// Column header checkbox
    pub fn set_all(&mut self, flag: PermissionFlag, value: bool) {
        for row in &mut self.rows {
            row.current.set(flag, value);
        }
    }

    /// True when every row has the flag set (and there is at least one row)
    pub fn column_checked(&self, flag: PermissionFlag) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|r| r.current.get(flag))
    }

    pub fn is_dirty(&self) -> bool {
        self.rows.iter().any(PermissionRow::is_dirty)
    }

    pub fn dirty_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_dirty()).count()
    }

    pub fn changes(&self) -> Vec<PermissionChange> {
        self.rows
            .iter()
            .filter(|r| r.is_dirty())
            .map(|r| {
                let dto = UsuarioOpcionDto {
                    usuario_id: self.usuario_id,
                    opcion_id: r.opcion.id,
                    ver: r.current.ver,
                    crear: r.current.crear,
                    editar: r.current.editar,
                    eliminar: r.current.eliminar,
                };
                match r.grant_id {
                    Some(id) => PermissionChange::Update { id, dto },
                    None => PermissionChange::Create(dto),
                }
            })
            .collect()
    }

    /// Records a successful persist of the row; `id` is the grant id returned
    /// by the create call (or the existing one on update).
    pub fn mark_saved(&mut self, opcion_id: EntityId, id: EntityId) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.opcion.id == opcion_id) {
            row.grant_id = Some(id);
            row.original = row.current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opcion(id: i64, modulo: &str, orden: i32, nombre: &str) -> Opcion {
        Opcion {
            id,
            nombre: nombre.into(),
            ruta: None,
            modulo: Some(modulo.into()),
            orden,
        }
    }

    fn grant(id: i64, usuario_id: i64, opcion_id: i64, ver: bool, crear: bool) -> UsuarioOpcion {
        UsuarioOpcion {
            id,
            usuario_id,
            opcion_id,
            ver,
            crear,
            editar: false,
            eliminar: false,
        }
    }

    fn matrix() -> PermissionMatrix {
        let opciones = vec![
            opcion(1, "Caja", 2, "Cajas"),
            opcion(2, "Auth", 1, "Empresas"),
            opcion(3, "Caja", 1, "Puntos de venta"),
        ];
        let existentes = vec![grant(100, 7, 1, true, false), grant(200, 8, 3, true, true)];
        PermissionMatrix::build(7, &opciones, &existentes)
    }

    #[test]
    fn rows_sorted_and_only_own_grants_used() {
        let m = matrix();
        let ids: Vec<_> = m.rows().iter().map(|r| r.opcion.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(m.row(1).unwrap().grant_id, Some(100));
        assert_eq!(m.row(3).unwrap().grant_id, None);
        assert!(!m.get(3, PermissionFlag::Ver));
        assert!(!m.is_dirty());
    }

    #[test]
    fn write_flags_imply_ver_and_clearing_ver_clears_all() {
        let mut m = matrix();
        m.toggle(2, PermissionFlag::Eliminar, true);
        assert!(m.get(2, PermissionFlag::Ver));
        assert!(m.get(2, PermissionFlag::Eliminar));

        m.toggle(2, PermissionFlag::Ver, false);
        for flag in PermissionFlag::ALL {
            assert!(!m.get(2, flag));
        }
        assert!(!m.toggle(99, PermissionFlag::Ver, true));
    }

    #[test]
    fn changes_create_for_new_and_update_for_existing() {
        let mut m = matrix();
        m.toggle(3, PermissionFlag::Crear, true);
        m.toggle(1, PermissionFlag::Editar, true);

        let changes = m.changes();
        assert_eq!(changes.len(), 2);
        assert_eq!(
            changes[0],
            PermissionChange::Create(UsuarioOpcionDto {
                usuario_id: 7,
                opcion_id: 3,
                ver: true,
                crear: true,
                editar: false,
                eliminar: false,
            })
        );
        match &changes[1] {
            PermissionChange::Update { id, dto } => {
                assert_eq!(*id, 100);
                assert!(dto.ver && dto.editar && !dto.crear);
            }
            other => panic!("unexpected change {:?}", other),
        }
    }

    #[test]
    fn untouched_or_reverted_rows_are_not_sent() {
        let mut m = matrix();
        m.toggle(2, PermissionFlag::Ver, true);
        m.toggle(2, PermissionFlag::Ver, false);
        assert!(m.changes().is_empty());
        assert!(!m.is_dirty());
    }

    #[test]
    fn set_all_and_column_state() {
        let mut m = matrix();
        assert!(!m.column_checked(PermissionFlag::Crear));
        m.set_all(PermissionFlag::Crear, true);
        assert!(m.column_checked(PermissionFlag::Crear));
        assert!(m.column_checked(PermissionFlag::Ver));
        assert_eq!(m.dirty_count(), 3);

        m.set_all(PermissionFlag::Ver, false);
        assert!(!m.column_checked(PermissionFlag::Crear));
    }

    #[test]
    fn mark_saved_keeps_failed_rows_dirty() {
        let mut m = matrix();
        m.toggle(2, PermissionFlag::Ver, true);
        m.toggle(3, PermissionFlag::Ver, true);

        m.mark_saved(2, 501);
        assert_eq!(m.row(2).unwrap().grant_id, Some(501));
        assert_eq!(m.dirty_count(), 1);
        assert_eq!(m.changes()[0].opcion_id(), 3);

        // A later edit of the saved row is now an update
        m.toggle(2, PermissionFlag::Crear, true);
        assert!(m
            .changes()
            .iter()
            .any(|c| matches!(c, PermissionChange::Update { id: 501, .. })));
    }
}
