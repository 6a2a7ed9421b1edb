use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opcion {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub ruta: Option<String>,
    #[serde(default)]
    pub modulo: Option<String>,
    #[serde(default)]
    pub orden: i32,
}

impl Opcion {
    pub fn modulo_label(&self) -> &str {
        self.modulo
            .as_deref()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or("General")
    }
}

impl AggregateRoot for Opcion {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn resource() -> Resource {
        resources::OPCIONES
    }

    fn element_name() -> &'static str {
        "Opción"
    }

    fn list_name() -> &'static str {
        "Opciones"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id: EntityId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub persona_id: Option<EntityId>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl AggregateRoot for Usuario {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.username.clone()
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn resource() -> Resource {
        resources::USUARIOS
    }

    fn element_name() -> &'static str {
        "Usuario"
    }

    fn list_name() -> &'static str {
        "Permisos"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioOpcion {
    pub id: EntityId,
    pub usuario_id: EntityId,
    pub opcion_id: EntityId,
    #[serde(default)]
    pub ver: bool,
    #[serde(default)]
    pub crear: bool,
    #[serde(default)]
    pub editar: bool,
    #[serde(default)]
    pub eliminar: bool,
}

impl AggregateRoot for UsuarioOpcion {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        format!("Permiso #{}", self.id)
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn resource() -> Resource {
        resources::USUARIO_OPCIONES
    }

    fn element_name() -> &'static str {
        "Permiso"
    }

    fn list_name() -> &'static str {
        "Permisos"
    }
}

/// Body of the create (POST) and update (PATCH) calls of a grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UsuarioOpcionDto {
    pub usuario_id: EntityId,
    pub opcion_id: EntityId,
    pub ver: bool,
    pub crear: bool,
    pub editar: bool,
    pub eliminar: bool,
}

impl From<&UsuarioOpcion> for UsuarioOpcionDto {
    fn from(g: &UsuarioOpcion) -> Self {
        Self {
            usuario_id: g.usuario_id,
            opcion_id: g.opcion_id,
            ver: g.ver,
            crear: g.crear,
            editar: g.editar,
            eliminar: g.eliminar,
        }
    }
}
