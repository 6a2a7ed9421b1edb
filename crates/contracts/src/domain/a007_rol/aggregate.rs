use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rol {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub es_global: bool,
    #[serde(default)]
    pub empresa_id: Option<EntityId>,
}

impl Rol {
    /// Global roles apply to every empresa; the rest only to their own.
    pub fn aplica_a(&self, empresa_id: EntityId) -> bool {
        self.es_global || self.empresa_id == Some(empresa_id)
    }
}

impl AggregateRoot for Rol {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn resource() -> Resource {
        resources::ROLES
    }

    fn element_name() -> &'static str {
        "Rol"
    }

    fn list_name() -> &'static str {
        "Roles"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RolDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub es_global: bool,
    pub empresa_id: Option<EntityId>,
}

impl From<&Rol> for RolDto {
    fn from(r: &Rol) -> Self {
        Self {
            id: Some(r.id),
            nombre: r.nombre.clone(),
            descripcion: r.descripcion.clone(),
            es_global: r.es_global,
            empresa_id: r.empresa_id,
        }
    }
}

impl RolDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre del rol es obligatorio".into());
        }
        if !self.es_global && self.empresa_id.is_none() {
            return Err("Un rol no global debe pertenecer a una empresa".into());
        }
        Ok(())
    }

    /// Global roles are stored without empresa
    pub fn prepare_for_save(&mut self) {
        self.nombre = self.nombre.trim().to_string();
        if self.es_global {
            self.empresa_id = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_global_role_needs_empresa() {
        let mut dto = RolDto {
            nombre: "Cajero".into(),
            ..Default::default()
        };
        assert_eq!(
            dto.validate().unwrap_err(),
            "Un rol no global debe pertenecer a una empresa"
        );
        dto.es_global = true;
        assert!(dto.validate().is_ok());
        dto.es_global = false;
        dto.empresa_id = Some(2);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn global_role_drops_empresa_on_save() {
        let mut dto = RolDto {
            nombre: " Administrador ".into(),
            es_global: true,
            empresa_id: Some(3),
            ..Default::default()
        };
        dto.prepare_for_save();
        assert_eq!(dto.nombre, "Administrador");
        assert_eq!(dto.empresa_id, None);
    }

    #[test]
    fn aplica_a() {
        let rol = Rol {
            id: 1,
            nombre: "Vendedor".into(),
            descripcion: None,
            es_global: false,
            empresa_id: Some(2),
        };
        assert!(rol.aplica_a(2));
        assert!(!rol.aplica_a(3));
    }
}
