use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use serde::{Deserialize, Serialize};

/// Punto de venta of an empresa; cajas are opened at one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuntoVenta {
    pub id: EntityId,
    pub empresa_id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl AggregateRoot for PuntoVenta {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre.clone()
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn resource() -> Resource {
        resources::PUNTOS_VENTA
    }

    fn element_name() -> &'static str {
        "Punto de venta"
    }

    fn list_name() -> &'static str {
        "Puntos de venta"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuntoVentaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub empresa_id: Option<EntityId>,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub activo: bool,
}

impl Default for PuntoVentaDto {
    fn default() -> Self {
        Self {
            id: None,
            empresa_id: None,
            nombre: String::new(),
            direccion: None,
            telefono: None,
            activo: true,
        }
    }
}

impl From<&PuntoVenta> for PuntoVentaDto {
    fn from(p: &PuntoVenta) -> Self {
        Self {
            id: Some(p.id),
            empresa_id: Some(p.empresa_id),
            nombre: p.nombre.clone(),
            direccion: p.direccion.clone(),
            telefono: p.telefono.clone(),
            activo: p.activo,
        }
    }
}

impl PuntoVentaDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.empresa_id.is_none() {
            return Err("Seleccione una empresa".into());
        }
        if self.nombre.trim().is_empty() {
            return Err("El nombre del punto de venta es obligatorio".into());
        }
        if let Some(tel) = self.telefono.as_deref().filter(|t| !t.trim().is_empty()) {
            if !tel
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
            {
                return Err("El teléfono solo puede contener dígitos".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_empresa_and_name() {
        let mut dto = PuntoVentaDto::default();
        assert_eq!(dto.validate().unwrap_err(), "Seleccione una empresa");
        dto.empresa_id = Some(1);
        assert!(dto.validate().is_err());
        dto.nombre = "Sede Miraflores".into();
        assert!(dto.validate().is_ok());
        dto.telefono = Some("+51 (01) 445-1122".into());
        assert!(dto.validate().is_ok());
        dto.telefono = Some("anexo 12".into());
        assert!(dto.validate().is_err());
    }
}
