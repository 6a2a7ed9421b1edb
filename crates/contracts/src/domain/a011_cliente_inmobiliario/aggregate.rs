use crate::domain::a002_persona::Persona;
use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TipoCliente {
    #[default]
    Comprador,
    Inversionista,
    Arrendatario,
}

impl TipoCliente {
    pub const ALL: [TipoCliente; 3] = [
        TipoCliente::Comprador,
        TipoCliente::Inversionista,
        TipoCliente::Arrendatario,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            TipoCliente::Comprador => "comprador",
            TipoCliente::Inversionista => "inversionista",
            TipoCliente::Arrendatario => "arrendatario",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoCliente::Comprador => "Comprador",
            TipoCliente::Inversionista => "Inversionista",
            TipoCliente::Arrendatario => "Arrendatario",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EstadoCliente {
    #[default]
    Prospecto,
    Activo,
    Inactivo,
}

impl EstadoCliente {
    pub const ALL: [EstadoCliente; 3] = [
        EstadoCliente::Prospecto,
        EstadoCliente::Activo,
        EstadoCliente::Inactivo,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EstadoCliente::Prospecto => "prospecto",
            EstadoCliente::Activo => "activo",
            EstadoCliente::Inactivo => "inactivo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EstadoCliente::Prospecto => "Prospecto",
            EstadoCliente::Activo => "Activo",
            EstadoCliente::Inactivo => "Inactivo",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }
}

/// Real-estate client: a persona registered as client of an empresa.
/// The service embeds the persona on reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClienteInmobiliario {
    pub id: EntityId,
    pub empresa_id: EntityId,
    pub persona_id: EntityId,
    #[serde(default)]
    pub tipo: TipoCliente,
    #[serde(default)]
    pub estado: EstadoCliente,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub persona: Option<Persona>,
}

impl ClienteInmobiliario {
    pub fn nombre(&self) -> String {
        self.persona
            .as_ref()
            .map(|p| p.nombre_completo())
            .unwrap_or_else(|| format!("Persona #{}", self.persona_id))
    }

    pub fn documento(&self) -> String {
        self.persona
            .as_ref()
            .map(|p| p.documento())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl AggregateRoot for ClienteInmobiliario {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre()
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn resource() -> Resource {
        resources::CLIENTES_INMOBILIARIOS
    }

    fn element_name() -> &'static str {
        "Cliente inmobiliario"
    }

    fn list_name() -> &'static str {
        "Clientes inmobiliarios"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ClienteInmobiliarioDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub empresa_id: Option<EntityId>,
    pub persona_id: Option<EntityId>,
    pub tipo: TipoCliente,
    pub estado: EstadoCliente,
    pub observaciones: Option<String>,
}

impl From<&ClienteInmobiliario> for ClienteInmobiliarioDto {
    fn from(c: &ClienteInmobiliario) -> Self {
        Self {
            id: Some(c.id),
            empresa_id: Some(c.empresa_id),
            persona_id: Some(c.persona_id),
            tipo: c.tipo,
            estado: c.estado,
            observaciones: c.observaciones.clone(),
        }
    }
}

impl ClienteInmobiliarioDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.empresa_id.is_none() {
            return Err("Seleccione una empresa".into());
        }
        if self.persona_id.is_none() {
            return Err("Seleccione una persona".into());
        }
        if self
            .observaciones
            .as_deref()
            .is_some_and(|o| o.chars().count() > 500)
        {
            return Err("Las observaciones no pueden superar los 500 caracteres".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_and_empresa_required() {
        let mut dto = ClienteInmobiliarioDto::default();
        assert_eq!(dto.validate().unwrap_err(), "Seleccione una empresa");
        dto.empresa_id = Some(1);
        assert_eq!(dto.validate().unwrap_err(), "Seleccione una persona");
        dto.persona_id = Some(3);
        assert!(dto.validate().is_ok());
        dto.observaciones = Some("x".repeat(501));
        assert!(dto.validate().is_err());
    }

    #[test]
    fn reads_embedded_persona() {
        let json = r#"{"id":9,"empresa_id":1,"persona_id":3,"tipo":"inversionista",
            "estado":"activo","persona":{"id":3,"nombres":"Ana","apellido_paterno":"Torres",
            "tipo_documento":"DNI","numero_documento":"41234567"}}"#;
        let c: ClienteInmobiliario = serde_json::from_str(json).unwrap();
        assert_eq!(c.tipo, TipoCliente::Inversionista);
        assert_eq!(c.nombre(), "Ana Torres");
        assert_eq!(c.documento(), "DNI 41234567");

        let sin_persona = ClienteInmobiliario { persona: None, ..c };
        assert_eq!(sin_persona.nombre(), "Persona #3");
    }
}
