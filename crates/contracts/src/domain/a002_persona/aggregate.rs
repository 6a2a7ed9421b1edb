use crate::domain::a001_empresa::is_valid_email;
use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TipoDocumento {
    #[default]
    #[serde(rename = "DNI")]
    Dni,
    #[serde(rename = "RUC")]
    Ruc,
    #[serde(rename = "CE")]
    CarnetExtranjeria,
    #[serde(rename = "PASAPORTE")]
    Pasaporte,
}

impl TipoDocumento {
    pub const ALL: [TipoDocumento; 4] = [
        TipoDocumento::Dni,
        TipoDocumento::Ruc,
        TipoDocumento::CarnetExtranjeria,
        TipoDocumento::Pasaporte,
    ];

    /// Wire code, also used as `<option value>`
    pub fn code(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "DNI",
            TipoDocumento::Ruc => "RUC",
            TipoDocumento::CarnetExtranjeria => "CE",
            TipoDocumento::Pasaporte => "PASAPORTE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TipoDocumento::Dni => "DNI",
            TipoDocumento::Ruc => "RUC",
            TipoDocumento::CarnetExtranjeria => "Carné de extranjería",
            TipoDocumento::Pasaporte => "Pasaporte",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Checks the document number format for this document type
    pub fn validate_numero(&self, numero: &str) -> Result<(), String> {
        let numero = numero.trim();
        let digits_only = numero.chars().all(|c| c.is_ascii_digit());
        match self {
            TipoDocumento::Dni if numero.len() != 8 || !digits_only => {
                Err("El DNI debe tener 8 dígitos".into())
            }
            TipoDocumento::Ruc if numero.len() != 11 || !digits_only => {
                Err("El RUC debe tener 11 dígitos".into())
            }
            TipoDocumento::CarnetExtranjeria | TipoDocumento::Pasaporte
                if !(6..=12).contains(&numero.len())
                    || !numero.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                Err(format!(
                    "El número de {} debe tener entre 6 y 12 caracteres alfanuméricos",
                    self.label().to_lowercase()
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Persona natural; users and real-estate clients point to one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    pub id: EntityId,
    pub nombres: String,
    pub apellido_paterno: String,
    #[serde(default)]
    pub apellido_materno: Option<String>,
    #[serde(default)]
    pub tipo_documento: TipoDocumento,
    pub numero_documento: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl Persona {
    pub fn nombre_completo(&self) -> String {
        let mut parts = vec![self.nombres.trim(), self.apellido_paterno.trim()];
        if let Some(materno) = self.apellido_materno.as_deref() {
            parts.push(materno.trim());
        }
        parts
            .into_iter()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn documento(&self) -> String {
        format!("{} {}", self.tipo_documento.code(), self.numero_documento)
    }
}

impl AggregateRoot for Persona {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre_completo()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn resource() -> Resource {
        resources::PERSONAS
    }

    fn element_name() -> &'static str {
        "Persona"
    }

    fn list_name() -> &'static str {
        "Personas"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PersonaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub nombres: String,
    pub apellido_paterno: String,
    pub apellido_materno: Option<String>,
    pub tipo_documento: TipoDocumento,
    pub numero_documento: String,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_nacimiento: Option<NaiveDate>,
}

impl From<&Persona> for PersonaDto {
    fn from(p: &Persona) -> Self {
        Self {
            id: Some(p.id),
            nombres: p.nombres.clone(),
            apellido_paterno: p.apellido_paterno.clone(),
            apellido_materno: p.apellido_materno.clone(),
            tipo_documento: p.tipo_documento,
            numero_documento: p.numero_documento.clone(),
            email: p.email.clone(),
            telefono: p.telefono.clone(),
            direccion: p.direccion.clone(),
            fecha_nacimiento: p.fecha_nacimiento,
        }
    }
}

impl PersonaDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self, hoy: NaiveDate) -> Result<(), String> {
        if self.nombres.trim().is_empty() {
            return Err("Los nombres son obligatorios".into());
        }
        if self.apellido_paterno.trim().is_empty() {
            return Err("El apellido paterno es obligatorio".into());
        }
        self.tipo_documento.validate_numero(&self.numero_documento)?;
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !is_valid_email(email) {
                return Err("El correo electrónico no es válido".into());
            }
        }
        if let Some(nacimiento) = self.fecha_nacimiento {
            if nacimiento > hoy {
                return Err("La fecha de nacimiento no puede ser futura".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hoy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn dto() -> PersonaDto {
        PersonaDto {
            nombres: "María Elena".into(),
            apellido_paterno: "Quispe".into(),
            apellido_materno: Some("Huamán".into()),
            numero_documento: "45678912".into(),
            ..Default::default()
        }
    }

    #[test]
    fn document_rules_depend_on_type() {
        assert!(dto().validate(hoy()).is_ok());

        let mut d = dto();
        d.numero_documento = "4567891".into();
        assert_eq!(d.validate(hoy()).unwrap_err(), "El DNI debe tener 8 dígitos");

        d.tipo_documento = TipoDocumento::Pasaporte;
        d.numero_documento = "AB12345".into();
        assert!(d.validate(hoy()).is_ok());

        d.numero_documento = "AB-123".into();
        assert!(d.validate(hoy()).is_err());

        d.tipo_documento = TipoDocumento::Ruc;
        d.numero_documento = "10456789012".into();
        assert!(d.validate(hoy()).is_ok());
    }

    #[test]
    fn birth_date_cannot_be_in_the_future() {
        let mut d = dto();
        d.fecha_nacimiento = NaiveDate::from_ymd_opt(2030, 1, 1);
        assert!(d.validate(hoy()).is_err());
    }

    #[test]
    fn full_name_and_wire_codes() {
        let json = r#"{"id":3,"nombres":"Luis","apellido_paterno":"Rojas",
            "tipo_documento":"CE","numero_documento":"001234567"}"#;
        let p: Persona = serde_json::from_str(json).unwrap();
        assert_eq!(p.tipo_documento, TipoDocumento::CarnetExtranjeria);
        assert_eq!(p.nombre_completo(), "Luis Rojas");
        assert_eq!(p.documento(), "CE 001234567");
        assert_eq!(TipoDocumento::from_code("PASAPORTE"), Some(TipoDocumento::Pasaporte));
    }
}
