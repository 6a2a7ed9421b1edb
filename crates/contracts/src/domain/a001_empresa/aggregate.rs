use crate::domain::common::{AggregateRoot, EntityId};
use crate::shared::proxy::{resources, Resource};
use serde::{Deserialize, Serialize};

/// Empresa (tenant). Every other record hangs from one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Empresa {
    pub id: EntityId,
    pub razon_social: String,
    #[serde(default)]
    pub nombre_comercial: Option<String>,
    pub ruc: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

impl Empresa {
    /// Commercial name when present, otherwise the legal name
    pub fn nombre_visible(&self) -> &str {
        self.nombre_comercial
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.razon_social)
    }
}

impl AggregateRoot for Empresa {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.nombre_visible().to_string()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn resource() -> Resource {
        resources::EMPRESAS
    }

    fn element_name() -> &'static str {
        "Empresa"
    }

    fn list_name() -> &'static str {
        "Empresas"
    }
}

/// DTO for creating/updating an empresa
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpresaDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    pub razon_social: String,
    pub nombre_comercial: Option<String>,
    pub ruc: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub logo_url: Option<String>,
    pub activo: bool,
}

impl Default for EmpresaDto {
    fn default() -> Self {
        Self {
            id: None,
            razon_social: String::new(),
            nombre_comercial: None,
            ruc: String::new(),
            direccion: None,
            telefono: None,
            email: None,
            logo_url: None,
            activo: true,
        }
    }
}

impl From<&Empresa> for EmpresaDto {
    fn from(e: &Empresa) -> Self {
        Self {
            id: Some(e.id),
            razon_social: e.razon_social.clone(),
            nombre_comercial: e.nombre_comercial.clone(),
            ruc: e.ruc.clone(),
            direccion: e.direccion.clone(),
            telefono: e.telefono.clone(),
            email: e.email.clone(),
            logo_url: e.logo_url.clone(),
            activo: e.activo,
        }
    }
}

/// RUC: 11 digits, prefixed 10 (natural person), 15/17 (special) or 20 (company)
pub fn is_valid_ruc(ruc: &str) -> bool {
    let ruc = ruc.trim();
    ruc.len() == 11
        && ruc.chars().all(|c| c.is_ascii_digit())
        && matches!(&ruc[..2], "10" | "15" | "17" | "20")
}

/// Loose email check used by every form with an email field
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) => {
            !user.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

impl EmpresaDto {
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.razon_social.trim().is_empty() {
            return Err("La razón social es obligatoria".into());
        }
        if !is_valid_ruc(&self.ruc) {
            return Err(
                "El RUC debe tener 11 dígitos y empezar con 10, 15, 17 o 20".into(),
            );
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !is_valid_email(email) {
                return Err("El correo electrónico no es válido".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> EmpresaDto {
        EmpresaDto {
            razon_social: "Inmobiliaria Los Andes S.A.C.".into(),
            ruc: "20512345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_empresa_passes() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn ruc_rules() {
        assert!(is_valid_ruc("10456789012"));
        assert!(!is_valid_ruc("30512345678"));
        assert!(!is_valid_ruc("2051234567"));
        assert!(!is_valid_ruc("2051234567a"));

        let mut bad = dto();
        bad.ruc = "123".into();
        assert!(bad.validate().unwrap_err().contains("RUC"));
    }

    #[test]
    fn email_is_optional_but_checked() {
        let mut d = dto();
        d.email = Some("   ".into());
        assert!(d.validate().is_ok());
        d.email = Some("ventas@losandes.pe".into());
        assert!(d.validate().is_ok());
        d.email = Some("ventas@".into());
        assert!(d.validate().is_err());
    }

    #[test]
    fn nombre_visible_prefers_commercial_name() {
        let mut e = Empresa {
            id: 1,
            razon_social: "Inmobiliaria Los Andes S.A.C.".into(),
            nombre_comercial: Some("Los Andes".into()),
            ruc: "20512345678".into(),
            direccion: None,
            telefono: None,
            email: None,
            logo_url: None,
            activo: true,
        };
        assert_eq!(e.display_name(), "Los Andes");
        e.nombre_comercial = Some(" ".into());
        assert_eq!(e.display_name(), "Inmobiliaria Los Andes S.A.C.");
    }
}
