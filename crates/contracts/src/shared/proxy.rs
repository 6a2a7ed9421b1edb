//! Catalog of backend services reachable through the generic proxy
//! (`/api/proxy?service=<svc>&path=<resource>`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Path of the proxy endpoint exposed by the backend crate.
pub const PROXY_ENDPOINT: &str = "/api/proxy";

/// Backend REST service a request is forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Auth,
    Caja,
    Planes,
    Inmobiliaria,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::Auth,
        Service::Caja,
        Service::Planes,
        Service::Inmobiliaria,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Auth => "auth",
            Service::Caja => "caja",
            Service::Planes => "planes",
            Service::Inmobiliaria => "inmobiliaria",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Service {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auth" => Ok(Service::Auth),
            "caja" => Ok(Service::Caja),
            "planes" => Ok(Service::Planes),
            "inmobiliaria" => Ok(Service::Inmobiliaria),
            other => Err(format!("Servicio desconocido: {}", other)),
        }
    }
}

/// A REST collection: the service that owns it and its path inside that service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resource {
    pub service: Service,
    pub path: &'static str,
}

impl Resource {
    pub const fn new(service: Service, path: &'static str) -> Self {
        Self { service, path }
    }

    /// Path of a single record, e.g. `cajas/15`
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }

    /// Proxy URL (relative to the API base) of the collection
    pub fn list_url(&self, query: &[(String, String)]) -> String {
        proxy_path(self.service, self.path, query)
    }

    /// Proxy URL (relative to the API base) of a single record
    pub fn item_url(&self, id: i64) -> String {
        proxy_path(self.service, &self.item_path(id), &[])
    }
}

pub mod resources {
    use super::{Resource, Service};

    pub const EMPRESAS: Resource = Resource::new(Service::Auth, "empresas");
    pub const PERSONAS: Resource = Resource::new(Service::Auth, "personas");
    pub const ROLES: Resource = Resource::new(Service::Auth, "roles");
    pub const USUARIOS: Resource = Resource::new(Service::Auth, "usuarios");
    pub const OPCIONES: Resource = Resource::new(Service::Auth, "opciones");
    pub const USUARIO_OPCIONES: Resource = Resource::new(Service::Auth, "usuario-opciones");

    pub const PUNTOS_VENTA: Resource = Resource::new(Service::Caja, "puntos-venta");
    pub const CAJAS: Resource = Resource::new(Service::Caja, "cajas");
    pub const CAJA_USUARIOS: Resource = Resource::new(Service::Caja, "caja-usuarios");
    pub const CAJAS_CHICAS_AUTORIZADAS: Resource =
        Resource::new(Service::Caja, "cajas-chicas-autorizadas");

    pub const PLANES_PAGO: Resource = Resource::new(Service::Planes, "planes-pago");
    pub const CONFIG_INTERES_MORA: Resource =
        Resource::new(Service::Planes, "config-interes-mora");
    pub const FERIADOS_GLOBALES: Resource = Resource::new(Service::Planes, "feriados-globales");

    pub const CLIENTES_INMOBILIARIOS: Resource =
        Resource::new(Service::Inmobiliaria, "clientes");
    pub const DASHBOARD_VENTAS: Resource = Resource::new(Service::Inmobiliaria, "dashboard/ventas");
}

/// Builds `/api/proxy?service=<svc>&path=<path>&k=v...` with every value URL-encoded.
pub fn proxy_path(service: Service, path: &str, query: &[(String, String)]) -> String {
    let mut url = format!(
        "{}?service={}&path={}",
        PROXY_ENDPOINT,
        service.as_str(),
        urlencoding::encode(path)
    );
    for (key, value) in query {
        url.push('&');
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    url
}

/// A resource path may only address something inside the target service:
/// relative, no parent segments, no scheme, no whitespace or control chars.
/// Percent escapes are refused: the upstream URL parser would decode
/// `%2e%2e` back into a parent segment.
pub fn is_safe_resource_path(path: &str) -> bool {
    if path.is_empty() || path.len() > 512 {
        return false;
    }
    if path.starts_with('/') || path.contains('\\') || path.contains("://") {
        return false;
    }
    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if path.contains('?') || path.contains('#') || path.contains('%') {
        return false;
    }
    !path.split('/').any(|segment| segment == ".." || segment == ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_roundtrips_through_str() {
        for service in Service::ALL {
            assert_eq!(service.as_str().parse::<Service>(), Ok(service));
        }
        assert_eq!("CAJA".parse::<Service>(), Ok(Service::Caja));
        assert!("pagos".parse::<Service>().is_err());
    }

    #[test]
    fn proxy_path_encodes_path_and_query() {
        let url = proxy_path(
            Service::Caja,
            "cajas/5",
            &[("search".to_string(), "caja central".to_string())],
        );
        assert_eq!(
            url,
            "/api/proxy?service=caja&path=cajas%2F5&search=caja%20central"
        );
    }

    #[test]
    fn resource_urls() {
        assert_eq!(
            resources::CAJAS.item_url(12),
            "/api/proxy?service=caja&path=cajas%2F12"
        );
        assert_eq!(
            resources::EMPRESAS.list_url(&[("page".into(), "2".into())]),
            "/api/proxy?service=auth&path=empresas&page=2"
        );
    }

    #[test]
    fn rejects_unsafe_paths() {
        assert!(is_safe_resource_path("cajas"));
        assert!(is_safe_resource_path("cajas/10/usuarios"));
        assert!(is_safe_resource_path("dashboard/ventas"));

        assert!(!is_safe_resource_path(""));
        assert!(!is_safe_resource_path("/etc/passwd"));
        assert!(!is_safe_resource_path("../admin"));
        assert!(!is_safe_resource_path("cajas/../../x"));
        assert!(!is_safe_resource_path("http://evil.local/x"));
        assert!(!is_safe_resource_path("cajas?x=1"));
        assert!(!is_safe_resource_path("cajas 1"));
        assert!(!is_safe_resource_path("cajas\\1"));
    }

    #[test]
    fn rejects_encoded_parent_segments() {
        assert!(!is_safe_resource_path("%2e%2e/admin/secrets"));
        assert!(!is_safe_resource_path("cajas/.%2e/x"));
        assert!(!is_safe_resource_path("%2E./x"));
        assert!(!is_safe_resource_path("cajas%2F5"));
    }
}
