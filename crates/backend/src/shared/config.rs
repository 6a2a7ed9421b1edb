use axum::http::{header, HeaderName};
use contracts::shared::proxy::Service;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    pub services: ServicesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".into()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProxyConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Request headers forwarded in addition to Content-Type, Authorization and Accept
    #[serde(default)]
    pub forward_headers: Vec<String>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            forward_headers: Vec::new(),
        }
    }
}

impl ProxyConfig {
    /// Headers a browser may send cross-origin: the always-forwarded ones plus
    /// `forward_headers`. Invalid names are skipped.
    pub fn allowed_headers(&self) -> Vec<HeaderName> {
        let mut headers = vec![header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION];
        for name in &self.forward_headers {
            match HeaderName::from_bytes(name.trim().as_bytes()) {
                Ok(h) if !headers.contains(&h) => headers.push(h),
                Ok(_) => {}
                Err(_) => tracing::warn!("Ignoring invalid forward header: {:?}", name),
            }
        }
        headers
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Base URL of every backend REST service
#[derive(Debug, Deserialize, Clone)]
pub struct ServicesConfig {
    pub auth: String,
    pub caja: String,
    pub planes: String,
    pub inmobiliaria: String,
}

impl Config {
    pub fn service_url(&self, service: Service) -> &str {
        match service {
            Service::Auth => &self.services.auth,
            Service::Caja => &self.services.caja,
            Service::Planes => &self.services.planes,
            Service::Inmobiliaria => &self.services.inmobiliaria,
        }
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid server address '{}': {}", addr, e))
    }

    /// `BACKOFFICE_PORT` and `BACKOFFICE_SERVICE_<NAME>_URL` win over the file.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("BACKOFFICE_PORT").and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }
        for service in Service::ALL {
            let key = format!(
                "BACKOFFICE_SERVICE_{}_URL",
                service.as_str().to_ascii_uppercase()
            );
            if let Some(url) = lookup(&key).filter(|u| !u.trim().is_empty()) {
                let slot = match service {
                    Service::Auth => &mut self.services.auth,
                    Service::Caja => &mut self.services.caja,
                    Service::Planes => &mut self.services.planes,
                    Service::Inmobiliaria => &mut self.services.inmobiliaria,
                };
                *slot = url.trim().to_string();
            }
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[proxy]
timeout_secs = 30
forward_headers = []

[services]
auth = "http://localhost:4001/api"
caja = "http://localhost:4002/api"
planes = "http://localhost:4003/api"
inmobiliaria = "http://localhost:4004/api"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// Environment overrides are applied on top of either.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    config.apply_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return Ok(toml::from_str(&contents)?);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn default_config() -> Config {
        toml::from_str(DEFAULT_CONFIG).unwrap()
    }

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.proxy.timeout_secs, 30);
        assert_eq!(config.service_url(Service::Caja), "http://localhost:4002/api");
    }

    #[test]
    fn test_shipped_config_matches_default() {
        let shipped: Config = toml::from_str(include_str!("../../../../config.toml")).unwrap();
        let default = default_config();
        assert_eq!(shipped.server.port, default.server.port);
        assert_eq!(shipped.proxy.forward_headers, default.proxy.forward_headers);
        assert_eq!(shipped.proxy.allowed_headers().len(), 3);
    }

    #[test]
    fn test_forward_headers_are_allowed_cross_origin() {
        let proxy = ProxyConfig {
            forward_headers: vec!["X-Empresa-Id".into(), "accept".into(), "bad header".into()],
            ..ProxyConfig::default()
        };
        let allowed = proxy.allowed_headers();
        assert_eq!(allowed.len(), 4);
        assert!(allowed.contains(&HeaderName::from_static("x-empresa-id")));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str(
            r#"
            [services]
            auth = "http://a"
            caja = "http://c"
            planes = "http://p"
            inmobiliaria = "http://i"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.static_dir, "dist");
        assert!(config.proxy.forward_headers.is_empty());
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("BACKOFFICE_PORT", "8080"),
            ("BACKOFFICE_SERVICE_PLANES_URL", " http://planes.internal:9000 "),
            ("BACKOFFICE_SERVICE_AUTH_URL", ""),
        ]);
        let mut config = default_config();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.service_url(Service::Planes), "http://planes.internal:9000");
        assert_eq!(config.service_url(Service::Auth), "http://localhost:4001/api");
    }
}
