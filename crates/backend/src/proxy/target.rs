//! Resolution of `/api/proxy?service=..&path=..&rest` into the upstream URL.

use super::error::ProxyError;
use contracts::shared::proxy::{is_safe_resource_path, Service};

/// What the proxy query string asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyTarget {
    pub service: Service,
    pub path: String,
    /// Everything except `service` and `path`, in the original order
    pub query: Vec<(String, String)>,
}

impl ProxyTarget {
    pub fn from_query(params: Vec<(String, String)>) -> Result<Self, ProxyError> {
        let mut service = None;
        let mut path = None;
        let mut query = Vec::with_capacity(params.len());
        for (key, value) in params {
            match key.as_str() {
                "service" => service = Some(value),
                "path" => path = Some(value),
                _ => query.push((key, value)),
            }
        }

        let service = service
            .filter(|s| !s.trim().is_empty())
            .ok_or(ProxyError::MissingParam("service"))?;
        let service: Service = service
            .parse()
            .map_err(|_| ProxyError::UnknownService(service.clone()))?;
        let path = path
            .filter(|p| !p.trim().is_empty())
            .ok_or(ProxyError::MissingParam("path"))?;

        Ok(Self {
            service,
            path,
            query,
        })
    }
}

/// Joins the service base URL and the resource path and appends the query.
pub fn build_target_url(
    base: &str,
    path: &str,
    query: &[(String, String)],
) -> Result<String, ProxyError> {
    if !is_safe_resource_path(path) {
        return Err(ProxyError::InvalidPath(path.to_string()));
    }
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path);
    for (i, (key, value)) in query.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&urlencoding::encode(key));
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn splits_service_path_and_rest() {
        let target = ProxyTarget::from_query(pairs(&[
            ("service", "caja"),
            ("page", "2"),
            ("path", "cajas"),
            ("search", "central"),
        ]))
        .unwrap();
        assert_eq!(target.service, Service::Caja);
        assert_eq!(target.path, "cajas");
        assert_eq!(target.query, pairs(&[("page", "2"), ("search", "central")]));
    }

    #[test]
    fn missing_or_unknown_service() {
        assert!(matches!(
            ProxyTarget::from_query(pairs(&[("path", "cajas")])),
            Err(ProxyError::MissingParam("service"))
        ));
        assert!(matches!(
            ProxyTarget::from_query(pairs(&[("service", "pagos"), ("path", "x")])),
            Err(ProxyError::UnknownService(s)) if s == "pagos"
        ));
        assert!(matches!(
            ProxyTarget::from_query(pairs(&[("service", "auth")])),
            Err(ProxyError::MissingParam("path"))
        ));
    }

    #[test]
    fn joins_without_duplicate_slashes() {
        let url = build_target_url("http://localhost:4002/api/", "cajas/5", &[]).unwrap();
        assert_eq!(url, "http://localhost:4002/api/cajas/5");
    }

    #[test]
    fn encodes_query() {
        let url = build_target_url(
            "http://svc",
            "clientes",
            &pairs(&[("search", "José Pérez"), ("page", "1")]),
        )
        .unwrap();
        assert_eq!(url, "http://svc/clientes?search=Jos%C3%A9%20P%C3%A9rez&page=1");
    }

    #[test]
    fn rejects_escaping_paths() {
        assert!(matches!(
            build_target_url("http://svc", "../admin", &[]),
            Err(ProxyError::InvalidPath(_))
        ));
        assert!(build_target_url("http://svc", "http://evil/x", &[]).is_err());
    }

    #[test]
    fn rejects_percent_encoded_parent_segments() {
        for path in ["%2e%2e/admin/secrets", ".%2e/admin", "%2e./admin"] {
            assert!(matches!(
                build_target_url("http://svc:4002/api", path, &[]),
                Err(ProxyError::InvalidPath(_))
            ));
        }
    }
}
