//! API utilities for frontend-backend communication
//!
//! Every backend call goes through the generic proxy of the backend server,
//! so URLs are built from a [`Resource`] rather than from hand-written paths.

use contracts::shared::proxy::Resource;

/// Port the backend server listens on
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Proxy URL of a resource collection with query parameters
pub fn proxy_url(resource: Resource, query: &[(String, String)]) -> String {
    api_url(&resource.list_url(query))
}

/// Proxy URL of one record of a resource
pub fn proxy_item_url(resource: Resource, id: i64) -> String {
    api_url(&resource.item_url(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_uses_backend_port() {
        assert_eq!(base_url("https:", "backoffice.local"), "https://backoffice.local:3000");
    }
}
