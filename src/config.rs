//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Backend URLs are derived at runtime from the page's hostname, since the
//! file server and this client are served from the same machine.

use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Home Server";

/// Label of the fixed root breadcrumb.
pub const ROOT_LABEL: &str = "Files";

// =============================================================================
// Network Configuration
// =============================================================================

/// Port the file server listens on.
pub const BACKEND_PORT: u16 = 5000;

/// Path prefix of the REST API.
pub const API_PREFIX: &str = "/api";

/// Path prefix under which file contents are served.
pub const STATIC_PREFIX: &str = "/data/files";

/// Host used when the page hostname can't be read.
pub const FALLBACK_HOST: &str = "localhost";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Backend origin, e.g. `http://192.168.1.20:5000`.
pub fn backend_url() -> String {
    let host = dom::hostname()
        .filter(|h| !h.is_empty())
        .unwrap_or_else(|| FALLBACK_HOST.to_string());
    backend_url_for(&host)
}

pub fn backend_url_for(host: &str) -> String {
    format!("http://{}:{}", host, BACKEND_PORT)
}

/// Base URL of the REST API.
pub fn base_url() -> String {
    format!("{}{}", backend_url(), API_PREFIX)
}

/// Base URL file contents are served from; append an entry's path.
pub fn static_url() -> String {
    format!("{}{}", backend_url(), STATIC_PREFIX)
}

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key for the browse state.
pub const STORE_KEY: &str = "home-server";

// =============================================================================
// Sign-in
// =============================================================================

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 6;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_url_for() {
        assert_eq!(backend_url_for("10.0.0.2"), "http://10.0.0.2:5000");
    }
}
