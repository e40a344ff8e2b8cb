//! Settings Page Content
//!
//! Static information shown on the settings page.

use crate::client::paths;
use crate::config::ApiConfig;

pub const API_VERSION: &str = "1.0.0";
pub const UI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DATABASE: &str = "PostgreSQL";

/// Endpoints listed on the settings page
pub const ENDPOINTS: &[&str] = &[paths::BRANCHES, paths::BOOKINGS, paths::BANKS];

/// Status lines listed on the settings page
pub const STATUS_LINES: &[&str] = &[
    "API Connection Active",
    "Database Connected",
    "All Systems Operational",
];

/// A label/value row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
}

/// The "General" card
pub fn general_info() -> Vec<InfoRow> {
    vec![
        InfoRow { label: "API Version", value: API_VERSION.to_string() },
        InfoRow { label: "UI Version", value: UI_VERSION.to_string() },
        InfoRow { label: "Database", value: DATABASE.to_string() },
    ]
}

/// The "Connection" card, read-only
pub fn connection_info(config: &ApiConfig) -> Vec<InfoRow> {
    vec![
        InfoRow { label: "API Base URL", value: config.base_url.clone() },
        InfoRow { label: "Request Timeout", value: format!("{}s", config.timeout_secs) },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(ENDPOINTS, &["/api/branches", "/api/bookings", "/api/payments/banks"]);
    }

    #[test]
    fn test_general_info_versions() {
        let rows = general_info();
        assert_eq!(rows[0].value, "1.0.0");
        assert_eq!(rows[1].value, UI_VERSION);
        assert_eq!(rows[2].value, "PostgreSQL");
    }

    #[test]
    fn test_connection_info() {
        let rows = connection_info(&ApiConfig::new("https://api.surya.test/"));
        assert_eq!(rows[0].value, "https://api.surya.test");
        assert_eq!(rows[1].value, "10s");
    }
}
