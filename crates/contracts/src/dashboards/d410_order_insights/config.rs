use super::dto::FilterSettings;
use crate::shared::order_store::DEFAULT_ORDERS_KEY;
use crate::system::admin_auth::{DEFAULT_AUTH_KEY, DEFAULT_LOGIN_ROUTE};
use serde::{Deserialize, Serialize};

/// Settings of the order insights dashboard.
///
/// Missing fields fall back to the storefront's storage keys and routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminDashboardConfig {
    /// localStorage key of the admin flag
    pub auth_key: String,
    /// localStorage key of the saved order list
    pub orders_key: String,
    /// Where unauthenticated visitors are sent
    pub login_route: String,
    pub default_filters: FilterSettings,
}

impl Default for AdminDashboardConfig {
    fn default() -> Self {
        Self {
            auth_key: DEFAULT_AUTH_KEY.to_string(),
            orders_key: DEFAULT_ORDERS_KEY.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            default_filters: FilterSettings::default(),
        }
    }
}

impl AdminDashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
