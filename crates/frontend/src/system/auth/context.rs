use contracts::dashboards::d410_order_insights::AdminDashboardConfig;
use contracts::system::admin_auth::AdminAuth;
use leptos::prelude::*;

use super::storage::BrowserStorage;

/// Hook to access dashboard settings provided by `App`
pub fn use_dashboard_config() -> AdminDashboardConfig {
    use_context::<AdminDashboardConfig>().unwrap_or_else(|| {
        log::warn!("AdminDashboardConfig not provided, using defaults");
        AdminDashboardConfig::default()
    })
}

/// Admin flag gate backed by browser storage
pub fn admin_auth(config: &AdminDashboardConfig) -> AdminAuth<BrowserStorage> {
    AdminAuth::new(
        BrowserStorage,
        config.auth_key.clone(),
        config.login_route.clone(),
    )
}

/// Replace the current history entry with `route`
pub fn redirect_to(route: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().replace(route) {
        log::error!("Redirect to {} failed: {:?}", route, e);
    }
}

/// Helper: clear the admin flag and leave for the login page
pub fn do_logout(config: &AdminDashboardConfig) {
    let route = admin_auth(config).logout();
    redirect_to(&route);
}
