use crate::dashboards::OrderInsightsDashboard;
use crate::system::auth::guard::RequireAdminAuth;
use contracts::dashboards::d410_order_insights::AdminDashboardConfig;
use leptos::prelude::*;

/// Element holding a JSON override of the dashboard settings, e.g.
/// `<script id="admin-dashboard-config" type="application/json">{"ordersKey":"shop_orders"}</script>`
const CONFIG_ELEMENT_ID: &str = "admin-dashboard-config";

fn load_config() -> AdminDashboardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => match AdminDashboardConfig::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Invalid #{} contents, using defaults: {}", CONFIG_ELEMENT_ID, e);
                AdminDashboardConfig::default()
            }
        },
        _ => AdminDashboardConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the dashboard settings to the whole app via context.
    provide_context(load_config());

    view! {
        <div class="admin-page">
            <RequireAdminAuth>
                <OrderInsightsDashboard />
            </RequireAdminAuth>
        </div>
    }
}
