use super::filters::OrderFilters;
use super::orders_table::OrdersTable;
use crate::dashboards::d410_order_insights::state::create_state;
use crate::shared::components::StatCard;
use crate::shared::format::ValueFormat;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_dashboard_config};
use crate::system::auth::storage::BrowserStorage;
use contracts::dashboards::d410_order_insights::{
    compute_filtered_view, compute_stats, Order, OrderStats,
};
use contracts::shared::order_store::OrderStore;
use leptos::prelude::*;

/// Order Insights admin dashboard
#[component]
pub fn OrderInsightsDashboard() -> impl IntoView {
    let config = use_dashboard_config();
    let state = create_state(config.default_filters.clone());
    let (orders, set_orders) = signal(Vec::<Order>::new());

    // Load saved orders on mount
    let orders_key = config.orders_key.clone();
    Effect::new(move |_| {
        let loaded = OrderStore::new(BrowserStorage, orders_key.clone()).load_or_default();
        log::info!("Order insights: {} orders loaded", loaded.len());
        set_orders.set(loaded);
        state.update(|s| s.is_loaded = true);
    });

    let stats = Memo::new(move |_| orders.with(|list| compute_stats(list)));
    let filtered = Memo::new(move |_| {
        let filters = state.with(|s| s.filters.clone());
        orders.with(|list| compute_filtered_view(list, &filters))
    });

    let count = move |field: fn(&OrderStats) -> usize| {
        Signal::derive(move || field(&stats.get()) as f64)
    };

    let logout_config = config.clone();
    let on_logout = move |_| do_logout(&logout_config);

    view! {
        <div id="d410_order_insights--dashboard" class="d410-dashboard" style="display: flex; flex-direction: column; gap: 24px;">
            <div class="page-header" style="display: flex; justify-content: space-between; align-items: center;">
                <h1 class="page-header__title">"Admin Dashboard"</h1>
                <button
                    class="btn-primary"
                    style="display: inline-flex; align-items: center; gap: 6px;"
                    on:click=on_logout
                >
                    {icon("logout")}
                    "Logout"
                </button>
            </div>

            <div class="stat-cards" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;">
                <StatCard
                    label="Total Orders".to_string()
                    icon_name="orders".to_string()
                    value=count(|s| s.total)
                    format=ValueFormat::Integer
                />
                <StatCard
                    label="Completed".to_string()
                    icon_name="completed".to_string()
                    value=count(|s| s.completed)
                    format=ValueFormat::Integer
                    variant="success"
                />
                <StatCard
                    label="Pending".to_string()
                    icon_name="pending".to_string()
                    value=count(|s| s.pending)
                    format=ValueFormat::Integer
                    variant="warning"
                />
                <StatCard
                    label="Returned".to_string()
                    icon_name="returned".to_string()
                    value=count(|s| s.returned)
                    format=ValueFormat::Integer
                    variant="error"
                />
                <StatCard
                    label="Revenue".to_string()
                    icon_name="revenue".to_string()
                    value=Signal::derive(move || stats.get().total_revenue)
                    format=ValueFormat::Money
                    subtitle=Signal::derive(|| Some("Completed orders".to_string()))
                />
            </div>

            <OrderFilters state=state />

            {move || {
                if state.with(|s| s.is_loaded) {
                    view! { <OrdersTable orders=filtered /> }.into_any()
                } else {
                    view! {
                        <div class="d410-loading">
                            <span>"Loading orders..."</span>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
