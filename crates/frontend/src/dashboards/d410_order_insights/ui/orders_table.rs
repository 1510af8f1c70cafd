use crate::shared::format::{format_money, format_order_date};
use contracts::dashboards::d410_order_insights::{Order, OrderStatus};
use leptos::prelude::*;

fn status_class(status: &OrderStatus) -> &'static str {
    match status {
        OrderStatus::Completed => "status-badge status-badge--success",
        OrderStatus::Pending => "status-badge status-badge--warning",
        OrderStatus::Returned => "status-badge status-badge--error",
        OrderStatus::Other(_) => "status-badge",
    }
}

/// Filtered orders, one row per order
#[component]
pub fn OrdersTable(#[prop(into)] orders: Signal<Vec<Order>>) -> impl IntoView {
    view! {
        <div class="orders-table">
            <h2 class="orders-table__title">"Filtered Orders"</h2>
            {move || {
                let rows = orders.get();
                if rows.is_empty() {
                    return view! { <p class="orders-table__empty">"No orders found."</p> }.into_any();
                }
                view! {
                    <table class="table__data table--striped">
                        <thead>
                            <tr>
                                <th>"Date"</th>
                                <th>"Status"</th>
                                <th style="text-align: right;">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|order| {
                                    let class = status_class(&order.status);
                                    view! {
                                        <tr>
                                            <td>{format_order_date(&order.order_date)}</td>
                                            <td><span class=class>{order.status.display_name().to_string()}</span></td>
                                            <td style="text-align: right;">{format_money(order.total)}</td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}
        </div>
    }
}
