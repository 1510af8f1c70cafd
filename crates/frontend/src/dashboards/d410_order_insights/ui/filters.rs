use crate::dashboards::d410_order_insights::state::OrderInsightsState;
use crate::shared::icons::icon;
use contracts::dashboards::d410_order_insights::{DateFilter, OrderStatus};
use leptos::prelude::*;

/// Status, date range and sort controls
#[component]
pub fn OrderFilters(state: RwSignal<OrderInsightsState>) -> impl IntoView {
    let status_value = move || state.with(|s| s.filters.status_filter.code().to_string());
    let date_value = move || state.with(|s| s.filters.date_filter.code().to_string());

    view! {
        <div class="order-filters" style="display: flex; gap: 12px; align-items: center; flex-wrap: wrap;">
            <label class="order-filters__field">
                <span>"Status"</span>
                <select
                    prop:value=status_value
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        state.update(|s| s.set_status_filter(&code));
                    }
                >
                    <option value="all">"All statuses"</option>
                    {OrderStatus::known()
                        .into_iter()
                        .map(|status| {
                            let code = status.code().to_string();
                            let name = status.display_name().to_string();
                            view! { <option value=code>{name}</option> }
                        })
                        .collect_view()}
                </select>
            </label>

            <label class="order-filters__field">
                <span>"Period"</span>
                <select
                    prop:value=date_value
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        state.update(|s| s.set_date_filter(&code));
                    }
                >
                    {DateFilter::all()
                        .into_iter()
                        .map(|filter| {
                            view! { <option value=filter.code()>{filter.display_name()}</option> }
                        })
                        .collect_view()}
                </select>
            </label>

            <button
                class="btn-secondary"
                style="display: inline-flex; align-items: center; gap: 4px;"
                on:click=move |_| state.update(|s| s.toggle_sort())
            >
                {move || {
                    if state.with(|s| s.is_descending()) {
                        view! { <>{icon("sort-desc")}<span>"Newest first"</span></> }.into_any()
                    } else {
                        view! { <>{icon("sort-asc")}<span>"Oldest first"</span></> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}
