use contracts::dashboards::d410_order_insights::{
    DateFilter, FilterSettings, SortDirection, StatusFilter,
};
use leptos::prelude::*;

#[derive(Clone, Debug, Default)]
pub struct OrderInsightsState {
    pub filters: FilterSettings,
    pub is_loaded: bool,
}

impl OrderInsightsState {
    pub fn set_status_filter(&mut self, code: &str) {
        self.filters.status_filter = StatusFilter::from_code(code);
    }

    pub fn set_date_filter(&mut self, code: &str) {
        match DateFilter::from_code(code) {
            Some(filter) => self.filters.date_filter = filter,
            None => log::warn!("Unknown date filter '{}'", code),
        }
    }

    pub fn toggle_sort(&mut self) {
        self.filters.sort_direction = self.filters.sort_direction.toggled();
    }

    pub fn is_descending(&self) -> bool {
        self.filters.sort_direction == SortDirection::Desc
    }
}

// Create state within component scope instead of thread-local
pub fn create_state(filters: FilterSettings) -> RwSignal<OrderInsightsState> {
    RwSignal::new(OrderInsightsState {
        filters,
        ..Default::default()
    })
}
