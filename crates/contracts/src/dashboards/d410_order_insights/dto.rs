use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status label as stored by the storefront.
///
/// Labels outside the known set are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Completed,
    Pending,
    Returned,
    Other(String),
}

impl OrderStatus {
    /// Wire label of the status
    pub fn code(&self) -> &str {
        match self {
            OrderStatus::Completed => "completed",
            OrderStatus::Pending => "pending",
            OrderStatus::Returned => "returned",
            OrderStatus::Other(label) => label,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            OrderStatus::Completed => "Completed",
            OrderStatus::Pending => "Pending",
            OrderStatus::Returned => "Returned",
            OrderStatus::Other(label) => label,
        }
    }

    /// Statuses with a dedicated counter on the dashboard
    pub fn known() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Completed,
            OrderStatus::Pending,
            OrderStatus::Returned,
        ]
    }
}

impl From<String> for OrderStatus {
    fn from(label: String) -> Self {
        match label.as_str() {
            "completed" => OrderStatus::Completed,
            "pending" => OrderStatus::Pending,
            "returned" => OrderStatus::Returned,
            _ => OrderStatus::Other(label),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(label: &str) -> Self {
        OrderStatus::from(label.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.code().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Order record as saved by the order placement flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Timestamp string, e.g. "2024-01-05" or "2024-01-05T10:30:00.000Z"
    pub order_date: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub total: f64,
}

impl Order {
    pub fn new(order_date: impl Into<String>, status: impl Into<OrderStatus>, total: f64) -> Self {
        Self {
            order_date: order_date.into(),
            status: status.into(),
            total,
        }
    }
}

/// Status filter: every order, or a single status
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn code(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.code(),
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "all" => StatusFilter::All,
            other => StatusFilter::Only(OrderStatus::from(other)),
        }
    }

    pub fn matches(&self, status: &OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == status,
        }
    }
}

impl From<String> for StatusFilter {
    fn from(code: String) -> Self {
        StatusFilter::from_code(&code)
    }
}

impl From<StatusFilter> for String {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Only(status) => status.into(),
        }
    }
}

/// Date range relative to the moment the filter is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl DateFilter {
    pub fn code(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Week => "week",
            DateFilter::Month => "month",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateFilter::All => "All time",
            DateFilter::Today => "Today",
            DateFilter::Week => "Last 7 days",
            DateFilter::Month => "Last month",
        }
    }

    pub fn all() -> Vec<DateFilter> {
        vec![
            DateFilter::All,
            DateFilter::Today,
            DateFilter::Week,
            DateFilter::Month,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "all" => Some(DateFilter::All),
            "today" => Some(DateFilter::Today),
            "week" => Some(DateFilter::Week),
            "month" => Some(DateFilter::Month),
            _ => None,
        }
    }
}

/// Sort direction by order date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Filter and sort options owned by the view controls
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSettings {
    pub status_filter: StatusFilter,
    pub date_filter: DateFilter,
    pub sort_direction: SortDirection,
}

/// Aggregates shown in the dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub returned: usize,
    /// Sum of `total` over completed orders only
    pub total_revenue: f64,
}
