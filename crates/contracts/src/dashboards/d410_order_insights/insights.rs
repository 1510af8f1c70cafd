//! Aggregates and filtered view over the stored order list.
//!
//! Everything here is a pure function of its inputs. Caching is left to the
//! caller (the dashboard wraps these calls in memos).

use super::dto::{DateFilter, FilterSettings, Order, OrderStats, OrderStatus, SortDirection};
use chrono::{DateTime, Days, Local, Months, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Wall-clock layouts without an offset, read in the caller's timezone
const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Stats and filtered view computed together for one render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInsights {
    pub stats: OrderStats,
    pub filtered: Vec<Order>,
}

impl OrderInsights {
    pub fn compute<Tz: TimeZone>(
        orders: &[Order],
        settings: &FilterSettings,
        now: &DateTime<Tz>,
    ) -> Self {
        Self {
            stats: compute_stats(orders),
            filtered: compute_filtered_view_at(orders, settings, now),
        }
    }
}

/// Count orders per status and sum the revenue of completed ones.
///
/// `total` always equals `orders.len()`; statuses outside the known set are
/// counted in `total` only.
pub fn compute_stats(orders: &[Order]) -> OrderStats {
    orders
        .iter()
        .fold(OrderStats::default(), |mut stats, order| {
            stats.total += 1;
            match order.status {
                OrderStatus::Completed => {
                    stats.completed += 1;
                    stats.total_revenue += order.total;
                }
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Returned => stats.returned += 1,
                OrderStatus::Other(_) => {}
            }
            stats
        })
}

/// Filtered and sorted view relative to the current local time
pub fn compute_filtered_view(orders: &[Order], settings: &FilterSettings) -> Vec<Order> {
    compute_filtered_view_at(orders, settings, &Local::now())
}

/// Filtered and sorted view relative to `now`.
///
/// Stages run in a fixed order: status filter, date filter, then a stable
/// sort by date. Orders whose date cannot be parsed are dropped by any date
/// range other than `All` and always sort after dated orders.
pub fn compute_filtered_view_at<Tz: TimeZone>(
    orders: &[Order],
    settings: &FilterSettings,
    now: &DateTime<Tz>,
) -> Vec<Order> {
    let tz = now.timezone();
    let cutoff = date_cutoff(settings.date_filter, now);

    let mut dated: Vec<(Option<DateTime<Utc>>, &Order)> = orders
        .iter()
        .filter(|order| settings.status_filter.matches(&order.status))
        .map(|order| (parse_order_date(&order.order_date, &tz), order))
        .filter(|(date, _)| match cutoff {
            None => true,
            Some(cutoff) => date.is_some_and(|date| date >= cutoff),
        })
        .collect();

    dated.sort_by(|(a, _), (b, _)| compare_dates(a.as_ref(), b.as_ref(), settings.sort_direction));

    dated.into_iter().map(|(_, order)| order.clone()).collect()
}

/// Parse a stored order date.
///
/// RFC 3339 strings carry their own offset, a bare `YYYY-MM-DD` is midnight
/// UTC, and a date-time without offset is wall-clock time in `tz`.
pub fn parse_order_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|midnight| midnight.and_utc());
    }

    LOCAL_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|date_time| date_time.with_timezone(&Utc))
}

/// Earliest instant kept by the date filter, `None` when unbounded
fn date_cutoff<Tz: TimeZone>(filter: DateFilter, now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    let cutoff = match filter {
        DateFilter::All => return None,
        DateFilter::Today => start_of_day(now),
        DateFilter::Week => now.clone().checked_sub_days(Days::new(7)),
        DateFilter::Month => now.clone().checked_sub_months(Months::new(1)),
    };
    if cutoff.is_none() {
        log::warn!("date filter '{}' is out of range, showing all orders", filter.code());
    }
    cutoff.map(|date_time| date_time.with_timezone(&Utc))
}

/// Local midnight of `now`'s calendar day; the first valid hour when a DST gap swallows midnight
fn start_of_day<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let tz = now.timezone();
    let midnight = now.date_naive().and_hms_opt(0, 0, 0)?;
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(midnight + TimeDelta::hours(1))).earliest())
}

fn compare_dates(
    a: Option<&DateTime<Utc>>,
    b: Option<&DateTime<Utc>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Asc => a.cmp(b),
            SortDirection::Desc => b.cmp(a),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d410_order_insights::dto::StatusFilter;
    use chrono::FixedOffset;

    fn sample_orders() -> Vec<Order> {
        vec![
            Order::new("2024-01-01", "completed", 100.0),
            Order::new("2024-01-05", "pending", 50.0),
        ]
    }

    fn settings(status: &str, date: DateFilter, sort: SortDirection) -> FilterSettings {
        FilterSettings {
            status_filter: StatusFilter::from_code(status),
            date_filter: date,
            sort_direction: sort,
        }
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn mixed_orders() -> Vec<Order> {
        vec![
            Order::new("2024-03-10T08:00:00Z", "completed", 10.0),
            Order::new("2024-03-01", "returned", 20.0),
            Order::new("2024-03-15T23:30:00Z", "pending", 30.0),
            Order::new("2024-02-20", "completed", 40.0),
            Order::new("2024-03-15T06:00:00Z", "completed", 50.0),
            Order::new("2024-03-10T08:00:00Z", "shipped", 60.0),
        ]
    }

    #[test]
    fn test_stats_scenario() {
        let stats = compute_stats(&sample_orders());
        assert_eq!(
            stats,
            OrderStats {
                total: 2,
                completed: 1,
                pending: 1,
                returned: 0,
                total_revenue: 100.0,
            }
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(compute_stats(&[]), OrderStats::default());
        assert_eq!(compute_stats(&[]).total_revenue, 0.0);
    }

    #[test]
    fn test_stats_other_statuses_only_in_total() {
        let orders = mixed_orders();
        let stats = compute_stats(&orders);
        assert_eq!(stats.total, orders.len());
        assert_eq!(stats.completed, 3);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.returned, 1);
        assert!(stats.completed + stats.pending + stats.returned < stats.total);
        assert_eq!(stats.total_revenue, 100.0);
    }

    #[test]
    fn test_filtered_view_scenario() {
        let now = utc("2024-06-01T12:00:00Z");
        let view = compute_filtered_view_at(
            &sample_orders(),
            &settings("completed", DateFilter::All, SortDirection::Desc),
            &now,
        );
        assert_eq!(view, vec![Order::new("2024-01-01", "completed", 100.0)]);
    }

    #[test]
    fn test_filtered_view_empty() {
        let now = utc("2024-06-01T12:00:00Z");
        for date in DateFilter::all() {
            let view = compute_filtered_view_at(
                &[],
                &settings("pending", date, SortDirection::Asc),
                &now,
            );
            assert!(view.is_empty());
        }
    }

    #[test]
    fn test_all_filters_keep_every_order_sorted() {
        let orders = mixed_orders();
        let now = utc("2024-06-01T12:00:00Z");

        let desc = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::All, SortDirection::Desc),
            &now,
        );
        assert_eq!(desc.len(), orders.len());
        for order in &orders {
            assert!(desc.contains(order));
        }
        let dates: Vec<_> = desc
            .iter()
            .map(|o| parse_order_date(&o.order_date, &Utc).unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));

        let asc = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::All, SortDirection::Asc),
            &now,
        );
        let dates: Vec<_> = asc
            .iter()
            .map(|o| parse_order_date(&o.order_date, &Utc).unwrap())
            .collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_sort_is_stable_for_equal_dates() {
        let orders = mixed_orders();
        let now = utc("2024-06-01T12:00:00Z");
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let view =
                compute_filtered_view_at(&orders, &settings("all", DateFilter::All, direction), &now);
            let completed_pos = view.iter().position(|o| o.total == 10.0).unwrap();
            let shipped_pos = view.iter().position(|o| o.total == 60.0).unwrap();
            assert_eq!(shipped_pos, completed_pos + 1);
        }
    }

    #[test]
    fn test_status_filter_keeps_every_match() {
        let orders = mixed_orders();
        let now = utc("2024-06-01T12:00:00Z");
        let view = compute_filtered_view_at(
            &orders,
            &settings("completed", DateFilter::All, SortDirection::Desc),
            &now,
        );
        assert!(view.iter().all(|o| o.status == OrderStatus::Completed));
        let expected = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .count();
        assert_eq!(view.len(), expected);

        let other = compute_filtered_view_at(
            &orders,
            &settings("shipped", DateFilter::All, SortDirection::Desc),
            &now,
        );
        assert_eq!(other, vec![Order::new("2024-03-10T08:00:00Z", "shipped", 60.0)]);
    }

    #[test]
    fn test_today_uses_calendar_day() {
        let orders = mixed_orders();
        let now = utc("2024-03-15T12:00:00Z");
        let view = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::Today, SortDirection::Asc),
            &now,
        );
        // the 06:00 order is earlier than "now" but on the same day
        let totals: Vec<f64> = view.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![50.0, 30.0]);
    }

    #[test]
    fn test_today_respects_timezone_of_now() {
        let orders = vec![
            Order::new("2024-03-15T21:30:00Z", "pending", 1.0),
            Order::new("2024-03-15T23:30:00", "pending", 2.0),
            Order::new("2024-03-16T00:10:00", "pending", 3.0),
        ];
        // local midnight of 2024-03-16 at UTC+3 is 2024-03-15 21:00 UTC
        let tz = FixedOffset::east_opt(3 * 3600).unwrap();
        let now = tz.with_ymd_and_hms(2024, 3, 16, 1, 0, 0).unwrap();
        let view = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::Today, SortDirection::Asc),
            &now,
        );
        let totals: Vec<f64> = view.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![3.0, 1.0]);
    }

    #[test]
    fn test_week_and_month_cutoffs() {
        let orders = mixed_orders();
        let now = utc("2024-03-15T12:00:00Z");

        let week = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::Week, SortDirection::Desc),
            &now,
        );
        let totals: Vec<f64> = week.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![30.0, 50.0, 10.0, 60.0]);

        let month = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::Month, SortDirection::Desc),
            &now,
        );
        let totals: Vec<f64> = month.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![30.0, 50.0, 10.0, 60.0, 20.0, 40.0]);
    }

    #[test]
    fn test_month_clamps_short_months() {
        let orders = vec![
            Order::new("2024-02-28T12:00:00Z", "completed", 1.0),
            Order::new("2024-02-29T12:00:00Z", "completed", 2.0),
        ];
        let now = utc("2024-03-31T12:00:00Z");
        let view = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::Month, SortDirection::Asc),
            &now,
        );
        assert_eq!(view, vec![Order::new("2024-02-29T12:00:00Z", "completed", 2.0)]);
    }

    #[test]
    fn test_status_then_date_filter() {
        let orders = mixed_orders();
        let now = utc("2024-03-15T12:00:00Z");
        let view = compute_filtered_view_at(
            &orders,
            &settings("completed", DateFilter::Week, SortDirection::Asc),
            &now,
        );
        let totals: Vec<f64> = view.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![10.0, 50.0]);
    }

    #[test]
    fn test_unparseable_dates() {
        let orders = vec![
            Order::new("not a date", "completed", 1.0),
            Order::new("2024-03-01", "completed", 2.0),
            Order::new("", "completed", 3.0),
            Order::new("2024-03-05", "completed", 4.0),
        ];
        let now = utc("2024-03-15T12:00:00Z");

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let view =
                compute_filtered_view_at(&orders, &settings("all", DateFilter::All, direction), &now);
            let totals: Vec<f64> = view.iter().map(|o| o.total).collect();
            let dated = match direction {
                SortDirection::Asc => [2.0, 4.0],
                SortDirection::Desc => [4.0, 2.0],
            };
            assert_eq!(totals, vec![dated[0], dated[1], 1.0, 3.0]);
        }

        let month = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::Month, SortDirection::Asc),
            &now,
        );
        assert_eq!(month.len(), 2);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let orders = mixed_orders();
        let before = orders.clone();
        let now = utc("2024-03-15T12:00:00Z");
        let _ = compute_filtered_view_at(
            &orders,
            &settings("all", DateFilter::All, SortDirection::Asc),
            &now,
        );
        assert_eq!(orders, before);
    }

    #[test]
    fn test_parse_order_date_forms() {
        assert_eq!(
            parse_order_date("2024-01-05", &Utc),
            Some(utc("2024-01-05T00:00:00Z"))
        );
        assert_eq!(
            parse_order_date("2024-01-05T10:30:00.000Z", &Utc),
            Some(utc("2024-01-05T10:30:00Z"))
        );
        assert_eq!(
            parse_order_date("2024-01-05T10:30:00+02:00", &Utc),
            Some(utc("2024-01-05T08:30:00Z"))
        );

        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            parse_order_date("2024-01-05T10:30", &tz),
            Some(utc("2024-01-05T15:30:00Z"))
        );
        assert_eq!(
            parse_order_date("2024-01-05 10:30:15", &tz),
            Some(utc("2024-01-05T15:30:15Z"))
        );
        // date-only strings are UTC regardless of the local zone
        assert_eq!(
            parse_order_date("2024-01-05", &tz),
            Some(utc("2024-01-05T00:00:00Z"))
        );

        assert_eq!(parse_order_date("05.01.2024", &Utc), None);
        assert_eq!(parse_order_date("2024-13-01", &Utc), None);
    }

    #[test]
    fn test_insights_bundle() {
        let now = utc("2024-06-01T12:00:00Z");
        let insights = OrderInsights::compute(&sample_orders(), &FilterSettings::default(), &now);
        assert_eq!(insights.stats.total, 2);
        assert_eq!(insights.filtered[0].order_date, "2024-01-05");
        assert_eq!(insights.filtered[1].order_date, "2024-01-01");
    }
}
