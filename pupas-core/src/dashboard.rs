//! Sales dashboard
//!
//! Only orders the kitchen marked `ready` count as sales. Days are calendar
//! days in the time zone of the `now` passed in.

use chrono::{DateTime, Datelike, Months, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{TableOrder, TableOrderStatus};

use crate::group::money::{to_decimal, to_f64};

/// One bar/point of a sales chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub label: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub today: f64,
    pub this_month: f64,
    pub last_month: f64,
    /// Change of this month against last month, in percent
    pub percent_change: f64,
    /// Monday of the current week through today
    pub weekly: Vec<SalesPoint>,
    /// One month ago through today
    pub monthly: Vec<SalesPoint>,
}

/// Sale date and amount of every ready order
fn sales<Tz: TimeZone>(orders: &[TableOrder], tz: &Tz) -> Vec<(NaiveDate, Decimal)> {
    orders
        .iter()
        .filter(|o| o.status == TableOrderStatus::Ready)
        .filter_map(|o| {
            let at = tz.timestamp_millis_opt(o.created_at).single()?;
            Some((at.date_naive(), to_decimal(o.total)))
        })
        .collect()
}

fn sum_where(sales: &[(NaiveDate, Decimal)], pred: impl Fn(NaiveDate) -> bool) -> Decimal {
    sales.iter().filter(|(d, _)| pred(*d)).map(|(_, t)| *t).sum()
}

fn series(sales: &[(NaiveDate, Decimal)], from: NaiveDate, to: NaiveDate, format: &str) -> Vec<SalesPoint> {
    from.iter_days()
        .take_while(|d| *d <= to)
        .map(|date| SalesPoint {
            date,
            label: date.format(format).to_string(),
            total: to_f64(sum_where(sales, |d| d == date)),
        })
        .collect()
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `(this - last) / last × 100`, or 0 without sales last month
pub fn percent_change(this_month: Decimal, last_month: Decimal) -> f64 {
    if last_month.is_zero() {
        return 0.0;
    }
    let change = (this_month - last_month) / last_month * Decimal::ONE_HUNDRED;
    to_f64(change)
}

pub fn sales_summary<Tz: TimeZone>(orders: &[TableOrder], now: &DateTime<Tz>) -> SalesSummary {
    let sales = sales(orders, &now.timezone());
    let today = now.date_naive();
    let month_ago = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    let week_start = today - chrono::Duration::days(i64::from(today.weekday().num_days_from_monday()));

    let today_total = sum_where(&sales, |d| d >= today);
    let this_month = sum_where(&sales, |d| same_month(d, today));
    let last_month = sum_where(&sales, |d| same_month(d, month_ago));

    SalesSummary {
        today: to_f64(today_total),
        this_month: to_f64(this_month),
        last_month: to_f64(last_month),
        percent_change: percent_change(this_month, last_month),
        weekly: series(&sales, week_start, today, "%a"),
        monthly: series(&sales, month_ago, today, "%b %d"),
    }
}
