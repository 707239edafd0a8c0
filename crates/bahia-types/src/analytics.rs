//! Analytics response types for the business dashboard.
//!
//! All three aggregates are computed over the same tracking-event window
//! (`now - period`) but as independent queries; see the tracking store in
//! `bahia-db` for the SQL.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// View count for one calendar day, for the dashboard chart.
///
/// Days with zero views are absent from the series, not zero-valued:
/// a caller rendering a continuous chart must gap-fill itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DailyViewCount {
    /// The calendar date of the bucket.
    pub date: NaiveDate,
    /// Number of `view` events on that date.
    pub count: i64,
}

/// Aggregated tracking statistics for one restaurant over one period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RestaurantAnalytics {
    /// Total `view` events in the window.
    pub total_views: i64,
    /// Per-interaction-type counts in the window, keyed by the wire label
    /// (`view`, `click_directions`, ...). Types with zero events are absent.
    pub clicks: BTreeMap<String, i64>,
    /// Day-bucketed `view` series, ascending by date.
    pub daily_views: Vec<DailyViewCount>,
}
