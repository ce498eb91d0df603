use super::checkin::Checkin;
use serde::{Deserialize, Serialize};

/// One calendar bucket (day, ISO week or month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketPoint {
    pub label: String,
    pub total: usize,
    pub espresso: usize,
    pub normal: usize,
    /// Bucket start in epoch milliseconds.
    pub ts: i64,
    pub espresso_ratio: f64,
}

impl BucketPoint {
    pub fn new(label: String, ts: i64) -> Self {
        Self {
            label,
            total: 0,
            espresso: 0,
            normal: 0,
            ts,
            espresso_ratio: 0.0,
        }
    }

    pub fn record(&mut self, checkin: &Checkin) {
        self.total += 1;
        if checkin.is_espresso {
            self.espresso += 1;
        } else {
            self.normal += 1;
        }
        self.espresso_ratio = self.espresso as f64 / self.total as f64;
    }

    /// Espresso share as a percentage rounded to one decimal.
    pub fn espresso_pct(&self) -> f64 {
        (self.espresso_ratio * 1000.0).round() / 10.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInsight {
    pub cluster_events: usize,
    pub largest_cluster: usize,
    pub close_event_entries: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub total: usize,
    pub espresso_count: usize,
    pub normal_count: usize,
    pub espresso_ratio: f64,
    pub average_per_day: f64,
}

/// Everything the dashboard draws, derived fresh on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModel {
    pub filtered: Vec<Checkin>,
    pub kpis: Kpis,
    pub time_series: Vec<BucketPoint>,
    pub hourly: Vec<HourCount>,
    pub weekday: Vec<WeekdayCount>,
    pub monthly: Vec<BucketPoint>,
    pub insight: ClusterInsight,
    pub table_rows: Vec<Checkin>,
}
