pub mod checkin;
pub mod dashboard;
pub mod filters;

pub use checkin::{BOARD_NAME, Checkin, RawCheckin};
pub use dashboard::{BucketPoint, ClusterInsight, DashboardModel, HourCount, Kpis, WeekdayCount};
pub use filters::{DashboardFilters, Daypart, Granularity, Range, SortOrder, WeekdayFilter};
