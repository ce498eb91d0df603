use crate::core::aggregate::build_dashboard_model;
use crate::errors::AppResult;
use crate::models::{Checkin, DashboardFilters, DashboardModel, SortOrder};
use crate::utils::time::Zone;
use chrono::Local;

/// Entry point binding a runtime `Zone` choice to the generic pipeline.
pub struct Core;

impl Core {
    pub fn build_dashboard(
        checkins: &[Checkin],
        filters: &DashboardFilters,
        order: SortOrder,
        limit: usize,
        zone: Zone,
    ) -> AppResult<DashboardModel> {
        match zone {
            Zone::Local => build_dashboard_model(checkins, filters, order, limit, &Local),
            Zone::Fixed(offset) => build_dashboard_model(checkins, filters, order, limit, &offset),
        }
    }
}
