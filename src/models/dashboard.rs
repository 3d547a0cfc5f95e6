use serde::{Deserialize, Serialize};

/// KPIs precalculados por el backend (`GET /dashboard/summary`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub monthly_total: f64,
    pub vendors: i64,
    pub pending: i64,
}
