// ============================================================================
// DASHBOARD VIEWMODEL - KPIs del mes
// ============================================================================

use crate::models::DashboardSummary;
use crate::services::{CockpitApi, TokenStore};
use crate::state::DashboardStatus;
use crate::utils::format::format_rupees;
use crate::viewmodels::session_viewmodel::SessionViewModel;

/// Tarjeta de métrica ya formateada
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
}

/// Las tres tarjetas del dashboard, en orden
pub fn summary_cards(summary: &DashboardSummary) -> [KpiCard; 3] {
    [
        KpiCard {
            label: "Total Billed (Month)",
            value: format_rupees(summary.monthly_total),
        },
        KpiCard {
            label: "Total Vendors",
            value: summary.vendors.to_string(),
        },
        KpiCard {
            label: "Pending Trips",
            value: summary.pending.to_string(),
        },
    ]
}

pub struct DashboardViewModel<A, S> {
    session: SessionViewModel<A, S>,
}

impl<A: CockpitApi, S: TokenStore> DashboardViewModel<A, S> {
    pub fn new(session: SessionViewModel<A, S>) -> Self {
        Self { session }
    }

    /// `GET /dashboard/summary`, sin reintentos
    pub async fn load(&self) {
        let state = self.session.state();
        let Some(token) = state.auth.get_token() else {
            state.dashboard.reset();
            state.notify_subscribers();
            return;
        };

        let ticket = state.dashboard.generation.begin();
        state.dashboard.set_status(DashboardStatus::Loading);
        state.notify_subscribers();

        let result = self.session.api().dashboard_summary(&token).await;
        if !state.dashboard.generation.is_current(ticket) {
            log::debug!("⏭️ [DASHBOARD] Respuesta obsoleta, descartada");
            return;
        }

        match result {
            Ok(summary) => {
                log::info!(
                    "📈 [DASHBOARD] Total mes: {:.2}, vendors: {}, pendientes: {}",
                    summary.monthly_total,
                    summary.vendors,
                    summary.pending
                );
                state.dashboard.set_status(DashboardStatus::Loaded(summary));
            }
            Err(e) if e.is_unauthorized() => {
                self.session.expire_session();
                return;
            }
            Err(e) => {
                log::error!("❌ [DASHBOARD] Error: {}", e);
                state.dashboard.set_status(DashboardStatus::Failed(e.to_string()));
            }
        }
        state.notify_subscribers();
    }
}
