// ============================================================================
// REPORT VIEWMODEL - Exportación CSV mensual por vendor
// ============================================================================

use crate::models::ReportRequest;
use crate::services::{CockpitApi, TokenStore};
use crate::state::ReportFormState;
use crate::viewmodels::session_viewmodel::SessionViewModel;

/// CSV listo para entregar al navegador
#[derive(Debug, Clone, PartialEq)]
pub struct ReportExport {
    pub filename: String,
    pub csv: String,
}

/// Validar los inputs del formulario
pub fn parse_report_request(form: &ReportFormState) -> Result<ReportRequest, String> {
    let vendor_id = form
        .vendor_id
        .borrow()
        .trim()
        .parse::<i64>()
        .map_err(|_| "Vendor ID must be a number".to_string())?;
    let year = form
        .year
        .borrow()
        .trim()
        .parse::<i32>()
        .map_err(|_| "Year must be a number".to_string())?;
    let month = form
        .month
        .borrow()
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or_else(|| "Month must be between 1 and 12".to_string())?;

    Ok(ReportRequest { vendor_id, year, month })
}

pub struct ReportViewModel<A, S> {
    session: SessionViewModel<A, S>,
}

impl<A: CockpitApi, S: TokenStore> ReportViewModel<A, S> {
    pub fn new(session: SessionViewModel<A, S>) -> Self {
        Self { session }
    }

    /// El botón de descarga solo se habilita con token
    pub fn can_export(&self) -> bool {
        self.session.state().auth.has_token()
    }

    /// Pedir el CSV y entregarlo a `deliver` (en el navegador: descarga vía Blob).
    /// Sin reintentos: el resultado queda en el status del formulario.
    pub async fn export<F>(&self, deliver: F)
    where
        F: FnOnce(&ReportExport) -> Result<(), String>,
    {
        let state = self.session.state();
        let form = &state.report_form;

        let Some(token) = state.auth.get_token() else {
            form.set_status(Some("Sign in to export reports".to_string()));
            state.notify_subscribers();
            return;
        };

        let request = match parse_report_request(form) {
            Ok(request) => request,
            Err(message) => {
                form.set_status(Some(message));
                state.notify_subscribers();
                return;
            }
        };

        log::info!(
            "📊 [REPORTS] Exportando vendor {} ({}-{:02})",
            request.vendor_id,
            request.year,
            request.month
        );
        form.set_exporting(true);
        form.set_status(None);
        state.notify_subscribers();

        let result = self.session.api().vendor_report(&token, &request).await;
        form.set_exporting(false);

        let status = match result {
            Ok(report) => {
                let export = ReportExport {
                    filename: request.filename(),
                    csv: report.csv,
                };
                match deliver(&export) {
                    Ok(()) => "Export ready".to_string(),
                    Err(e) => {
                        log::error!("❌ [REPORTS] Error entregando archivo: {}", e);
                        "Failed to download report".to_string()
                    }
                }
            }
            Err(e) if e.is_unauthorized() => {
                self.session.expire_session();
                return;
            }
            Err(e) => {
                log::error!("❌ [REPORTS] Error: {}", e);
                e.to_string()
            }
        };

        form.set_status(Some(status));
        state.notify_subscribers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use futures::executor::block_on;

    use crate::models::VendorReport;
    use crate::services::{ApiError, MemoryTokenStore};
    use crate::state::{AppState, SessionPhase};
    use crate::testing::{admin_user, MockApi};

    fn session(api: MockApi, token: Option<&str>) -> SessionViewModel<MockApi, MemoryTokenStore> {
        api.add_account("admin@acme.com", "password", "admin-token", admin_user());
        let vm = SessionViewModel::new(api, MemoryTokenStore::new(), AppState::new());
        vm.state().auth.set_token(token.map(|t| t.to_string()));
        vm
    }

    fn fill_form(form: &ReportFormState, vendor: &str, year: &str, month: &str) {
        *form.vendor_id.borrow_mut() = vendor.to_string();
        *form.year.borrow_mut() = year.to_string();
        *form.month.borrow_mut() = month.to_string();
    }

    #[test]
    fn test_parse_report_request() {
        let form = ReportFormState::new(2024, 6);
        assert_eq!(
            parse_report_request(&form),
            Ok(ReportRequest { vendor_id: 1, year: 2024, month: 6 })
        );

        fill_form(&form, "x", "2024", "6");
        assert_eq!(parse_report_request(&form), Err("Vendor ID must be a number".to_string()));

        fill_form(&form, "2", "2024", "13");
        assert_eq!(parse_report_request(&form), Err("Month must be between 1 and 12".to_string()));
    }

    #[test]
    fn test_export_delivers_csv_with_filename() {
        let api = MockApi::new();
        *api.report.borrow_mut() = Ok(VendorReport { csv: "trip_id,amount\n1,20.5\n".to_string() });
        let vm = session(api, Some("admin-token"));
        fill_form(&vm.state().report_form, "3", "2024", "7");
        let reports = ReportViewModel::new(vm.clone());
        assert!(reports.can_export());

        let delivered = RefCell::new(None);
        block_on(reports.export(|export| {
            *delivered.borrow_mut() = Some(export.clone());
            Ok(())
        }));

        let export = delivered.into_inner().unwrap();
        assert_eq!(export.filename, "vendor_3_2024_7.csv");
        assert!(export.csv.starts_with("trip_id,amount"));
        assert_eq!(vm.state().report_form.get_status().as_deref(), Some("Export ready"));
        assert_eq!(vm.api().calls(), vec!["GET /reports/vendor/3/monthly?year=2024&month=7"]);
        assert!(!vm.state().report_form.get_exporting());
    }

    #[test]
    fn test_export_without_token_is_refused() {
        let vm = session(MockApi::new(), None);
        let reports = ReportViewModel::new(vm.clone());
        assert!(!reports.can_export());

        block_on(reports.export(|_| panic!("no debería entregar nada")));

        assert!(vm.api().calls().is_empty());
        assert_eq!(
            vm.state().report_form.get_status().as_deref(),
            Some("Sign in to export reports")
        );
    }

    #[test]
    fn test_export_failure_reports_message() {
        let api = MockApi::new();
        *api.report.borrow_mut() = Err(ApiError::Http {
            status: 404,
            message: "Failed to download report".to_string(),
        });
        let vm = session(api, Some("admin-token"));

        block_on(ReportViewModel::new(vm.clone()).export(|_| Ok(())));

        assert_eq!(
            vm.state().report_form.get_status().as_deref(),
            Some("Failed to download report")
        );
    }

    #[test]
    fn test_export_with_revoked_token_expires_session() {
        let vm = session(MockApi::new(), Some("revoked"));

        block_on(ReportViewModel::new(vm.clone()).export(|_| Ok(())));

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);
        assert!(!vm.state().auth.has_token());
    }
}
