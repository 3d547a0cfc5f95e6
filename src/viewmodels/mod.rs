pub mod view_selection;
pub mod session_viewmodel;
pub mod dashboard_viewmodel;
pub mod billing_viewmodel;
pub mod report_viewmodel;

pub use view_selection::*;
pub use session_viewmodel::SessionViewModel;
pub use dashboard_viewmodel::{summary_cards, DashboardViewModel, KpiCard};
pub use billing_viewmodel::BillingViewModel;
pub use report_viewmodel::{parse_report_request, ReportExport, ReportViewModel};
