pub mod user;
pub mod task;
pub mod auth;
pub mod dashboard;
pub mod billing;
pub mod report;

pub use user::{Role, User};
pub use task::Task;
pub use auth::{AuthMode, LoginForm, SignupRequest, TokenResponse};
pub use dashboard::DashboardSummary;
pub use billing::BillingConfig;
pub use report::{ReportRequest, VendorReport};
