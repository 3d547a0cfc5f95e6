// ============================================================================
// COCKPIT API - Contrato con el backend de facturación
// ============================================================================
// Los ViewModels dependen de este trait, no del cliente HTTP concreto
// ============================================================================

use async_trait::async_trait;

use crate::models::{
    DashboardSummary, LoginForm, ReportRequest, SignupRequest, Task, TokenResponse, User,
    VendorReport,
};
use crate::services::error::ApiResult;

#[async_trait(?Send)]
pub trait CockpitApi {
    /// `POST /auth/login` (form-encoded)
    async fn login(&self, form: &LoginForm) -> ApiResult<TokenResponse>;

    /// `POST /auth/signup` (JSON)
    async fn signup(&self, request: &SignupRequest) -> ApiResult<TokenResponse>;

    /// `GET /me`
    async fn current_user(&self, token: &str) -> ApiResult<User>;

    /// `GET /users` (solo admins)
    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>>;

    /// `GET /tasks?user_id=`
    async fn list_tasks(&self, token: &str, user_id: Option<i64>) -> ApiResult<Vec<Task>>;

    /// `GET /dashboard/summary`
    async fn dashboard_summary(&self, token: &str) -> ApiResult<DashboardSummary>;

    /// `GET /reports/vendor/{vendorId}/monthly?year=&month=`
    async fn vendor_report(&self, token: &str, request: &ReportRequest) -> ApiResult<VendorReport>;
}
