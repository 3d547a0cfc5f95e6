// Fixtures y backend falso para los tests de ViewModels

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::{
    DashboardSummary, LoginForm, ReportRequest, Role, SignupRequest, Task, TokenResponse, User,
    VendorReport,
};
use crate::services::error::{ApiError, ApiResult};
use crate::services::CockpitApi;

pub fn admin_user() -> User {
    User {
        id: 1,
        email: "admin@acme.com".to_string(),
        role: Role::Admin,
        tenant_id: 1,
        is_admin: true,
    }
}

pub fn employee_user(id: i64) -> User {
    User {
        id,
        email: format!("employee{}@acme.com", id),
        role: Role::Employee,
        tenant_id: 1,
        is_admin: false,
    }
}

pub fn sample_tasks(count: usize) -> Vec<Task> {
    (0..count)
        .map(|i| Task {
            id: i as i64 + 1,
            tenant_id: 1,
            vendor_id: 1,
            employee_id: 2,
            distance_km: 10.0 + i as f64,
            duration_minutes: 30,
            date: "2024-05-01T08:30:00".to_string(),
            extra_km: 0.0,
            extra_hours: 0.0,
            payload: serde_json::json!({}),
        })
        .collect()
}

fn unauthorized() -> ApiError {
    ApiError::Unauthorized("Could not validate credentials".to_string())
}

/// Backend en memoria: cuentas, tokens válidos y respuestas configurables
pub struct MockApi {
    /// email → (password, token)
    pub accounts: RefCell<HashMap<String, (String, String)>>,
    /// token → usuario de `GET /me`
    pub sessions: RefCell<HashMap<String, User>>,
    pub users: RefCell<ApiResult<Vec<User>>>,
    pub tasks: RefCell<ApiResult<Vec<Task>>>,
    pub summary: RefCell<ApiResult<DashboardSummary>>,
    pub report: RefCell<ApiResult<VendorReport>>,
    /// Log de endpoints llamados, en orden
    pub calls: RefCell<Vec<String>>,
    pub task_filters: RefCell<Vec<Option<i64>>>,
    /// Se ejecuta dentro de `list_tasks`, antes de responder
    pub on_list_tasks: RefCell<Option<Box<dyn Fn()>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            accounts: RefCell::new(HashMap::new()),
            sessions: RefCell::new(HashMap::new()),
            users: RefCell::new(Ok(Vec::new())),
            tasks: RefCell::new(Ok(Vec::new())),
            summary: RefCell::new(Ok(DashboardSummary { monthly_total: 0.0, vendors: 0, pending: 0 })),
            report: RefCell::new(Ok(VendorReport { csv: String::new() })),
            calls: RefCell::new(Vec::new()),
            task_filters: RefCell::new(Vec::new()),
            on_list_tasks: RefCell::new(None),
        }
    }

    /// Backend sembrado como el seed del servidor: admin@acme.com / password
    pub fn seeded() -> Self {
        let api = Self::new();
        api.add_account("admin@acme.com", "password", "admin-token", admin_user());
        api
    }

    pub fn add_account(&self, email: &str, password: &str, token: &str, user: User) {
        self.accounts
            .borrow_mut()
            .insert(email.to_string(), (password.to_string(), token.to_string()));
        self.sessions.borrow_mut().insert(token.to_string(), user);
    }

    /// Simular expiración del token en el servidor
    pub fn revoke(&self, token: &str) {
        self.sessions.borrow_mut().remove(token);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }

    fn authorize(&self, token: &str) -> ApiResult<User> {
        self.sessions.borrow().get(token).cloned().ok_or_else(unauthorized)
    }
}

#[async_trait(?Send)]
impl CockpitApi for MockApi {
    async fn login(&self, form: &LoginForm) -> ApiResult<TokenResponse> {
        self.record("POST /auth/login");
        match self.accounts.borrow().get(&form.email) {
            Some((password, token)) if *password == form.password => Ok(TokenResponse {
                access_token: token.clone(),
                token_type: "bearer".to_string(),
            }),
            _ => Err(ApiError::Unauthorized("Incorrect email or password".to_string())),
        }
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<TokenResponse> {
        self.record("POST /auth/signup");
        if self.accounts.borrow().contains_key(&request.email) {
            return Err(ApiError::Http {
                status: 400,
                message: "Email already registered".to_string(),
            });
        }
        let token = format!("token-{}", request.email);
        let user = User {
            id: 100,
            email: request.email.clone(),
            role: request.role,
            tenant_id: request.tenant_id,
            is_admin: request.role == Role::Admin,
        };
        self.add_account(&request.email, &request.password, &token, user);
        Ok(TokenResponse { access_token: token, token_type: "bearer".to_string() })
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        self.record("GET /me");
        self.authorize(token)
    }

    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>> {
        self.record("GET /users");
        self.authorize(token)?;
        self.users.borrow().clone()
    }

    async fn list_tasks(&self, token: &str, user_id: Option<i64>) -> ApiResult<Vec<Task>> {
        self.record("GET /tasks");
        self.task_filters.borrow_mut().push(user_id);
        if let Some(hook) = self.on_list_tasks.borrow().as_ref() {
            hook();
        }
        self.authorize(token)?;
        self.tasks.borrow().clone()
    }

    async fn dashboard_summary(&self, token: &str) -> ApiResult<DashboardSummary> {
        self.record("GET /dashboard/summary");
        self.authorize(token)?;
        self.summary.borrow().clone()
    }

    async fn vendor_report(&self, token: &str, request: &ReportRequest) -> ApiResult<VendorReport> {
        self.record(&format!(
            "GET /reports/vendor/{}/monthly?year={}&month={}",
            request.vendor_id, request.year, request.month
        ));
        self.authorize(token)?;
        self.report.borrow().clone()
    }
}
