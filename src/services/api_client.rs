// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra el backend
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::AppConfig;
use crate::models::{
    DashboardSummary, LoginForm, ReportRequest, SignupRequest, Task, TokenResponse, User,
    VendorReport,
};
use crate::services::api::CockpitApi;
use crate::services::error::{ApiError, ApiResult};

const JSON_CONTENT_TYPE: &str = "application/json";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const GENERIC_FAILURE: &str = "API request failed";

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// GET autenticado que devuelve JSON
    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str, fallback: &str) -> ApiResult<T> {
        let url = self.url(path);
        log::debug!("🌐 GET {}", url);

        let response = Request::get(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, fallback).await
    }
}

#[async_trait(?Send)]
impl CockpitApi for ApiClient {
    async fn login(&self, form: &LoginForm) -> ApiResult<TokenResponse> {
        let url = self.url("/auth/login");
        log::info!("🔐 Login para: {}", form.email);

        let response = Request::post(&url)
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(form.to_form_body())
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, "Login failed").await
    }

    async fn signup(&self, request: &SignupRequest) -> ApiResult<TokenResponse> {
        let url = self.url("/auth/signup");
        log::info!("📝 Signup para: {} (tenant {}, rol {})", request.email, request.tenant_id, request.role);

        let response = Request::post(&url)
            .header("Content-Type", JSON_CONTENT_TYPE)
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, "Signup failed").await
    }

    async fn current_user(&self, token: &str) -> ApiResult<User> {
        self.get_json("/me", token, GENERIC_FAILURE).await
    }

    async fn list_users(&self, token: &str) -> ApiResult<Vec<User>> {
        self.get_json("/users", token, GENERIC_FAILURE).await
    }

    async fn list_tasks(&self, token: &str, user_id: Option<i64>) -> ApiResult<Vec<Task>> {
        let params: Vec<(&str, String)> = user_id
            .map(|id| vec![("user_id", id.to_string())])
            .unwrap_or_default();
        let path = with_query("/tasks", &params);
        self.get_json(&path, token, GENERIC_FAILURE).await
    }

    async fn dashboard_summary(&self, token: &str) -> ApiResult<DashboardSummary> {
        self.get_json("/dashboard/summary", token, GENERIC_FAILURE).await
    }

    async fn vendor_report(&self, token: &str, request: &ReportRequest) -> ApiResult<VendorReport> {
        let path = report_path(request);
        log::info!("📊 Pidiendo reporte: {}", path);
        self.get_json(&path, token, "Failed to download report").await
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Leer el body como texto y parsearlo; los no-2xx se convierten en ApiError
async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> ApiResult<T> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        log::warn!("⚠️ HTTP {} ({})", status, response.url());
        return Err(ApiError::from_response(status, &body, fallback));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Agregar query string url-encoded a un path
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect();
    format!("{}?{}", path, query.join("&"))
}

pub(crate) fn report_path(request: &ReportRequest) -> String {
    with_query(
        &format!("/reports/vendor/{}/monthly", request.vendor_id),
        &[
            ("year", request.year.to_string()),
            ("month", request.month.to_string()),
        ],
    )
}
