use serde::{Deserialize, Serialize};

use crate::models::user::Role;

/// Respuesta de `/auth/login` y `/auth/signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Body JSON de `POST /auth/signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub tenant_id: i64,
    pub role: Role,
}

/// Credenciales de login (se envían form-encoded como `username`/`password`)
#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Body `application/x-www-form-urlencoded` esperado por OAuth2PasswordRequestForm
    pub fn to_form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.email),
            urlencoding::encode(&self.password)
        )
    }
}

/// Pestaña activa del formulario de autenticación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}
