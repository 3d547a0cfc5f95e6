/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000 (por defecto)
/// - Otros entornos: variable API_BASE_URL (shell o .env, ver build.rs)
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};

/// Clave de localStorage donde vive el bearer token
pub const TOKEN_STORAGE_KEY: &str = "moviesync-token";

/// Máximo de tasks renderizadas en la lista (tope de display, no paginación)
pub const TASK_DISPLAY_LIMIT: usize = 100;

/// Mensaje cuando el token deja de ser válido
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please sign in again.";
