use serde::{Deserialize, Serialize};

use crate::utils::constants::{API_BASE_URL, TASK_DISPLAY_LIMIT, TOKEN_STORAGE_KEY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub token_storage_key: String,
    pub task_display_limit: usize,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.trim_end_matches('/').to_string(),
            token_storage_key: TOKEN_STORAGE_KEY.to_string(),
            task_display_limit: TASK_DISPLAY_LIMIT,
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Nivel de log para wasm-logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// URL absoluta para un path del backend
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }
}
