// ============================================================================
// APP - Aplicación principal
// ============================================================================

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::config::AppConfig;
use crate::dom::{append_child, get_element_by_id, set_inner_html, take_render_listeners};
use crate::services::{ApiClient, LocalStorageTokenStore};
use crate::state::{AppState, RenderScheduler};
use crate::viewmodels::SessionViewModel;
use crate::views::render_app;

/// Sesión contra el backend real y localStorage
pub type LiveSession = SessionViewModel<ApiClient, LocalStorageTokenStore>;

/// Aplicación principal
pub struct App {
    config: AppConfig,
    session: LiveSession,
    root: Option<Element>,
    /// Listeners del árbol actual; se reemplazan (y liberan) en cada render
    listeners: Vec<EventListener>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new(config: AppConfig) -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let session = SessionViewModel::new(
            ApiClient::new(&config),
            LocalStorageTokenStore::new(&config.token_storage_key),
            state,
        );

        // Suscribirse a cambios de estado para re-renderizar automáticamente.
        // Las notificaciones del mismo tick se agrupan en un solo render.
        let scheduler = RenderScheduler::new();
        session.state().subscribe_to_changes(move || {
            if !scheduler.request() {
                return;
            }
            let scheduler = scheduler.clone();
            Timeout::new(0, move || {
                scheduler.complete();
                crate::rerender_app();
            })
            .forget();
        });

        log::info!("🌐 [APP] Backend: {}", config.api_base_url);

        Ok(Self {
            config,
            session,
            root: Some(root),
            listeners: Vec::new(),
        })
    }

    /// Recuperar el token guardado e hidratar la sesión en segundo plano
    pub fn restore_session(&self) {
        let session = self.session.clone();
        spawn_local(async move {
            session.restore().await;
        });
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");

            let rendered = render_app(&self.session, &self.config)
                .and_then(|app_view| append_child(root, &app_view));

            // Incluso si el render falló a mitad, los listeners ya creados pasan a ser del App
            self.listeners = take_render_listeners();
            log::debug!("🎬 [APP] Render con {} listeners", self.listeners.len());
            rendered?;
        }
        Ok(())
    }
}
