// ============================================================================
// MOVEINSYNC BILLING COCKPIT - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Orquestación + derivaciones puras, nunca tocan el DOM
// - Services: SOLO comunicación API + persistencia del token
// - State: State Management con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod utils;
mod dom;
mod views;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::AppConfig;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    wasm_logger::init(wasm_logger::Config::new(config.log_level()));
    log::info!("🚀 [APP] MoveInSync Billing Cockpit");

    // Crear y renderizar app
    let mut app = App::new(config)?;
    app.render()?;
    app.restore_session();

    // Guardar app en variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: un re-render ya en curso absorbe este
        match app_cell.try_borrow_mut() {
            Ok(mut slot) => match slot.as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [APP] App no está inicializada"),
            },
            Err(_) => log::debug!("⏭️ [APP] Re-render ya en curso"),
        }
    });
}
