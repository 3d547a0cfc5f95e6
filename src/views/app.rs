// ============================================================================
// APP VIEW - Layout del cockpit
// ============================================================================
// Columna izquierda: auth + tasks. Columna derecha: dashboard, tarifas, reportes.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::LiveSession;
use crate::config::AppConfig;
use crate::dom::{append_child, ElementBuilder};
use crate::views::{
    render_auth_form, render_billing_config, render_dashboard, render_reports_export,
    render_task_list,
};

/// Renderizar aplicación completa
pub fn render_app(session: &LiveSession, config: &AppConfig) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?
        .id("cockpit")?
        .class("cockpit")
        .build();

    let header = ElementBuilder::new("header")?
        .class("cockpit-header")
        .child(ElementBuilder::new("h1")?.text("MoveInSync Billing Cockpit").build())?
        .child(
            ElementBuilder::new("p")?
                .class("cockpit-subtitle")
                .text("Trips, KPIs, billing rates and vendor reports")
                .build(),
        )?
        .build();
    append_child(&shell, &header)?;

    let main = ElementBuilder::new("main")?.class("cockpit-grid").build();

    let left = ElementBuilder::new("div")?
        .class("cockpit-column")
        .child(render_auth_form(session)?)?
        .child(render_task_list(session, config)?)?
        .build();

    let right = ElementBuilder::new("div")?
        .class("cockpit-column")
        .child(render_dashboard(session.state())?)?
        .child(render_billing_config(session.state())?)?
        .child(render_reports_export(session)?)?
        .build();

    append_child(&main, &left)?;
    append_child(&main, &right)?;
    append_child(&shell, &main)?;

    Ok(shell)
}
