// ============================================================================
// DASHBOARD VIEW - Tarjetas de KPIs
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::state::{AppState, DashboardStatus};
use crate::viewmodels::summary_cards;

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let panel = ElementBuilder::new("section")?
        .class("panel dashboard-panel")
        .child(ElementBuilder::new("h2")?.text("Dashboard").build())?
        .build();

    let message = match state.dashboard.get_status() {
        DashboardStatus::NoToken => "Provide a token to view the dashboard.".to_string(),
        DashboardStatus::Loading => "Loading summary...".to_string(),
        DashboardStatus::Failed(error) => error,
        DashboardStatus::Loaded(summary) => {
            let grid = ElementBuilder::new("div")?.class("kpi-grid").build();
            for card in summary_cards(&summary) {
                let element = ElementBuilder::new("div")?
                    .class("kpi-card")
                    .child(ElementBuilder::new("span")?.class("kpi-label").text(card.label).build())?
                    .child(ElementBuilder::new("strong")?.class("kpi-value").text(&card.value).build())?
                    .build();
                append_child(&grid, &element)?;
            }
            append_child(&panel, &grid)?;
            return Ok(panel);
        }
    };

    append_child(&panel, &ElementBuilder::new("p")?.class("empty-state").text(&message).build())?;
    Ok(panel)
}
