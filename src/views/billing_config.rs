// ============================================================================
// BILLING CONFIG VIEW - Tarifas locales
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::BillingViewModel;
use crate::views::fields::create_input_field;

pub fn render_billing_config(state: &AppState) -> Result<Element, JsValue> {
    let form_state = &state.billing_form;
    let panel = ElementBuilder::new("section")?
        .class("panel billing-panel")
        .child(ElementBuilder::new("h2")?.text("Billing Config").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("billing-form").build();
    append_child(&form, &create_input_field("Per km", "number", &form_state.per_km, false)?)?;
    append_child(&form, &create_input_field("Per hour", "number", &form_state.per_hour, false)?)?;
    append_child(&form, &create_input_field("Extra km rate", "number", &form_state.extra_km_rate, false)?)?;
    append_child(
        &form,
        &ElementBuilder::new("button")?
            .class("btn-primary")
            .attr("type", "submit")?
            .text("Save Config")
            .build(),
    )?;

    {
        let state = state.clone();
        on_submit(&form, move || {
            let vm = BillingViewModel::new(state.billing_form.clone());
            vm.submit(|config| vm.record_saved(config));
            state.notify_subscribers();
        })?;
    }
    append_child(&panel, &form)?;

    if let Some(saved) = form_state.get_last_saved() {
        let summary = format!(
            "Saved: {} per km, {} per hour, {} extra km rate",
            saved.per_km, saved.per_hour, saved.extra_km_rate
        );
        append_child(&panel, &ElementBuilder::new("p")?.class("status-line").text(&summary).build())?;
    }

    Ok(panel)
}
