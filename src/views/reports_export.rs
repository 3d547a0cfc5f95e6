// ============================================================================
// REPORTS EXPORT VIEW - CSV mensual por vendor
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::LiveSession;
use crate::dom::{append_child, on_submit, ElementBuilder};
use crate::utils::download::trigger_download;
use crate::viewmodels::ReportViewModel;
use crate::views::fields::{create_input_field, create_status_line};

pub fn render_reports_export(session: &LiveSession) -> Result<Element, JsValue> {
    let state = session.state();
    let form_state = &state.report_form;
    let reports = ReportViewModel::new(session.clone());
    let exporting = form_state.get_exporting();
    let disabled = !reports.can_export() || exporting;

    let panel = ElementBuilder::new("section")?
        .class("panel reports-panel")
        .child(ElementBuilder::new("h2")?.text("Vendor Reports").build())?
        .build();

    let form = ElementBuilder::new("form")?.class("reports-form").build();
    append_child(&form, &create_input_field("Vendor ID", "number", &form_state.vendor_id, false)?)?;
    append_child(&form, &create_input_field("Year", "number", &form_state.year, false)?)?;
    append_child(&form, &create_input_field("Month", "number", &form_state.month, false)?)?;

    let label = if exporting { "Exporting..." } else { "Download CSV" };
    append_child(
        &form,
        &ElementBuilder::new("button")?
            .class("btn-primary")
            .attr("type", "submit")?
            .text(label)
            .disabled(disabled)?
            .build(),
    )?;

    {
        let session = session.clone();
        on_submit(&form, move || {
            let reports = ReportViewModel::new(session.clone());
            if !reports.can_export() || session.state().report_form.get_exporting() {
                return;
            }
            spawn_local(async move {
                reports
                    .export(|export| {
                        trigger_download(&export.filename, &export.csv, "text/csv")
                            .map_err(|e| format!("{:?}", e))
                    })
                    .await;
            });
        })?;
    }
    append_child(&panel, &form)?;

    let status = form_state.get_status();
    append_child(&panel, &create_status_line(status.as_deref())?)?;

    Ok(panel)
}
