// ============================================================================
// VIEW SWITCHER - Selector "View tasks for" (solo admins)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::LiveSession;
use crate::dom::{append_child, on_select_change, ElementBuilder};
use crate::state::ViewSelection;
use crate::viewmodels::can_view_switcher;
use crate::views::fields::create_option;

/// `None` si el usuario actual no puede cambiar de vista
pub fn render_view_switcher(session: &LiveSession) -> Result<Option<Element>, JsValue> {
    let state = session.state();
    let user = state.auth.get_current_user();
    let options = state.tasks.get_user_options();
    if !can_view_switcher(user.as_ref(), &options) {
        return Ok(None);
    }

    let selection = state.tasks.get_selection();
    let group = ElementBuilder::new("label")?
        .class("form-field view-switcher")
        .child(ElementBuilder::new("span")?.class("form-label").text("View tasks for").build())?
        .build();

    let select = ElementBuilder::new("select")?.class("form-input").build();
    append_child(
        &select,
        &create_option(&ViewSelection::All.form_value(), "All users", selection == ViewSelection::All)?,
    )?;
    for option in &options {
        let value = ViewSelection::User(option.id);
        let label = format!("{} ({})", option.email, option.role);
        append_child(&select, &create_option(&value.form_value(), &label, selection == value)?)?;
    }

    {
        let session = session.clone();
        on_select_change(&select, move |value| {
            let session = session.clone();
            spawn_local(async move {
                session.select_user(&value).await;
            });
        })?;
    }

    append_child(&group, &select)?;
    Ok(Some(group))
}
