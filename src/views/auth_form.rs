// ============================================================================
// AUTH FORM VIEW - Login / signup
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::LiveSession;
use crate::dom::{append_child, on_click, on_select_change, on_submit, ElementBuilder};
use crate::models::{AuthMode, Role};
use crate::state::SessionPhase;
use crate::views::fields::{create_input_field, create_option, create_status_line};

/// Renderizar panel de autenticación
pub fn render_auth_form(session: &LiveSession) -> Result<Element, JsValue> {
    let state = session.state();
    let mode = state.auth_form.get_mode();
    let busy = state.auth.get_phase() == SessionPhase::Authenticating;

    let panel = ElementBuilder::new("section")?.class("panel auth-panel").build();

    // Pestañas
    let tabs = ElementBuilder::new("div")?.class("auth-tabs").build();
    for (tab_mode, label) in [(AuthMode::Login, "Sign in"), (AuthMode::Signup, "Sign up")] {
        let class = if tab_mode == mode { "auth-tab active" } else { "auth-tab" };
        let tab = ElementBuilder::new("button")?
            .class(class)
            .attr("type", "button")?
            .text(label)
            .build();
        let state = state.clone();
        on_click(&tab, move |_| {
            if state.auth_form.get_mode() != tab_mode {
                state.auth_form.set_mode(tab_mode);
                state.notify_subscribers();
            }
        })?;
        append_child(&tabs, &tab)?;
    }
    append_child(&panel, &tabs)?;

    if let Some(user) = state.auth.get_current_user() {
        let signed_in = ElementBuilder::new("div")?.class("signed-in").build();
        let caption = ElementBuilder::new("span")?
            .text(&format!("Currently signed in as {}", user.email))
            .build();
        let logout_btn = ElementBuilder::new("button")?
            .class("btn-secondary")
            .attr("type", "button")?
            .text("Sign out")
            .build();
        {
            let session = session.clone();
            on_click(&logout_btn, move |_| session.logout())?;
        }
        append_child(&signed_in, &caption)?;
        append_child(&signed_in, &logout_btn)?;
        append_child(&panel, &signed_in)?;
    }

    let form = ElementBuilder::new("form")?.class("auth-form").build();
    append_child(&form, &create_input_field("Email", "email", &state.auth_form.email, busy)?)?;
    append_child(&form, &create_input_field("Password", "password", &state.auth_form.password, busy)?)?;

    if mode == AuthMode::Signup {
        append_child(&form, &create_input_field("Tenant ID", "number", &state.auth_form.tenant_id, busy)?)?;
        append_child(&form, &render_role_select(session)?)?;
    }

    let submit_label = match mode {
        AuthMode::Login => "Sign in",
        AuthMode::Signup => "Create account",
    };
    let submit = ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "submit")?
        .text(submit_label)
        .disabled(busy)?
        .build();
    append_child(&form, &submit)?;

    {
        let session = session.clone();
        on_submit(&form, move || {
            if session.state().auth.get_phase() == SessionPhase::Authenticating {
                return;
            }
            let session = session.clone();
            spawn_local(async move {
                session.submit_auth_form().await;
            });
        })?;
    }
    append_child(&panel, &form)?;

    let status = state.auth.get_status();
    append_child(&panel, &create_status_line(status.as_deref())?)?;

    Ok(panel)
}

fn render_role_select(session: &LiveSession) -> Result<Element, JsValue> {
    let role_cell = session.state().auth_form.role.clone();
    let current = *role_cell.borrow();

    let group = ElementBuilder::new("label")?
        .class("form-field")
        .child(ElementBuilder::new("span")?.class("form-label").text("Role").build())?
        .build();
    let select = ElementBuilder::new("select")?.class("form-input").build();
    for role in Role::signup_choices() {
        append_child(&select, &create_option(role.as_str(), role.label(), role == current)?)?;
    }

    on_select_change(&select, move |value| {
        if let Some(role) = Role::from_form_value(&value) {
            *role_cell.borrow_mut() = role;
        }
    })?;

    append_child(&group, &select)?;
    Ok(group)
}
