// ============================================================================
// TASK LIST VIEW - Workspace de tasks del usuario
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app::LiveSession;
use crate::config::AppConfig;
use crate::dom::{append_child, ElementBuilder};
use crate::models::Task;
use crate::utils::format::{format_distance_km, format_task_date};
use crate::viewmodels::visible_tasks;
use crate::views::render_view_switcher;

/// Renderizar panel de tasks
pub fn render_task_list(session: &LiveSession, config: &AppConfig) -> Result<Element, JsValue> {
    let state = session.state();
    let panel = ElementBuilder::new("section")?.class("panel tasks-panel").build();

    let Some(user) = state.auth.get_current_user() else {
        let prompt = ElementBuilder::new("h2")?
            .text("Sign in to view your tasks")
            .build();
        append_child(&panel, &prompt)?;
        return Ok(panel);
    };

    let header = ElementBuilder::new("div")?
        .class("workspace-header")
        .child(ElementBuilder::new("h2")?.text(&format!("Hello, {}", user.email)).build())?
        .child(ElementBuilder::new("p")?.class("role-line").text(&user.role_caption()).build())?
        .build();
    append_child(&panel, &header)?;

    if let Some(switcher) = render_view_switcher(session)? {
        append_child(&panel, &switcher)?;
    }

    if state.tasks.get_loading() {
        let loading = ElementBuilder::new("p")?
            .class("empty-state")
            .text("Loading tasks…")
            .build();
        append_child(&panel, &loading)?;
        return Ok(panel);
    }

    let tasks = state.tasks.get_tasks();
    if tasks.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("empty-state")
            .text("No tasks found for this user.")
            .build();
        append_child(&panel, &empty)?;
        return Ok(panel);
    }

    let visible = visible_tasks(&tasks, config.task_display_limit);
    if visible.len() < tasks.len() {
        log::debug!("✂️ [TASKS] Mostrando {} de {} tasks", visible.len(), tasks.len());
    }

    let list = ElementBuilder::new("ul")?.class("task-list").build();
    for task in visible {
        append_child(&list, &render_task_row(task)?)?;
    }
    append_child(&panel, &list)?;

    Ok(panel)
}

fn render_task_row(task: &Task) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("li")?.class("task-row").build();

    let title = ElementBuilder::new("div")?
        .class("task-title")
        .child(ElementBuilder::new("strong")?.text(&format!("Trip #{}", task.id)).build())?
        .child(
            ElementBuilder::new("span")?
                .class("task-date")
                .text(&format_task_date(&task.date))
                .build(),
        )?
        .build();
    append_child(&row, &title)?;

    let facts = [
        format_distance_km(task.distance_km),
        format!("{} min", task.duration_minutes),
        format!("Extra km: {}", task.extra_km),
        format!("Extra hours: {}", task.extra_hours),
        format!("Vendor {} · Employee {}", task.vendor_id, task.employee_id),
    ];
    let meta = ElementBuilder::new("div")?.class("task-meta").build();
    for fact in facts {
        append_child(&meta, &ElementBuilder::new("span")?.text(&fact).build())?;
    }
    append_child(&row, &meta)?;

    Ok(row)
}
