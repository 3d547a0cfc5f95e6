// ============================================================================
// VIEW SELECTION - Estado derivado del rol (funciones puras)
// ============================================================================
// Se invocan después de cada transición que cambia usuario, opciones o selección
// ============================================================================

use crate::models::{Task, User};
use crate::state::ViewSelection;

/// Opciones del selector: lista completa para admins, solo el propio usuario si no
pub fn user_options_for(current: Option<&User>, fetched: Option<Vec<User>>) -> Vec<User> {
    match current {
        None => Vec::new(),
        Some(user) if user.is_admin => fetched.unwrap_or_default(),
        Some(user) => vec![user.clone()],
    }
}

/// El selector solo existe para admins con al menos una opción cargada
pub fn can_view_switcher(current: Option<&User>, options: &[User]) -> bool {
    current.map(|u| u.is_admin).unwrap_or(false) && !options.is_empty()
}

/// Corregir la selección: siempre `All` o un id presente en `options`
pub fn reconcile_selection(selection: ViewSelection, current: Option<&User>, options: &[User]) -> ViewSelection {
    match selection {
        ViewSelection::All => ViewSelection::All,
        ViewSelection::User(id) => {
            if can_view_switcher(current, options) && options.iter().any(|u| u.id == id) {
                ViewSelection::User(id)
            } else {
                ViewSelection::All
            }
        }
    }
}

/// `user_id` a enviar en `GET /tasks`. Nunca hay filtro para no-admins.
pub fn task_filter(current: Option<&User>, selection: ViewSelection) -> Option<i64> {
    match (current, selection) {
        (Some(user), ViewSelection::User(id)) if user.is_admin => Some(id),
        _ => None,
    }
}

/// Tope de display: como mucho `limit` tasks, sin importar cuántas mande el backend
pub fn visible_tasks(tasks: &[Task], limit: usize) -> &[Task] {
    &tasks[..tasks.len().min(limit)]
}
