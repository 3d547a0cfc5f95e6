// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod auth_state;
pub mod tasks_state;
pub mod dashboard_state;
pub mod forms_state;
pub mod app_state;

pub use reactivity::*;
pub use auth_state::*;
pub use tasks_state::*;
pub use dashboard_state::*;
pub use forms_state::*;
pub use app_state::*;
