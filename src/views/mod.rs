pub mod fields;
pub mod app;
pub mod auth_form;
pub mod task_list;
pub mod view_switcher;
pub mod dashboard;
pub mod billing_config;
pub mod reports_export;

pub use app::render_app;
pub use auth_form::render_auth_form;
pub use task_list::render_task_list;
pub use view_switcher::render_view_switcher;
pub use dashboard::render_dashboard;
pub use billing_config::render_billing_config;
pub use reports_export::render_reports_export;
