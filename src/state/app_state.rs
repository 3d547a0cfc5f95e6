// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use chrono::Datelike;

use crate::state::{
    AuthFormState, AuthState, BillingFormState, ChangeNotifier, DashboardState, ReportFormState,
    TasksState,
};

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub tasks: TasksState,
    pub dashboard: DashboardState,

    // Formularios
    pub auth_form: AuthFormState,
    pub billing_form: BillingFormState,
    pub report_form: ReportFormState,

    // Reactividad: el App se suscribe y re-renderiza
    pub notifier: ChangeNotifier,
}

impl AppState {
    pub fn new() -> Self {
        let today = chrono::Local::now();
        Self {
            auth: AuthState::new(),
            tasks: TasksState::new(),
            dashboard: DashboardState::new(),
            auth_form: AuthFormState::new(),
            billing_form: BillingFormState::new(),
            report_form: ReportFormState::new(today.year(), today.month()),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }

    /// Notificar a todos los subscribers (re-render)
    pub fn notify_subscribers(&self) {
        self.notifier.notify();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
