// ============================================================================
// FORMS STATE - Valores de los formularios (sobreviven a los re-renders)
// ============================================================================
// Los handlers de input escriben aquí SIN notificar: un re-render completo
// mientras el usuario escribe le quitaría el foco al input.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{AuthMode, BillingConfig, Role};

/// Formulario de login / signup
#[derive(Clone)]
pub struct AuthFormState {
    pub mode: Rc<RefCell<AuthMode>>,
    pub email: Rc<RefCell<String>>,
    pub password: Rc<RefCell<String>>,
    pub tenant_id: Rc<RefCell<String>>,
    pub role: Rc<RefCell<Role>>,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self {
            mode: Rc::new(RefCell::new(AuthMode::Login)),
            email: Rc::new(RefCell::new("admin@acme.com".to_string())),
            password: Rc::new(RefCell::new("password".to_string())),
            tenant_id: Rc::new(RefCell::new("1".to_string())),
            role: Rc::new(RefCell::new(Role::Employee)),
        }
    }

    pub fn get_mode(&self) -> AuthMode {
        *self.mode.borrow()
    }

    pub fn set_mode(&self, mode: AuthMode) {
        *self.mode.borrow_mut() = mode;
    }
}

impl Default for AuthFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formulario de tarifas (texto crudo de los inputs)
#[derive(Clone)]
pub struct BillingFormState {
    pub per_km: Rc<RefCell<String>>,
    pub per_hour: Rc<RefCell<String>>,
    pub extra_km_rate: Rc<RefCell<String>>,
    /// Último payload entregado al callback de submit
    pub last_saved: Rc<RefCell<Option<BillingConfig>>>,
}

impl BillingFormState {
    pub fn new() -> Self {
        Self {
            per_km: Rc::new(RefCell::new("1.5".to_string())),
            per_hour: Rc::new(RefCell::new("10".to_string())),
            extra_km_rate: Rc::new(RefCell::new("2.5".to_string())),
            last_saved: Rc::new(RefCell::new(None)),
        }
    }

    pub fn get_last_saved(&self) -> Option<BillingConfig> {
        *self.last_saved.borrow()
    }
}

impl Default for BillingFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Formulario de exportación de reportes
#[derive(Clone)]
pub struct ReportFormState {
    pub vendor_id: Rc<RefCell<String>>,
    pub year: Rc<RefCell<String>>,
    pub month: Rc<RefCell<String>>,
    pub status: Rc<RefCell<Option<String>>>,
    pub exporting: Rc<RefCell<bool>>,
}

impl ReportFormState {
    /// `year`/`month`: fecha actual, valores iniciales de los inputs
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            vendor_id: Rc::new(RefCell::new("1".to_string())),
            year: Rc::new(RefCell::new(year.to_string())),
            month: Rc::new(RefCell::new(month.to_string())),
            status: Rc::new(RefCell::new(None)),
            exporting: Rc::new(RefCell::new(false)),
        }
    }

    pub fn set_status(&self, status: Option<String>) {
        *self.status.borrow_mut() = status;
    }

    pub fn get_status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn set_exporting(&self, exporting: bool) {
        *self.exporting.borrow_mut() = exporting;
    }

    pub fn get_exporting(&self) -> bool {
        *self.exporting.borrow()
    }
}
