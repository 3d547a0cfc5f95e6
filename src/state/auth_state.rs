// ============================================================================
// AUTH STATE - Token, usuario actual y fase de la sesión
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::User;
use crate::state::reactivity::RequestGeneration;

/// Máquina de estados de la sesión
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Estado de autenticación
#[derive(Clone)]
pub struct AuthState {
    pub phase: Rc<RefCell<SessionPhase>>,
    pub token: Rc<RefCell<Option<String>>>,
    pub current_user: Rc<RefCell<Option<User>>>,
    /// Mensaje de estado visible en el formulario (errores incluidos)
    pub status: Rc<RefCell<Option<String>>>,
    /// Ticket de la hidratación `GET /me` en curso
    pub hydration: RequestGeneration,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            phase: Rc::new(RefCell::new(SessionPhase::Anonymous)),
            token: Rc::new(RefCell::new(None)),
            current_user: Rc::new(RefCell::new(None)),
            status: Rc::new(RefCell::new(None)),
            hydration: RequestGeneration::new(),
        }
    }

    pub fn set_phase(&self, phase: SessionPhase) {
        *self.phase.borrow_mut() = phase;
    }

    pub fn get_phase(&self) -> SessionPhase {
        *self.phase.borrow()
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    pub fn get_token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn has_token(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub fn set_current_user(&self, user: Option<User>) {
        *self.current_user.borrow_mut() = user;
    }

    pub fn get_current_user(&self) -> Option<User> {
        self.current_user.borrow().clone()
    }

    pub fn set_status(&self, status: Option<String>) {
        *self.status.borrow_mut() = status;
    }

    pub fn get_status(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    /// Volver a anónimo (no toca `status`)
    pub fn reset(&self) {
        self.hydration.invalidate();
        self.set_phase(SessionPhase::Anonymous);
        self.set_token(None);
        self.set_current_user(None);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
