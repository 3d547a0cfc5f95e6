// ============================================================================
// TOKEN STORE - Persistencia del bearer token (inyectable)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::utils::storage::{load_raw, remove_from_storage, save_raw};

/// Acceso de lectura/escritura al token persistido
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

/// Token en `window.localStorage` bajo una clave fija
#[derive(Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        load_raw(&self.key).filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), String> {
        save_raw(&self.key, token)
    }

    fn clear(&self) -> Result<(), String> {
        remove_from_storage(&self.key)
    }
}

/// Token en memoria (tests y entornos sin localStorage)
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.to_string()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.token.borrow_mut() = None;
        Ok(())
    }
}
