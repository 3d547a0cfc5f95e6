// ============================================================================
// REACTIVITY - Subscribers de cambios + tickets de generación de requests
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Lista compartida de callbacks a invocar cuando cambia el estado
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        // Clonar la lista para que un callback pueda suscribir sin re-borrow
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Coalescer de re-renders: como mucho un render pendiente a la vez
#[derive(Clone, Default)]
pub struct RenderScheduler {
    pending: Rc<Cell<bool>>,
}

impl RenderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` si hay que programar un render; `false` si ya hay uno pendiente
    pub fn request(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Llamar al arrancar el render programado
    pub fn complete(&self) {
        self.pending.set(false);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

/// Identifica un request emitido por `RequestGeneration::begin`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Contador monotónico por familia de requests.
/// Solo la respuesta del último ticket emitido se aplica al estado.
#[derive(Clone, Default)]
pub struct RequestGeneration {
    current: Rc<Cell<u64>>,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emitir un ticket nuevo (invalida los anteriores)
    pub fn begin(&self) -> RequestTicket {
        let next = self.current.get() + 1;
        self.current.set(next);
        RequestTicket(next)
    }

    /// Invalidar cualquier request en vuelo sin emitir uno nuevo
    pub fn invalidate(&self) {
        self.current.set(self.current.get() + 1);
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.current.get() == ticket.0
    }
}
