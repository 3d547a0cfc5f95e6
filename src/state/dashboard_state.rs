// ============================================================================
// DASHBOARD STATE - KPIs del mes
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::DashboardSummary;
use crate::state::reactivity::RequestGeneration;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardStatus {
    #[default]
    NoToken,
    Loading,
    Loaded(DashboardSummary),
    Failed(String),
}

#[derive(Clone)]
pub struct DashboardState {
    pub status: Rc<RefCell<DashboardStatus>>,
    pub generation: RequestGeneration,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            status: Rc::new(RefCell::new(DashboardStatus::NoToken)),
            generation: RequestGeneration::new(),
        }
    }

    pub fn set_status(&self, status: DashboardStatus) {
        *self.status.borrow_mut() = status;
    }

    pub fn get_status(&self) -> DashboardStatus {
        self.status.borrow().clone()
    }

    pub fn reset(&self) {
        self.generation.invalidate();
        self.set_status(DashboardStatus::NoToken);
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}
