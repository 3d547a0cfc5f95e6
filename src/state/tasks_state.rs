// ============================================================================
// TASKS STATE - Lista de tasks, opciones de usuario y selección del admin
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Task, User};
use crate::state::reactivity::RequestGeneration;

/// Usuario cuyas tasks está viendo el admin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewSelection {
    #[default]
    All,
    User(i64),
}

impl ViewSelection {
    const ALL_VALUE: &'static str = "all";

    /// Valor del <select>: "all" o el id del usuario
    pub fn from_form_value(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            return ViewSelection::All;
        }
        value
            .trim()
            .parse::<i64>()
            .map(ViewSelection::User)
            .unwrap_or(ViewSelection::All)
    }

    pub fn form_value(&self) -> String {
        match self {
            ViewSelection::All => Self::ALL_VALUE.to_string(),
            ViewSelection::User(id) => id.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct TasksState {
    pub tasks: Rc<RefCell<Vec<Task>>>,
    pub user_options: Rc<RefCell<Vec<User>>>,
    pub selection: Rc<RefCell<ViewSelection>>,
    pub loading: Rc<RefCell<bool>>,
    pub tasks_generation: RequestGeneration,
    pub users_generation: RequestGeneration,
}

impl TasksState {
    pub fn new() -> Self {
        Self {
            tasks: Rc::new(RefCell::new(Vec::new())),
            user_options: Rc::new(RefCell::new(Vec::new())),
            selection: Rc::new(RefCell::new(ViewSelection::All)),
            loading: Rc::new(RefCell::new(false)),
            tasks_generation: RequestGeneration::new(),
            users_generation: RequestGeneration::new(),
        }
    }

    pub fn set_tasks(&self, tasks: Vec<Task>) {
        *self.tasks.borrow_mut() = tasks;
    }

    pub fn get_tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    pub fn set_user_options(&self, users: Vec<User>) {
        *self.user_options.borrow_mut() = users;
    }

    pub fn get_user_options(&self) -> Vec<User> {
        self.user_options.borrow().clone()
    }

    pub fn set_selection(&self, selection: ViewSelection) {
        *self.selection.borrow_mut() = selection;
    }

    pub fn get_selection(&self) -> ViewSelection {
        *self.selection.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Limpiar todo (logout / sesión expirada)
    pub fn clear(&self) {
        self.tasks_generation.invalidate();
        self.users_generation.invalidate();
        self.set_tasks(Vec::new());
        self.set_user_options(Vec::new());
        self.set_selection(ViewSelection::All);
        self.set_loading(false);
    }
}

impl Default for TasksState {
    fn default() -> Self {
        Self::new()
    }
}
