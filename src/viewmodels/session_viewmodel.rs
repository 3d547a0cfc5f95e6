// ============================================================================
// SESSION VIEWMODEL - LÓGICA DE SESIÓN
// ============================================================================
// Token → GET /me → GET /users (admin) → GET /tasks, más logout y expiración.
// Muta AppState y notifica; nunca toca el DOM.
// ============================================================================

use std::rc::Rc;

use crate::models::{AuthMode, LoginForm, Role, SignupRequest, User};
use crate::services::{ApiError, CockpitApi, TokenStore};
use crate::state::{AppState, SessionPhase, ViewSelection};
use crate::utils::constants::SESSION_EXPIRED_MESSAGE;
use crate::viewmodels::dashboard_viewmodel::DashboardViewModel;
use crate::viewmodels::view_selection::{reconcile_selection, task_filter, user_options_for};

/// ViewModel de sesión
pub struct SessionViewModel<A, S> {
    api: Rc<A>,
    store: Rc<S>,
    state: AppState,
}

impl<A, S> Clone for SessionViewModel<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            store: self.store.clone(),
            state: self.state.clone(),
        }
    }
}

impl<A: CockpitApi, S: TokenStore> SessionViewModel<A, S> {
    pub fn new(api: A, store: S, state: AppState) -> Self {
        Self {
            api: Rc::new(api),
            store: Rc::new(store),
            state,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dashboard(&self) -> DashboardViewModel<A, S> {
        DashboardViewModel::new(self.clone())
    }

    /// Al montar la app: recuperar token persistido e hidratar
    pub async fn restore(&self) {
        match self.store.load() {
            Some(token) => {
                log::info!("💾 [SESSION] Token encontrado en storage, hidratando sesión...");
                self.state.auth.set_token(Some(token));
                self.hydrate(true).await;
            }
            None => {
                log::info!("ℹ️ [SESSION] Sin token guardado");
                self.state.auth.set_phase(SessionPhase::Anonymous);
                self.state.notify_subscribers();
            }
        }
    }

    /// Submit del formulario de auth según la pestaña activa
    pub async fn submit_auth_form(&self) {
        let form = &self.state.auth_form;
        let email = form.email.borrow().trim().to_string();
        let password = form.password.borrow().clone();

        match form.get_mode() {
            AuthMode::Login => self.login(LoginForm { email, password }).await,
            AuthMode::Signup => {
                let tenant_raw = form.tenant_id.borrow().clone();
                let Ok(tenant_id) = tenant_raw.trim().parse::<i64>() else {
                    self.state.auth.set_status(Some("Tenant ID must be a number".to_string()));
                    self.state.notify_subscribers();
                    return;
                };
                let role: Role = *form.role.borrow();
                self.signup(SignupRequest { email, password, tenant_id, role }).await;
            }
        }
    }

    pub async fn login(&self, form: LoginForm) {
        log::info!("🔐 [SESSION] Iniciando login para {}", form.email);
        self.begin_authentication("Signing in...");

        match self.api.login(&form).await {
            Ok(response) => {
                log::info!("✅ [SESSION] Login exitoso");
                self.apply_token(Some(response.access_token));
                self.state.auth_form.set_mode(AuthMode::Login);
                self.state.auth.set_status(Some("Authenticated".to_string()));
                self.hydrate(false).await;
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error en login: {}", e);
                self.fail_authentication(&e, "Login failed");
            }
        }
    }

    pub async fn signup(&self, request: SignupRequest) {
        log::info!("📝 [SESSION] Creando cuenta {} (tenant {})", request.email, request.tenant_id);
        self.begin_authentication("Creating account...");

        match self.api.signup(&request).await {
            Ok(response) => {
                log::info!("✅ [SESSION] Cuenta creada");
                self.apply_token(Some(response.access_token));
                self.state.auth_form.set_mode(AuthMode::Login);
                self.state
                    .auth
                    .set_status(Some("Account created. You are now signed in.".to_string()));
                self.hydrate(false).await;
            }
            Err(e) => {
                log::error!("❌ [SESSION] Error en signup: {}", e);
                self.fail_authentication(&e, "Signup failed");
            }
        }
    }

    /// Logout - limpiar todo
    pub fn logout(&self) {
        log::info!("👋 [SESSION] Logout");
        self.apply_token(None);
        self.state.auth.reset();
        self.state.tasks.clear();
        self.state.dashboard.reset();
        self.state.auth.set_status(Some("Signed out.".to_string()));
        self.state.notify_subscribers();
    }

    /// `GET /me` con el token actual y cascada users → tasks → dashboard.
    /// `clear_status`: al restaurar desde storage no hay mensaje que conservar.
    pub async fn hydrate(&self, clear_status: bool) {
        let Some(token) = self.state.auth.get_token() else {
            self.state.auth.reset();
            self.state.tasks.clear();
            self.state.dashboard.reset();
            self.state.notify_subscribers();
            return;
        };

        let ticket = self.state.auth.hydration.begin();
        self.state.auth.set_phase(SessionPhase::Authenticating);
        self.state.notify_subscribers();

        let result = self.api.current_user(&token).await;
        if !self.state.auth.hydration.is_current(ticket) {
            log::debug!("⏭️ [SESSION] Respuesta de /me obsoleta, descartada");
            return;
        }

        match result {
            Ok(user) => {
                log::info!("✅ [SESSION] Sesión activa: {} (admin: {})", user.email, user.is_admin);
                self.state.auth.set_current_user(Some(user));
                self.state.auth.set_phase(SessionPhase::Authenticated);
                if clear_status {
                    self.state.auth.set_status(None);
                }
                self.state.notify_subscribers();

                self.load_users().await;
                self.load_tasks().await;
                self.refresh_dashboard().await;
            }
            Err(e) => {
                // Cualquier fallo de /me invalida la sesión
                log::warn!("⚠️ [SESSION] No se pudo hidratar la sesión: {}", e);
                self.expire_session();
            }
        }
    }

    /// Opciones del selector de usuarios
    pub async fn load_users(&self) {
        let Some(user) = self.state.auth.get_current_user() else {
            self.state.tasks.set_user_options(Vec::new());
            self.reconcile();
            return;
        };
        let token = self.state.auth.get_token();

        match token {
            Some(token) if user.is_admin => {
                let ticket = self.state.tasks.users_generation.begin();
                let result = self.api.list_users(&token).await;
                if !self.state.tasks.users_generation.is_current(ticket) {
                    log::debug!("⏭️ [TASKS] Lista de usuarios obsoleta, descartada");
                    return;
                }
                match result {
                    Ok(users) => {
                        log::info!("👥 [TASKS] {} usuarios cargados", users.len());
                        self.state
                            .tasks
                            .set_user_options(user_options_for(Some(&user), Some(users)));
                    }
                    Err(e) => {
                        log::error!("❌ [TASKS] Error cargando usuarios: {}", e);
                        if self.handle_fetch_error(&e, "Unable to load user list") {
                            return;
                        }
                    }
                }
            }
            _ => {
                self.state.tasks.set_user_options(user_options_for(Some(&user), None));
            }
        }

        self.reconcile();
        self.state.notify_subscribers();
    }

    /// `GET /tasks` con el filtro que corresponda al rol
    pub async fn load_tasks(&self) {
        let (Some(token), Some(user)) = (self.state.auth.get_token(), self.state.auth.get_current_user()) else {
            self.state.tasks.tasks_generation.invalidate();
            self.state.tasks.set_tasks(Vec::new());
            self.state.tasks.set_loading(false);
            return;
        };

        let filter = task_filter(Some(&user), self.state.tasks.get_selection());
        let ticket = self.state.tasks.tasks_generation.begin();
        self.state.tasks.set_loading(true);
        self.state.notify_subscribers();

        let result = self.api.list_tasks(&token, filter).await;
        if !self.state.tasks.tasks_generation.is_current(ticket) {
            log::debug!("⏭️ [TASKS] Respuesta de /tasks obsoleta, descartada");
            return;
        }

        self.state.tasks.set_loading(false);
        match result {
            Ok(tasks) => {
                log::info!("📋 [TASKS] {} tasks recibidas (filtro: {:?})", tasks.len(), filter);
                self.state.tasks.set_tasks(tasks);
            }
            Err(e) => {
                log::error!("❌ [TASKS] Error cargando tasks: {}", e);
                if self.handle_fetch_error(&e, "Unable to load tasks for this user") {
                    return;
                }
            }
        }
        self.state.notify_subscribers();
    }

    /// Cambio en el selector "View tasks for"
    pub async fn select_user(&self, form_value: &str) {
        let requested = ViewSelection::from_form_value(form_value);
        let previous = self.state.tasks.get_selection();
        self.state.tasks.set_selection(requested);
        self.reconcile();

        if self.state.tasks.get_selection() != previous {
            log::info!("🔀 [TASKS] Selección: {:?}", self.state.tasks.get_selection());
            self.load_tasks().await;
        } else {
            self.state.notify_subscribers();
        }
    }

    pub async fn refresh_dashboard(&self) {
        self.dashboard().load().await;
    }

    /// Errores de fetch autenticado: 401 expira la sesión, el resto es un mensaje.
    /// Devuelve `true` si la sesión fue expirada.
    pub fn handle_fetch_error(&self, error: &ApiError, message: &str) -> bool {
        if error.is_unauthorized() {
            self.expire_session();
            true
        } else {
            self.state.auth.set_status(Some(message.to_string()));
            false
        }
    }

    /// Token inválido: limpiar y forzar re-login
    pub fn expire_session(&self) {
        log::warn!("🔒 [SESSION] Sesión expirada, limpiando token");
        self.apply_token(None);
        self.state.auth.reset();
        self.state.tasks.clear();
        self.state.dashboard.reset();
        self.state.auth.set_status(Some(SESSION_EXPIRED_MESSAGE.to_string()));
        self.state.notify_subscribers();
    }

    /// Write-through del token a storage
    fn apply_token(&self, token: Option<String>) {
        let result = match &token {
            Some(value) => self.store.save(value),
            None => self.store.clear(),
        };
        if let Err(e) = result {
            log::error!("❌ [SESSION] Error persistiendo token: {}", e);
        }
        self.state.auth.set_token(token);
    }

    fn begin_authentication(&self, status: &str) {
        self.state.auth.set_phase(SessionPhase::Authenticating);
        self.state.auth.set_status(Some(status.to_string()));
        self.state.notify_subscribers();
    }

    /// Credenciales rechazadas: la sesión previa (si había) sigue vigente
    fn fail_authentication(&self, error: &ApiError, fallback: &str) {
        let phase = if self.state.auth.get_current_user().is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        };
        let message = error.to_string();
        let message = if message.trim().is_empty() { fallback.to_string() } else { message };
        self.state.auth.set_phase(phase);
        self.state.auth.set_status(Some(message));
        self.state.notify_subscribers();
    }

    fn reconcile(&self) {
        let user: Option<User> = self.state.auth.get_current_user();
        let options = self.state.tasks.get_user_options();
        let corrected = reconcile_selection(self.state.tasks.get_selection(), user.as_ref(), &options);
        self.state.tasks.set_selection(corrected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use futures::executor::block_on;

    use crate::models::DashboardSummary;
    use crate::services::MemoryTokenStore;
    use crate::state::{DashboardStatus, RenderScheduler};
    use crate::testing::{admin_user, employee_user, sample_tasks, MockApi};

    fn viewmodel(api: MockApi, store: MemoryTokenStore) -> SessionViewModel<MockApi, MemoryTokenStore> {
        SessionViewModel::new(api, store, AppState::new())
    }

    fn admin_login() -> LoginForm {
        LoginForm {
            email: "admin@acme.com".to_string(),
            password: "password".to_string(),
        }
    }

    #[test]
    fn test_login_sets_token_and_authenticates() {
        let store = MemoryTokenStore::new();
        let vm = viewmodel(MockApi::seeded(), store.clone());
        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);

        block_on(vm.login(admin_login()));

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Authenticated);
        assert_eq!(vm.state().auth.get_token().as_deref(), Some("admin-token"));
        assert_eq!(store.load().as_deref(), Some("admin-token"));
        assert_eq!(vm.state().auth.get_status().as_deref(), Some("Authenticated"));
        assert_eq!(vm.state().auth.get_current_user(), Some(admin_user()));
    }

    #[test]
    fn test_admin_login_populates_users_and_switcher() {
        let api = MockApi::seeded();
        *api.users.borrow_mut() = Ok(vec![admin_user(), employee_user(2), employee_user(3)]);
        let vm = viewmodel(api, MemoryTokenStore::new());

        block_on(vm.login(admin_login()));

        let options = vm.state().tasks.get_user_options();
        assert_eq!(options.len(), 3);
        let user = vm.state().auth.get_current_user();
        assert!(crate::viewmodels::can_view_switcher(user.as_ref(), &options));
        assert_eq!(
            vm.api().calls(),
            vec!["POST /auth/login", "GET /me", "GET /users", "GET /tasks", "GET /dashboard/summary"]
        );
    }

    #[test]
    fn test_wrong_password_stays_anonymous_with_message() {
        let store = MemoryTokenStore::new();
        let vm = viewmodel(MockApi::seeded(), store.clone());

        block_on(vm.login(LoginForm {
            email: "admin@acme.com".to_string(),
            password: "nope".to_string(),
        }));

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);
        assert_eq!(vm.state().auth.get_status().as_deref(), Some("Incorrect email or password"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_restore_with_expired_token_clears_it() {
        let store = MemoryTokenStore::with_token("stale-token");
        let vm = viewmodel(MockApi::seeded(), store.clone());

        block_on(vm.restore());

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);
        assert!(vm.state().auth.get_token().is_none());
        assert!(store.load().is_none());
        assert_eq!(vm.state().auth.get_status().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    }

    #[test]
    fn test_restore_with_valid_token_authenticates_and_clears_status() {
        let store = MemoryTokenStore::with_token("admin-token");
        let vm = viewmodel(MockApi::seeded(), store);
        vm.state().auth.set_status(Some("old".to_string()));

        block_on(vm.restore());

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Authenticated);
        assert!(vm.state().auth.get_status().is_none());
    }

    #[test]
    fn test_unauthorized_task_fetch_expires_session() {
        let store = MemoryTokenStore::new();
        let vm = viewmodel(MockApi::seeded(), store.clone());
        block_on(vm.login(admin_login()));

        vm.api().revoke("admin-token");
        block_on(vm.load_tasks());

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);
        assert!(store.load().is_none());
        assert_eq!(vm.state().auth.get_status().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
        assert!(vm.state().tasks.get_tasks().is_empty());
    }

    #[test]
    fn test_non_auth_task_failure_keeps_session() {
        let api = MockApi::seeded();
        let vm = viewmodel(api, MemoryTokenStore::new());
        block_on(vm.login(admin_login()));

        *vm.api().tasks.borrow_mut() = Err(ApiError::Http { status: 500, message: "boom".to_string() });
        block_on(vm.load_tasks());

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Authenticated);
        assert_eq!(
            vm.state().auth.get_status().as_deref(),
            Some("Unable to load tasks for this user")
        );
        assert!(!vm.state().tasks.get_loading());
    }

    #[test]
    fn test_users_list_failure_sets_message() {
        let api = MockApi::seeded();
        *api.users.borrow_mut() = Err(ApiError::Http { status: 403, message: "Forbidden".to_string() });
        let vm = viewmodel(api, MemoryTokenStore::new());

        block_on(vm.login(admin_login()));

        assert_eq!(vm.state().auth.get_status().as_deref(), Some("Unable to load user list"));
        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn test_unauthorized_user_list_expires_session() {
        let store = MemoryTokenStore::new();
        let api = MockApi::seeded();
        *api.users.borrow_mut() = Ok(vec![admin_user(), employee_user(2)]);
        let vm = viewmodel(api, store.clone());
        block_on(vm.login(admin_login()));
        assert_eq!(vm.state().tasks.get_user_options().len(), 2);

        vm.api().revoke("admin-token");
        block_on(vm.load_users());

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);
        assert!(store.load().is_none());
        assert!(vm.state().tasks.get_user_options().is_empty());
        assert_eq!(vm.state().auth.get_status().as_deref(), Some(SESSION_EXPIRED_MESSAGE));
    }

    #[test]
    fn test_employee_never_sends_user_filter() {
        let api = MockApi::new();
        api.add_account("employee7@acme.com", "pw", "emp-token", employee_user(7));
        let vm = viewmodel(api, MemoryTokenStore::new());

        block_on(vm.login(LoginForm {
            email: "employee7@acme.com".to_string(),
            password: "pw".to_string(),
        }));
        block_on(vm.select_user("7"));

        assert_eq!(vm.state().tasks.get_user_options(), vec![employee_user(7)]);
        assert_eq!(vm.state().tasks.get_selection(), ViewSelection::All);
        assert!(vm.api().task_filters.borrow().iter().all(|f| f.is_none()));
        assert!(!vm.api().calls().contains(&"GET /users".to_string()));
    }

    #[test]
    fn test_admin_selection_filters_and_resets_when_user_removed() {
        let api = MockApi::seeded();
        *api.users.borrow_mut() = Ok(vec![admin_user(), employee_user(2), employee_user(3)]);
        let vm = viewmodel(api, MemoryTokenStore::new());
        block_on(vm.login(admin_login()));

        block_on(vm.select_user("3"));
        assert_eq!(vm.state().tasks.get_selection(), ViewSelection::User(3));
        assert_eq!(vm.api().task_filters.borrow().last().copied(), Some(Some(3)));

        *vm.api().users.borrow_mut() = Ok(vec![admin_user(), employee_user(2)]);
        block_on(vm.load_users());
        assert_eq!(vm.state().tasks.get_selection(), ViewSelection::All);
    }

    #[test]
    fn test_selecting_unknown_user_falls_back_to_all() {
        let api = MockApi::seeded();
        *api.users.borrow_mut() = Ok(vec![admin_user()]);
        let vm = viewmodel(api, MemoryTokenStore::new());
        block_on(vm.login(admin_login()));
        let fetches = vm.api().task_filters.borrow().len();

        block_on(vm.select_user("99"));

        assert_eq!(vm.state().tasks.get_selection(), ViewSelection::All);
        // La selección no cambió: no hay nuevo fetch
        assert_eq!(vm.api().task_filters.borrow().len(), fetches);
    }

    #[test]
    fn test_stale_task_response_is_discarded() {
        let api = MockApi::seeded();
        *api.tasks.borrow_mut() = Ok(sample_tasks(5));
        let vm = viewmodel(api, MemoryTokenStore::new());
        block_on(vm.login(admin_login()));
        assert_eq!(vm.state().tasks.get_tasks().len(), 5);

        // Un request más nuevo se emite mientras este está en vuelo
        let generation = vm.state().tasks.tasks_generation.clone();
        let fired = Rc::new(Cell::new(false));
        let fired_hook = fired.clone();
        *vm.api().on_list_tasks.borrow_mut() = Some(Box::new(move || {
            generation.begin();
            fired_hook.set(true);
        }));
        *vm.api().tasks.borrow_mut() = Ok(sample_tasks(1));

        block_on(vm.load_tasks());

        assert!(fired.get());
        assert_eq!(vm.state().tasks.get_tasks().len(), 5);
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryTokenStore::new();
        let api = MockApi::seeded();
        *api.tasks.borrow_mut() = Ok(sample_tasks(3));
        *api.summary.borrow_mut() = Ok(DashboardSummary { monthly_total: 10.0, vendors: 1, pending: 0 });
        let vm = viewmodel(api, store.clone());
        block_on(vm.login(admin_login()));

        vm.logout();

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Anonymous);
        assert!(store.load().is_none());
        assert!(vm.state().auth.get_current_user().is_none());
        assert!(vm.state().tasks.get_tasks().is_empty());
        assert_eq!(vm.state().tasks.get_selection(), ViewSelection::All);
        assert_eq!(vm.state().dashboard.get_status(), DashboardStatus::NoToken);
        assert_eq!(vm.state().auth.get_status().as_deref(), Some("Signed out."));
    }

    #[test]
    fn test_signup_form_creates_account_and_signs_in() {
        let vm = viewmodel(MockApi::new(), MemoryTokenStore::new());
        let form = &vm.state().auth_form;
        form.set_mode(AuthMode::Signup);
        *form.email.borrow_mut() = "vendor@acme.com".to_string();
        *form.tenant_id.borrow_mut() = "2".to_string();
        *form.role.borrow_mut() = Role::Vendor;

        block_on(vm.submit_auth_form());

        assert_eq!(vm.state().auth.get_phase(), SessionPhase::Authenticated);
        assert_eq!(vm.state().auth_form.get_mode(), AuthMode::Login);
        assert_eq!(
            vm.state().auth.get_status().as_deref(),
            Some("Account created. You are now signed in.")
        );
        let user = vm.state().auth.get_current_user().unwrap();
        assert_eq!(user.tenant_id, 2);
        assert_eq!(user.role, Role::Vendor);
    }

    #[test]
    fn test_signup_rejects_non_numeric_tenant_without_request() {
        let vm = viewmodel(MockApi::new(), MemoryTokenStore::new());
        vm.state().auth_form.set_mode(AuthMode::Signup);
        *vm.state().auth_form.tenant_id.borrow_mut() = "acme".to_string();

        block_on(vm.submit_auth_form());

        assert!(vm.api().calls().is_empty());
        assert_eq!(vm.state().auth.get_status().as_deref(), Some("Tenant ID must be a number"));
    }

    #[test]
    fn test_login_cascade_schedules_a_single_render() {
        let vm = viewmodel(MockApi::seeded(), MemoryTokenStore::new());
        let scheduler = RenderScheduler::new();
        let notifications = Rc::new(Cell::new(0));
        let scheduled = Rc::new(Cell::new(0));
        {
            let notifications = notifications.clone();
            let scheduled = scheduled.clone();
            let scheduler = scheduler.clone();
            vm.state().subscribe_to_changes(move || {
                notifications.set(notifications.get() + 1);
                if scheduler.request() {
                    scheduled.set(scheduled.get() + 1);
                }
            });
        }

        // Todo el login corre dentro del mismo tick: el render programado aún no arrancó
        block_on(vm.login(admin_login()));

        assert!(notifications.get() > 1);
        assert_eq!(scheduled.get(), 1);

        scheduler.complete();
        vm.logout();
        assert_eq!(scheduled.get(), 2);
    }

    #[test]
    fn test_state_changes_notify_subscribers() {
        let vm = viewmodel(MockApi::seeded(), MemoryTokenStore::new());
        let renders = Rc::new(Cell::new(0));
        let counter = renders.clone();
        vm.state().subscribe_to_changes(move || counter.set(counter.get() + 1));

        block_on(vm.login(admin_login()));

        assert!(renders.get() > 0);
    }
}
