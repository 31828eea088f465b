//! The employee/user directory.
//!
//! Both collections live in the store; the directory reads them through the
//! store's snapshot subscriptions, so every read sees the latest pushed
//! snapshot and every mutation is a fire-and-forget write whose effect
//! arrives with the next snapshot. A background task reacts to users
//! snapshots for the two side effects that are not plain reads: seeding an
//! empty deployment and refreshing a live session whose user record changed
//! underneath it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use subtle::ConstantTimeEq;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::{
    CreateEmployeeInput, CreateUserInput, Employee, Role, Session, ShiftStatus, UpdateEmployeeInput,
    UserRecord, UserView,
};
use crate::session::SessionStore;
use crate::store::{EmployeePatch, NewEmployee, Store, UserMap};
use crate::workflow::{self, EditOutcome};
use crate::{policy, AppError, AppResult};

pub struct Directory {
    store: Arc<dyn Store>,
    sessions: Arc<dyn SessionStore>,
    users_rx: watch::Receiver<UserMap>,
    employees_rx: watch::Receiver<Vec<Employee>>,
    session: RwLock<Option<Session>>,
    seeded: AtomicBool,
}

impl Directory {
    /// Restores the persisted session, applies side effects of the current
    /// users snapshot (seeding, session refresh), then keeps watching for
    /// later snapshots in the background.
    pub async fn start(
        store: Arc<dyn Store>,
        sessions: Arc<dyn SessionStore>,
        seed_default_users: bool,
    ) -> Arc<Self> {
        let restored = sessions.load().await;
        if let Some(ref session) = restored {
            tracing::info!(username = %session.username, role = %session.role, "Restored persisted session");
        }

        let users_rx = store.subscribe_users();
        let employees_rx = store.subscribe_employees();

        let dir = Arc::new(Directory {
            store,
            sessions,
            users_rx,
            employees_rx,
            session: RwLock::new(restored),
            seeded: AtomicBool::new(!seed_default_users),
        });

        let initial = dir.users_rx.borrow().clone();
        dir.on_users_snapshot(initial).await;

        let watcher = dir.clone();
        let mut rx = watcher.users_rx.clone();
        tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let snapshot = rx.borrow_and_update().clone();
                watcher.on_users_snapshot(snapshot).await;
            }
        });

        dir
    }

    /// Side effects of a freshly pushed users snapshot. The snapshot itself
    /// is a wholesale replace; reads always go to the subscription directly.
    async fn on_users_snapshot(&self, snapshot: UserMap) {
        tracing::debug!(count = snapshot.len(), "Users snapshot received");

        if snapshot.is_empty() && !self.seeded.swap(true, Ordering::SeqCst) {
            self.seed_default_users().await;
        }

        self.refresh_session(&snapshot).await;
    }

    /// One-time bootstrap for an empty deployment.
    async fn seed_default_users(&self) {
        tracing::info!("No users found, seeding default admin and supervisor");
        let defaults = [
            (
                "admin",
                UserRecord {
                    password: "adminpassword".to_string(),
                    role: Role::Admin,
                    display_name: Some("Admin User".to_string()),
                },
            ),
            (
                "supervisor1",
                UserRecord {
                    password: "sup1password".to_string(),
                    role: Role::Supervisor,
                    display_name: Some("Supervisor Alpha".to_string()),
                },
            ),
        ];
        for (username, record) in defaults {
            if let Err(e) = self.store.put_user(username, record).await {
                tracing::error!(error = %e, username, "Failed to seed default user");
            }
        }
    }

    /// Role and display name can change live under an active session; a
    /// username that no longer resolves leaves the session untouched.
    async fn refresh_session(&self, snapshot: &UserMap) {
        let refreshed = {
            let mut guard = self.session.write().expect("session lock poisoned");
            let Some(session) = guard.as_mut() else {
                return;
            };
            let Some(record) = snapshot.get(&session.username) else {
                return;
            };
            let display_name = effective_display_name(&session.username, record);
            if session.role == record.role && session.display_name == display_name {
                return;
            }
            session.role = record.role;
            session.display_name = display_name;
            session.clone()
        };

        tracing::info!(username = %refreshed.username, role = %refreshed.role, "Session refreshed from users snapshot");
        if let Err(e) = self.sessions.save(&refreshed).await {
            tracing::error!(error = %e, "Failed to persist refreshed session");
        }
    }

    // ----- session -----

    pub fn current_session(&self) -> Option<Session> {
        self.session.read().expect("session lock poisoned").clone()
    }

    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let users = self.users_rx.borrow().clone();
        let record = users
            .get(username)
            .ok_or_else(|| AppError::Unauthorized("incorrect username or password".to_string()))?;

        let matches: bool = record
            .password
            .as_bytes()
            .ct_eq(password.as_bytes())
            .into();
        if !matches {
            return Err(AppError::Unauthorized(
                "incorrect username or password".to_string(),
            ));
        }

        let session = Session {
            username: username.to_string(),
            role: record.role,
            display_name: effective_display_name(username, record),
        };
        self.sessions.save(&session).await?;
        *self.session.write().expect("session lock poisoned") = Some(session.clone());
        tracing::info!(username, role = %session.role, "Login");
        Ok(session)
    }

    pub async fn logout(&self) -> AppResult<()> {
        let previous = self
            .session
            .write()
            .expect("session lock poisoned")
            .take();
        if let Some(session) = previous {
            tracing::info!(username = %session.username, "Logout");
        }
        self.sessions.clear().await?;
        Ok(())
    }

    // ----- reads -----

    pub fn users_view(&self, actor: &Session) -> AppResult<Vec<UserView>> {
        if !policy::can_manage_users(actor) {
            return Err(AppError::Forbidden(
                "only administrators can manage users".to_string(),
            ));
        }
        let users = self.users_rx.borrow();
        let mut views: Vec<UserView> = users
            .iter()
            .map(|(username, record)| UserView::from_record(username, record))
            .collect();
        views.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(views)
    }

    /// Employees the actor may see, in snapshot order.
    pub fn visible_employees(&self, actor: &Session) -> Vec<Employee> {
        self.employees_rx
            .borrow()
            .iter()
            .filter(|e| policy::can_view(actor, e))
            .cloned()
            .collect()
    }

    fn employee(&self, id: Uuid) -> AppResult<Employee> {
        self.employees_rx
            .borrow()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("employee {id} not found")))
    }

    // ----- employee mutations (admin) -----

    pub async fn create_employee(
        &self,
        actor: &Session,
        input: CreateEmployeeInput,
    ) -> AppResult<Uuid> {
        self.guard_employee_admin(actor)?;

        let tech_number = input.tech_number.trim().to_string();
        let first_name = input.first_name.trim().to_string();
        let last_name = input.last_name.trim().to_string();
        let supervisor = input.supervisor_display_name.trim().to_string();

        if tech_number.is_empty() || first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::Validation(
                "tech number, first name and last name are required".to_string(),
            ));
        }
        self.check_tech_number_unique(&tech_number, None)?;
        self.check_supervisor_exists(&supervisor)?;

        let id = self
            .store
            .put_employee(NewEmployee {
                area: input.area.trim().to_string(),
                tech_number: tech_number.clone(),
                first_name,
                last_name,
                supervisor_display_name: supervisor,
            })
            .await?;
        tracing::info!(%id, tech_number, "Employee created");
        Ok(id)
    }

    pub async fn update_employee(
        &self,
        actor: &Session,
        id: Uuid,
        input: UpdateEmployeeInput,
    ) -> AppResult<()> {
        self.guard_employee_admin(actor)?;
        if input.is_empty() {
            return Err(AppError::BadRequest("no fields to update".to_string()));
        }
        self.employee(id)?;

        let tech_number = input.tech_number.map(|t| t.trim().to_string());
        if let Some(ref tech) = tech_number {
            if tech.is_empty() {
                return Err(AppError::Validation("tech number must not be empty".to_string()));
            }
            self.check_tech_number_unique(tech, Some(id))?;
        }

        let first_name = input.first_name.map(|n| n.trim().to_string());
        if first_name.as_deref() == Some("") {
            return Err(AppError::Validation(
                "first name must not be empty".to_string(),
            ));
        }
        let last_name = input.last_name.map(|n| n.trim().to_string());
        if last_name.as_deref() == Some("") {
            return Err(AppError::Validation(
                "last name must not be empty".to_string(),
            ));
        }

        let supervisor = input
            .supervisor_display_name
            .map(|s| s.trim().to_string());
        if let Some(ref name) = supervisor {
            self.check_supervisor_exists(name)?;
        }

        self.store
            .update_employee(
                id,
                EmployeePatch {
                    area: input.area.map(|a| a.trim().to_string()),
                    tech_number,
                    first_name,
                    last_name,
                    supervisor_display_name: supervisor,
                    calendar_entry: None,
                },
            )
            .await?;
        tracing::info!(%id, "Employee updated");
        Ok(())
    }

    pub async fn delete_employee(&self, actor: &Session, id: Uuid) -> AppResult<()> {
        self.guard_employee_admin(actor)?;
        self.employee(id)?;
        self.store.delete_employee(id).await?;
        tracing::info!(%id, "Employee deleted");
        Ok(())
    }

    // ----- user mutations (admin) -----

    pub async fn create_user(&self, actor: &Session, input: CreateUserInput) -> AppResult<()> {
        if !policy::can_manage_users(actor) {
            return Err(AppError::Forbidden(
                "only administrators can manage users".to_string(),
            ));
        }

        let username = input.username.trim().to_string();
        let password = input.password.trim().to_string();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::Validation(
                "username and password cannot be empty".to_string(),
            ));
        }

        let users = self.users_rx.borrow().clone();
        if users.contains_key(&username) {
            return Err(AppError::Validation(format!(
                "user '{username}' already exists"
            )));
        }

        let display_name = match input.role {
            Role::Supervisor => {
                let name = input
                    .display_name
                    .map(|n| n.trim().to_string())
                    .filter(|n| !n.is_empty())
                    .unwrap_or_else(|| username.clone());
                // The display name is the linkage key; a duplicate would make
                // the supervisor-to-employee relation ambiguous.
                let taken = users.values().any(|r| {
                    r.role == Role::Supervisor && r.display_name.as_deref() == Some(name.as_str())
                });
                if taken {
                    return Err(AppError::Validation(format!(
                        "a supervisor with display name '{name}' already exists"
                    )));
                }
                Some(name)
            }
            Role::Admin => None,
        };

        self.store
            .put_user(
                &username,
                UserRecord {
                    password,
                    role: input.role,
                    display_name,
                },
            )
            .await?;
        tracing::info!(username, role = %input.role, "User created");
        Ok(())
    }

    pub async fn delete_user(&self, actor: &Session, username: &str) -> AppResult<()> {
        if !policy::can_manage_users(actor) {
            return Err(AppError::Forbidden(
                "only administrators can manage users".to_string(),
            ));
        }
        if actor.username == username {
            return Err(AppError::Validation(
                "you cannot delete your own user account".to_string(),
            ));
        }

        let record = {
            let users = self.users_rx.borrow();
            users
                .get(username)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("user '{username}' not found")))?
        };

        // The guard must read the current employee set, not a cached one.
        let display_name = effective_display_name(username, &record);
        let linked = self
            .store
            .count_employees_by_supervisor(&display_name)
            .await?;
        if linked > 0 {
            return Err(AppError::Conflict(format!(
                "cannot delete user '{username}': {linked} employee(s) are still linked to '{display_name}'"
            )));
        }

        self.store.delete_user(username).await?;
        tracing::info!(username, "User deleted");
        Ok(())
    }

    // ----- calendar operations -----

    pub async fn edit_day(
        &self,
        actor: &Session,
        id: Uuid,
        date: chrono::NaiveDate,
        raw_status: &str,
    ) -> AppResult<EditOutcome> {
        let employee = self.employee(id)?;
        let current = employee.entry_for(date);
        let (next, outcome) =
            workflow::apply_edit(&current, ShiftStatus::new(raw_status), actor, &employee)?;
        self.write_entry(id, date, next).await?;
        tracing::info!(%id, %date, outcome = outcome.as_str(), actor = %actor.username, "Day entry edited");
        Ok(outcome)
    }

    pub async fn approve_day(
        &self,
        actor: &Session,
        id: Uuid,
        date: chrono::NaiveDate,
    ) -> AppResult<()> {
        let employee = self.employee(id)?;
        let next = workflow::approve(actor, &employee.entry_for(date))?;
        self.write_entry(id, date, next).await?;
        tracing::info!(%id, %date, actor = %actor.username, "Request approved");
        Ok(())
    }

    pub async fn reject_day(
        &self,
        actor: &Session,
        id: Uuid,
        date: chrono::NaiveDate,
    ) -> AppResult<()> {
        let employee = self.employee(id)?;
        let next = workflow::reject(actor, &employee.entry_for(date))?;
        self.write_entry(id, date, next).await?;
        tracing::info!(%id, %date, actor = %actor.username, "Request rejected");
        Ok(())
    }

    async fn write_entry(
        &self,
        id: Uuid,
        date: chrono::NaiveDate,
        entry: crate::models::DayEntry,
    ) -> AppResult<()> {
        self.store
            .update_employee(
                id,
                EmployeePatch {
                    calendar_entry: Some((date, Some(entry))),
                    ..Default::default()
                },
            )
            .await?;
        Ok(())
    }

    // ----- validation helpers -----

    fn guard_employee_admin(&self, actor: &Session) -> AppResult<()> {
        if !policy::can_manage_employees(actor) {
            return Err(AppError::Forbidden(
                "only administrators can manage employees".to_string(),
            ));
        }
        Ok(())
    }

    fn check_tech_number_unique(&self, tech_number: &str, except: Option<Uuid>) -> AppResult<()> {
        let employees = self.employees_rx.borrow();
        let clash = employees
            .iter()
            .any(|e| Some(e.id) != except && e.tech_number == tech_number);
        if clash {
            return Err(AppError::Validation(format!(
                "an employee with tech number '{tech_number}' already exists"
            )));
        }
        Ok(())
    }

    /// Empty means unlinked and is always allowed.
    fn check_supervisor_exists(&self, display_name: &str) -> AppResult<()> {
        if display_name.is_empty() {
            return Ok(());
        }
        let users = self.users_rx.borrow();
        let exists = users.values().any(|r| {
            r.role == Role::Supervisor && r.display_name.as_deref() == Some(display_name)
        });
        if !exists {
            return Err(AppError::Validation(format!(
                "no supervisor with display name '{display_name}' exists"
            )));
        }
        Ok(())
    }
}

/// Supervisors fall back to their username when no display name is set.
fn effective_display_name(username: &str, record: &UserRecord) -> String {
    record
        .display_name
        .clone()
        .unwrap_or_else(|| username.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayEntry;
    use crate::session::FileSessionStore;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use std::time::Duration;

    async fn directory() -> (Arc<Directory>, Arc<MemoryStore>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(MemoryStore::new());
        let sessions = Arc::new(FileSessionStore::new(dir.path().join("session.json")));
        let directory = Directory::start(store.clone(), sessions, true).await;
        (directory, store, dir)
    }

    async fn wait_until(mut check: impl FnMut() -> bool) {
        for _ in 0..200 {
            if check() {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("condition not reached in time");
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn admin(directory: &Directory) -> Session {
        directory.login("admin", "adminpassword").await.unwrap()
    }

    fn employee_input(tech: &str, supervisor: &str) -> CreateEmployeeInput {
        CreateEmployeeInput {
            area: "North".to_string(),
            tech_number: tech.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            supervisor_display_name: supervisor.to_string(),
        }
    }

    #[tokio::test]
    async fn empty_store_is_seeded_exactly_once() {
        let (directory, store, _tmp) = directory().await;
        let rx = store.subscribe_users();
        wait_until(|| rx.borrow().len() == 2).await;
        assert!(rx.borrow().contains_key("admin"));
        assert_eq!(
            rx.borrow().get("supervisor1").unwrap().display_name.as_deref(),
            Some("Supervisor Alpha")
        );

        // Deleting everything afterwards must not re-seed.
        let session = admin(&directory).await;
        directory.delete_user(&session, "supervisor1").await.unwrap();
        store.delete_user("admin").await.unwrap();
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(rx.borrow().is_empty());
    }

    #[tokio::test]
    async fn login_checks_password_and_builds_session() {
        let (directory, _store, _tmp) = directory().await;
        let rx = directory.users_rx.clone();
        wait_until(|| !rx.borrow().is_empty()).await;

        let session = directory.login("supervisor1", "sup1password").await.unwrap();
        assert_eq!(session.role, Role::Supervisor);
        assert_eq!(session.display_name, "Supervisor Alpha");
        assert_eq!(directory.current_session(), Some(session));

        directory.logout().await.unwrap();
        assert_eq!(directory.current_session(), None);

        assert!(matches!(
            directory.login("supervisor1", "wrong").await.unwrap_err(),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            directory.login("ghost", "pw").await.unwrap_err(),
            AppError::Unauthorized(_)
        ));
    }

    #[tokio::test]
    async fn live_session_is_refreshed_from_users_snapshot() {
        let (directory, store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        directory.login("supervisor1", "sup1password").await.unwrap();

        store
            .put_user(
                "supervisor1",
                UserRecord {
                    password: "sup1password".to_string(),
                    role: Role::Supervisor,
                    display_name: Some("Supervisor Renamed".to_string()),
                },
            )
            .await
            .unwrap();

        wait_until(|| {
            directory
                .current_session()
                .is_some_and(|s| s.display_name == "Supervisor Renamed")
        })
        .await;

        // A session whose user disappeared stays as-is.
        store.delete_user("supervisor1").await.unwrap();
        tokio::time::sleep(Duration::from_millis(25)).await;
        assert!(directory.current_session().is_some());
    }

    #[tokio::test]
    async fn employee_creation_validates_tech_number_and_supervisor() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let session = admin(&directory).await;

        directory
            .create_employee(&session, employee_input("T100", "Supervisor Alpha"))
            .await
            .unwrap();
        wait_until(|| !directory.employees_rx.borrow().is_empty()).await;

        let err = directory
            .create_employee(&session, employee_input("T100", "Supervisor Alpha"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(directory.employees_rx.borrow().len(), 1);

        let err = directory
            .create_employee(&session, employee_input("T200", "Ghost"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Unlinked employees are allowed.
        directory
            .create_employee(&session, employee_input("T300", ""))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_trims_fields_and_rejects_blank_names() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let session = admin(&directory).await;

        directory
            .create_employee(&session, employee_input("T100", ""))
            .await
            .unwrap();
        wait_until(|| !directory.employees_rx.borrow().is_empty()).await;
        let id = directory.employees_rx.borrow()[0].id;

        // Required names stay required on update, as on create.
        let err = directory
            .update_employee(
                &session,
                id,
                UpdateEmployeeInput {
                    first_name: Some("   ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = directory
            .update_employee(
                &session,
                id,
                UpdateEmployeeInput {
                    last_name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(directory.employees_rx.borrow()[0].first_name, "Ana");

        directory
            .update_employee(
                &session,
                id,
                UpdateEmployeeInput {
                    area: Some("  South ".to_string()),
                    first_name: Some(" Eva ".to_string()),
                    last_name: Some(" Lim ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        wait_until(|| directory.employees_rx.borrow()[0].first_name == "Eva").await;
        let emp = directory.employees_rx.borrow()[0].clone();
        assert_eq!(emp.last_name, "Lim");
        assert_eq!(emp.area, "South");
    }

    #[tokio::test]
    async fn supervisor_mutations_are_forbidden() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let sup = directory.login("supervisor1", "sup1password").await.unwrap();

        assert!(matches!(
            directory
                .create_employee(&sup, employee_input("T100", ""))
                .await
                .unwrap_err(),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            directory
                .create_user(
                    &sup,
                    CreateUserInput {
                        username: "x".to_string(),
                        password: "y".to_string(),
                        role: Role::Supervisor,
                        display_name: None,
                    },
                )
                .await
                .unwrap_err(),
            AppError::Forbidden(_)
        ));
        assert!(matches!(
            directory.users_view(&sup).unwrap_err(),
            AppError::Forbidden(_)
        ));
    }

    #[tokio::test]
    async fn duplicate_supervisor_display_name_is_rejected() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let session = admin(&directory).await;

        let err = directory
            .create_user(
                &session,
                CreateUserInput {
                    username: "supervisor2".to_string(),
                    password: "pw".to_string(),
                    role: Role::Supervisor,
                    display_name: Some("Supervisor Alpha".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_user_is_guarded_by_linked_employees() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let session = admin(&directory).await;

        directory
            .create_employee(&session, employee_input("T100", "Supervisor Alpha"))
            .await
            .unwrap();
        wait_until(|| !directory.employees_rx.borrow().is_empty()).await;

        let err = directory
            .delete_user(&session, "supervisor1")
            .await
            .unwrap_err();
        match err {
            AppError::Conflict(msg) => assert!(msg.contains("1 employee(s)")),
            other => panic!("expected Conflict, got {other:?}"),
        }

        // Self-deletion is blocked regardless of linkage.
        assert!(matches!(
            directory.delete_user(&session, "admin").await.unwrap_err(),
            AppError::Validation(_)
        ));

        // Unlinking the employee unblocks the delete.
        let id = directory.employees_rx.borrow()[0].id;
        directory
            .update_employee(
                &session,
                id,
                UpdateEmployeeInput {
                    supervisor_display_name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        wait_until(|| {
            directory.employees_rx.borrow()[0]
                .supervisor_display_name
                .is_empty()
        })
        .await;
        directory.delete_user(&session, "supervisor1").await.unwrap();
    }

    #[tokio::test]
    async fn request_lifecycle_submit_then_reject_projects_working() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let admin_session = admin(&directory).await;

        directory
            .create_employee(&admin_session, employee_input("T100", "Supervisor Alpha"))
            .await
            .unwrap();
        wait_until(|| !directory.employees_rx.borrow().is_empty()).await;
        let id = directory.employees_rx.borrow()[0].id;
        let day = date(2024, 6, 10);

        let sup = directory.login("supervisor1", "sup1password").await.unwrap();
        let outcome = directory.edit_day(&sup, id, day, "vacation").await.unwrap();
        assert_eq!(outcome, EditOutcome::RequestSubmitted);

        wait_until(|| directory.employees_rx.borrow()[0].entry_for(day).is_pending()).await;
        assert_eq!(
            directory.employees_rx.borrow()[0].entry_for(day),
            DayEntry::Pending {
                requested: ShiftStatus::new("vacation"),
                requested_by: "Supervisor Alpha".to_string(),
            }
        );

        directory.reject_day(&admin_session, id, day).await.unwrap();
        wait_until(|| !directory.employees_rx.borrow()[0].entry_for(day).is_pending()).await;
        let entry = directory.employees_rx.borrow()[0].entry_for(day);
        assert_eq!(entry, DayEntry::Direct(ShiftStatus::working()));
        assert_eq!(entry.label(), "WORKING");

        // A second reject hits a non-pending entry.
        assert!(matches!(
            directory
                .reject_day(&admin_session, id, day)
                .await
                .unwrap_err(),
            AppError::InvalidState(_)
        ));
    }

    #[tokio::test]
    async fn visibility_follows_linkage() {
        let (directory, _store, _tmp) = directory().await;
        wait_until(|| !directory.users_rx.borrow().is_empty()).await;
        let admin_session = admin(&directory).await;

        directory
            .create_employee(&admin_session, employee_input("T100", "Supervisor Alpha"))
            .await
            .unwrap();
        directory
            .create_employee(&admin_session, employee_input("T200", ""))
            .await
            .unwrap();
        wait_until(|| directory.employees_rx.borrow().len() == 2).await;

        assert_eq!(directory.visible_employees(&admin_session).len(), 2);

        let sup = directory.login("supervisor1", "sup1password").await.unwrap();
        let visible = directory.visible_employees(&sup);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].tech_number, "T100");
    }
}
