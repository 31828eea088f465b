//! In-memory store backend.
//!
//! Keeps both collections behind locks and republishes a full snapshot on
//! every committed mutation. Last write wins at snapshot granularity; there
//! is no merge and no version check.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::{Employee, UserRecord};

use super::{EmployeePatch, NewEmployee, Store, StoreError, StoreResult, UserMap};

pub struct MemoryStore {
    users: RwLock<UserMap>,
    employees: RwLock<HashMap<Uuid, Employee>>,
    users_tx: watch::Sender<UserMap>,
    employees_tx: watch::Sender<Vec<Employee>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        let (users_tx, _) = watch::channel(UserMap::new());
        let (employees_tx, _) = watch::channel(Vec::new());
        MemoryStore {
            users: RwLock::new(UserMap::new()),
            employees: RwLock::new(HashMap::new()),
            users_tx,
            employees_tx,
        }
    }

    fn publish_users(&self) {
        let snapshot = self.users.read().expect("users lock poisoned").clone();
        // The channel must hold the latest snapshot even while nobody is
        // subscribed; a plain send would drop it.
        self.users_tx.send_replace(snapshot);
    }

    fn publish_employees(&self) {
        let guard = self.employees.read().expect("employees lock poisoned");
        let mut snapshot: Vec<Employee> = guard.values().cloned().collect();
        drop(guard);
        // Stable order keeps renders and exports deterministic.
        snapshot.sort_by(|a, b| a.tech_number.cmp(&b.tech_number));
        self.employees_tx.send_replace(snapshot);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn subscribe_users(&self) -> watch::Receiver<UserMap> {
        self.users_tx.subscribe()
    }

    fn subscribe_employees(&self) -> watch::Receiver<Vec<Employee>> {
        self.employees_tx.subscribe()
    }

    async fn put_user(&self, username: &str, record: UserRecord) -> StoreResult<()> {
        self.users
            .write()
            .expect("users lock poisoned")
            .insert(username.to_string(), record);
        self.publish_users();
        Ok(())
    }

    async fn delete_user(&self, username: &str) -> StoreResult<()> {
        let removed = self
            .users
            .write()
            .expect("users lock poisoned")
            .remove(username);
        if removed.is_none() {
            return Err(StoreError::NotFound(format!("user '{username}'")));
        }
        self.publish_users();
        Ok(())
    }

    async fn put_employee(&self, new: NewEmployee) -> StoreResult<Uuid> {
        let id = Uuid::new_v4();
        let employee = Employee {
            id,
            area: new.area,
            tech_number: new.tech_number,
            first_name: new.first_name,
            last_name: new.last_name,
            supervisor_display_name: new.supervisor_display_name,
            calendar: Default::default(),
        };
        self.employees
            .write()
            .expect("employees lock poisoned")
            .insert(id, employee);
        self.publish_employees();
        Ok(id)
    }

    async fn update_employee(&self, id: Uuid, patch: EmployeePatch) -> StoreResult<()> {
        {
            let mut guard = self.employees.write().expect("employees lock poisoned");
            let employee = guard
                .get_mut(&id)
                .ok_or_else(|| StoreError::NotFound(format!("employee {id}")))?;

            if let Some(area) = patch.area {
                employee.area = area;
            }
            if let Some(tech_number) = patch.tech_number {
                employee.tech_number = tech_number;
            }
            if let Some(first_name) = patch.first_name {
                employee.first_name = first_name;
            }
            if let Some(last_name) = patch.last_name {
                employee.last_name = last_name;
            }
            if let Some(supervisor) = patch.supervisor_display_name {
                employee.supervisor_display_name = supervisor;
            }
            if let Some((date, entry)) = patch.calendar_entry {
                match entry {
                    Some(entry) => {
                        employee.calendar.insert(date, entry);
                    }
                    None => {
                        employee.calendar.remove(&date);
                    }
                }
            }
        }
        self.publish_employees();
        Ok(())
    }

    async fn delete_employee(&self, id: Uuid) -> StoreResult<()> {
        let removed = self
            .employees
            .write()
            .expect("employees lock poisoned")
            .remove(&id);
        if removed.is_none() {
            return Err(StoreError::NotFound(format!("employee {id}")));
        }
        self.publish_employees();
        Ok(())
    }

    async fn count_employees_by_supervisor(&self, display_name: &str) -> StoreResult<usize> {
        let guard = self.employees.read().expect("employees lock poisoned");
        Ok(guard
            .values()
            .filter(|e| e.supervisor_display_name == display_name)
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayEntry, Role, ShiftStatus};
    use chrono::NaiveDate;

    fn new_employee(tech: &str, supervisor: &str) -> NewEmployee {
        NewEmployee {
            area: "North".to_string(),
            tech_number: tech.to_string(),
            first_name: "Ana".to_string(),
            last_name: "Reyes".to_string(),
            supervisor_display_name: supervisor.to_string(),
        }
    }

    #[tokio::test]
    async fn subscription_sees_current_snapshot_then_changes() {
        let store = MemoryStore::new();
        store
            .put_user(
                "admin",
                UserRecord {
                    password: "pw".to_string(),
                    role: Role::Admin,
                    display_name: None,
                },
            )
            .await
            .unwrap();

        // Late subscriber still observes the current state immediately.
        let mut rx = store.subscribe_users();
        assert!(rx.borrow_and_update().contains_key("admin"));

        store.delete_user("admin").await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn employee_snapshots_are_ordered_by_tech_number() {
        let store = MemoryStore::new();
        store.put_employee(new_employee("T200", "")).await.unwrap();
        store.put_employee(new_employee("T100", "")).await.unwrap();

        let rx = store.subscribe_employees();
        let snapshot = rx.borrow().clone();
        let techs: Vec<&str> = snapshot.iter().map(|e| e.tech_number.as_str()).collect();
        assert_eq!(techs, vec!["T100", "T200"]);
    }

    #[tokio::test]
    async fn calendar_patch_writes_and_clears_one_slot() {
        let store = MemoryStore::new();
        let id = store.put_employee(new_employee("T100", "")).await.unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        store
            .update_employee(
                id,
                EmployeePatch {
                    calendar_entry: Some((date, Some(DayEntry::Direct(ShiftStatus::new("sick"))))),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let rx = store.subscribe_employees();
        let emp = rx.borrow().first().cloned().unwrap();
        assert_eq!(emp.entry_for(date), DayEntry::Direct(ShiftStatus::new("sick")));

        store
            .update_employee(
                id,
                EmployeePatch {
                    calendar_entry: Some((date, None)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        let emp = rx.borrow().first().cloned().unwrap();
        assert_eq!(emp.entry_for(date), DayEntry::Working);
    }

    #[tokio::test]
    async fn supervisor_count_reads_current_links() {
        let store = MemoryStore::new();
        store
            .put_employee(new_employee("T100", "Supervisor Alpha"))
            .await
            .unwrap();
        store
            .put_employee(new_employee("T200", "Supervisor Alpha"))
            .await
            .unwrap();
        store.put_employee(new_employee("T300", "")).await.unwrap();

        assert_eq!(
            store
                .count_employees_by_supervisor("Supervisor Alpha")
                .await
                .unwrap(),
            2
        );
        assert_eq!(
            store.count_employees_by_supervisor("Ghost").await.unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn missing_documents_report_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_user("ghost").await.unwrap_err(),
            StoreError::NotFound(_)
        ));
        assert!(matches!(
            store
                .update_employee(Uuid::new_v4(), EmployeePatch::default())
                .await
                .unwrap_err(),
            StoreError::NotFound(_)
        ));
    }
}
