//! The pluggable store seam.
//!
//! The directory never reads the store synchronously: both collections are
//! pushed to it as whole snapshots through `watch` channels, first delivery
//! carrying the current state and every later one a replacement. Mutations
//! are fire-and-forget document writes; their visible effect arrives with
//! the next snapshot.

pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use tokio::sync::watch;
use uuid::Uuid;

use crate::models::{DayEntry, Employee, UserRecord};

pub use memory::MemoryStore;

pub type UserMap = HashMap<String, UserRecord>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store: {0} not found")]
    NotFound(String),

    #[error("store backend failure: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A new employee document; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub area: String,
    pub tech_number: String,
    pub first_name: String,
    pub last_name: String,
    pub supervisor_display_name: String,
}

/// Partial update of one employee document. `None` leaves a field untouched;
/// `calendar_entry` writes (or clears) a single day slot, mirroring a
/// field-path update on the document.
#[derive(Debug, Clone, Default)]
pub struct EmployeePatch {
    pub area: Option<String>,
    pub tech_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub supervisor_display_name: Option<String>,
    pub calendar_entry: Option<(NaiveDate, Option<DayEntry>)>,
}

#[async_trait]
pub trait Store: Send + Sync {
    /// Current users snapshot now, a fresh one after every change.
    fn subscribe_users(&self) -> watch::Receiver<UserMap>;

    /// Current employees snapshot now, a fresh one after every change.
    /// Delivery is independent of the users subscription.
    fn subscribe_employees(&self) -> watch::Receiver<Vec<Employee>>;

    async fn put_user(&self, username: &str, record: UserRecord) -> StoreResult<()>;

    async fn delete_user(&self, username: &str) -> StoreResult<()>;

    async fn put_employee(&self, new: NewEmployee) -> StoreResult<Uuid>;

    async fn update_employee(&self, id: Uuid, patch: EmployeePatch) -> StoreResult<()>;

    async fn delete_employee(&self, id: Uuid) -> StoreResult<()>;

    /// Number of employees currently linked to this supervisor display name.
    /// Used only by the delete-user guard.
    async fn count_employees_by_supervisor(&self, display_name: &str) -> StoreResult<usize>;
}
