//! The per-day shift-status state machine.
//!
//! All transitions are pure: callers pass the current entry and get the next
//! one back, then write it through the store. Nothing here mutates shared
//! state.

use crate::models::{DayEntry, Employee, Role, Session, ShiftStatus};
use crate::policy;
use crate::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Admin edit, committed directly.
    Applied,
    /// Supervisor edit, parked as a pending request.
    RequestSubmitted,
}

impl EditOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditOutcome::Applied => "applied",
            EditOutcome::RequestSubmitted => "requested",
        }
    }
}

/// Apply an edit to one day entry on behalf of the actor.
///
/// A supervisor edit always produces a fresh `Pending` tagged with the
/// supervisor's display name, whatever the prior entry held (including an
/// older pending request). An admin edit always commits `Direct`, silently
/// overwriting any pending request without a separate approve/reject step.
pub fn apply_edit(
    _current: &DayEntry,
    requested: ShiftStatus,
    actor: &Session,
    employee: &Employee,
) -> AppResult<(DayEntry, EditOutcome)> {
    if requested.is_empty() {
        return Err(AppError::Validation("status must not be empty".to_string()));
    }

    match actor.role {
        Role::Supervisor => {
            if !policy::can_manage(actor, employee) {
                return Err(AppError::Forbidden(
                    "you can only manage shifts for your assigned employees".to_string(),
                ));
            }
            Ok((
                DayEntry::Pending {
                    requested,
                    requested_by: actor.display_name.clone(),
                },
                EditOutcome::RequestSubmitted,
            ))
        }
        Role::Admin => Ok((DayEntry::Direct(requested), EditOutcome::Applied)),
    }
}

/// Commit a pending request: the requested status becomes the entry.
pub fn approve(actor: &Session, entry: &DayEntry) -> AppResult<DayEntry> {
    guard_admin(actor, "approve")?;
    match entry {
        DayEntry::Pending { requested, .. } => Ok(DayEntry::Direct(requested.clone())),
        _ => Err(AppError::InvalidState(
            "entry has no pending request to approve".to_string(),
        )),
    }
}

/// Refuse a pending request: the entry reverts to the explicit working
/// status.
pub fn reject(actor: &Session, entry: &DayEntry) -> AppResult<DayEntry> {
    guard_admin(actor, "reject")?;
    match entry {
        DayEntry::Pending { .. } => Ok(DayEntry::Direct(ShiftStatus::working())),
        _ => Err(AppError::InvalidState(
            "entry has no pending request to reject".to_string(),
        )),
    }
}

fn guard_admin(actor: &Session, action: &str) -> AppResult<()> {
    if !actor.is_admin() {
        return Err(AppError::Forbidden(format!(
            "only administrators can {action} requests"
        )));
    }
    Ok(())
}
