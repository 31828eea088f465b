//! Authorization policy.
//!
//! Supervisor access is keyed by display-name string equality against the
//! employee's supervisor field, not by a stable identifier. Fragile but
//! load-bearing: renaming a supervisor re-links their employees, and the
//! rest of the system relies on exactly this rule.

use crate::models::{Employee, Role, Session};

/// Whether the actor may see this employee's calendar row.
pub fn can_view(actor: &Session, employee: &Employee) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Supervisor => employee.supervisor_display_name == actor.display_name,
    }
}

/// Whether the actor may edit this employee's calendar. Identical to
/// `can_view`: this system draws no view/edit distinction.
pub fn can_manage(actor: &Session, employee: &Employee) -> bool {
    can_view(actor, employee)
}

pub fn can_manage_users(actor: &Session) -> bool {
    actor.is_admin()
}

pub fn can_manage_employees(actor: &Session) -> bool {
    actor.is_admin()
}

pub fn can_export(actor: &Session) -> bool {
    actor.is_admin()
}
