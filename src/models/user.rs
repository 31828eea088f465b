use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supervisor,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => f.write_str("admin"),
            Role::Supervisor => f.write_str("supervisor"),
        }
    }
}

/// A stored application user, keyed by username in the users mapping.
///
/// The password is plaintext at rest. That is a known defect inherited from
/// the original data, kept because existing documents carry it; it is never
/// serialized out through the API (see `UserView`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub password: String,
    pub role: Role,
    /// Required semantically for supervisors: it is the only linkage key to
    /// employees. Admins usually have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// The authenticated actor. Single process-wide slot, persisted across
/// restarts, cleared by logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub display_name: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// What the API exposes for a user: everything but the password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl UserView {
    pub fn from_record(username: &str, record: &UserRecord) -> Self {
        UserView {
            username: username.to_string(),
            role: record.role,
            display_name: record.display_name.clone(),
        }
    }
}
