use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::user::Role;

/// Input for creating an application user (admin only)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub username: String,
    pub password: String,
    pub role: Role,
    /// For supervisors; defaults to the username when omitted. Ignored for
    /// admins.
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Response for user mutations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserMutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
