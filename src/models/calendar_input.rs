use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Input for setting a day status on an employee's calendar.
///
/// Admins apply the status directly; supervisors submit it as a pending
/// request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetDayStatusInput {
    pub status: String,
}

/// Response for calendar mutations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalendarMutationResponse {
    pub success: bool,
    /// "applied" for direct admin edits, "requested" for supervisor requests.
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
