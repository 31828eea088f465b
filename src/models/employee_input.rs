use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Input for creating an employee (admin only)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeInput {
    #[serde(default)]
    pub area: String,
    pub tech_number: String,
    pub first_name: String,
    pub last_name: String,
    /// Display name of the linked supervisor; empty leaves the employee
    /// unlinked.
    #[serde(default, rename = "supervisor")]
    pub supervisor_display_name: String,
}

/// Input for updating an employee's profile fields (admin only)
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeInput {
    pub area: Option<String>,
    pub tech_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(rename = "supervisor")]
    pub supervisor_display_name: Option<String>,
}

impl UpdateEmployeeInput {
    pub fn is_empty(&self) -> bool {
        self.area.is_none()
            && self.tech_number.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.supervisor_display_name.is_none()
    }
}

/// Response for employee mutations
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmployeeMutationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
