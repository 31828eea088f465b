use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    calendar::{self, DEFAULT_WINDOW_DAYS},
    extractors::CurrentActor,
    models::{CalendarMutationResponse, DayEntry, Employee, SetDayStatusInput},
    policy, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetCalendarQuery {
    /// Any date inside the window; defaults to today. The window start is
    /// the Sunday on or before it.
    pub anchor: Option<NaiveDate>,
    pub days: Option<u32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Same text the export produces for this cell.
    pub label: String,
    pub pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_by: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRow {
    pub employee_id: Uuid,
    pub area: String,
    pub tech_number: String,
    pub first_name: String,
    pub last_name: String,
    pub supervisor: String,
    /// Whether the current actor may edit this row's cells.
    pub editable: bool,
    pub cells: Vec<CalendarCell>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub dates: Vec<NaiveDate>,
    /// Anchors for paging one window backward/forward. Paging moves the
    /// anchor only; the window realigns itself to Sunday.
    pub prev_anchor: NaiveDate,
    pub next_anchor: NaiveDate,
    pub rows: Vec<CalendarRow>,
}

fn cell(employee: &Employee, date: NaiveDate) -> CalendarCell {
    let entry = employee.entry_for(date);
    let requested_by = match &entry {
        DayEntry::Pending { requested_by, .. } => Some(requested_by.clone()),
        _ => None,
    };
    CalendarCell {
        date,
        label: entry.label(),
        pending: entry.is_pending(),
        requested_by,
    }
}

/// GET /api/calendar?anchor=&days=
#[utoipa::path(
    get,
    path = "/api/calendar",
    params(GetCalendarQuery),
    responses(
        (status = 200, description = "Visible calendar window for the actor", body = CalendarResponse),
        (status = 401, description = "Not logged in")
    ),
    tag = "calendar"
)]
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetCalendarQuery>,
    actor: CurrentActor,
) -> AppResult<Json<CalendarResponse>> {
    let anchor = query.anchor.unwrap_or_else(|| Local::now().date_naive());
    let days = query.days.unwrap_or(DEFAULT_WINDOW_DAYS).clamp(1, 62);
    let window = calendar::window_for(anchor, days);

    let rows = state
        .directory
        .visible_employees(&actor.0)
        .into_iter()
        .map(|emp| CalendarRow {
            editable: policy::can_manage(&actor.0, &emp),
            cells: window.dates.iter().map(|d| cell(&emp, *d)).collect(),
            employee_id: emp.id,
            area: emp.area,
            tech_number: emp.tech_number,
            first_name: emp.first_name,
            last_name: emp.last_name,
            supervisor: emp.supervisor_display_name,
        })
        .collect();

    Ok(Json(CalendarResponse {
        window_start: window.start,
        window_end: window.end,
        dates: window.dates,
        prev_anchor: calendar::advance(anchor, -(days as i64)),
        next_anchor: calendar::advance(anchor, days as i64),
        rows,
    }))
}

/// PUT /api/employees/{id}/calendar/{date}
#[utoipa::path(
    put,
    path = "/api/employees/{id}/calendar/{date}",
    params(
        ("id" = Uuid, Path, description = "Employee ID"),
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    request_body = SetDayStatusInput,
    responses(
        (status = 200, description = "Applied directly (admin) or submitted for approval (supervisor)", body = CalendarMutationResponse),
        (status = 403, description = "Employee not assigned to this supervisor"),
        (status = 404, description = "Employee not found"),
        (status = 422, description = "Empty status")
    ),
    tag = "calendar"
)]
pub async fn set_day_status(
    State(state): State<Arc<AppState>>,
    Path((id, date)): Path<(Uuid, NaiveDate)>,
    actor: CurrentActor,
    Json(input): Json<SetDayStatusInput>,
) -> AppResult<Json<CalendarMutationResponse>> {
    let outcome = state
        .directory
        .edit_day(&actor.0, id, date, &input.status)
        .await?;
    Ok(Json(CalendarMutationResponse {
        success: true,
        outcome: outcome.as_str().to_string(),
        message: None,
    }))
}

/// POST /api/employees/{id}/calendar/{date}/approve
#[utoipa::path(
    post,
    path = "/api/employees/{id}/calendar/{date}/approve",
    params(
        ("id" = Uuid, Path, description = "Employee ID"),
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Pending request approved", body = CalendarMutationResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Entry has no pending request")
    ),
    tag = "calendar"
)]
pub async fn approve_day(
    State(state): State<Arc<AppState>>,
    Path((id, date)): Path<(Uuid, NaiveDate)>,
    actor: CurrentActor,
) -> AppResult<Json<CalendarMutationResponse>> {
    state.directory.approve_day(&actor.0, id, date).await?;
    Ok(Json(CalendarMutationResponse {
        success: true,
        outcome: "approved".to_string(),
        message: None,
    }))
}

/// POST /api/employees/{id}/calendar/{date}/reject
#[utoipa::path(
    post,
    path = "/api/employees/{id}/calendar/{date}/reject",
    params(
        ("id" = Uuid, Path, description = "Employee ID"),
        ("date" = String, Path, description = "Calendar date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Pending request rejected, entry reverts to working", body = CalendarMutationResponse),
        (status = 403, description = "Admin role required"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Entry has no pending request")
    ),
    tag = "calendar"
)]
pub async fn reject_day(
    State(state): State<Arc<AppState>>,
    Path((id, date)): Path<(Uuid, NaiveDate)>,
    actor: CurrentActor,
) -> AppResult<Json<CalendarMutationResponse>> {
    state.directory.reject_day(&actor.0, id, date).await?;
    Ok(Json(CalendarMutationResponse {
        success: true,
        outcome: "rejected".to_string(),
        message: None,
    }))
}
