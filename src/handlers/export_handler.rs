use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use std::sync::Arc;

use crate::{
    calendar::{self, DEFAULT_WINDOW_DAYS},
    export::{self, ExportTable},
    extractors::CurrentActor,
    handlers::calendar_handler::GetCalendarQuery,
    policy, AppError, AppResult, AppState,
};

/// GET /api/export?anchor=&days=
#[utoipa::path(
    get,
    path = "/api/export",
    params(GetCalendarQuery),
    responses(
        (status = 200, description = "Tabular calendar projection for the visible window", body = ExportTable),
        (status = 403, description = "Admin role required")
    ),
    tag = "export"
)]
pub async fn get_export(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GetCalendarQuery>,
    actor: CurrentActor,
) -> AppResult<Json<ExportTable>> {
    if !policy::can_export(&actor.0) {
        return Err(AppError::Forbidden(
            "only administrators can export the calendar".to_string(),
        ));
    }

    let anchor = query.anchor.unwrap_or_else(|| Local::now().date_naive());
    let days = query.days.unwrap_or(DEFAULT_WINDOW_DAYS).clamp(1, 62);
    let window = calendar::window_for(anchor, days);

    let employees = state.directory.visible_employees(&actor.0);
    Ok(Json(export::project(&employees, &window)))
}
