use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;

use crate::{models::Session, AppState};

/// The authenticated actor, taken from the process-wide session slot.
///
/// There is one active session at a time; handlers that require an actor
/// reject with 401 when nobody is logged in.
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Session);

impl FromRequestParts<Arc<AppState>> for CurrentActor {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = state.directory.current_session();
        async move {
            session.map(CurrentActor).ok_or((
                StatusCode::UNAUTHORIZED,
                axum::Json(json!({"error": "Not logged in"})),
            ))
        }
    }
}
