use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::{AssignmentDesk, AssignmentDraft, AssignmentError, AssignmentLog};

const RECENT_LIMIT: usize = 20;

/// Router builder exposing the assignment desk over HTTP.
pub fn assignment_router<L>(desk: Arc<AssignmentDesk<L>>) -> Router
where
    L: AssignmentLog + 'static,
{
    Router::new()
        .route("/api/v1/assignments", post(confirm_handler::<L>))
        .route("/api/v1/assignments/recent", get(recent_handler::<L>))
        .with_state(desk)
}

pub(crate) async fn confirm_handler<L>(
    State(desk): State<Arc<AssignmentDesk<L>>>,
    axum::Json(draft): axum::Json<AssignmentDraft>,
) -> Response
where
    L: AssignmentLog + 'static,
{
    let decided_on = chrono::Utc::now().date_naive();
    match desk.confirm(draft, decided_on) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(error @ (AssignmentError::MissingEmployeeName | AssignmentError::ScoreOutOfRange(_))) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn recent_handler<L>(State(desk): State<Arc<AssignmentDesk<L>>>) -> Response
where
    L: AssignmentLog + 'static,
{
    match desk.recent(RECENT_LIMIT) {
        Ok(records) => (StatusCode::OK, axum::Json(records)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
