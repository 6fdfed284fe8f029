use crate::infra::AppState;
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use skillboard::error::AppError;
use skillboard::talent::assignments::{assignment_router, AssignmentDesk, AssignmentLog};
use skillboard::talent::dashboard::views::DashboardView;
use skillboard::talent::dashboard::DashboardReport;
use skillboard::talent::detail::{EmployeeCardView, UnknownEmployeeView};
use skillboard::talent::domain::{Availability, EmployeeId};
use skillboard::talent::matching::{
    MatchBoardImporter, MatchRowView, ShortlistFilter, ShortlistQuery, ShortlistSort,
    ShortlistSummary, ShortlistView,
};
use skillboard::talent::upskilling::UpskillingView;
use skillboard::talent::TalentDirectory;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct ShortlistRequest {
    #[serde(default)]
    pub(crate) search: String,
    #[serde(default)]
    pub(crate) required_skills: Vec<String>,
    #[serde(default)]
    pub(crate) availability: Vec<Availability>,
    #[serde(default)]
    pub(crate) min_match_score: u8,
    #[serde(default)]
    pub(crate) sort: Option<ShortlistSort>,
    #[serde(default)]
    pub(crate) board_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ShortlistResponse {
    pub(crate) board_source: BoardSource,
    pub(crate) sort: ShortlistSort,
    pub(crate) summary: ShortlistSummary,
    pub(crate) rows: Vec<MatchRowView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum BoardSource {
    Imported,
    Seeded,
}

pub(crate) fn with_workspace_routes<L>(
    directory: Arc<TalentDirectory>,
    desk: Arc<AssignmentDesk<L>>,
) -> axum::Router
where
    L: AssignmentLog + 'static,
{
    assignment_router(desk)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/dashboard", axum::routing::get(dashboard_endpoint))
        .route("/api/v1/upskilling", axum::routing::get(upskilling_endpoint))
        .route(
            "/api/v1/employees/:employee_id",
            axum::routing::get(employee_endpoint),
        )
        .route(
            "/api/v1/matching/shortlist",
            axum::routing::post(shortlist_endpoint),
        )
        .layer(Extension(directory))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint(
    Extension(directory): Extension<Arc<TalentDirectory>>,
) -> Json<DashboardView> {
    let report = DashboardReport::from_directory(&directory);
    Json(report.view(&directory))
}

pub(crate) async fn upskilling_endpoint(
    Extension(directory): Extension<Arc<TalentDirectory>>,
) -> Json<UpskillingView> {
    Json(UpskillingView::build(&directory))
}

/// Unknown ids answer 200 with the placeholder card instead of 404. The match
/// board is allowed to reference people missing from the roster.
pub(crate) async fn employee_endpoint(
    Extension(directory): Extension<Arc<TalentDirectory>>,
    Path(employee_id): Path<String>,
) -> Response {
    let id = EmployeeId(employee_id);
    match directory.employee(&id) {
        Some(employee) => Json(EmployeeCardView::from_employee(employee)).into_response(),
        None => Json(UnknownEmployeeView::for_id(&id)).into_response(),
    }
}

pub(crate) async fn shortlist_endpoint(
    Extension(directory): Extension<Arc<TalentDirectory>>,
    Json(payload): Json<ShortlistRequest>,
) -> Result<Json<ShortlistResponse>, AppError> {
    let ShortlistRequest {
        search,
        required_skills,
        availability,
        min_match_score,
        sort,
        board_csv,
    } = payload;

    let (directory, board_source) = match board_csv {
        Some(csv) => {
            let reader = Cursor::new(csv.into_bytes());
            let rows = MatchBoardImporter::from_reader(reader)?;
            let imported = TalentDirectory::seeded().with_match_board(rows);
            (Arc::new(imported), BoardSource::Imported)
        }
        None => (directory, BoardSource::Seeded),
    };

    let query = ShortlistQuery {
        filter: ShortlistFilter {
            search,
            required_skills: required_skills.into_iter().collect(),
            availability: availability.into_iter().collect(),
            min_match_score: min_match_score.min(100),
        },
        sort: sort.unwrap_or_default(),
    };

    let view = ShortlistView::build(&directory, &query);
    Ok(Json(ShortlistResponse {
        board_source,
        sort: query.sort,
        summary: view.summary,
        rows: view.rows,
        empty_message: view.empty_message,
    }))
}
