use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssignmentLog};
use crate::routes::with_workspace_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use skillboard::config::AppConfig;
use skillboard::error::AppError;
use skillboard::talent::assignments::AssignmentDesk;
use skillboard::talent::matching::MatchBoardImporter;
use skillboard::talent::TalentDirectory;
use skillboard::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = match &config.workspace.board_csv {
        Some(path) => {
            let rows = MatchBoardImporter::from_path(path)?;
            info!(rows = rows.len(), path = %path.display(), "serving imported match board");
            Arc::new(TalentDirectory::seeded().with_match_board(rows))
        }
        None => Arc::new(TalentDirectory::seeded()),
    };
    let assignment_log = Arc::new(InMemoryAssignmentLog::default());
    let assignment_desk = Arc::new(AssignmentDesk::new(assignment_log));

    let app = with_workspace_routes(directory, assignment_desk)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "skills workspace ready");

    axum::serve(listener, app).await?;
    Ok(())
}
