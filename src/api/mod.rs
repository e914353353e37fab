pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

use crate::service::ReconcileService;

/// 组装 API 路由
pub fn router(service: Arc<ReconcileService>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/api/compare", post(handlers::compare))
        .route("/api/report/:report_id", get(handlers::report_page))
        .route("/api/export/:report_id", get(handlers::export_report))
        .with_state(service)
}
