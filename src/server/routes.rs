// HTTP routes configuration

use super::docs::{docs_ui_handler, openapi_handler};
use super::handlers::{
    analyze_handler, colors_handler, describe_handler, faces_handler, index_handler,
    objects_handler, tags_handler, text_handler,
};
use crate::config::AppConfig;
use crate::vision::VisionClient;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub vision_client: Arc<VisionClient>,
}

pub fn create_router(config: AppConfig, vision_client: VisionClient) -> Router {
    let state = AppState {
        config,
        vision_client: Arc::new(vision_client),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/api-docs", get(docs_ui_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        .route("/api/vision/analyze", post(analyze_handler))
        .route("/api/vision/tags", post(tags_handler))
        .route("/api/vision/objects", post(objects_handler))
        .route("/api/vision/describe", post(describe_handler))
        .route("/api/vision/text", post(text_handler))
        .route("/api/vision/faces", post(faces_handler))
        .route("/api/vision/colors", post(colors_handler))
        // Bodies carry only a JSON-wrapped URL; 64KB is generous
        .layer(tower_http::limit::RequestBodyLimitLayer::new(64 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
