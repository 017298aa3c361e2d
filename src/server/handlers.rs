// HTTP request handlers

use super::routes::AppState;
use super::validate;
use crate::error::Result;
use crate::vision::ops::{self, RemoteCall, ResultShape, VisionOp};
use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{debug, info};

/// Generic dispatcher shared by every analysis endpoint: validate the
/// body, issue exactly one remote call, project the result. Failures
/// propagate to the `GatewayError` response mapping.
async fn dispatch(state: &AppState, body: String, op: &VisionOp) -> Result<Json<Value>> {
    let image_url = validate::parse_request(&body)?;
    info!("Dispatching {} operation for {}", op.name, image_url);

    let result = match op.call {
        RemoteCall::Analyze { features, details } => {
            state.vision_client.analyze(&image_url, features, details).await?
        }
        RemoteCall::DetectObjects => state.vision_client.detect_objects(&image_url).await?,
        RemoteCall::Describe => state.vision_client.describe(&image_url).await?,
        RemoteCall::RecognizeText => {
            state.vision_client.recognize_printed_text(&image_url).await?
        }
    };

    debug!("Operation {} succeeded", op.name);

    let payload = match op.shape {
        ResultShape::Whole => result,
        ResultShape::Field(field) => result.get(field).cloned().unwrap_or(Value::Null),
    };

    Ok(Json(payload))
}

pub async fn analyze_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::ANALYZE).await
}

pub async fn tags_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::TAGS).await
}

pub async fn objects_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::OBJECTS).await
}

pub async fn describe_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::DESCRIBE).await
}

pub async fn text_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::TEXT).await
}

pub async fn faces_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::FACES).await
}

pub async fn colors_handler(State(state): State<AppState>, body: String) -> Result<Json<Value>> {
    dispatch(&state, body, &ops::COLORS).await
}

/// Service metadata for `GET /`. Always the same key set regardless of
/// configuration state; only the documentation link varies with config.
pub async fn index_handler(State(state): State<AppState>) -> Json<Value> {
    let base = state.config.docs.public_base_url.trim_end_matches('/');
    Json(json!({
        "message": "Computer Vision Gateway API",
        "documentation": format!("{}/api-docs", base),
        "note": "All analysis endpoints accept POST with a JSON body {\"imageUrl\": \"...\"}",
        "endpoints": {
            "analyze": "/api/vision/analyze",
            "tags": "/api/vision/tags",
            "objects": "/api/vision/objects",
            "describe": "/api/vision/describe",
            "text": "/api/vision/text",
            "faces": "/api/vision/faces",
            "colors": "/api/vision/colors",
        },
    }))
}
