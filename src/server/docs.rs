// Interactive API documentation (Swagger UI shell + OpenAPI document)

use super::routes::AppState;
use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

const SWAGGER_UI_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Computer Vision Gateway - API Documentation</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
  <script>
    window.onload = () => {
      SwaggerUIBundle({
        url: "/api-docs/openapi.json",
        dom_id: "#swagger-ui",
      });
    };
  </script>
</body>
</html>
"##;

/// `GET /api-docs` - the interactive documentation UI.
pub async fn docs_ui_handler() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// `GET /api-docs/openapi.json` - the OpenAPI document the UI renders.
/// Built per request so the server URL reflects the configured public
/// base URL.
pub async fn openapi_handler(State(state): State<AppState>) -> Json<Value> {
    Json(openapi_document(&state.config.docs.public_base_url))
}

fn openapi_document(public_base_url: &str) -> Value {
    let analysis_endpoints = [
        ("analyze", "Full composite analysis: image type, faces, adult content, categories, color, tags, description, objects, brands, and landmarks."),
        ("tags", "Content tags detected in the image."),
        ("objects", "Objects detected in the image with bounding boxes."),
        ("describe", "Natural-language description of the image."),
        ("text", "Printed text recognized in the image (OCR)."),
        ("faces", "Faces detected in the image."),
        ("colors", "Dominant and accent color analysis."),
    ];

    let mut paths = serde_json::Map::new();
    for (name, summary) in analysis_endpoints {
        paths.insert(
            format!("/api/vision/{}", name),
            json!({
                "post": {
                    "summary": summary,
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": { "$ref": "#/components/schemas/AnalysisRequest" }
                            }
                        }
                    },
                    "responses": {
                        "200": { "description": "Analysis result" },
                        "400": { "description": "Missing or malformed imageUrl", "content": {
                            "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } }
                        }},
                        "500": { "description": "Vision service failure", "content": {
                            "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } }
                        }}
                    }
                }
            }),
        );
    }

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Computer Vision Gateway API",
            "description": "Thin HTTP gateway over the Azure Computer Vision image-analysis service.",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "servers": [ { "url": public_base_url.trim_end_matches('/') } ],
        "paths": Value::Object(paths),
        "components": {
            "schemas": {
                "AnalysisRequest": {
                    "type": "object",
                    "required": ["imageUrl"],
                    "properties": {
                        "imageUrl": {
                            "type": "string",
                            "format": "uri",
                            "example": "https://example.com/photo.jpg"
                        }
                    }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string" }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_all_seven_analysis_paths() {
        let doc = openapi_document("http://localhost:3000");
        let paths = doc["paths"].as_object().unwrap();
        assert_eq!(paths.len(), 7);
        for name in ["analyze", "tags", "objects", "describe", "text", "faces", "colors"] {
            assert!(paths.contains_key(&format!("/api/vision/{}", name)));
        }
    }

    #[test]
    fn server_url_reflects_public_base() {
        let doc = openapi_document("https://vision.example.com/");
        assert_eq!(doc["servers"][0]["url"], "https://vision.example.com");
    }
}
