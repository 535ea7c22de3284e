//! HTTP server: lesson/module/progress API plus the playground page and
//! the live validate/preview endpoints the editor shell calls.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AcademyError;
use crate::preview::compose_preview;
use crate::schema::{Lesson, Module, NewProgress, UserProgress};
use crate::storage::MemStorage;
use crate::templates::{self, TEMPLATES};
use crate::validate::{self, Language};

mod page;

type SharedStorage = Arc<Mutex<MemStorage>>;

#[derive(Serialize)]
struct ApiMessage {
    message: String,
}

impl IntoResponse for AcademyError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AcademyError::LessonNotFound { .. } => (StatusCode::NOT_FOUND, "Lesson not found"),
            AcademyError::UnknownTemplate { .. } => (StatusCode::NOT_FOUND, "Template not found"),
            AcademyError::UnknownLanguage { .. } | AcademyError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, "Invalid request data")
            }
            AcademyError::StorageUnavailable => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };
        let body = Json(ApiMessage {
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

fn lock(state: &SharedStorage) -> crate::Result<std::sync::MutexGuard<'_, MemStorage>> {
    state.lock().map_err(|_| AcademyError::StorageUnavailable)
}

/// Start the server on the given port.
pub async fn run_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state: SharedStorage = Arc::new(Mutex::new(MemStorage::new()));
    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    eprintln!("CSS Academy server");
    eprintln!("  playground: http://localhost:{port}/");
    eprintln!("  lessons:    http://localhost:{port}/api/lessons");
    eprintln!("  modules:    http://localhost:{port}/api/modules");
    eprintln!("  templates:  http://localhost:{port}/api/templates");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn router(state: SharedStorage) -> Router {
    Router::new()
        .route("/", get(serve_playground))
        .route("/api/lessons", get(list_lessons))
        .route("/api/lessons/{id}", get(get_lesson))
        .route("/api/lessons/module/{module}", get(lessons_by_module))
        .route("/api/modules", get(list_modules))
        .route("/api/progress/{user_id}", get(get_progress))
        .route("/api/progress", post(post_progress))
        .route("/api/templates", get(list_templates))
        .route("/api/templates/{name}", get(get_template))
        .route("/api/validate", post(serve_validate))
        .route("/api/preview", post(serve_preview))
        .with_state(state)
}

// ── Playground page ───────────────────────────────────────────────────

async fn serve_playground() -> Html<String> {
    Html(page::build_playground_page())
}

// ── Lesson routes ─────────────────────────────────────────────────────

async fn list_lessons(
    State(state): State<SharedStorage>,
) -> Result<Json<Vec<Lesson>>, AcademyError> {
    let storage = lock(&state)?;
    Ok(Json(storage.lessons()))
}

async fn get_lesson(
    State(state): State<SharedStorage>,
    Path(id): Path<String>,
) -> Result<Json<Lesson>, AcademyError> {
    let storage = lock(&state)?;
    match storage.lesson(&id) {
        Some(lesson) => Ok(Json(lesson.clone())),
        None => Err(AcademyError::LessonNotFound { id }),
    }
}

async fn lessons_by_module(
    State(state): State<SharedStorage>,
    Path(module): Path<String>,
) -> Result<Json<Vec<Lesson>>, AcademyError> {
    let storage = lock(&state)?;
    Ok(Json(storage.lessons_by_module(&module)))
}

// ── Module routes ─────────────────────────────────────────────────────

async fn list_modules(
    State(state): State<SharedStorage>,
) -> Result<Json<Vec<Module>>, AcademyError> {
    let storage = lock(&state)?;
    Ok(Json(storage.modules()))
}

// ── Progress routes ───────────────────────────────────────────────────

async fn get_progress(
    State(state): State<SharedStorage>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserProgress>>, AcademyError> {
    let storage = lock(&state)?;
    Ok(Json(storage.user_progress(&user_id)))
}

async fn post_progress(
    State(state): State<SharedStorage>,
    Json(new): Json<NewProgress>,
) -> Result<Json<UserProgress>, AcademyError> {
    if new.user_id.is_empty() || new.lesson_id.is_empty() {
        return Err(AcademyError::InvalidRequest(
            "userId and lessonId are required".to_string(),
        ));
    }
    let mut storage = lock(&state)?;
    Ok(Json(storage.upsert_progress(new)))
}

// ── Template routes ───────────────────────────────────────────────────

#[derive(Serialize)]
struct TemplateInfo {
    name: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct TemplatePair {
    html: &'static str,
    css: &'static str,
}

async fn list_templates() -> Json<Vec<TemplateInfo>> {
    Json(
        TEMPLATES
            .iter()
            .map(|t| TemplateInfo {
                name: t.name,
                label: t.label,
            })
            .collect(),
    )
}

async fn get_template(Path(name): Path<String>) -> Result<Json<TemplatePair>, AcademyError> {
    match templates::template(&name) {
        Some(t) => Ok(Json(TemplatePair {
            html: t.html,
            css: t.css,
        })),
        None => Err(AcademyError::UnknownTemplate { name }),
    }
}

// ── POST /api/validate — structural validation ────────────────────────

#[derive(Deserialize)]
struct ValidateRequest {
    language: Language,
    source: String,
}

#[derive(Serialize)]
struct ValidateResponse {
    diagnostics: Vec<String>,
}

async fn serve_validate(Json(req): Json<ValidateRequest>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        diagnostics: validate::validate(req.language, &req.source),
    })
}

// ── POST /api/preview — sandboxed preview document ────────────────────

#[derive(Deserialize)]
struct PreviewRequest {
    html: String,
    css: String,
}

async fn serve_preview(Json(req): Json<PreviewRequest>) -> Html<String> {
    Html(compose_preview(&req.html, &req.css))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(Mutex::new(MemStorage::new())))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        serde_json::from_slice(&bytes).expect("body is JSON")
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builds")
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    #[tokio::test]
    async fn lessons_endpoint_returns_seeded_catalog() {
        let response = app().oneshot(get("/api/lessons")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(|a| a.len()), Some(6));
    }

    #[tokio::test]
    async fn lesson_by_id_and_missing_lesson() {
        let response = app().oneshot(get("/api/lessons/grid-1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["title"], "Grid Container Basics");
        assert!(json["exercises"][0]["initialCode"].is_string());

        let response = app().oneshot(get("/api/lessons/grid-99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Lesson not found");
    }

    #[tokio::test]
    async fn lessons_by_module_filters() {
        let response = app()
            .oneshot(get("/api/lessons/module/grid"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(|a| a.len()), Some(4));
    }

    #[tokio::test]
    async fn modules_endpoint_sorted() {
        let response = app().oneshot(get("/api/modules")).await.unwrap();
        let json = body_json(response).await;
        let names: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["CSS Grid", "Flexbox", "CSS Position"]);
    }

    #[tokio::test]
    async fn progress_upsert_round_trip() {
        let app = app();
        let response = app
            .clone()
            .oneshot(post_json(
                "/api/progress",
                r#"{"userId":"default-user","lessonId":"grid-1","completed":true}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["completed"], true);
        assert!(json["completedAt"].is_string());

        // Missing ids are rejected.
        let response = app
            .oneshot(post_json(
                "/api/progress",
                r#"{"userId":"","lessonId":"grid-1"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn template_endpoints() {
        let response = app().oneshot(get("/api/templates")).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().map(|a| a.len()), Some(3));

        let response = app().oneshot(get("/api/templates/flexbox")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["css"].as_str().unwrap().contains("display: flex;"));

        let response = app().oneshot(get("/api/templates/tables")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Template not found");
    }

    #[tokio::test]
    async fn validate_endpoint_echoes_diagnostics() {
        let response = app()
            .oneshot(post_json(
                "/api/validate",
                r#"{"language":"css","source":".a {\n  color: red\n}"}"#,
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["diagnostics"][0], "Line 2: Missing semicolon");

        let response = app()
            .oneshot(post_json(
                "/api/validate",
                r#"{"language":"html","source":"<div><span></div>"}"#,
            ))
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["diagnostics"][0], "Unmatched HTML tags detected");
    }

    #[tokio::test]
    async fn preview_endpoint_returns_composed_document() {
        let response = app()
            .oneshot(post_json(
                "/api/preview",
                r#"{"html":"<div>hi</div>","css":"div { color: red; }"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_text(response).await;
        assert_eq!(doc, compose_preview("<div>hi</div>", "div { color: red; }"));
    }

    #[tokio::test]
    async fn playground_page_is_served() {
        let response = app().oneshot(get("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_text(response).await;
        assert!(page.contains("CSS Playground"));
    }
}
