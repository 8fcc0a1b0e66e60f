//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::generator::{generate_resume, GenerateResumeRequest};
use crate::state::AppState;

/// POST /generate-resume
///
/// Full pipeline: render prompt → invoke model → normalize → parse.
/// Returns the parsed resume object verbatim; any stage failure becomes a
/// 500 with a stage-identifying detail message.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<GenerateResumeRequest>,
) -> Result<Json<Value>, AppError> {
    let resume = generate_resume(state.llm.as_ref(), &request).await?;
    Ok(Json(resume))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::llm_client::{LlmError, TextGenerator};
    use crate::routes::build_router;
    use crate::state::AppState;

    struct StubGenerator {
        reply: String,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.reply.clone())
        }
    }

    fn test_app(reply: &str) -> axum::Router {
        let state = AppState {
            llm: Arc::new(StubGenerator {
                reply: reply.to_string(),
            }),
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_generate_resume_end_to_end() {
        let app = test_app("```json\n{\"name\":\"Jane Doe\",\"title\":\"Software Engineer\"}\n```");

        let request = Request::builder()
            .method("POST")
            .uri("/generate-resume")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "user_info": {"name": "Jane Doe"},
                    "job_description": "Software Engineer"
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"name": "Jane Doe", "title": "Software Engineer"})
        );
    }

    #[tokio::test]
    async fn test_generate_resume_unparseable_reply_is_500_with_detail() {
        let app = test_app("Sorry, I cannot help with that.");

        let request = Request::builder()
            .method("POST")
            .uri("/generate-resume")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "user_info": {"name": "Jane Doe"},
                    "job_description": "Software Engineer"
                })
                .to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        let detail = body["detail"].as_str().unwrap();
        assert!(detail.starts_with("Failed to parse JSON:"), "got: {detail}");
    }

    #[tokio::test]
    async fn test_generate_resume_missing_field_is_rejected() {
        let app = test_app("{}");

        let request = Request::builder()
            .method("POST")
            .uri("/generate-resume")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"user_info": {}}).to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_welcome_route() {
        let app = test_app("{}");

        let request = Request::builder()
            .method("GET")
            .uri("/")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(
            body,
            json!({"message": "Welcome to the Resume Generator API!"})
        );
    }
}
