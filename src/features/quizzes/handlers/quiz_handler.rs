use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{Result, ResultExt};
use crate::core::extractor::AppJson;
use crate::features::quizzes::dtos::{PlayQuizDto, QuizQuestionDto};
use crate::features::quizzes::services::QuizService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Play the quiz
///
/// Returns a random question that is not in `previous_questions`, limited to
/// `quiz_category` unless its type is "click". `question` is null when none remain.
#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = PlayQuizDto,
    responses(
        (status = 200, description = "Next question or null", body = QuizQuestionDto),
        (status = 400, description = "Missing or malformed quiz input", body = ErrorResponse),
    ),
    tag = "quizzes"
)]
pub async fn play_quiz(
    State(service): State<Arc<QuizService>>,
    AppJson(request): AppJson<PlayQuizDto>,
) -> Result<Json<ApiResponse<QuizQuestionDto>>> {
    let next = service.next_question(request).await.or_bad_request()?;
    Ok(Json(ApiResponse::success(next)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{
        test_server, InMemoryStore, HISTORY_ID, HISTORY_QUESTION_IDS,
    };

    #[tokio::test]
    async fn test_quiz_skips_previous_questions() {
        let server = test_server(Arc::new(InMemoryStore::with_fixture()));

        for _ in 0..20 {
            let response = server
                .post("/quizzes")
                .json(&json!({
                    "previous_questions": [8, 18],
                    "quiz_category": { "type": "History", "id": "4" }
                }))
                .await;
            response.assert_status_ok();

            let body: Value = response.json();
            let id = body["question"]["id"].as_i64().unwrap();
            assert!([3, 5, 22, 23].contains(&id));
            assert_eq!(body["question"]["category"], HISTORY_ID);
        }
    }

    #[tokio::test]
    async fn test_quiz_all_categories() {
        let server = test_server(Arc::new(InMemoryStore::with_fixture()));

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": [],
                "quiz_category": { "type": "click", "id": 0 }
            }))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["question"]["id"].is_i64());
    }

    #[tokio::test]
    async fn test_quiz_exhausted_returns_null() {
        let server = test_server(Arc::new(InMemoryStore::with_fixture()));

        let response = server
            .post("/quizzes")
            .json(&json!({
                "previous_questions": HISTORY_QUESTION_IDS,
                "quiz_category": { "type": "History", "id": HISTORY_ID }
            }))
            .await;
        response.assert_status_ok();
        response.assert_json(&json!({ "success": true, "question": null }));
    }

    #[tokio::test]
    async fn test_quiz_rejects_missing_input() {
        let server = test_server(Arc::new(InMemoryStore::with_fixture()));

        for payload in [
            json!({}),
            json!({ "previous_questions": [] }),
            json!({ "quiz_category": { "type": "click", "id": 0 } }),
            json!({ "previous_questions": [], "quiz_category": { "type": "History" } }),
        ] {
            let response = server.post("/quizzes").json(&payload).await;
            response.assert_status(StatusCode::BAD_REQUEST);
            response.assert_json(&json!({
                "success": false,
                "error": 400,
                "message": "Bad Request"
            }));
        }
    }
}
