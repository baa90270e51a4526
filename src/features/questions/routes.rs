use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::questions::handlers;
use crate::features::questions::services::QuestionService;

/// Create routes for the questions feature
pub fn routes(service: Arc<QuestionService>) -> Router {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route(
            "/questions/{id}",
            patch(handlers::update_rating).delete(handlers::delete_question),
        )
        .route(
            "/categories/{category_id}/questions",
            get(handlers::list_questions_by_category),
        )
        .with_state(service)
}
