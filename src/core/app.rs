use std::sync::Arc;

use axum::{routing::get, Router};

use crate::core::error::AppError;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};

/// Services shared by the HTTP routes
#[derive(Clone)]
pub struct Services {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

async fn not_found() -> AppError {
    AppError::NotFound("No route matches the request".to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed("Verb not defined for this route".to_string())
}

/// API routes with JSON 404/405 fallbacks; transport layers are added by the caller
pub fn build_router(services: Services) -> Router {
    Router::new()
        .merge(categories_routes::routes(services.categories))
        .merge(questions_routes::routes(services.questions))
        .merge(quizzes_routes::routes(services.quizzes))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}
