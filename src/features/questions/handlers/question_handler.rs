use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result, ResultExt};
use crate::core::extractor::{AppJson, AppJsonRejection, AppPath};
use crate::features::questions::dtos::{
    CategoryQuestionsDto, CreateQuestionDto, QuestionCreatedDto, QuestionDeletedDto,
    QuestionPageDto, RatingUpdatedDto, SearchQuestionsDto, SearchResultDto, UpdateRatingDto,
};
use crate::features::questions::services::QuestionService;
use crate::shared::types::{ApiResponse, ErrorResponse, PageQuery};

/// List questions, ten per page
#[utoipa::path(
    get,
    path = "/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions with all categories", body = QuestionPageDto),
        (status = 404, description = "Page is empty", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions(
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<QuestionPageDto>>> {
    let page = service.list(query.page()).await?;
    Ok(Json(ApiResponse::success(page)))
}

/// List questions of one category, ten per page
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    params(
        ("category_id" = i64, Path, description = "Category ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "One page of the category's questions", body = CategoryQuestionsDto),
        (status = 404, description = "Unknown category or empty page", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn list_questions_by_category(
    State(service): State<Arc<QuestionService>>,
    AppPath(category_id): AppPath<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<CategoryQuestionsDto>>> {
    let page = service
        .list_by_category(category_id, query.page())
        .await
        .or_not_found()?;
    Ok(Json(ApiResponse::success(page)))
}

/// Create a question
///
/// `question` and `answer` are required and must be non-empty.
#[utoipa::path(
    post,
    path = "/questions",
    params(PageQuery),
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Question created", body = QuestionCreatedDto),
        (status = 422, description = "Missing question or answer, or insert failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn create_question(
    State(service): State<Arc<QuestionService>>,
    Query(query): Query<PageQuery>,
    body: std::result::Result<AppJson<CreateQuestionDto>, AppJsonRejection>,
) -> Result<Json<ApiResponse<QuestionCreatedDto>>> {
    let AppJson(dto) = body.map_err(|e| AppError::Unprocessable(e.message()))?;

    dto.validate()
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;

    let created = service.create(dto, query.page()).await?;
    Ok(Json(ApiResponse::success(created)))
}

/// Delete a question
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Question deleted", body = QuestionDeletedDto),
        (status = 422, description = "Question missing or delete failed", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn delete_question(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i64>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ApiResponse<QuestionDeletedDto>>> {
    let deleted = service.delete(id, query.page()).await.or_unprocessable()?;
    Ok(Json(ApiResponse::success(deleted)))
}

/// Search questions by substring of their text
#[utoipa::path(
    post,
    path = "/questions/search",
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "All matching questions", body = SearchResultDto),
        (status = 404, description = "Empty search term", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn search_questions(
    State(service): State<Arc<QuestionService>>,
    AppJson(dto): AppJson<SearchQuestionsDto>,
) -> Result<Json<ApiResponse<SearchResultDto>>> {
    let result = service.search(dto.search_term.as_deref()).await?;
    Ok(Json(ApiResponse::success(result)))
}

/// Update the rating of a question
#[utoipa::path(
    patch,
    path = "/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    request_body = UpdateRatingDto,
    responses(
        (status = 200, description = "Rating stored", body = RatingUpdatedDto),
        (status = 400, description = "Rating is not an integer", body = ErrorResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
    ),
    tag = "questions"
)]
pub async fn update_rating(
    State(service): State<Arc<QuestionService>>,
    AppPath(id): AppPath<i64>,
    AppJson(dto): AppJson<UpdateRatingDto>,
) -> Result<Json<ApiResponse<RatingUpdatedDto>>> {
    let updated = service.update_rating(id, dto.rating).await.or_not_found()?;
    Ok(Json(ApiResponse::success(updated)))
}
