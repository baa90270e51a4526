use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::categories::dtos::CategoryListDto;
use crate::features::categories::services::CategoryService;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// List all categories
///
/// Returns every category keyed by id, ordered by id.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "Categories keyed by id", body = CategoryListDto),
        (status = 404, description = "No categories available", body = ErrorResponse),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<CategoryListDto>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::success(categories)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{test_server, InMemoryStore};

    #[tokio::test]
    async fn test_list_categories() {
        let server = test_server(Arc::new(InMemoryStore::with_fixture()));

        let response = server.get("/categories").await;
        response.assert_status_ok();
        response.assert_json(&json!({
            "success": true,
            "categories": {
                "1": "Science",
                "2": "Art",
                "3": "Geography",
                "4": "History",
                "5": "Entertainment",
                "6": "Sports"
            },
            "total_categories": 6
        }));
    }

    #[tokio::test]
    async fn test_list_categories_is_idempotent() {
        let server = test_server(Arc::new(InMemoryStore::with_fixture()));

        let first = server.get("/categories").await;
        let second = server.get("/categories").await;
        first.assert_status_ok();
        second.assert_status_ok();
        assert_eq!(first.text(), second.text());
    }

    #[tokio::test]
    async fn test_empty_categories_is_not_found() {
        let server = test_server(Arc::new(InMemoryStore::default()));

        let response = server.get("/categories").await;
        response.assert_status(StatusCode::NOT_FOUND);
        response.assert_json(&json!({
            "success": false,
            "error": 404,
            "message": "Resource Not Found"
        }));
    }

    #[tokio::test]
    async fn test_storage_failure_is_internal_error() {
        let store = Arc::new(InMemoryStore::with_fixture());
        let server = test_server(store.clone());
        store.fail_storage();

        let response = server.get("/categories").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"], 500);
        assert_eq!(body["message"], "Internal Server Error");
    }
}
