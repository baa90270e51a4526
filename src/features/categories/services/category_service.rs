use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{category_map, CategoryListDto, CategoryMap};
use crate::features::categories::repositories::CategoryRepository;

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// All categories as an id -> type map
    pub async fn map(&self) -> Result<CategoryMap> {
        let categories = self.repository.list_all().await.map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(category_map(categories))
    }

    /// List categories; an empty table is reported as not found
    pub async fn list(&self) -> Result<CategoryListDto> {
        let categories = self.map().await?;

        if categories.is_empty() {
            return Err(AppError::NotFound("No categories available".to_string()));
        }

        Ok(CategoryListDto {
            total_categories: categories.len(),
            categories,
        })
    }

    /// Type label of a single category
    pub async fn type_of(&self, id: i64) -> Result<String> {
        let category = self.repository.find_by_id(id).await.map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.kind)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
