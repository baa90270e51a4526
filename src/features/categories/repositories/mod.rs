mod pg_category_repository;

pub use pg_category_repository::PgCategoryRepository;

use async_trait::async_trait;

use crate::features::categories::models::Category;

/// Read access to the `categories` table
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id
    async fn list_all(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error>;
}
