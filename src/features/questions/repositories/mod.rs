mod pg_question_repository;

pub use pg_question_repository::PgQuestionRepository;

use async_trait::async_trait;

use crate::features::questions::models::{NewQuestion, Question};

/// Access to the `questions` table
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id
    async fn list_all(&self) -> Result<Vec<Question>, sqlx::Error>;

    /// Questions whose `category` equals `category_id`, ordered by id
    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, sqlx::Error>;

    async fn insert(&self, question: NewQuestion) -> Result<Question, sqlx::Error>;

    /// Returns false when no row had that id
    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error>;

    /// Returns the updated row, or None when no row had that id
    async fn update_rating(&self, id: i64, rating: i64) -> Result<Option<Question>, sqlx::Error>;

    /// Case-insensitive substring match on the question text only
    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error>;

    /// Questions not in `exclude`, optionally limited to one category
    async fn quiz_candidates(
        &self,
        category_id: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, sqlx::Error>;
}
