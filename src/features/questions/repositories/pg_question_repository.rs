use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::repositories::QuestionRepository;

/// Builds an ILIKE pattern matching `term` literally anywhere in the text
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

pub struct PgQuestionRepository {
    pool: PgPool,
}

impl PgQuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list_all(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty, rating)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, question, answer, category, difficulty, rating
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .bind(question.rating)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn update_rating(&self, id: i64, rating: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET rating = $2
            WHERE id = $1
            RETURNING id, question, answer, category, difficulty, rating
            "#,
        )
        .bind(id)
        .bind(rating)
        .fetch_optional(&self.pool)
        .await
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty, rating
            FROM questions
            WHERE id <> ALL($1)
              AND ($2::BIGINT IS NULL OR category = $2)
            ORDER BY id
            "#,
        )
        .bind(exclude)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_wraps_term() {
        assert_eq!(like_pattern("country"), "%country%");
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    // These run against a throwaway database created from DATABASE_URL:
    // `cargo test -- --ignored`. They rely on the seed migration.

    fn new_question(text: &str) -> NewQuestion {
        NewQuestion {
            question: text.to_string(),
            answer: "Yes".to_string(),
            category: Some(1),
            difficulty: Some(1),
            rating: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_search_matches_wildcards_literally(pool: PgPool) -> sqlx::Result<()> {
        let repository = PgQuestionRepository::new(pool);
        let stored = repository.insert(new_question("Am I 100% sure?")).await?;

        let found = repository.search("%").await?;
        assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![stored.id]);

        assert!(repository.search("_").await?.is_empty());

        let found = repository.search("COUNTRY").await?;
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|q| q.question.to_lowercase().contains("country")));
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_quiz_candidates_filter(pool: PgPool) -> sqlx::Result<()> {
        let repository = PgQuestionRepository::new(pool);

        let history = repository.quiz_candidates(Some(4), &[5, 9, 12]).await?;
        assert_eq!(history.iter().map(|q| q.id).collect::<Vec<_>>(), vec![23]);

        let all = repository.list_all().await?;
        let every_id: Vec<i64> = all.iter().map(|q| q.id).collect();
        assert_eq!(repository.quiz_candidates(None, &[]).await?.len(), all.len());
        assert!(repository.quiz_candidates(None, &every_id).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs a Postgres DATABASE_URL"]
    async fn test_rating_and_delete(pool: PgPool) -> sqlx::Result<()> {
        let repository = PgQuestionRepository::new(pool);

        let rated = repository.update_rating(2, 4).await?;
        assert_eq!(rated.map(|q| q.rating), Some(Some(4)));
        assert!(repository.update_rating(1000, 4).await?.is_none());

        assert!(repository.delete(2).await?);
        assert!(!repository.delete(2).await?);
        assert!(repository.find_by_id(2).await?.is_none());
        Ok(())
    }
}
