use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::categories::CategoryService;
use crate::features::questions::dtos::{
    CategoryQuestionsDto, CreateQuestionDto, QuestionCreatedDto, QuestionDeletedDto, QuestionDto,
    QuestionPageDto, RatingUpdatedDto, SearchResultDto,
};
use crate::features::questions::models::Question;
use crate::features::questions::repositories::QuestionRepository;
use crate::shared::pagination::paginate;

fn to_dtos(questions: &[Question]) -> Vec<QuestionDto> {
    questions.iter().cloned().map(QuestionDto::from).collect()
}

/// Service for question operations
pub struct QuestionService {
    repository: Arc<dyn QuestionRepository>,
    categories: Arc<CategoryService>,
}

impl QuestionService {
    pub fn new(repository: Arc<dyn QuestionRepository>, categories: Arc<CategoryService>) -> Self {
        Self {
            repository,
            categories,
        }
    }

    async fn all_questions(&self) -> Result<Vec<Question>> {
        self.repository.list_all().await.map_err(|e| {
            tracing::error!("Failed to list questions: {:?}", e);
            AppError::Database(e)
        })
    }

    /// One page of all questions plus the category map
    pub async fn list(&self, page: i64) -> Result<QuestionPageDto> {
        let questions = self.all_questions().await?;
        let current = paginate(&questions, page);
        if current.is_empty() {
            return Err(AppError::NotFound(format!("No questions on page {}", page)));
        }

        let categories = self.categories.map().await?;

        Ok(QuestionPageDto {
            questions: to_dtos(current),
            total_questions: questions.len(),
            categories,
        })
    }

    /// One page of the questions in a category, labelled with the category type
    pub async fn list_by_category(
        &self,
        category_id: i64,
        page: i64,
    ) -> Result<CategoryQuestionsDto> {
        let questions = self
            .repository
            .list_by_category(category_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list questions of category {}: {:?}", category_id, e);
                AppError::Database(e)
            })?;

        let current = paginate(&questions, page);
        if current.is_empty() {
            return Err(AppError::NotFound(format!(
                "No questions in category {} on page {}",
                category_id, page
            )));
        }

        let current_category = self.categories.type_of(category_id).await?;

        Ok(CategoryQuestionsDto {
            questions: to_dtos(current),
            total_questions: questions.len(),
            current_category,
        })
    }

    /// Insert a question and return the refreshed listing
    pub async fn create(&self, dto: CreateQuestionDto, page: i64) -> Result<QuestionCreatedDto> {
        let new_question = dto.into_new_question().ok_or_else(|| {
            AppError::Unprocessable("question and answer are required".to_string())
        })?;

        let question = self.repository.insert(new_question).await.map_err(|e| {
            tracing::error!("Failed to insert question: {:?}", e);
            AppError::Unprocessable(e.to_string())
        })?;

        tracing::info!(
            "Question created: id={}, category={:?}",
            question.id,
            question.category
        );

        let questions = self
            .all_questions()
            .await
            .map_err(|e| AppError::Unprocessable(e.to_string()))?;

        if questions.is_empty() {
            return Err(AppError::NotFound(format!(
                "Question {} missing right after insert",
                question.id
            )));
        }

        Ok(QuestionCreatedDto {
            created: question.id,
            question: question.question,
            questions: to_dtos(paginate(&questions, page)),
            total_questions: questions.len(),
        })
    }

    /// Delete a question and return the remaining listing
    pub async fn delete(&self, id: i64, page: i64) -> Result<QuestionDeletedDto> {
        let deleted = self.repository.delete(id).await.map_err(|e| {
            tracing::error!("Failed to delete question {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if !deleted {
            return Err(AppError::NotFound(format!("Question {} does not exist", id)));
        }

        tracing::info!("Question deleted: id={}", id);

        let questions = self.all_questions().await?;

        Ok(QuestionDeletedDto {
            deleted: id,
            questions: to_dtos(paginate(&questions, page)),
            total_questions: questions.len(),
        })
    }

    /// Case-insensitive substring search over question text, unpaginated
    pub async fn search(&self, term: Option<&str>) -> Result<SearchResultDto> {
        let term = match term {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::NotFound("Empty search term".to_string())),
        };

        let questions = self.repository.search(term).await.map_err(|e| {
            tracing::error!("Failed to search questions for {:?}: {:?}", term, e);
            AppError::Database(e)
        })?;

        Ok(SearchResultDto {
            total_questions: questions.len(),
            questions: to_dtos(&questions),
            current_category: None,
        })
    }

    /// Overwrite the rating of a question; other fields are immutable here
    pub async fn update_rating(&self, id: i64, rating: Option<i64>) -> Result<RatingUpdatedDto> {
        let updated = match rating {
            Some(rating) => self.repository.update_rating(id, rating).await,
            None => self.repository.find_by_id(id).await,
        }
        .map_err(|e| {
            tracing::error!("Failed to update rating of question {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let question =
            updated.ok_or_else(|| AppError::NotFound(format!("Question {} does not exist", id)))?;

        if let Some(rating) = rating {
            tracing::info!("Question rated: id={}, rating={}", question.id, rating);
        }

        Ok(RatingUpdatedDto { id: question.id })
    }
}
