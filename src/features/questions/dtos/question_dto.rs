use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::dtos::CategoryMap;
use crate::features::questions::models::{NewQuestion, Question};
use crate::shared::deserializers::{
    deserialize_opt_i64_lenient, deserialize_opt_text_lenient, deserialize_present_i64_lenient,
};

/// Serialized question record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
    pub rating: Option<i64>,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
            rating: q.rating,
        }
    }
}

/// Request DTO for creating a question
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionDto {
    #[validate(
        required(message = "question is required"),
        length(min = 1, message = "question must not be empty")
    )]
    pub question: Option<String>,

    #[validate(
        required(message = "answer is required"),
        length(min = 1, message = "answer must not be empty")
    )]
    pub answer: Option<String>,

    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    #[schema(value_type = Option<i64>)]
    pub category: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    #[schema(value_type = Option<i64>)]
    pub difficulty: Option<i64>,

    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    #[schema(value_type = Option<i64>)]
    pub rating: Option<i64>,
}

impl CreateQuestionDto {
    /// Converts a validated request into insertable values
    pub fn into_new_question(self) -> Option<NewQuestion> {
        Some(NewQuestion {
            question: self.question?,
            answer: self.answer?,
            category: self.category,
            difficulty: self.difficulty,
            rating: self.rating,
        })
    }
}

/// Request DTO for `PATCH /questions/{id}`; only `rating` is honoured.
///
/// An absent `rating` leaves the question untouched, an explicit `null` is rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateRatingDto {
    #[serde(default, deserialize_with = "deserialize_present_i64_lenient")]
    #[schema(value_type = Option<i64>)]
    pub rating: Option<i64>,
}

/// Request DTO for substring search
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(
        rename = "searchTerm",
        default,
        deserialize_with = "deserialize_opt_text_lenient"
    )]
    pub search_term: Option<String>,
}

/// Response DTO for `GET /questions`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionPageDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
}

/// Response DTO for `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    /// Type label of the requested category
    pub current_category: String,
}

/// Response DTO for search
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResultDto {
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
    /// Always null; keeps the shape of category-scoped listings
    pub current_category: Option<String>,
}

/// Response DTO for question creation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionCreatedDto {
    pub created: i64,
    pub question: String,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Response DTO for question deletion
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionDeletedDto {
    pub deleted: i64,
    pub questions: Vec<QuestionDto>,
    pub total_questions: usize,
}

/// Response DTO for rating update
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RatingUpdatedDto {
    pub id: i64,
}
