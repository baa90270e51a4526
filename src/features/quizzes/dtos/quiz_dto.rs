use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::questions::dtos::QuestionDto;
use crate::shared::constants::ALL_CATEGORIES_TYPE;
use crate::shared::deserializers::deserialize_opt_i64_lenient;

/// Category chosen on the quiz screen
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    /// Category type label, or "click" for all categories
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, deserialize_with = "deserialize_opt_i64_lenient")]
    #[schema(value_type = Option<i64>)]
    pub id: Option<i64>,
}

impl QuizCategoryDto {
    pub fn is_all(&self) -> bool {
        self.kind == ALL_CATEGORIES_TYPE
    }
}

/// Request DTO for `POST /quizzes`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlayQuizDto {
    pub quiz_category: QuizCategoryDto,
    /// Ids already asked in this round
    pub previous_questions: Vec<i64>,
}

/// Response DTO for `POST /quizzes`
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizQuestionDto {
    /// Next question, or null once the pool is exhausted
    pub question: Option<QuestionDto>,
}
