use std::sync::Arc;

use rand::seq::IndexedRandom;

use crate::core::error::{AppError, Result};
use crate::features::questions::dtos::QuestionDto;
use crate::features::questions::QuestionRepository;
use crate::features::quizzes::dtos::{PlayQuizDto, QuizQuestionDto};

/// Picks the next quiz question
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Uniformly random question not yet asked, within the chosen category
    /// unless all categories were selected.
    pub async fn next_question(&self, request: PlayQuizDto) -> Result<QuizQuestionDto> {
        let category_id = if request.quiz_category.is_all() {
            None
        } else {
            Some(request.quiz_category.id.ok_or_else(|| {
                AppError::BadRequest(format!(
                    "quiz_category '{}' has no id",
                    request.quiz_category.kind
                ))
            })?)
        };

        let candidates = self
            .questions
            .quiz_candidates(category_id, &request.previous_questions)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load quiz candidates: {:?}", e);
                AppError::Database(e)
            })?;

        let question = candidates
            .choose(&mut rand::rng())
            .cloned()
            .map(QuestionDto::from);

        tracing::debug!(
            "Quiz candidates: category={:?}, available={}, picked={:?}",
            category_id,
            candidates.len(),
            question.as_ref().map(|q| q.id)
        );

        Ok(QuizQuestionDto { question })
    }
}
