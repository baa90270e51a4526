mod question_dto;

pub use question_dto::{
    CategoryQuestionsDto, CreateQuestionDto, QuestionCreatedDto, QuestionDeletedDto, QuestionDto,
    QuestionPageDto, RatingUpdatedDto, SearchQuestionsDto, SearchResultDto, UpdateRatingDto,
};
