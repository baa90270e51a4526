//! Trivia questions.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/questions?page=` | Paginated questions with category map |
//! | POST | `/questions` | Create a question |
//! | POST | `/questions/search` | Substring search on question text |
//! | PATCH | `/questions/{id}` | Update rating |
//! | DELETE | `/questions/{id}` | Delete a question |
//! | GET | `/categories/{category_id}/questions?page=` | Paginated questions of a category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PgQuestionRepository, QuestionRepository};
pub use services::QuestionService;
