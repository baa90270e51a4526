//! Quiz play: serves one unseen question at a time.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::QuizService;
