pub mod quiz_handler;

pub use quiz_handler::{__path_play_quiz, play_quiz};
