use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum_test::TestServer;
use fake::{faker::lorem::en::Sentence, Fake};

use crate::core::app::{build_router, Services};
use crate::features::categories::models::Category;
use crate::features::categories::{CategoryRepository, CategoryService};
use crate::features::questions::models::{NewQuestion, Question};
use crate::features::questions::{QuestionRepository, QuestionService};
use crate::features::quizzes::QuizService;

pub const HISTORY_ID: i64 = 4;
pub const HISTORY_QUESTION_IDS: [i64; 6] = [3, 5, 8, 18, 22, 23];
pub const COUNTRY_QUESTION_IDS: [i64; 3] = [7, 11, 14];
pub const FIXTURE_QUESTION_COUNT: i64 = 24;

#[derive(Default)]
struct StoreState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
    failing: bool,
    categories_failing: bool,
}

/// Storage double backing both repositories in router tests
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let next_id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(StoreState {
                categories,
                questions,
                next_id,
                failing: false,
                categories_failing: false,
            }),
        }
    }

    /// Six categories and 24 questions: History (id 4) holds ids 3, 5, 8, 18, 22
    /// and 23; exactly ids 7, 11 and 14 mention "country"; nothing mentions "jack".
    pub fn with_fixture() -> Self {
        let categories = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
            .iter()
            .enumerate()
            .map(|(i, kind)| Category {
                id: i as i64 + 1,
                kind: kind.to_string(),
            })
            .collect();

        let other_categories = [1, 2, 3, 5, 6];
        let questions = (1..=FIXTURE_QUESTION_COUNT)
            .map(|id| {
                let category = if HISTORY_QUESTION_IDS.contains(&id) {
                    Some(HISTORY_ID)
                } else if id == 20 {
                    None
                } else {
                    Some(other_categories[id as usize % other_categories.len()])
                };

                let text = match id {
                    7 => "Which country is home to the Atacama desert?".to_string(),
                    11 => "Which Country won the first ever soccer World Cup in 1930?".to_string(),
                    14 => "What is the smallest COUNTRY by area?".to_string(),
                    _ => Sentence(4..8).fake::<String>(),
                };

                Question {
                    id,
                    question: text,
                    answer: format!("Answer {}", id),
                    category,
                    difficulty: Some(id % 5 + 1),
                    rating: None,
                }
            })
            .collect();

        Self::new(categories, questions)
    }

    /// Makes every following storage call fail
    pub fn fail_storage(&self) {
        self.lock().failing = true;
    }

    /// Makes only the category reads fail
    pub fn fail_categories(&self) {
        self.lock().categories_failing = true;
    }

    pub fn question(&self, id: i64) -> Option<Question> {
        self.lock().questions.iter().find(|q| q.id == id).cloned()
    }

    pub fn question_count(&self) -> usize {
        self.lock().questions.len()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap()
    }

    fn checked(&self) -> Result<MutexGuard<'_, StoreState>, sqlx::Error> {
        let state = self.lock();
        if state.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(state)
    }

    fn checked_categories(&self) -> Result<MutexGuard<'_, StoreState>, sqlx::Error> {
        let state = self.checked()?;
        if state.categories_failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(state)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Category>, sqlx::Error> {
        let mut categories = self.checked_categories()?.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        Ok(self
            .checked_categories()?
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Question>, sqlx::Error> {
        let mut questions = self.checked()?.questions.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn list_by_category(&self, category_id: i64) -> Result<Vec<Question>, sqlx::Error> {
        let mut questions: Vec<Question> = self
            .checked()?
            .questions
            .iter()
            .filter(|q| q.category == Some(category_id))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        Ok(self.checked()?.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn insert(&self, question: NewQuestion) -> Result<Question, sqlx::Error> {
        let mut state = self.checked()?;
        let stored = Question {
            id: state.next_id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
            rating: question.rating,
        };
        state.next_id += 1;
        state.questions.push(stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let mut state = self.checked()?;
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        Ok(state.questions.len() < before)
    }

    async fn update_rating(&self, id: i64, rating: i64) -> Result<Option<Question>, sqlx::Error> {
        let mut state = self.checked()?;
        Ok(state.questions.iter_mut().find(|q| q.id == id).map(|q| {
            q.rating = Some(rating);
            q.clone()
        }))
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let needle = term.to_lowercase();
        let mut questions: Vec<Question> = self
            .checked()?
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i64>,
        exclude: &[i64],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let mut questions: Vec<Question> = self
            .checked()?
            .questions
            .iter()
            .filter(|q| !exclude.contains(&q.id))
            .filter(|q| category_id.is_none() || q.category == category_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }
}

/// Services wired to `store` the same way `main` wires them to Postgres
pub fn services(store: Arc<InMemoryStore>) -> Services {
    let category_repository: Arc<dyn CategoryRepository> = store.clone();
    let question_repository: Arc<dyn QuestionRepository> = store;

    let categories = Arc::new(CategoryService::new(category_repository));
    let questions = Arc::new(QuestionService::new(
        Arc::clone(&question_repository),
        Arc::clone(&categories),
    ));
    let quizzes = Arc::new(QuizService::new(question_repository));

    Services {
        categories,
        questions,
        quizzes,
    }
}

pub fn test_server(store: Arc<InMemoryStore>) -> TestServer {
    TestServer::new(build_router(services(store))).unwrap()
}
