use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use trivia_common::error::StoreError;
use trivia_common::models::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizCategory};
use trivia_common::repository::QuestionRepository;

use crate::store::{Dataset, seed};

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    data: RwLock<Dataset>,
}

impl InMemoryRepository {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            data: RwLock::new(dataset),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::dataset())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.data.read().await.categories.clone())
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.questions_in_category(category))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.search(term))
    }

    async fn remaining_questions(
        &self,
        scope: QuizCategory,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.remaining(scope, exclude))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        let id = self.data.write().await.insert(question)?;
        debug!(id, "question stored in memory");
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        self.data.write().await.remove(id)?;
        debug!(id, "question removed from memory");
        Ok(())
    }
}
