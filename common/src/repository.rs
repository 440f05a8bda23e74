//! # Storage Port
//!
//! The contract the catalog service uses to reach stored categories and questions.
//!
//! ## Rules
//! 1. Implementations own durability and isolation. The catalog performs no locking.
//! 2. Ordering of returned collections is unspecified. The catalog sorts what it exposes.
//! 3. Implementations live in `trivia_core::store`.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizCategory};

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Questions within `scope` whose id is not listed in `exclude`.
    async fn remaining_questions(
        &self,
        scope: QuizCategory,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, StoreError>;

    /// Stores the question and returns the id assigned to it.
    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, StoreError>;

    /// Fails with [`StoreError::QuestionNotFound`] when no question has this id.
    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError>;
}
