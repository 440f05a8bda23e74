use serde::{Deserialize, Serialize};
use trivia_common::error::StoreError;
use trivia_common::models::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizCategory};

/// The full contents of a store.
///
/// Question ids come from `next_question_id`, which only moves forward. Ids of deleted
/// questions are never handed out again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub next_question_id: QuestionId,
}

impl Dataset {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        let mut dataset = Self {
            categories,
            questions,
            next_question_id: 1,
        };
        dataset.normalize();
        dataset
    }

    /// Raises the id counter above every stored id.
    pub fn normalize(&mut self) {
        let floor = self
            .questions
            .iter()
            .map(|q| q.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        self.next_question_id = self.next_question_id.max(floor).max(1);
    }

    pub fn questions_in_category(&self, category: CategoryId) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect()
    }

    pub fn search(&self, term: &str) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.matches_term(term))
            .cloned()
            .collect()
    }

    pub fn remaining(&self, scope: QuizCategory, exclude: &[QuestionId]) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| scope.includes(q.category) && !exclude.contains(&q.id))
            .cloned()
            .collect()
    }

    pub fn insert(&mut self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        self.normalize();
        let id = self.next_question_id;
        if self.questions.iter().any(|q| q.id == id) {
            return Err(StoreError::IdExhausted);
        }
        self.next_question_id = id.checked_add(1).ok_or(StoreError::IdExhausted)?;
        self.questions.push(question.with_id(id));
        Ok(id)
    }

    pub fn remove(&mut self, id: QuestionId) -> Result<(), StoreError> {
        let position = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or(StoreError::QuestionNotFound(id))?;
        self.questions.remove(position);
        Ok(())
    }
}
