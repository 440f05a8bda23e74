use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::models::category::CategoryId;

pub type QuestionId = i32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub question: String,
    pub answer: String,
    pub category: CategoryId,
    pub difficulty: i32,
}

impl Question {
    /// Case-insensitive literal substring match against the question text.
    pub fn matches_term(&self, term: &str) -> bool {
        self.question.to_lowercase().contains(&term.to_lowercase())
    }
}

/// Creation input as received. Every field is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuestionDraft {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<CategoryId>,
}

/// A question that passed validation and has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: CategoryId,
}

impl NewQuestion {
    pub fn with_id(self, id: QuestionId) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

impl TryFrom<QuestionDraft> for NewQuestion {
    type Error = CatalogError;

    /// Only presence is checked. An empty string still counts as present.
    fn try_from(draft: QuestionDraft) -> Result<Self, Self::Error> {
        let missing = |field: &str| CatalogError::unprocessable(format!("missing field `{field}`"));
        Ok(Self {
            question: draft.question.ok_or_else(|| missing("question"))?,
            answer: draft.answer.ok_or_else(|| missing("answer"))?,
            difficulty: draft.difficulty.ok_or_else(|| missing("difficulty"))?,
            category: draft.category.ok_or_else(|| missing("category"))?,
        })
    }
}
