use crate::models::category::CategoryId;

/// The pool a quiz round draws its next question from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    AllCategories,
    Specific(CategoryId),
}

impl QuizCategory {
    pub fn includes(&self, category: CategoryId) -> bool {
        match self {
            Self::AllCategories => true,
            Self::Specific(id) => *id == category,
        }
    }
}
