//! # Catalog Service
//!
//! Filtering, pagination, search and quiz selection over a [`QuestionRepository`].
//!
//! Every store failure is logged and then collapsed into one coarse [`CatalogError`] kind
//! per operation: [`CatalogError::NotFound`] for reads, [`CatalogError::Unprocessable`] for
//! writes and quiz selection.

use rand::Rng;
use tracing::{debug, info, warn};
use trivia_common::error::{CatalogError, StoreError};
use trivia_common::models::category::sort_by_kind;
use trivia_common::models::{
    Category, CategoryId, NewQuestion, Question, QuestionDraft, QuestionId, QuizCategory,
};
use trivia_common::pagination::{PageRequest, QUESTIONS_PER_PAGE};
use trivia_common::repository::QuestionRepository;

use crate::quiz;

/// One page of questions along with catalog-wide context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: Vec<Category>,
}

/// An unpaginated set of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionList {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<CategoryId>,
}

impl QuestionList {
    fn new(questions: Vec<Question>, current_category: Option<CategoryId>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

pub struct CatalogService {
    repo: Box<dyn QuestionRepository>,
    page_size: usize,
}

impl CatalogService {
    pub fn new(repo: Box<dyn QuestionRepository>) -> Self {
        Self {
            repo,
            page_size: QUESTIONS_PER_PAGE,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// All categories ordered by label. An empty catalog counts as not found.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = self.sorted_categories().await?;
        if categories.is_empty() {
            return Err(CatalogError::not_found("no categories stored"));
        }
        Ok(categories)
    }

    /// Questions on `page` (1-based) in id order.
    ///
    /// A page with nothing on it, including any page past the last one, is not found.
    pub async fn list_questions(&self, page: i64) -> Result<QuestionPage, CatalogError> {
        let mut questions = self
            .repo
            .questions()
            .await
            .map_err(|err| collapse(CatalogError::NotFound, "list_questions", err))?;
        questions.sort_by_key(|q| q.id);

        let total_questions = questions.len();
        let range = PageRequest::new(page, self.page_size)
            .bounds(total_questions)
            .ok_or_else(|| {
                CatalogError::not_found(format!(
                    "page {page} is empty ({total_questions} questions, {} per page)",
                    self.page_size
                ))
            })?;
        debug!(page, ?range, total_questions, "question page resolved");

        let categories = self.sorted_categories().await?;
        Ok(QuestionPage {
            questions: questions.drain(range).collect(),
            total_questions,
            categories,
        })
    }

    pub async fn delete_question(&self, id: QuestionId) -> Result<QuestionId, CatalogError> {
        self.repo
            .delete_question(id)
            .await
            .map_err(|err| collapse(CatalogError::Unprocessable, "delete_question", err))?;
        info!(id, "question deleted");
        Ok(id)
    }

    /// Validates and stores a new question, returning its id.
    pub async fn create_question(&self, draft: QuestionDraft) -> Result<QuestionId, CatalogError> {
        let question = NewQuestion::try_from(draft).inspect_err(|err| {
            warn!(reason = err.reason(), "rejected question draft");
        })?;
        let id = self
            .repo
            .insert_question(question)
            .await
            .map_err(|err| collapse(CatalogError::Unprocessable, "create_question", err))?;
        info!(id, "question created");
        Ok(id)
    }

    /// Questions whose text contains `term`, ignoring case.
    ///
    /// A missing or empty term is not a wildcard: it is reported as not found.
    pub async fn search_questions(&self, term: Option<&str>) -> Result<QuestionList, CatalogError> {
        let term = term
            .filter(|term| !term.is_empty())
            .ok_or_else(|| CatalogError::not_found("empty search term"))?;
        let mut questions = self
            .repo
            .search_questions(term)
            .await
            .map_err(|err| collapse(CatalogError::NotFound, "search_questions", err))?;
        questions.sort_by_key(|q| q.id);
        debug!(term, matches = questions.len(), "search finished");
        Ok(QuestionList::new(questions, None))
    }

    /// Questions belonging to the category identified by `raw_id`.
    ///
    /// Only plain decimal digits name a category; anything else, signs and padding
    /// included, is not found. An unknown numeric id yields an empty list.
    pub async fn questions_by_category(&self, raw_id: &str) -> Result<QuestionList, CatalogError> {
        let category: CategoryId = Some(raw_id)
            .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| {
                CatalogError::not_found(format!("category id `{raw_id}` is not numeric"))
            })?;
        let mut questions = self
            .repo
            .questions_in_category(category)
            .await
            .map_err(|err| collapse(CatalogError::NotFound, "questions_by_category", err))?;
        questions.sort_by_key(|q| q.id);
        debug!(category, count = questions.len(), "category questions loaded");
        Ok(QuestionList::new(questions, Some(category)))
    }

    /// A random question from `scope` that is not in `previous`, or `None` once the
    /// round has used them all.
    pub async fn next_quiz_question(
        &self,
        scope: QuizCategory,
        previous: &[QuestionId],
    ) -> Result<Option<Question>, CatalogError> {
        let pool = self.quiz_pool(scope, previous).await?;
        let mut rng = rand::rng();
        Ok(quiz::pick_question(&pool, &mut rng).cloned())
    }

    /// Same as [`Self::next_quiz_question`] with a caller-supplied random source.
    pub async fn next_quiz_question_with<R: Rng + ?Sized>(
        &self,
        scope: QuizCategory,
        previous: &[QuestionId],
        rng: &mut R,
    ) -> Result<Option<Question>, CatalogError> {
        let pool = self.quiz_pool(scope, previous).await?;
        Ok(quiz::pick_question(&pool, rng).cloned())
    }

    async fn quiz_pool(
        &self,
        scope: QuizCategory,
        previous: &[QuestionId],
    ) -> Result<Vec<Question>, CatalogError> {
        let pool = self
            .repo
            .remaining_questions(scope, previous)
            .await
            .map_err(|err| collapse(CatalogError::Unprocessable, "next_quiz_question", err))?;
        debug!(?scope, seen = previous.len(), candidates = pool.len(), "quiz pool built");
        Ok(pool)
    }

    async fn sorted_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let mut categories = self
            .repo
            .categories()
            .await
            .map_err(|err| collapse(CatalogError::NotFound, "list_categories", err))?;
        sort_by_kind(&mut categories);
        Ok(categories)
    }
}

fn collapse(kind: fn(String) -> CatalogError, operation: &str, err: StoreError) -> CatalogError {
    warn!(operation, error = %err, "store failure");
    kind(err.to_string())
}
