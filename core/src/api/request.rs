//! Request bodies and their conversion into catalog inputs.
//!
//! A missing body, text that is not JSON and JSON of the wrong shape all fail with the
//! error kind of the route the body was sent to.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use trivia_common::error::CatalogError;
use trivia_common::models::{CategoryId, QuestionDraft, QuestionId, QuizCategory};

/// Category `type` that clients send to mean "every category".
pub const ALL_CATEGORIES_TYPE: &str = "click";

pub type CreateQuestionRequest = QuestionDraft;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategoryBody>,
    pub previous_questions: Option<Vec<QuestionId>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryBody {
    pub id: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl QuizRequest {
    pub fn into_parts(self) -> Result<(QuizCategory, Vec<QuestionId>), CatalogError> {
        let scope: QuizCategory = self
            .quiz_category
            .ok_or_else(|| CatalogError::unprocessable("missing `quiz_category`"))?
            .try_into()?;
        let previous = self
            .previous_questions
            .ok_or_else(|| CatalogError::unprocessable("missing `previous_questions`"))?;
        Ok((scope, previous))
    }
}

impl TryFrom<QuizCategoryBody> for QuizCategory {
    type Error = CatalogError;

    fn try_from(body: QuizCategoryBody) -> Result<Self, Self::Error> {
        let kind = body
            .kind
            .ok_or_else(|| CatalogError::unprocessable("missing `quiz_category.type`"))?;
        if kind == ALL_CATEGORIES_TYPE {
            return Ok(Self::AllCategories);
        }
        let id = body
            .id
            .ok_or_else(|| CatalogError::unprocessable("missing `quiz_category.id`"))?;
        category_id(&id).map(Self::Specific)
    }
}

/// Accepts `1` as well as `"1"`.
fn category_id(value: &Value) -> Result<CategoryId, CatalogError> {
    let parsed = match value {
        Value::Number(number) => number.as_i64().and_then(|n| CategoryId::try_from(n).ok()),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| CatalogError::unprocessable(format!("invalid category id {value}")))
}

/// Decodes a JSON body into `T`, failing with `route_error` whatever went wrong.
pub fn parse_body<T: DeserializeOwned>(
    body: Option<&str>,
    route_error: fn(String) -> CatalogError,
) -> Result<T, CatalogError> {
    let raw = body
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| route_error(String::from("request body is required")))?;
    serde_json::from_str(raw).map_err(|err| route_error(err.to_string()))
}
