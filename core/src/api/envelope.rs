use serde_json::{Map, Value, json};
use trivia_common::error::CatalogError;
use trivia_common::models::{Category, Question, QuestionId};

use crate::catalog::{QuestionList, QuestionPage};

/// Cross-origin headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Headers", "Content-Type,Authorization,true"),
    ("Access-Control-Allow-Methods", "GET,PUT,POST,DELETE,OPTIONS"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Value,
}

impl ApiResponse {
    fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: CORS_HEADERS.to_vec(),
            body,
        }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(200, body)
    }

    pub fn error(err: &CatalogError) -> Self {
        Self::failure(err.status(), err.message())
    }

    pub fn method_not_allowed() -> Self {
        Self::failure(405, "405 method not allowed")
    }

    /// Answer to a cross-origin preflight: an empty success carrying the CORS headers.
    pub fn preflight() -> Self {
        Self::ok(json!({ "success": true }))
    }

    fn failure(status: u16, message: &str) -> Self {
        Self::new(
            status,
            json!({
                "success": false,
                "error": status,
                "message": message,
            }),
        )
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&'static str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

/// `{ "<id>": "<type>", ... }`
pub fn categories_object(categories: &[Category]) -> Value {
    let map: Map<String, Value> = categories
        .iter()
        .map(|c| (c.id.to_string(), Value::String(c.kind.clone())))
        .collect();
    Value::Object(map)
}

pub fn categories_body(categories: &[Category]) -> Value {
    json!({
        "success": true,
        "categories": categories_object(categories),
    })
}

pub fn question_page_body(page: &QuestionPage) -> Value {
    json!({
        "success": true,
        "questions": page.questions,
        "total_questions": page.total_questions,
        "categories": categories_object(&page.categories),
        "current_category": Value::Null,
    })
}

pub fn question_list_body(list: &QuestionList) -> Value {
    json!({
        "success": true,
        "questions": list.questions,
        "total_questions": list.total_questions,
        "current_category": list.current_category,
    })
}

pub fn deleted_body(id: QuestionId) -> Value {
    json!({ "success": true, "deleted": id })
}

pub fn created_body(id: QuestionId) -> Value {
    json!({ "success": true, "created": id })
}

pub fn quiz_body(question: Option<&Question>) -> Value {
    json!({ "success": true, "question": question })
}
