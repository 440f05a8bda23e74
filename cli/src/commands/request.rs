use std::fmt;

use anyhow::Context;
use serde_json::{Map, Value, json};
use trivia_common::config::Config;
use trivia_core::api::request::ALL_CATEGORIES_TYPE;
use trivia_core::api::{ApiResponse, Method, Router};
use trivia_core::catalog::CatalogService;
use trivia_core::store::JsonFileRepository;

use crate::commands::{Commands, QuizScope};

/// A request in the shape the router consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub target: String,
    pub body: Option<String>,
}

impl Request {
    fn new(method: Method, target: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            target: target.into(),
            body: body.map(|body| body.to_string()),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.target)
    }
}

impl TryFrom<Commands> for Request {
    type Error = anyhow::Error;

    fn try_from(command: Commands) -> Result<Self, Self::Error> {
        let request = match command {
            Commands::Categories => Self::new(Method::Get, "/categories", None),
            Commands::Questions { page } => {
                Self::new(Method::Get, format!("/questions?page={page}"), None)
            }
            Commands::Delete { id } => Self::new(Method::Delete, format!("/questions/{id}"), None),
            Commands::Create {
                question,
                answer,
                difficulty,
                category,
            } => {
                // Absent flags are left out so the catalog can reject the draft.
                let mut body = Map::new();
                if let Some(question) = question {
                    body.insert("question".into(), json!(question));
                }
                if let Some(answer) = answer {
                    body.insert("answer".into(), json!(answer));
                }
                if let Some(difficulty) = difficulty {
                    body.insert("difficulty".into(), json!(difficulty));
                }
                if let Some(category) = category {
                    body.insert("category".into(), json!(category));
                }
                Self::new(Method::Post, "/questions", Some(Value::Object(body)))
            }
            Commands::Search { term } => Self::new(
                Method::Post,
                "/questions/search",
                Some(json!({ "searchTerm": term })),
            ),
            Commands::CategoryQuestions { id } => {
                Self::new(Method::Get, format!("/categories/{id}/questions"), None)
            }
            Commands::Quiz {
                category,
                label,
                previous,
            } => {
                let quiz_category = match category {
                    QuizScope::Category(id) => json!({ "id": id, "type": label }),
                    QuizScope::All => json!({ "id": 0, "type": ALL_CATEGORIES_TYPE }),
                };
                Self::new(
                    Method::Post,
                    "/quizzes",
                    Some(json!({
                        "quiz_category": quiz_category,
                        "previous_questions": previous,
                    })),
                )
            }
            Commands::Request {
                method,
                target,
                data,
            } => Self {
                method,
                target,
                body: data,
            },
            Commands::Seed { .. } => anyhow::bail!("`seed` does not map to a catalog request"),
        };
        Ok(request)
    }
}

/// Opens the configured store and runs `request` against it.
pub async fn execute(request: &Request, cfg: &Config) -> anyhow::Result<ApiResponse> {
    let repo = JsonFileRepository::open(&cfg.store_path)
        .await
        .with_context(|| format!("failed to open store {}", cfg.store_path.display()))?;
    let catalog = CatalogService::new(Box::new(repo)).with_page_size(cfg.page_size);
    let router = Router::new(catalog);

    Ok(router
        .dispatch(request.method, &request.target, request.body.as_deref())
        .await)
}
