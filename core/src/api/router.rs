use std::fmt;
use std::str::FromStr;

use tracing::{debug, info, warn};
use trivia_common::error::CatalogError;
use trivia_common::models::QuestionId;

use crate::api::envelope::{self, ApiResponse};
use crate::api::request::{CreateQuestionRequest, QuizRequest, SearchRequest, parse_body};
use crate::catalog::CatalogService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Options,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(format!("unsupported method: {s}")),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
        };
        f.write_str(name)
    }
}

/// Paths served by the router. Path parameters are kept raw so each route decides how
/// an unparsable value fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'a> {
    Categories,
    Questions,
    Question(&'a str),
    Search,
    CategoryQuestions(&'a str),
    Quizzes,
}

impl<'a> Route<'a> {
    fn resolve(path: &'a str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["categories"] => Some(Self::Categories),
            ["questions"] => Some(Self::Questions),
            // Always the search route, so `DELETE /questions/search` is a 405.
            ["questions", "search"] => Some(Self::Search),
            ["questions", id] => Some(Self::Question(*id)),
            ["categories", id, "questions"] => Some(Self::CategoryQuestions(*id)),
            ["quizzes"] => Some(Self::Quizzes),
            _ => None,
        }
    }

    fn allows(&self, method: Method) -> bool {
        match self {
            Self::Categories | Self::CategoryQuestions(_) => method == Method::Get,
            Self::Questions => matches!(method, Method::Get | Method::Post),
            Self::Question(_) => method == Method::Delete,
            Self::Search | Self::Quizzes => method == Method::Post,
        }
    }
}

/// Maps requests onto [`CatalogService`] operations and their responses onto envelopes.
pub struct Router {
    catalog: CatalogService,
}

impl Router {
    pub fn new(catalog: CatalogService) -> Self {
        Self { catalog }
    }

    /// Handles one request. `target` is the path with an optional query string.
    pub async fn dispatch(&self, method: Method, target: &str, body: Option<&str>) -> ApiResponse {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        debug!(%method, path, query, "dispatching request");

        let Some(route) = Route::resolve(path) else {
            warn!(%method, path, "no route");
            return ApiResponse::error(&CatalogError::not_found(format!("no route for {path}")));
        };
        if method == Method::Options {
            debug!(path, "preflight");
            return ApiResponse::preflight();
        }
        if !route.allows(method) {
            warn!(%method, path, "method not allowed");
            return ApiResponse::method_not_allowed();
        }

        let response = match self.handle(method, route, query, body).await {
            Ok(body) => ApiResponse::ok(body),
            Err(err) => {
                warn!(%method, path, reason = err.reason(), "request failed");
                ApiResponse::error(&err)
            }
        };
        info!(%method, path, status = response.status, "request handled");
        response
    }

    async fn handle(
        &self,
        method: Method,
        route: Route<'_>,
        query: &str,
        body: Option<&str>,
    ) -> Result<serde_json::Value, CatalogError> {
        match (route, method) {
            (Route::Categories, _) => {
                let categories = self.catalog.list_categories().await?;
                Ok(envelope::categories_body(&categories))
            }
            (Route::Questions, Method::Get) => {
                let page = page_param(query);
                let page = self.catalog.list_questions(page).await?;
                Ok(envelope::question_page_body(&page))
            }
            (Route::Questions, _) => {
                let draft: CreateQuestionRequest = parse_body(body, CatalogError::Unprocessable)?;
                let id = self.catalog.create_question(draft).await?;
                Ok(envelope::created_body(id))
            }
            (Route::Question(raw_id), _) => {
                let id: QuestionId = raw_id.parse().map_err(|_| {
                    CatalogError::unprocessable(format!("question id `{raw_id}` is not numeric"))
                })?;
                let deleted = self.catalog.delete_question(id).await?;
                Ok(envelope::deleted_body(deleted))
            }
            (Route::Search, _) => {
                let request: SearchRequest = parse_body(body, CatalogError::NotFound)?;
                let list = self
                    .catalog
                    .search_questions(request.search_term.as_deref())
                    .await?;
                Ok(envelope::question_list_body(&list))
            }
            (Route::CategoryQuestions(raw_id), _) => {
                let list = self.catalog.questions_by_category(raw_id).await?;
                Ok(envelope::question_list_body(&list))
            }
            (Route::Quizzes, _) => {
                let request: QuizRequest = parse_body(body, CatalogError::Unprocessable)?;
                let (scope, previous) = request.into_parts()?;
                let question = self.catalog.next_quiz_question(scope, &previous).await?;
                Ok(envelope::quiz_body(question.as_ref()))
            }
        }
    }
}

/// `page` from the query string. Missing or non-integer values fall back to the first page.
fn page_param(query: &str) -> i64 {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
        .unwrap_or(1)
}
