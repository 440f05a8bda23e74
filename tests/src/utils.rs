use serde_json::Value;
use trivia_core::api::{ApiResponse, Method, Router};
use trivia_core::catalog::CatalogService;
use trivia_core::store::InMemoryRepository;

pub fn seeded_catalog() -> CatalogService {
    CatalogService::new(Box::new(InMemoryRepository::seeded()))
}

pub fn seeded_router() -> Router {
    Router::new(seeded_catalog())
}

/// Issues a request with an optional JSON body.
pub async fn call(router: &Router, method: Method, target: &str, body: Option<Value>) -> ApiResponse {
    let body = body.map(|body| body.to_string());
    router.dispatch(method, target, body.as_deref()).await
}

pub async fn total_questions(router: &Router) -> u64 {
    let response = call(router, Method::Get, "/questions", None).await;
    response.body["total_questions"].as_u64().unwrap_or(0)
}
