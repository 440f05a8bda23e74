//! End-to-end checks of every route against the seeded catalog.

use serde_json::json;
use trivia_core::api::Method;

use crate::utils::{call, seeded_router, total_questions};

#[tokio::test]
async fn paginate() {
    let router = seeded_router();
    let response = call(&router, Method::Get, "/questions", None).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["total_questions"], json!(19));
    assert_eq!(response.body["questions"].as_array().unwrap().len(), 10);
    assert_eq!(response.body["categories"].as_object().unwrap().len(), 6);
    assert_eq!(response.body["current_category"], json!(null));
}

#[tokio::test]
async fn paginate_past_last_page() {
    let router = seeded_router();
    for target in ["/questions?page=1234", "/questions?page=3"] {
        let response = call(&router, Method::Get, target, None).await;
        assert_eq!(response.status, 404, "{target}");
        assert_eq!(response.body["success"], json!(false));
        assert_eq!(response.body["message"], json!("404 not found"));
    }
}

#[tokio::test]
async fn categories() {
    let router = seeded_router();
    let response = call(&router, Method::Get, "/categories", None).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["categories"]["3"], json!("Geography"));
}

#[tokio::test]
async fn category_without_questions_suffix() {
    let router = seeded_router();
    let response = call(&router, Method::Get, "/categories/120345", None).await;

    assert_eq!(response.status, 404);
    assert_eq!(response.body["success"], json!(false));
    assert_eq!(response.body["message"], json!("404 not found"));
}

#[tokio::test]
async fn delete_question() {
    let router = seeded_router();
    let created = call(
        &router,
        Method::Post,
        "/questions",
        Some(json!({
            "question": "Is there life on Mars",
            "answer": "YES",
            "difficulty": 5,
            "category": 1,
        })),
    )
    .await;
    let id = created.body["created"].as_i64().unwrap();

    let response = call(&router, Method::Delete, &format!("/questions/{id}"), None).await;
    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["deleted"], json!(id));

    let search = call(
        &router,
        Method::Post,
        "/questions/search",
        Some(json!({ "searchTerm": "life on Mars" })),
    )
    .await;
    assert_eq!(search.body["total_questions"], json!(0));
}

#[tokio::test]
async fn delete_missing_question() {
    let router = seeded_router();
    let response = call(&router, Method::Delete, "/questions/1000", None).await;

    assert_eq!(response.status, 422);
    assert_eq!(response.body["message"], json!("422 unprocessable"));
}

#[tokio::test]
async fn create_question() {
    let router = seeded_router();
    let before = total_questions(&router).await;
    let response = call(
        &router,
        Method::Post,
        "/questions",
        Some(json!({
            "question": "Is there life on Mars",
            "answer": "YES",
            "difficulty": 5,
            "category": 1,
        })),
    )
    .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(total_questions(&router).await, before + 1);
}

#[tokio::test]
async fn create_question_missing_difficulty() {
    let router = seeded_router();
    let before = total_questions(&router).await;
    let response = call(
        &router,
        Method::Post,
        "/questions",
        Some(json!({
            "question": "Is there life on Mars",
            "answer": "YES",
            "category": 1,
        })),
    )
    .await;

    assert_eq!(response.status, 422);
    assert_eq!(response.body["success"], json!(false));
    assert_eq!(response.body["message"], json!("422 unprocessable"));
    assert_eq!(total_questions(&router).await, before);
}

#[tokio::test]
async fn search() {
    let router = seeded_router();
    let response = call(
        &router,
        Method::Post,
        "/questions/search",
        Some(json!({ "searchTerm": "Sci" })),
    )
    .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert!(response.body["questions"].is_array());
    assert!(response.body["total_questions"].is_u64());
    assert_eq!(response.body["current_category"], json!(null));
}

#[tokio::test]
async fn search_with_empty_term() {
    let router = seeded_router();
    for body in [json!({ "searchTerm": "" }), json!({})] {
        let response = call(&router, Method::Post, "/questions/search", Some(body)).await;
        assert_eq!(response.status, 404);
        assert_eq!(response.body["success"], json!(false));
        assert_eq!(response.body["message"], json!("404 not found"));
    }
}

#[tokio::test]
async fn questions_per_category() {
    let router = seeded_router();
    let response = call(&router, Method::Get, "/categories/1/questions", None).await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["total_questions"], json!(3));
    assert_eq!(response.body["current_category"], json!(1));
    let questions = response.body["questions"].as_array().unwrap();
    assert!(questions.iter().all(|q| q["category"] == json!(1)));
}

#[tokio::test]
async fn questions_per_non_numeric_category() {
    let router = seeded_router();
    let response = call(&router, Method::Get, "/categories/Food/questions", None).await;

    assert_eq!(response.status, 404);
    assert_eq!(response.body["success"], json!(false));
    assert_eq!(response.body["message"], json!("404 not found"));
}

#[tokio::test]
async fn play_quiz() {
    let router = seeded_router();
    let response = call(
        &router,
        Method::Post,
        "/quizzes",
        Some(json!({
            "previous_questions": [],
            "quiz_category": { "type": "Science", "id": 1 },
        })),
    )
    .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body["success"], json!(true));
    assert_eq!(response.body["question"]["category"], json!(1));
}

#[tokio::test]
async fn play_quiz_without_category() {
    let router = seeded_router();
    let response = call(
        &router,
        Method::Post,
        "/quizzes",
        Some(json!({ "previous_questions": [] })),
    )
    .await;

    assert_eq!(response.status, 422);
    assert_eq!(response.body["success"], json!(false));
    assert_eq!(response.body["message"], json!("422 unprocessable"));
}

#[tokio::test]
async fn play_quiz_without_usable_body() {
    let router = seeded_router();
    for body in [None, Some("not json"), Some("{\"previous_questions\": [")] {
        let response = router.dispatch(Method::Post, "/quizzes", body).await;

        assert_eq!(response.status, 422, "{body:?}");
        assert_eq!(response.body["success"], json!(false));
        assert_eq!(response.body["message"], json!("422 unprocessable"));
    }
}

#[tokio::test]
async fn search_without_body() {
    let router = seeded_router();
    let response = router.dispatch(Method::Post, "/questions/search", None).await;

    assert_eq!(response.status, 404);
    assert_eq!(response.body["message"], json!("404 not found"));
}

#[tokio::test]
async fn questions_per_signed_or_padded_category() {
    let router = seeded_router();
    for target in [
        "/categories/-1/questions",
        "/categories/+1/questions",
        "/categories/%201%20/questions",
        "/categories/ 1 /questions",
    ] {
        let response = call(&router, Method::Get, target, None).await;
        assert_eq!(response.status, 404, "{target}");
    }
}

#[tokio::test]
async fn play_quiz_across_all_categories_until_exhausted() {
    let router = seeded_router();
    let mut previous: Vec<i64> = Vec::new();
    loop {
        let response = call(
            &router,
            Method::Post,
            "/quizzes",
            Some(json!({
                "previous_questions": previous,
                "quiz_category": { "type": "click", "id": 0 },
            })),
        )
        .await;
        assert_eq!(response.status, 200);

        let Some(id) = response.body["question"]["id"].as_i64() else {
            assert_eq!(response.body["question"], json!(null));
            break;
        };
        assert!(!previous.contains(&id));
        previous.push(id);
    }
    assert_eq!(previous.len(), 19);
}

#[tokio::test]
async fn cors_headers_on_success_and_failure() {
    let router = seeded_router();
    for target in ["/categories", "/nowhere"] {
        let response = call(&router, Method::Get, target, None).await;
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("GET,PUT,POST,DELETE,OPTIONS")
        );
        assert_eq!(
            response.header("Access-Control-Allow-Headers"),
            Some("Content-Type,Authorization,true")
        );
    }
}

#[tokio::test]
async fn preflight_is_answered_on_every_route() {
    let router = seeded_router();
    for target in ["/categories", "/questions", "/questions/search", "/questions/2", "/quizzes"] {
        let response = call(&router, Method::Options, target, None).await;
        assert_eq!(response.status, 200, "{target}");
        assert_eq!(
            response.header("Access-Control-Allow-Methods"),
            Some("GET,PUT,POST,DELETE,OPTIONS")
        );
    }
    assert_eq!(total_questions(&router).await, 19);
}

#[tokio::test]
async fn delete_on_search_path() {
    let router = seeded_router();
    let response = call(&router, Method::Delete, "/questions/search", None).await;

    assert_eq!(response.status, 405);
    assert_eq!(response.body["message"], json!("405 method not allowed"));
}
