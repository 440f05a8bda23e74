//! Catalog behaviour checked directly against the service and the JSON store.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;
use trivia_common::error::CatalogError;
use trivia_common::models::{QuestionDraft, QuestionId, QuizCategory};
use trivia_core::catalog::CatalogService;
use trivia_core::store::JsonFileRepository;

use crate::utils::seeded_catalog;

fn draft() -> QuestionDraft {
    QuestionDraft {
        question: Some(String::from("Is there life on Mars")),
        answer: Some(String::from("YES")),
        difficulty: Some(5),
        category: Some(1),
    }
}

#[tokio::test]
async fn every_valid_page_is_a_contiguous_slice() {
    let catalog = seeded_catalog();
    let mut seen: Vec<QuestionId> = Vec::new();
    let mut page = 1;
    loop {
        match catalog.list_questions(page).await {
            Ok(result) => {
                assert!(!result.questions.is_empty());
                assert!(result.questions.len() <= 10);
                seen.extend(result.questions.iter().map(|q| q.id));
                page += 1;
            }
            Err(err) => {
                assert!(matches!(err, CatalogError::NotFound(_)));
                break;
            }
        }
    }
    assert_eq!(page, 3);
    assert_eq!(seen.len(), 19);
    assert!(seen.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn each_missing_field_is_rejected_without_side_effects() {
    let catalog = seeded_catalog();
    let drafts = [
        QuestionDraft { question: None, ..draft() },
        QuestionDraft { answer: None, ..draft() },
        QuestionDraft { difficulty: None, ..draft() },
        QuestionDraft { category: None, ..draft() },
    ];
    for incomplete in drafts {
        let err = catalog.create_question(incomplete).await.unwrap_err();
        assert!(matches!(err, CatalogError::Unprocessable(_)));
    }
    assert_eq!(catalog.list_questions(1).await.unwrap().total_questions, 19);
}

#[tokio::test]
async fn deleted_question_is_gone_everywhere() {
    let catalog = seeded_catalog();
    catalog.delete_question(21).await.unwrap();

    let by_category = catalog.questions_by_category("1").await.unwrap();
    assert!(by_category.questions.iter().all(|q| q.id != 21));

    let search = catalog.search_questions(Some("penicillin")).await.unwrap();
    assert_eq!(search.total_questions, 0);

    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..10 {
        let next = catalog
            .next_quiz_question_with(QuizCategory::Specific(1), &[], &mut rng)
            .await
            .unwrap()
            .unwrap();
        assert_ne!(next.id, 21);
    }

    assert!(matches!(
        catalog.delete_question(21).await,
        Err(CatalogError::Unprocessable(_))
    ));
}

#[tokio::test]
async fn quiz_round_in_category_runs_dry() {
    let catalog = seeded_catalog();
    let mut previous = Vec::new();
    while let Some(question) = catalog
        .next_quiz_question(QuizCategory::Specific(4), &previous)
        .await
        .unwrap()
    {
        assert_eq!(question.category, 4);
        previous.push(question.id);
    }
    previous.sort();
    assert_eq!(previous, vec![5, 9, 12, 23]);
}

#[tokio::test]
async fn json_store_persists_between_catalogs() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("trivia.json");

    let catalog = CatalogService::new(Box::new(JsonFileRepository::open(&path).await?));
    let id = catalog.create_question(draft()).await?;
    catalog.delete_question(2).await?;
    drop(catalog);

    let catalog = CatalogService::new(Box::new(JsonFileRepository::open(&path).await?));
    let science = catalog.questions_by_category("1").await?;
    assert!(science.questions.iter().any(|q| q.id == id));
    assert_eq!(catalog.list_questions(1).await?.total_questions, 19);
    assert!(catalog.delete_question(2).await.is_err());
    Ok(())
}

#[tokio::test]
async fn concurrent_deletes_of_one_question_through_json_store() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("trivia.json");
    let catalog = Arc::new(CatalogService::new(Box::new(
        JsonFileRepository::open(&path).await?,
    )));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            tokio::spawn(async move { catalog.delete_question(14).await })
        })
        .collect();

    let mut deleted = 0;
    for handle in handles {
        match handle.await? {
            Ok(id) => {
                assert_eq!(id, 14);
                deleted += 1;
            }
            Err(err) => assert!(matches!(err, CatalogError::Unprocessable(_)), "{err}"),
        }
    }
    assert_eq!(deleted, 1);

    let reopened = CatalogService::new(Box::new(JsonFileRepository::open(&path).await?));
    assert_eq!(reopened.list_questions(1).await?.total_questions, 18);
    Ok(())
}
