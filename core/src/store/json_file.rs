use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};
use trivia_common::error::StoreError;
use trivia_common::models::{Category, CategoryId, NewQuestion, Question, QuestionId, QuizCategory};
use trivia_common::repository::QuestionRepository;

use crate::store::{Dataset, seed};

/// A catalog persisted as a single pretty-printed JSON document.
///
/// Mutations are applied to a copy of the dataset, written to disk, and only then made
/// visible. A failed write leaves both the file and the in-memory view untouched.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    data: RwLock<Dataset>,
}

impl JsonFileRepository {
    /// Loads the document at `path`, creating it from the built-in seed when absent.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let dataset = match fs::read(&path).await {
            Ok(bytes) => decode(&bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let dataset = seed::dataset();
                write_dataset(&path, &dataset).await?;
                info!(path = %path.display(), "created store from seed");
                dataset
            }
            Err(err) => return Err(err.into()),
        };
        debug!(
            path = %path.display(),
            questions = dataset.questions.len(),
            categories = dataset.categories.len(),
            "store loaded"
        );
        Ok(Self {
            path,
            data: RwLock::new(dataset),
        })
    }

    /// Writes `dataset` to `path`, replacing whatever was there.
    pub async fn create(path: impl Into<PathBuf>, mut dataset: Dataset) -> Result<Self, StoreError> {
        let path = path.into();
        dataset.normalize();
        write_dataset(&path, &dataset).await?;
        Ok(Self {
            path,
            data: RwLock::new(dataset),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Dataset) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut guard = self.data.write().await;
        let mut candidate = guard.clone();
        let out = apply(&mut candidate)?;
        write_dataset(&self.path, &candidate).await?;
        *guard = candidate;
        Ok(out)
    }
}

fn decode(bytes: &[u8]) -> Result<Dataset, StoreError> {
    let mut dataset: Dataset =
        serde_json::from_slice(bytes).map_err(|err| StoreError::Serialization(err.to_string()))?;
    dataset.normalize();
    Ok(dataset)
}

async fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    let bytes = serde_json::to_vec_pretty(dataset)
        .map_err(|err| StoreError::Serialization(err.to_string()))?;

    let mut tmp_name: OsString = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    fs::write(&tmp_path, bytes).await?;
    fs::rename(&tmp_path, path).await?;
    Ok(())
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.data.read().await.categories.clone())
    }

    async fn questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.questions.clone())
    }

    async fn questions_in_category(&self, category: CategoryId) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.questions_in_category(category))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.search(term))
    }

    async fn remaining_questions(
        &self,
        scope: QuizCategory,
        exclude: &[QuestionId],
    ) -> Result<Vec<Question>, StoreError> {
        Ok(self.data.read().await.remaining(scope, exclude))
    }

    async fn insert_question(&self, question: NewQuestion) -> Result<QuestionId, StoreError> {
        let id = self.mutate(|dataset| dataset.insert(question)).await?;
        debug!(id, path = %self.path.display(), "question persisted");
        Ok(id)
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), StoreError> {
        self.mutate(|dataset| dataset.remove(id)).await?;
        debug!(id, path = %self.path.display(), "question removal persisted");
        Ok(())
    }
}
