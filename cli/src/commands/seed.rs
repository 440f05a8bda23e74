use anyhow::Context;
use tracing::info;
use trivia_common::config::Config;
use trivia_core::store::{JsonFileRepository, seed as starter};

pub async fn seed(cfg: &Config, force: bool) -> anyhow::Result<()> {
    let path = &cfg.store_path;
    if path.exists() && !force {
        anyhow::bail!("{} already exists, pass --force to replace it", path.display());
    }

    let dataset = starter::dataset();
    let (categories, questions) = (dataset.categories.len(), dataset.questions.len());
    JsonFileRepository::create(path, dataset)
        .await
        .with_context(|| format!("failed to write store {}", path.display()))?;

    info!("Wrote {categories} categories and {questions} questions to {}", path.display());
    Ok(())
}
