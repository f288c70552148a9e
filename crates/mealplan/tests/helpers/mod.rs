#![allow(dead_code)]

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};
use weekplate_db::SqliteStorage;
use weekplate_shared::{
    MemoryStorage, Storage,
    recipe::{IngredientLine, Recipe},
};

pub async fn setup_test_storage(path: PathBuf) -> anyhow::Result<SqliteStorage> {
    let url = format!("sqlite:{}", path.display());
    let pool = weekplate_db::create_pool(&url, 1).await?;
    weekplate_db::migrate(&pool).await?;

    Ok(SqliteStorage::new(pool))
}

pub fn recipe(id: &str, name: &str, ingredients: &[(&str, &str)]) -> Recipe {
    Recipe {
        id: id.to_owned(),
        name: name.to_owned(),
        category: "Test".to_owned(),
        ingredients: ingredients
            .iter()
            .map(|(ingredient, measure)| IngredientLine {
                ingredient: (*ingredient).to_owned(),
                measure: (*measure).to_owned(),
            })
            .collect(),
        ..Default::default()
    }
}

/// Memory storage that counts `set` and `remove` calls.
#[derive(Clone, Default)]
pub struct CountingStorage {
    pub inner: MemoryStorage,
    writes: Arc<AtomicUsize>,
}

impl CountingStorage {
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Storage for CountingStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key).await
    }
}

/// Storage whose reads return nothing and whose writes always fail.
#[derive(Clone, Default)]
pub struct FailingStorage;

#[async_trait::async_trait]
impl Storage for FailingStorage {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    async fn set(&self, key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("quota exceeded writing {key}")
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        anyhow::bail!("quota exceeded removing {key}")
    }
}
