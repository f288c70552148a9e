use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use weekplate_shared::{MemoryStorage, Storage};

/// Memory storage that counts `set` calls.
#[derive(Clone, Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
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
        self.inner.remove(key).await
    }
}

/// Storage whose writes always fail, like a full quota.
#[allow(dead_code)]
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
