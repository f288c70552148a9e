use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

pub const MEAL_PLAN_KEY: &str = "mealPlan";
pub const SHOPPING_LIST_KEY: &str = "shoppingList";
pub const SAVED_PLANS_KEY: &str = "savedMealPlans";

/// Device-local key-value string store.
///
/// Every value is the JSON snapshot of one store's full state.
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove(&self, key: &str) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
impl<S: Storage + ?Sized> Storage for Arc<S> {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        (**self).remove(key).await
    }
}

#[derive(Clone, Default)]
pub struct MemoryStorage {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| anyhow::anyhow!("memory storage poisoned: {e}"))?;

        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| anyhow::anyhow!("memory storage poisoned: {e}"))?;
        values.insert(key.to_owned(), value.to_owned());

        Ok(())
    }

    async fn remove(&self, key: &str) -> anyhow::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| anyhow::anyhow!("memory storage poisoned: {e}"))?;
        values.remove(key);

        Ok(())
    }
}

/// Reads and decodes the value under `key`.
///
/// Missing keys, storage failures and undecodable JSON all yield `T::default()`;
/// the last two are logged.
pub async fn restore<S, T>(storage: &S, key: &str) -> T
where
    S: Storage + ?Sized,
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            tracing::error!(key, error = %err, "failed to read persisted state");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::error!(key, error = %err, "persisted state is not valid json, starting empty");
            T::default()
        }
    }
}

/// Writes the JSON snapshot of `value` under `key`. Returns `false` when the write failed.
pub async fn persist<S, T>(storage: &S, key: &str, value: &T) -> bool
where
    S: Storage + ?Sized,
    T: Serialize + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to encode state");
            return false;
        }
    };

    match storage.set(key, &json).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to persist state");
            false
        }
    }
}

/// Removes `key`. Returns `false` when the removal failed.
pub async fn discard<S>(storage: &S, key: &str) -> bool
where
    S: Storage + ?Sized,
{
    match storage.remove(key).await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to remove persisted state");
            false
        }
    }
}
