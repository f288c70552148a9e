use validator::{Validate, ValidationError};
use weekplate_shared::{SHOPPING_LIST_KEY, Storage, not_blank, shopping::IngredientList};

use crate::normalize;

/// A name made only of parenthesized notes, such as `"(to taste)"`, has no merge key.
fn has_ingredient_name(value: &str) -> Result<(), ValidationError> {
    not_blank(&normalize(value))
}

#[derive(Validate, Clone, Debug, Default)]
pub struct AddItemInput {
    #[validate(custom(function = "has_ingredient_name"))]
    pub name: String,
    pub measure: Option<String>,
}

/// Ingredients the user added by hand, keyed by normalized name.
///
/// In-memory state is authoritative for the session: every mutation is applied first and
/// then written to storage, and a failed write is only logged.
pub struct ManualList<S: Storage> {
    storage: S,
    items: IngredientList,
}

impl<S: Storage> ManualList<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            items: IngredientList::new(),
        }
    }

    pub async fn load(storage: S) -> Self {
        let items = weekplate_shared::restore(&storage, SHOPPING_LIST_KEY).await;

        Self { storage, items }
    }

    /// Replaces the in-memory list with the persisted one.
    pub async fn reload(&mut self) {
        self.items = weekplate_shared::restore(&self.storage, SHOPPING_LIST_KEY).await;
    }

    pub fn items(&self) -> &IngredientList {
        &self.items
    }

    /// Validated entry point for user input; names that normalize to nothing are rejected.
    pub async fn add(&mut self, input: AddItemInput) -> weekplate_shared::Result<()> {
        input.validate()?;
        self.add_item(&input.name, input.measure.as_deref()).await;

        Ok(())
    }

    pub async fn add_item(&mut self, name: &str, measure: Option<&str>) {
        if !self.merge(name, measure.unwrap_or_default()) {
            return;
        }

        self.save().await;
    }

    /// Merges a batch of `(name, measure)` pairs with a single write.
    pub async fn add_many<I, N, M>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (N, M)>,
        N: AsRef<str>,
        M: AsRef<str>,
    {
        let mut changed = false;
        for (name, measure) in entries {
            changed |= self.merge(name.as_ref(), measure.as_ref());
        }

        if changed {
            self.save().await;
        }
    }

    /// Deletes the whole entry for `name`.
    ///
    /// Returns `false` only when the updated list could not be persisted; removing an
    /// unknown name is a successful no-op.
    pub async fn remove_item(&mut self, name: &str) -> bool {
        let key = normalize(name);
        if self.items.remove(&key).is_none() {
            tracing::debug!(ingredient = %key, "not in manual list, nothing to remove");
            return true;
        }

        self.save().await
    }

    /// Empties the list and drops its persisted record.
    pub async fn clear(&mut self) {
        self.items.clear();
        weekplate_shared::discard(&self.storage, SHOPPING_LIST_KEY).await;
    }

    fn merge(&mut self, name: &str, measure: &str) -> bool {
        let key = normalize(name);
        if key.is_empty() {
            tracing::debug!(raw = %name, "ignoring ingredient with blank name");
            return false;
        }

        self.items.merge(key, measure);

        true
    }

    async fn save(&self) -> bool {
        weekplate_shared::persist(&self.storage, SHOPPING_LIST_KEY, &self.items).await
    }
}
