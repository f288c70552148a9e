use weekplate_shared::Storage;
use weekplate_shopping::{DerivedShoppingList, ManualList};

use crate::PlanStore;

/// Session context owning the plan and the manual shopping items.
pub struct Planner<S: Storage + Clone> {
    plan: PlanStore<S>,
    manual: ManualList<S>,
}

impl<S: Storage + Clone> Planner<S> {
    /// Restores both stores from `storage`; missing or corrupt records start empty.
    pub async fn load(storage: S) -> Self {
        let plan = PlanStore::load(storage.clone()).await;
        let manual = ManualList::load(storage).await;

        tracing::info!(
            slots = plan.snapshot().len(),
            manual_items = manual.items().len(),
            "planner loaded"
        );

        Self { plan, manual }
    }

    pub fn plan(&self) -> &PlanStore<S> {
        &self.plan
    }

    pub fn plan_mut(&mut self) -> &mut PlanStore<S> {
        &mut self.plan
    }

    pub fn manual(&self) -> &ManualList<S> {
        &self.manual
    }

    pub fn manual_mut(&mut self) -> &mut ManualList<S> {
        &mut self.manual
    }

    pub fn shopping_list(&self) -> DerivedShoppingList {
        weekplate_shopping::derive(self.plan.snapshot(), self.manual.items())
    }

    /// Empties the plan and the manual list in one step.
    pub async fn clear_all(&mut self) {
        self.plan.clear(&mut self.manual).await;
    }

    pub async fn reload(&mut self) {
        self.plan.reload().await;
        self.manual.reload().await;
    }
}
