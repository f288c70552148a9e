use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;
use weekplate_shared::{SAVED_PLANS_KEY, Storage, mealplan::WeekPlan, not_blank};

use crate::PlanStore;

#[derive(Validate, Clone, Debug, Default)]
pub struct SavePlanInput {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: String,
    pub name: String,
    pub plan: WeekPlan,
    pub created_at: i64,
}

/// Named snapshots of the weekly plan, oldest first.
///
/// Unlike the plan and manual list, a failed write is returned to the caller and leaves
/// the collection unchanged.
pub struct SavedPlans<S: Storage> {
    storage: S,
    plans: Vec<SavedPlan>,
}

impl<S: Storage> SavedPlans<S> {
    pub async fn load(storage: S) -> Self {
        let plans = weekplate_shared::restore(&storage, SAVED_PLANS_KEY).await;

        Self { storage, plans }
    }

    pub fn list(&self) -> &[SavedPlan] {
        &self.plans
    }

    pub fn find(&self, id: &str) -> Option<&SavedPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub async fn save(
        &mut self,
        input: SavePlanInput,
        plan: &WeekPlan,
    ) -> weekplate_shared::Result<SavedPlan> {
        input.validate()?;

        let saved = SavedPlan {
            id: Ulid::new().to_string(),
            name: input.name.trim().to_owned(),
            plan: plan.clone(),
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };

        let mut plans = self.plans.clone();
        plans.push(saved.clone());
        self.write(plans).await?;

        tracing::info!(id = %saved.id, name = %saved.name, "meal plan saved");

        Ok(saved)
    }

    /// Returns `false` when no saved plan has `id`.
    pub async fn delete(&mut self, id: &str) -> weekplate_shared::Result<bool> {
        if self.find(id).is_none() {
            return Ok(false);
        }

        let plans = self.plans.iter().filter(|p| p.id != id).cloned().collect();
        self.write(plans).await?;

        Ok(true)
    }

    /// Replaces the current plan of `store` with the saved plan `id`.
    pub async fn load_into<P: Storage>(
        &self,
        id: &str,
        store: &mut PlanStore<P>,
    ) -> weekplate_shared::Result<()> {
        let Some(saved) = self.find(id) else {
            weekplate_shared::not_found!("saved plan {}", id);
        };

        store.replace(saved.plan.clone()).await;

        Ok(())
    }

    async fn write(&mut self, plans: Vec<SavedPlan>) -> weekplate_shared::Result<()> {
        let json = serde_json::to_string(&plans)?;
        self.storage.set(SAVED_PLANS_KEY, &json).await?;
        self.plans = plans;

        Ok(())
    }
}
