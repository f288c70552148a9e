use validator::Validate;
use weekplate_shared::{
    MEAL_PLAN_KEY, Storage,
    mealplan::{Day, MealType, WeekPlan},
    not_blank,
    recipe::RecipeRef,
};
use weekplate_shopping::ManualList;

#[derive(Validate, Clone, Debug, Default)]
pub struct CustomMealInput {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// The weekly plan and its persisted snapshot.
///
/// Mutations apply in memory first; the snapshot is then written and a failed write is
/// logged without undoing the change.
pub struct PlanStore<S: Storage> {
    storage: S,
    plan: WeekPlan,
}

impl<S: Storage> PlanStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            plan: WeekPlan::new(),
        }
    }

    pub async fn load(storage: S) -> Self {
        let plan = weekplate_shared::restore(&storage, MEAL_PLAN_KEY).await;

        Self { storage, plan }
    }

    /// Re-reads the persisted plan, e.g. after another process changed it.
    pub async fn reload(&mut self) {
        self.plan = weekplate_shared::restore(&self.storage, MEAL_PLAN_KEY).await;
    }

    pub fn snapshot(&self) -> &WeekPlan {
        &self.plan
    }

    pub fn get(&self, day: Day, meal: MealType) -> Option<&RecipeRef> {
        self.plan.get(day, meal)
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    /// Puts `entry` in the slot, replacing whatever was there. Plain strings become
    /// custom entries.
    pub async fn assign(&mut self, day: Day, meal: MealType, entry: impl Into<RecipeRef>) {
        let entry = entry.into();
        tracing::debug!(%day, %meal, name = entry.name(), "assigning meal");

        self.plan.insert(day, meal, entry);
        self.save().await;
    }

    pub async fn assign_custom(
        &mut self,
        day: Day,
        meal: MealType,
        input: CustomMealInput,
    ) -> weekplate_shared::Result<()> {
        input.validate()?;
        self.assign(day, meal, input.name.trim()).await;

        Ok(())
    }

    pub async fn unassign(&mut self, day: Day, meal: MealType) {
        if self.plan.remove(day, meal).is_none() {
            return;
        }

        self.save().await;
    }

    /// Swaps in a whole plan, as when a saved plan is loaded.
    pub async fn replace(&mut self, plan: WeekPlan) {
        self.plan = plan;
        self.save().await;
    }

    /// Empties the plan and `manual` together and drops both persisted records.
    pub async fn clear<M: Storage>(&mut self, manual: &mut ManualList<M>) {
        self.plan.clear();
        weekplate_shared::discard(&self.storage, MEAL_PLAN_KEY).await;
        manual.clear().await;

        tracing::info!("meal plan and shopping list cleared");
    }

    async fn save(&self) -> bool {
        weekplate_shared::persist(&self.storage, MEAL_PLAN_KEY, &self.plan).await
    }
}
