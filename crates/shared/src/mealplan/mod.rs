use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::RecipeRef;

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

#[derive(
    Serialize,
    Deserialize,
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// Partial mapping from `(day, meal)` to a plan entry.
///
/// Days with no assigned meal are never kept, so an empty plan serializes to `{}`.
/// Iteration follows weekday order, then meal order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct WeekPlan(BTreeMap<Day, BTreeMap<MealType, RecipeRef>>);

impl WeekPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, day: Day, meal: MealType) -> Option<&RecipeRef> {
        self.0.get(&day).and_then(|meals| meals.get(&meal))
    }

    pub fn day(&self, day: Day) -> Option<&BTreeMap<MealType, RecipeRef>> {
        self.0.get(&day)
    }

    /// Stores `entry` in the slot, returning the entry it replaced.
    pub fn insert(&mut self, day: Day, meal: MealType, entry: RecipeRef) -> Option<RecipeRef> {
        self.0.entry(day).or_default().insert(meal, entry)
    }

    /// Removes the slot, dropping the day once it has no meal left.
    pub fn remove(&mut self, day: Day, meal: MealType) -> Option<RecipeRef> {
        let meals = self.0.get_mut(&day)?;
        let removed = meals.remove(&meal);
        if meals.is_empty() {
            self.0.remove(&day);
        }

        removed
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of assigned slots.
    pub fn len(&self) -> usize {
        self.0.values().map(BTreeMap::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, MealType, &RecipeRef)> {
        self.0.iter().flat_map(|(day, meals)| {
            meals
                .iter()
                .map(move |(meal, entry)| (*day, *meal, entry))
        })
    }
}
