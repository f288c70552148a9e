use serde::Serialize;
use weekplate_shared::{mealplan::WeekPlan, shopping::IngredientList};

use crate::{capitalize, normalize};

/// Shown in place of the measures of an ingredient nobody gave a quantity for.
pub const NO_QUANTITY: &str = "no quantity specified";

/// Display name to distinct measures, in first-seen order. Recomputed on every request.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct DerivedShoppingList(IngredientList);

impl DerivedShoppingList {
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.names()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(name, measures)` rows ready to print, measures joined with `", "`.
    pub fn lines(&self) -> impl Iterator<Item = (&str, String)> {
        self.0
            .iter()
            .map(|(name, measures)| (name, format_measures(measures)))
    }

    pub fn into_inner(self) -> IngredientList {
        self.0
    }
}

pub fn format_measures(measures: &[String]) -> String {
    if measures.is_empty() {
        return NO_QUANTITY.to_owned();
    }

    measures.join(", ")
}

/// Builds the shopping list from the manual items and every catalog recipe in the plan.
///
/// Manual items come first, then ingredients in plan order (weekday, meal, ingredient
/// slot). Custom entries contribute nothing.
pub fn derive(plan: &WeekPlan, manual: &IngredientList) -> DerivedShoppingList {
    let mut list = manual.clone();

    for (_, _, entry) in plan.iter() {
        for line in entry.ingredients() {
            let name = normalize(&line.ingredient);
            if name.is_empty() {
                continue;
            }

            list.merge(name, &line.measure);
        }
    }

    DerivedShoppingList(
        list.into_iter()
            .map(|(name, measures)| (capitalize(&name), measures))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_measures() {
        assert_eq!(format_measures(&[]), "no quantity specified");
        assert_eq!(
            format_measures(&["2".to_owned(), "1 cup".to_owned()]),
            "2, 1 cup"
        );
    }

    #[test]
    fn test_empty_inputs_derive_empty_list() {
        let list = derive(&WeekPlan::new(), &IngredientList::new());
        assert!(list.is_empty());
    }
}
