use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use weekplate_shared::recipe::{IngredientLine, MAX_INGREDIENT_SLOTS, Recipe, RecipeSummary};

/// `{"meals": [...]}`; the catalog sends `{"meals": null}` when nothing matches.
#[derive(Deserialize)]
pub(crate) struct MealsEnvelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Deserialize)]
pub(crate) struct CategoriesEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<CategoryRecord>>,
}

#[derive(Deserialize)]
pub(crate) struct CategoryRecord {
    #[serde(rename = "strCategory")]
    pub name: String,
}

#[derive(Deserialize)]
pub(crate) struct SummaryRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

impl From<SummaryRecord> for RecipeSummary {
    fn from(value: SummaryRecord) -> Self {
        Self {
            id: value.id,
            name: value.name,
            thumbnail: value.thumbnail,
        }
    }
}

/// Full catalog record. Ingredient slots arrive as `strIngredient1..20` and
/// `strMeasure1..20`, any of which may be null or blank.
#[derive(Deserialize)]
pub(crate) struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub video: Option<String>,
    #[serde(flatten)]
    pub slots: HashMap<String, Value>,
}

impl MealRecord {
    fn slot(&self, field: &str, position: usize) -> Option<&str> {
        self.slots
            .get(&format!("{field}{position}"))
            .and_then(Value::as_str)
    }
}

impl From<MealRecord> for Recipe {
    fn from(value: MealRecord) -> Self {
        let ingredients = (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|position| {
                let ingredient = value.slot("strIngredient", position)?;
                Some(IngredientLine {
                    ingredient: ingredient.to_owned(),
                    measure: value
                        .slot("strMeasure", position)
                        .unwrap_or_default()
                        .to_owned(),
                })
            })
            .collect();

        Self {
            id: value.id,
            name: value.name,
            category: value.category.unwrap_or_default(),
            area: value.area.filter(|a| !a.is_empty()),
            thumbnail: value.thumbnail.filter(|t| !t.is_empty()),
            instructions: value.instructions.unwrap_or_default(),
            video: value.video.filter(|v| !v.is_empty()),
            ingredients,
        }
    }
}
