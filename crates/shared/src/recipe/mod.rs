use serde::{Deserialize, Serialize};

/// Catalog records carry at most this many ingredient/measure slots.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

pub const CUSTOM_CATEGORY: &str = "Custom";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct IngredientLine {
    pub ingredient: String,
    #[serde(default)]
    pub measure: String,
}

/// Full recipe record as resolved from the catalog.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub video: Option<String>,
    /// Ingredient slots in catalog order, blanks included.
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Non-blank ingredient slots as `(ingredient, measure)` pairs, used for bulk import
    /// into the manual shopping list.
    pub fn ingredient_entries(&self) -> Vec<(String, String)> {
        self.ingredients
            .iter()
            .filter(|line| !line.ingredient.trim().is_empty())
            .map(|line| (line.ingredient.to_owned(), line.measure.to_owned()))
            .collect()
    }

    pub fn embed_video_url(&self) -> Option<String> {
        self.video
            .as_deref()
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.replace("watch?v=", "embed/"))
    }
}

/// Partial record returned by category filtering; must be resolved by id before use.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// A plan entry: either a catalog recipe or a name the user typed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecipeRef {
    External(Recipe),
    Custom { name: String },
}

impl RecipeRef {
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::External(recipe) => &recipe.name,
            Self::Custom { name } => name,
        }
    }

    pub fn category(&self) -> &str {
        match self {
            Self::External(recipe) => &recipe.category,
            Self::Custom { .. } => CUSTOM_CATEGORY,
        }
    }

    /// Ingredient slots contributing to the shopping list. Always empty for custom entries.
    pub fn ingredients(&self) -> &[IngredientLine] {
        match self {
            Self::External(recipe) => &recipe.ingredients,
            Self::Custom { .. } => &[],
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }
}

impl From<Recipe> for RecipeRef {
    fn from(value: Recipe) -> Self {
        Self::External(value)
    }
}

impl From<String> for RecipeRef {
    fn from(value: String) -> Self {
        Self::Custom { name: value }
    }
}

impl From<&str> for RecipeRef {
    fn from(value: &str) -> Self {
        Self::Custom {
            name: value.to_owned(),
        }
    }
}
