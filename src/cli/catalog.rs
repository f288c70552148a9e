use weekplate::Config;
use weekplate_recipe::SearchInput;
use weekplate_shared::recipe::Recipe;

use super::{catalog_client, report_catalog_error};

fn print_row(recipe: &Recipe) {
    println!("{:<8} {} [{}]", recipe.id, recipe.name, recipe.category);
}

pub async fn search(config: Config, query: String, category: Option<String>) -> anyhow::Result<()> {
    let client = catalog_client(&config)?;
    let input = SearchInput { query, category };

    match client.search(&input).await {
        Ok(recipes) if recipes.is_empty() => println!("No recipes found."),
        Ok(recipes) => recipes.iter().for_each(print_row),
        Err(err) => report_catalog_error(&err),
    }

    Ok(())
}

pub async fn categories(config: Config) -> anyhow::Result<()> {
    let client = catalog_client(&config)?;

    match client.categories().await {
        Ok(categories) => categories.iter().for_each(|c| println!("{c}")),
        Err(err) => report_catalog_error(&err),
    }

    Ok(())
}

pub async fn random(config: Config, count: usize) -> anyhow::Result<()> {
    let client = catalog_client(&config)?;

    match client.random_batch(count).await {
        Ok(recipes) => recipes.iter().for_each(print_row),
        Err(err) => report_catalog_error(&err),
    }

    Ok(())
}

pub async fn show(config: Config, id: String) -> anyhow::Result<()> {
    let client = catalog_client(&config)?;

    let recipe = match client.lookup(&id).await {
        Ok(Some(recipe)) => recipe,
        Ok(None) => {
            println!("recipe not found");
            return Ok(());
        }
        Err(err) => {
            report_catalog_error(&err);
            return Ok(());
        }
    };

    println!("{} [{}]", recipe.name, recipe.category);
    if let Some(area) = &recipe.area {
        println!("Area: {area}");
    }
    if let Some(video) = recipe.embed_video_url() {
        println!("Video: {video}");
    }

    println!("\nIngredients:");
    for (ingredient, measure) in recipe.ingredient_entries() {
        if measure.trim().is_empty() {
            println!("- {ingredient}");
        } else {
            println!("- {ingredient}: {measure}");
        }
    }

    println!("\n{}", recipe.instructions);

    Ok(())
}
