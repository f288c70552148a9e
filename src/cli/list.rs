use clap::Subcommand;
use weekplate::Config;
use weekplate_mealplan::Planner;
use weekplate_shopping::AddItemInput;

use super::{catalog_client, open_storage, report_catalog_error};

#[derive(Subcommand)]
pub enum ListCommand {
    /// Print the derived shopping list
    Show,
    /// Add an ingredient by hand
    Add {
        name: String,
        measure: Option<String>,
    },
    /// Remove an ingredient and all its measures
    Remove { name: String },
    /// Add every ingredient of a catalog recipe
    Import { id: String },
}

pub async fn run(config: Config, command: ListCommand) -> anyhow::Result<()> {
    let mut planner = Planner::load(open_storage(&config).await?).await;

    match command {
        ListCommand::Show => {
            print!(
                "{}",
                weekplate::export::render_shopping(&planner.shopping_list())
            );
        }
        ListCommand::Add { name, measure } => {
            planner
                .manual_mut()
                .add(AddItemInput { name, measure })
                .await?;
        }
        ListCommand::Remove { name } => {
            if !planner.manual_mut().remove_item(&name).await {
                eprintln!("Failed to update the shopping list.");
            }
        }
        ListCommand::Import { id } => {
            let client = catalog_client(&config)?;
            match client.lookup(&id).await {
                Ok(Some(recipe)) => {
                    let entries = recipe.ingredient_entries();
                    println!("Added {} ingredients from {}", entries.len(), recipe.name);
                    planner.manual_mut().add_many(entries).await;
                }
                Ok(None) => println!("recipe not found"),
                Err(err) => report_catalog_error(&err),
            }
        }
    }

    Ok(())
}
