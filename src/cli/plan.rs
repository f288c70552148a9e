use clap::Subcommand;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use weekplate::Config;
use weekplate_mealplan::{CustomMealInput, Planner, SavePlanInput, SavedPlans};
use weekplate_shared::mealplan::{Day, MealType};

use super::{catalog_client, open_storage, report_catalog_error};

#[derive(Subcommand)]
pub enum PlanCommand {
    /// Print the weekly grid
    Show,
    /// Put a catalog recipe or a custom meal in a slot
    Assign {
        day: Day,
        meal: MealType,

        /// Catalog recipe id
        #[arg(long, conflicts_with = "custom", required_unless_present = "custom")]
        recipe: Option<String>,

        /// Free-text meal name
        #[arg(long)]
        custom: Option<String>,
    },
    /// Empty a slot
    Unassign { day: Day, meal: MealType },
    /// Empty the plan and the manual shopping items
    Clear,
    /// Save the current plan under a name
    Save { name: String },
    /// List saved plans
    Saved,
    /// Replace the current plan with a saved one
    Load { id: String },
    /// Delete a saved plan
    Delete { id: String },
}

pub async fn run(config: Config, command: PlanCommand) -> anyhow::Result<()> {
    let storage = open_storage(&config).await?;
    let mut planner = Planner::load(storage.clone()).await;

    match command {
        PlanCommand::Show => {
            print!(
                "{}",
                weekplate::export::render_plan(planner.plan().snapshot())
            );
        }
        PlanCommand::Assign {
            day,
            meal,
            recipe: Some(id),
            ..
        } => {
            let client = catalog_client(&config)?;
            match client.lookup(&id).await {
                Ok(Some(recipe)) => {
                    println!("{day} {meal}: {}", recipe.name);
                    planner.plan_mut().assign(day, meal, recipe).await;
                }
                Ok(None) => println!("recipe not found"),
                Err(err) => report_catalog_error(&err),
            }
        }
        PlanCommand::Assign {
            day,
            meal,
            custom,
            ..
        } => {
            let input = CustomMealInput {
                name: custom.unwrap_or_default(),
            };
            planner.plan_mut().assign_custom(day, meal, input).await?;
            println!("{day} {meal}: custom meal assigned");
        }
        PlanCommand::Unassign { day, meal } => {
            planner.plan_mut().unassign(day, meal).await;
        }
        PlanCommand::Clear => {
            planner.clear_all().await;
            println!("Meal plan and shopping list cleared.");
        }
        PlanCommand::Save { name } => {
            let mut saved = SavedPlans::load(storage).await;
            let entry = saved
                .save(SavePlanInput { name }, planner.plan().snapshot())
                .await?;
            println!("Saved {} ({})", entry.name, entry.id);
        }
        PlanCommand::Saved => {
            let saved = SavedPlans::load(storage).await;
            if saved.list().is_empty() {
                println!("No saved plans.");
            }
            for entry in saved.list() {
                let created_at = OffsetDateTime::from_unix_timestamp(entry.created_at)?
                    .format(&Rfc3339)?;
                println!(
                    "{}  {}  {} meals  {created_at}",
                    entry.id,
                    entry.name,
                    entry.plan.len()
                );
            }
        }
        PlanCommand::Load { id } => {
            let saved = SavedPlans::load(storage).await;
            saved.load_into(&id, planner.plan_mut()).await?;
            println!("Loaded plan {id}");
        }
        PlanCommand::Delete { id } => {
            let mut saved = SavedPlans::load(storage).await;
            if !saved.delete(&id).await? {
                println!("saved plan not found");
            }
        }
    }

    Ok(())
}
