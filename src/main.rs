use anyhow::Result;
use clap::{Parser, Subcommand};
use weekplate::export::ExportKind;

mod cli;

/// weekplate - weekly meal planning from the terminal
#[derive(Parser)]
#[command(name = "weekplate")]
#[command(about = "Plan a week of meals and derive the shopping list", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Search the recipe catalog by name
    Search {
        query: String,

        /// Only keep recipes of this category
        #[arg(long)]
        category: Option<String>,
    },
    /// List catalog categories
    Categories,
    /// Suggest random recipes
    Random {
        #[arg(long, default_value_t = 6)]
        count: usize,
    },
    /// Show a catalog recipe
    Recipe { id: String },
    /// Edit the weekly plan
    #[command(subcommand)]
    Plan(cli::plan::PlanCommand),
    /// Manage manual shopping items
    #[command(subcommand)]
    List(cli::list::ListCommand),
    /// Print the plan and shopping list as text
    Export {
        #[arg(long, value_enum, default_value_t = ExportKind::All)]
        kind: ExportKind,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = weekplate::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weekplate::observability::init_observability(
        "weekplate",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Migrate => cli::migrate(config).await,
        Commands::Search { query, category } => {
            cli::catalog::search(config, query, category).await
        }
        Commands::Categories => cli::catalog::categories(config).await,
        Commands::Random { count } => cli::catalog::random(config, count).await,
        Commands::Recipe { id } => cli::catalog::show(config, id).await,
        Commands::Plan(command) => cli::plan::run(config, command).await,
        Commands::List(command) => cli::list::run(config, command).await,
        Commands::Export { kind } => cli::export(config, kind).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_defaults_to_six() {
        let cli = Cli::try_parse_from(["weekplate", "random"]).unwrap();
        assert!(matches!(cli.command, Commands::Random { count: 6 }));

        let cli = Cli::try_parse_from(["weekplate", "random", "--count", "2"]).unwrap();
        assert!(matches!(cli.command, Commands::Random { count: 2 }));
    }

    #[test]
    fn test_assign_needs_recipe_or_custom() {
        assert!(Cli::try_parse_from(["weekplate", "plan", "assign", "monday", "lunch"]).is_err());
        assert!(
            Cli::try_parse_from([
                "weekplate", "plan", "assign", "Monday", "lunch", "--custom", "Soup"
            ])
            .is_ok()
        );
    }
}
