use weekplate::{Config, export::ExportKind};
use weekplate_db::SqliteStorage;
use weekplate_mealplan::Planner;
use weekplate_recipe::{CatalogClient, CatalogError};

pub mod catalog;
pub mod list;
pub mod plan;

/// Opens the configured database, applying pending migrations first.
pub async fn open_storage(config: &Config) -> anyhow::Result<SqliteStorage> {
    let pool =
        weekplate_db::create_pool(&config.storage.url, config.storage.max_connections).await?;
    weekplate_db::migrate(&pool).await?;

    Ok(SqliteStorage::new(pool))
}

pub fn catalog_client(config: &Config) -> anyhow::Result<CatalogClient> {
    Ok(CatalogClient::new(
        config.catalog.base_url.as_str(),
        config.catalog.timeout(),
    )?)
}

/// Logs the failure and prints the user-facing message in place of results.
pub fn report_catalog_error(err: &CatalogError) {
    tracing::error!(error = %err, "recipe catalog request failed");
    eprintln!("{}", err.user_message());
}

#[tracing::instrument(skip(config))]
pub async fn migrate(config: Config) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");

    let pool = weekplate_db::create_pool(&config.storage.url, 1).await?;
    weekplate_db::migrate(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

pub async fn export(config: Config, kind: ExportKind) -> anyhow::Result<()> {
    let planner = Planner::load(open_storage(&config).await?).await;
    let list = planner.shopping_list();

    print!(
        "{}",
        weekplate::export::render(kind, planner.plan().snapshot(), &list)
    );

    Ok(())
}
