use std::path::PathBuf;
use weekplate_db::SqliteStorage;

pub async fn setup_test_storage(path: PathBuf) -> anyhow::Result<SqliteStorage> {
    let url = format!("sqlite:{}", path.display());
    let pool = weekplate_db::create_pool(&url, 1).await?;
    weekplate_db::migrate(&pool).await?;

    Ok(SqliteStorage::new(pool))
}
