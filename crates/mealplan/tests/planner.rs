use temp_dir::TempDir;
use weekplate_mealplan::Planner;
use weekplate_shared::{
    MemoryStorage, SHOPPING_LIST_KEY, Storage,
    mealplan::{Day, MealType},
};

mod helpers;

#[tokio::test]
async fn test_recipe_ingredients_reach_shopping_list() {
    let mut planner = Planner::load(MemoryStorage::new()).await;
    planner
        .plan_mut()
        .assign(
            Day::Tuesday,
            MealType::Breakfast,
            helpers::recipe("1", "Omelette", &[("Eggs", "2"), ("Milk", "1 cup")]),
        )
        .await;

    let list = planner.shopping_list();
    assert_eq!(list.names().collect::<Vec<_>>(), vec!["Eggs", "Milk"]);
    assert_eq!(list.get("Eggs"), Some(&["2".to_owned()][..]));
    assert_eq!(list.get("Milk"), Some(&["1 cup".to_owned()][..]));
}

#[tokio::test]
async fn test_manual_measures_come_before_plan_measures() -> anyhow::Result<()> {
    let storage = MemoryStorage::new();
    storage.set(SHOPPING_LIST_KEY, r#"{"eggs":["6"]}"#).await?;

    let mut planner = Planner::load(storage).await;
    planner
        .plan_mut()
        .assign(
            Day::Friday,
            MealType::Dinner,
            helpers::recipe("2", "Carbonara", &[("Eggs", "2")]),
        )
        .await;

    let list = planner.shopping_list();
    assert_eq!(list.len(), 1);
    assert_eq!(
        list.get("Eggs"),
        Some(&["6".to_owned(), "2".to_owned()][..])
    );

    Ok(())
}

#[tokio::test]
async fn test_clear_all_empties_everything() {
    let mut planner = Planner::load(MemoryStorage::new()).await;
    planner
        .plan_mut()
        .assign(
            Day::Monday,
            MealType::Lunch,
            helpers::recipe("3", "Soup", &[("Carrot", "2")]),
        )
        .await;
    planner.manual_mut().add_item("Bread", None).await;
    assert_eq!(planner.shopping_list().len(), 2);

    planner.clear_all().await;

    assert!(planner.plan().is_empty());
    assert!(planner.manual().items().is_empty());
    assert!(planner.shopping_list().is_empty());
}

#[tokio::test]
async fn test_bulk_import_recipe_ingredients() {
    let mut planner = Planner::load(MemoryStorage::new()).await;
    let recipe = helpers::recipe(
        "4",
        "Pancakes",
        &[("Flour", "200g"), ("", ""), ("Milk (whole)", "300ml")],
    );

    planner
        .manual_mut()
        .add_many(recipe.ingredient_entries())
        .await;

    assert_eq!(
        planner.manual().items().names().collect::<Vec<_>>(),
        vec!["flour", "milk"]
    );
}

#[tokio::test]
async fn test_state_survives_restart() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");

    let storage = helpers::setup_test_storage(path.clone()).await?;
    let mut planner = Planner::load(storage).await;
    planner
        .plan_mut()
        .assign(Day::Wednesday, MealType::Dinner, "Fish tacos")
        .await;
    planner.manual_mut().add_item("Limes", Some("3")).await;

    let storage = helpers::setup_test_storage(path).await?;
    let mut restored = Planner::load(storage).await;
    assert_eq!(restored.plan().snapshot(), planner.plan().snapshot());
    assert_eq!(restored.manual().items(), planner.manual().items());

    planner.clear_all().await;
    restored.reload().await;
    assert!(restored.plan().is_empty());
    assert!(restored.manual().items().is_empty());

    Ok(())
}
