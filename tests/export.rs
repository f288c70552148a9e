use weekplate::export::{ExportKind, render, render_plan, render_shopping};
use weekplate_shared::{
    mealplan::{Day, MealType, WeekPlan},
    recipe::{IngredientLine, Recipe, RecipeRef},
    shopping::IngredientList,
};

fn sample_plan() -> WeekPlan {
    let mut plan = WeekPlan::new();
    plan.insert(
        Day::Tuesday,
        MealType::Breakfast,
        Recipe {
            id: "1".to_owned(),
            name: "Omelette".to_owned(),
            category: "Breakfast".to_owned(),
            ingredients: vec![
                IngredientLine {
                    ingredient: "Eggs".to_owned(),
                    measure: "2".to_owned(),
                },
                IngredientLine {
                    ingredient: "Chives (fresh)".to_owned(),
                    measure: String::new(),
                },
            ],
            ..Default::default()
        }
        .into(),
    );
    plan.insert(Day::Sunday, MealType::Dinner, RecipeRef::custom("Takeaway"));
    plan
}

#[test]
fn test_render_plan_grid() {
    let text = render_plan(&sample_plan());
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(lines[0], "MEAL PLAN");
    assert!(lines.contains(&"Tuesday"));
    assert!(lines.contains(&"  Breakfast  Omelette [Breakfast]"));
    assert!(lines.contains(&"  Dinner     Takeaway [Custom]"));
    assert!(lines.contains(&"  Lunch      -"));
    assert_eq!(lines.iter().filter(|l| l.ends_with(" -")).count(), 19);
}

#[test]
fn test_render_shopping_list() {
    let mut manual = IngredientList::new();
    manual.merge("eggs", "6");

    let list = weekplate_shopping::derive(&sample_plan(), &manual);
    let text = render_shopping(&list);

    assert_eq!(
        text,
        "SHOPPING LIST\n\n- Eggs: 6, 2\n- Chives: no quantity specified\n"
    );
}

#[test]
fn test_render_empty_shopping_list() {
    let list = weekplate_shopping::derive(&WeekPlan::new(), &IngredientList::new());

    assert_eq!(render_shopping(&list), "SHOPPING LIST\n\n(empty)\n");
}

#[test]
fn test_render_kinds() {
    let plan = sample_plan();
    let list = weekplate_shopping::derive(&plan, &IngredientList::new());

    let all = render(ExportKind::All, &plan, &list);
    assert!(all.starts_with("MEAL PLAN"));
    assert!(all.contains("SHOPPING LIST"));

    assert!(!render(ExportKind::Plan, &plan, &list).contains("SHOPPING LIST"));
    assert!(!render(ExportKind::Shopping, &plan, &list).contains("MEAL PLAN"));
}
