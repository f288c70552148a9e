use clap::ValueEnum;
use strum::VariantArray;
use weekplate_shared::mealplan::{Day, MealType, WeekPlan};
use weekplate_shopping::{DerivedShoppingList, capitalize};

const EMPTY_SLOT: &str = "-";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    #[default]
    All,
    Plan,
    Shopping,
}

/// Plain-text grid of the week, one block per day, `-` for open slots.
pub fn render_plan(plan: &WeekPlan) -> String {
    let mut out = String::from("MEAL PLAN\n");

    for day in Day::VARIANTS {
        out.push_str(&format!("\n{}\n", capitalize(day.as_ref())));

        for meal in MealType::VARIANTS {
            let label = capitalize(meal.as_ref());
            let line = match plan.get(*day, *meal) {
                Some(entry) => format!(
                    "  {label:<10} {} [{}]\n",
                    entry.name(),
                    entry.category()
                ),
                None => format!("  {label:<10} {EMPTY_SLOT}\n"),
            };
            out.push_str(&line);
        }
    }

    out
}

pub fn render_shopping(list: &DerivedShoppingList) -> String {
    let mut out = String::from("SHOPPING LIST\n\n");

    if list.is_empty() {
        out.push_str("(empty)\n");
        return out;
    }

    for (name, measures) in list.lines() {
        out.push_str(&format!("- {name}: {measures}\n"));
    }

    out
}

pub fn render(kind: ExportKind, plan: &WeekPlan, list: &DerivedShoppingList) -> String {
    match kind {
        ExportKind::Plan => render_plan(plan),
        ExportKind::Shopping => render_shopping(list),
        ExportKind::All => format!("{}\n{}", render_plan(plan), render_shopping(list)),
    }
}
