mod command;
pub mod mealplan;
pub mod recipe;
pub mod shopping;
mod storage;

pub use command::*;
pub use storage::*;
