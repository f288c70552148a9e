mod planner;
mod saved;
mod store;

pub use planner::*;
pub use saved::*;
pub use store::*;
